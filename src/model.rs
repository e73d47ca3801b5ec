use rand::Rng;

pub(crate) const MAX_NEED_LEVEL: u8 = 4;
pub(crate) const MAX_GAME_ROUNDS: u8 = 3;
pub(crate) const STATUS_PAGES: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Gender {
    Boy,
    Girl,
}

impl Gender {
    pub(crate) fn random(rng: &mut impl Rng) -> Self {
        if rng.gen_bool(0.5) {
            Gender::Girl
        } else {
            Gender::Boy
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Mode {
    Egg,
    Idle,
    Food,
    Game,
    Status,
    Dead,
    // Part of the device's mode set, but nothing transitions into it yet.
    #[allow(dead_code)]
    Sleep,
}

impl Mode {
    /// Needs only decay while the creature is awake and hatched.
    pub(crate) fn is_live(self) -> bool {
        !matches!(self, Mode::Egg | Mode::Dead | Mode::Sleep)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FoodOption {
    Meal,
    Snack,
}

impl FoodOption {
    pub(crate) fn toggled(self) -> Self {
        match self {
            FoodOption::Meal => FoodOption::Snack,
            FoodOption::Snack => FoodOption::Meal,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    Left,
    Right,
}

impl Direction {
    pub(crate) fn random(rng: &mut impl Rng) -> Self {
        if rng.gen_bool(0.5) {
            Direction::Right
        } else {
            Direction::Left
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Icon {
    Food,
    Light,
    Game,
    Medicine,
    Bathroom,
    Status,
    Discipline,
}

impl Icon {
    pub(crate) const ALL: [Icon; 7] = [
        Icon::Food,
        Icon::Light,
        Icon::Game,
        Icon::Medicine,
        Icon::Bathroom,
        Icon::Status,
        Icon::Discipline,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            Icon::Food => "FOOD",
            Icon::Light => "LIGHT",
            Icon::Game => "GAME",
            Icon::Medicine => "MEDS",
            Icon::Bathroom => "BATH",
            Icon::Status => "STATS",
            Icon::Discipline => "SCOLD",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Creature {
    pub(crate) gender: Gender,
    pub(crate) hunger: u8,
    pub(crate) happiness: u8,
    pub(crate) has_poop: bool,
    pub(crate) is_sick: bool,
    pub(crate) is_waiting_to_poop: bool,
    pub(crate) is_waiting_to_die: bool,
    pub(crate) needs_attention: bool,
}

impl Creature {
    pub(crate) fn new(gender: Gender) -> Self {
        Self {
            gender,
            hunger: 0,
            happiness: 0,
            has_poop: false,
            is_sick: false,
            is_waiting_to_poop: false,
            is_waiting_to_die: false,
            // both levels start empty
            needs_attention: true,
        }
    }

    /// Writes both need levels, clamped to the cap. A level that changes to
    /// zero raises `needs_attention`; any change leaving both above zero
    /// lowers it.
    pub(crate) fn set_levels(&mut self, hunger: u8, happiness: u8) {
        let hunger = hunger.min(MAX_NEED_LEVEL);
        let happiness = happiness.min(MAX_NEED_LEVEL);
        let hunger_changed = hunger != self.hunger;
        let happiness_changed = happiness != self.happiness;
        self.hunger = hunger;
        self.happiness = happiness;

        if (hunger_changed && hunger == 0) || (happiness_changed && happiness == 0) {
            self.needs_attention = true;
        } else if (hunger_changed || happiness_changed) && hunger > 0 && happiness > 0 {
            self.needs_attention = false;
        }
    }
}

/// Per-visit state of the guessing game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct GameSession {
    pub(crate) round: u8,
    pub(crate) score: u8,
}

impl GameSession {
    pub(crate) fn new() -> Self {
        Self { round: 1, score: 0 }
    }

    pub(crate) fn is_final_round(&self) -> bool {
        self.round >= MAX_GAME_ROUNDS
    }
}

/// Fixed timing thresholds, in milliseconds.
#[derive(Clone, Debug)]
pub(crate) struct Rules {
    pub(crate) hatch_ms: u64,
    pub(crate) poop_every_ms: u64,
    pub(crate) hunger_every_ms: u64,
    pub(crate) happiness_every_ms: u64,
    pub(crate) missed_care_ms: u64,
    pub(crate) poop_sick_ms: u64,
    pub(crate) death_ms: u64,
}

const fn minutes(n: u64) -> u64 {
    n * 60 * 1000
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            hatch_ms: 15 * 1000,
            poop_every_ms: minutes(8),
            hunger_every_ms: minutes(4),
            happiness_every_ms: minutes(5),
            missed_care_ms: minutes(3),
            poop_sick_ms: minutes(3),
            death_ms: minutes(5),
        }
    }
}
