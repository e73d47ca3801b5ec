use crate::animation::{Animation, AnimationFrame};
use crate::animation_loop::AnimationLoop;
use crate::animations;
use crate::assets::Atlas;
use crate::model::{
    Creature, Direction, FoodOption, GameSession, Gender, Icon, Mode, Rules, MAX_GAME_ROUNDS,
    MAX_NEED_LEVEL, STATUS_PAGES,
};
use crate::render::Surface;
use crate::scheduler::{blank, draw_frame};
use crate::sequencer::{Advance, Sequence, Sequencer};
use crate::timers::{TimerId, Timers};
use log::{debug, info};
use rand::{rngs::StdRng, SeedableRng};

/// What a button press asks the device to do. Which press means what is
/// decided by the input dispatcher from the current mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Action {
    NextIcon,
    ActivateIcon,
    ToggleFood,
    Feed,
    Guess(Direction),
    TurnPage(i32),
    Back,
    Reset,
}

/// State changes scheduled inside an action's sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Effect {
    SetMode(Mode),
    Feed(FoodOption),
    Cure,
    ClearPoop,
    ScorePoint,
    NextRound,
    RewardGame,
    EndGame,
    ShowFoodScreen,
}

const SCORE_PAUSE_MS: u64 = 300;

// The looping animation only depends on these.
type LoopKey = (Mode, Gender, bool, bool);

pub(crate) struct Device<S: Surface> {
    surface: Option<S>,
    atlas: Atlas,
    rng: StdRng,
    rules: Rules,
    creature: Creature,
    mode: Mode,
    busy: bool,
    active_icon: usize,
    food_option: FoodOption,
    lights_off: bool,
    game: Option<GameSession>,
    status_page: usize,
    anim: AnimationLoop,
    loop_key: Option<LoopKey>,
    sequencer: Sequencer<Effect>,
    timers: Timers,
}

impl<S: Surface> Device<S> {
    pub(crate) fn new(surface: Option<S>, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let gender = Gender::random(&mut rng);
        let mut device = Self {
            surface,
            atlas: Atlas::standard(),
            rng,
            rules: Rules::default(),
            creature: Creature::new(gender),
            mode: Mode::Egg,
            busy: false,
            active_icon: 0,
            food_option: FoodOption::Meal,
            lights_off: false,
            game: None,
            status_page: 0,
            anim: AnimationLoop::new(animations::egg_idle()),
            loop_key: None,
            sequencer: Sequencer::default(),
            timers: Timers::default(),
        };
        device.sync_timers();
        info!("new egg ({gender:?})");
        device
    }

    pub(crate) fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub(crate) fn creature(&self) -> &Creature {
        &self.creature
    }

    pub(crate) fn mode(&self) -> Mode {
        self.mode
    }

    pub(crate) fn is_busy(&self) -> bool {
        self.busy
    }

    pub(crate) fn active_icon(&self) -> Icon {
        Icon::ALL[self.active_icon]
    }

    pub(crate) fn lights_off(&self) -> bool {
        self.lights_off
    }

    /// 1 when no game is in progress.
    pub(crate) fn game_round(&self) -> u8 {
        self.game.map_or(1, |g| g.round)
    }

    /// Advances the device by `dt` milliseconds: timers first, then deferred
    /// events, then whatever is on screen.
    pub(crate) fn tick(&mut self, dt: u64) {
        for id in self.timers.advance(dt) {
            debug!("timer {id:?} fired");
            self.on_timer(id);
            self.sync_timers();
        }
        self.sync_timers();
        self.run_deferred();
        self.refresh_loop();
        self.drive(dt);
    }

    pub(crate) fn apply(&mut self, action: Action) {
        match action {
            Action::NextIcon => {
                self.active_icon = (self.active_icon + 1) % Icon::ALL.len();
            }
            Action::ActivateIcon => self.activate_icon(),
            Action::ToggleFood => {
                self.food_option = self.food_option.toggled();
                self.show(&animations::food_screen(self.food_option));
            }
            Action::Feed => self.feed(),
            Action::Guess(guess) => self.guess(guess),
            Action::TurnPage(delta) => {
                let pages = STATUS_PAGES as i32;
                self.status_page = (self.status_page as i32 + delta).rem_euclid(pages) as usize;
                self.show_status_page();
            }
            Action::Back => self.back(),
            Action::Reset => self.reset(),
        }
    }

    fn activate_icon(&mut self) {
        let gender = self.creature.gender;
        match self.active_icon() {
            Icon::Food => {
                if self.lights_off {
                    return;
                }
                self.set_mode(Mode::Food);
                self.anim.pause();
                self.show(&animations::food_screen(self.food_option));
            }
            Icon::Light => {
                self.lights_off = !self.lights_off;
                info!("lights {}", if self.lights_off { "off" } else { "on" });
                if let Some(surface) = self.surface.as_mut() {
                    blank(surface, self.lights_off);
                }
            }
            Icon::Game => {
                self.set_mode(Mode::Game);
                self.game = Some(GameSession::new());
                self.start_action(Sequence::new().play(animations::game_start(gender)));
            }
            Icon::Medicine => {
                let seq = if self.creature.is_sick {
                    Sequence::new()
                        .play(animations::happy(gender))
                        .apply(Effect::Cure)
                } else {
                    Sequence::new().play(animations::deny(gender))
                };
                self.start_action(seq);
            }
            Icon::Bathroom => {
                let had_poop = self.creature.has_poop;
                let mut seq = Sequence::new()
                    .play(animations::wash(self.anim.current_frame()))
                    .apply(Effect::ClearPoop);
                if had_poop {
                    seq = seq.play(animations::happy(gender));
                }
                self.start_action(seq);
            }
            Icon::Status => {
                if self.lights_off {
                    return;
                }
                self.set_mode(Mode::Status);
                self.status_page = 0;
                self.anim.pause();
                self.show_status_page();
            }
            Icon::Discipline => {
                self.start_action(Sequence::new().play(animations::angry(gender)));
            }
        }
    }

    fn feed(&mut self) {
        let c = &self.creature;
        let option = self.food_option;
        let seq = if option == FoodOption::Snack || c.hunger < MAX_NEED_LEVEL {
            Sequence::new()
                .play(animations::food(c.gender, option, c.has_poop, c.is_sick))
                .apply(Effect::Feed(option))
        } else {
            Sequence::new().play(animations::deny(c.gender))
        };
        self.start_action(seq.apply(Effect::ShowFoodScreen));
    }

    fn guess(&mut self, guess: Direction) {
        let gender = self.creature.gender;
        let facing = Direction::random(&mut self.rng);
        let session = *self.game.get_or_insert_with(GameSession::new);
        let won = guess == facing;
        debug!("round {}: guessed {guess:?}, facing {facing:?}", session.round);

        let outcome = if won {
            Sequence::new()
                .apply(Effect::ScorePoint)
                .play(animations::happy(gender))
        } else {
            Sequence::new().play(animations::angry(gender))
        };
        let mut seq = Sequence::new()
            .play(animations::game_action(gender, guess, facing))
            .then(outcome);

        if session.is_final_round() {
            let wins = session.score + u8::from(won);
            let losses = session.round.saturating_sub(wins);
            seq = seq
                .delay(SCORE_PAUSE_MS)
                .play(animations::game_score(gender, wins, losses));
            seq = if wins > MAX_GAME_ROUNDS / 2 {
                seq.play(animations::happy(gender)).apply(Effect::RewardGame)
            } else {
                seq.play(animations::angry(gender))
            };
            seq = seq.apply(Effect::EndGame);
        } else {
            seq = seq.apply(Effect::NextRound);
        }
        self.start_action(seq);
    }

    fn back(&mut self) {
        match self.mode {
            Mode::Food | Mode::Game | Mode::Status => {
                self.game = None;
                self.set_mode(Mode::Idle);
                self.anim.set_one_shot(Vec::new());
                self.anim.resume();
            }
            Mode::Dead => self.reset(),
            Mode::Egg | Mode::Idle | Mode::Sleep => {}
        }
    }

    /// Starts over with a fresh egg.
    pub(crate) fn reset(&mut self) {
        let gender = Gender::random(&mut self.rng);
        info!("reset, new egg ({gender:?})");
        self.creature = Creature::new(gender);
        self.mode = Mode::Egg;
        self.busy = false;
        self.active_icon = 0;
        self.food_option = FoodOption::Meal;
        self.lights_off = false;
        self.game = None;
        self.status_page = 0;
        self.anim = AnimationLoop::new(animations::egg_idle());
        self.loop_key = None;
        self.sequencer = Sequencer::default();
        self.timers = Timers::default();
        self.sync_timers();
        if let Some(surface) = self.surface.as_mut() {
            blank(surface, false);
        }
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            info!("mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    fn show(&mut self, frame: &AnimationFrame) {
        if let Some(surface) = self.surface.as_mut() {
            draw_frame(surface, &self.atlas, frame, self.lights_off);
        }
    }

    fn show_status_page(&mut self) {
        let c = &self.creature;
        let pages = animations::status_screens(c.gender, c.hunger, c.happiness);
        if let Some(page) = pages.get(self.status_page) {
            self.show(page);
        }
    }

    fn start_action(&mut self, sequence: Sequence<Effect>) {
        self.busy = true;
        self.anim.pause();
        self.anim.set_one_shot(Vec::new());
        self.sequencer.start(sequence);
    }

    fn finish_action(&mut self) {
        self.busy = false;
        self.refresh_loop();
        if matches!(self.mode, Mode::Food | Mode::Status) {
            self.anim.pause();
        } else {
            self.anim.resume();
        }
    }

    fn apply_effect(&mut self, effect: Effect) {
        let (hunger, happiness) = (self.creature.hunger, self.creature.happiness);
        match effect {
            Effect::SetMode(mode) => self.set_mode(mode),
            Effect::Feed(FoodOption::Meal) => self.creature.set_levels(hunger + 1, happiness),
            Effect::Feed(FoodOption::Snack) => self.creature.set_levels(hunger, happiness + 1),
            Effect::Cure => {
                info!("cured");
                self.creature.is_sick = false;
                self.creature
                    .set_levels(hunger.saturating_sub(1), happiness.saturating_sub(1));
            }
            Effect::ClearPoop => self.creature.has_poop = false,
            Effect::ScorePoint => {
                if let Some(game) = self.game.as_mut() {
                    game.score += 1;
                }
            }
            Effect::NextRound => {
                if let Some(game) = self.game.as_mut() {
                    game.round += 1;
                }
            }
            Effect::RewardGame => self.creature.set_levels(hunger, happiness + 1),
            Effect::EndGame => {
                self.game = None;
                self.set_mode(Mode::Idle);
            }
            Effect::ShowFoodScreen => self.show(&animations::food_screen(self.food_option)),
        }
    }

    fn on_timer(&mut self, id: TimerId) {
        let c = &mut self.creature;
        match id {
            TimerId::Hatch => {
                info!("hatching");
                let seq = Sequence::new()
                    .play(animations::egg_bounce())
                    .play(animations::egg_break(c.gender))
                    .apply(Effect::SetMode(Mode::Idle));
                self.start_action(seq);
            }
            TimerId::Poop => c.is_waiting_to_poop = true,
            TimerId::HungerDecay => c.set_levels(c.hunger.saturating_sub(1), c.happiness),
            TimerId::HappinessDecay => c.set_levels(c.hunger, c.happiness.saturating_sub(1)),
            TimerId::MissedCare => {
                info!("care was missed, now sick");
                c.needs_attention = false;
                c.is_sick = true;
            }
            TimerId::PoopSick => {
                info!("left in poop, now sick");
                c.is_sick = true;
            }
            TimerId::Death => c.is_waiting_to_die = true,
        }
    }

    /// Starts or stops each timer to match the current phase.
    fn sync_timers(&mut self) {
        let live = self.mode.is_live();
        let c = &self.creature;
        let r = &self.rules;
        let t = &mut self.timers;
        t.once_while(TimerId::Hatch, self.mode == Mode::Egg, r.hatch_ms);
        t.every_while(TimerId::Poop, live, r.poop_every_ms);
        t.every_while(TimerId::HungerDecay, live, r.hunger_every_ms);
        t.every_while(TimerId::HappinessDecay, live, r.happiness_every_ms);
        t.once_while(TimerId::MissedCare, live && c.needs_attention, r.missed_care_ms);
        t.once_while(TimerId::PoopSick, live && c.has_poop, r.poop_sick_ms);
        t.once_while(TimerId::Death, live && c.is_sick, r.death_ms);
    }

    /// Poop and death wait for a calm moment in idle.
    fn run_deferred(&mut self) {
        if self.mode != Mode::Idle || self.busy {
            return;
        }
        let gender = self.creature.gender;
        if self.creature.is_waiting_to_die {
            info!("died");
            self.creature.is_waiting_to_die = false;
            self.set_mode(Mode::Dead);
            self.start_action(Sequence::new().play(animations::dying(gender)));
        } else if self.creature.is_waiting_to_poop && !self.creature.has_poop {
            self.creature.has_poop = true;
            self.creature.is_waiting_to_poop = false;
            self.start_action(Sequence::new().play(animations::poop(gender)));
        }
    }

    fn looping_for(&self) -> Animation {
        let c = &self.creature;
        match self.mode {
            Mode::Egg => animations::egg_idle(),
            Mode::Idle => animations::idle(c.gender, c.has_poop, c.is_sick),
            Mode::Game => animations::game_wait(c.gender, c.has_poop, c.is_sick),
            Mode::Dead => animations::dead(),
            Mode::Food | Mode::Status | Mode::Sleep => Vec::new(),
        }
    }

    fn refresh_loop(&mut self) {
        let c = &self.creature;
        let key = (self.mode, c.gender, c.has_poop, c.is_sick);
        if self.loop_key == Some(key) {
            return;
        }
        self.loop_key = Some(key);
        self.anim.set_one_shot(Vec::new());
        let looping = self.looping_for();
        self.anim.set_looping(looping);
    }

    fn drive(&mut self, mut dt: u64) {
        while self.busy {
            let step = self
                .sequencer
                .advance(self.surface.as_mut(), &self.atlas, self.lights_off, dt);
            match step {
                Advance::Running => return,
                Advance::Effect {
                    effect,
                    leftover_ms,
                } => {
                    self.apply_effect(effect);
                    dt = leftover_ms;
                }
                Advance::Done { leftover_ms } => {
                    self.finish_action();
                    dt = leftover_ms;
                }
            }
        }
        self.anim
            .tick(self.surface.as_mut(), &self.atlas, self.lights_off, dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Button;
    use crate::testutils::RecordingSurface;

    const MINUTE: u64 = 60 * 1000;

    fn sheet_name(gender: Gender) -> &'static str {
        match gender {
            Gender::Boy => "boy",
            Gender::Girl => "girl",
        }
    }

    fn settle(d: &mut Device<RecordingSurface>) {
        for _ in 0..10_000 {
            if !d.is_busy() {
                return;
            }
            d.tick(50);
        }
        panic!("action never finished");
    }

    fn hatched(seed: u64) -> Device<RecordingSurface> {
        let mut d = Device::new(Some(RecordingSurface::default()), seed);
        d.tick(d.rules.hatch_ms);
        settle(&mut d);
        assert_eq!(d.mode(), Mode::Idle);
        // arm the live-phase timers
        d.tick(0);
        d
    }

    fn select(d: &mut Device<RecordingSurface>, icon: Icon) {
        while d.active_icon() != icon {
            d.press(Button::A);
        }
        d.press(Button::B);
    }

    fn ops(d: &Device<RecordingSurface>) -> &RecordingSurface {
        d.surface().unwrap()
    }

    fn count(d: &Device<RecordingSurface>, sheet: &str, name: &str, x: i32, y: i32) -> usize {
        ops(d)
            .ops
            .iter()
            .filter(|op| {
                matches!(op, crate::testutils::Op::Draw { sheet: s, name: Some(n), x: ox, y: oy, .. }
                    if *s == sheet && *n == name && *ox == x && *oy == y)
            })
            .count()
    }

    #[test]
    fn egg_hatches_after_the_delay_and_starts_wandering() {
        let mut d = Device::new(Some(RecordingSurface::default()), 3);
        d.tick(14_999);
        assert_eq!(d.mode(), Mode::Egg);
        assert!(!d.is_busy());

        d.tick(1);
        assert!(d.is_busy(), "hatch sequence holds the device");
        assert_eq!(d.mode(), Mode::Egg);
        d.press(Button::B);
        assert_eq!(d.mode(), Mode::Egg, "input ignored while hatching");

        settle(&mut d);
        assert_eq!(d.mode(), Mode::Idle);
        d.tick(1_500);
        let sheet = sheet_name(d.creature().gender);
        assert!(ops(&d).drew(sheet, "stand", 10, 8), "second idle frame");
    }

    #[test]
    fn meal_at_cap_is_refused() {
        let mut d = hatched(1);
        d.creature.set_levels(MAX_NEED_LEVEL, 2);
        select(&mut d, Icon::Food);
        assert_eq!(d.mode(), Mode::Food);
        d.press(Button::B);
        settle(&mut d);

        let sheet = sheet_name(d.creature().gender);
        assert_eq!(d.creature().hunger, MAX_NEED_LEVEL);
        assert!(ops(&d).drew(sheet, "refuse", 12, 8));
        assert_eq!(count(&d, sheet, "eat", 16, 8), 0);
        assert_eq!(d.mode(), Mode::Food);
        assert!(d.anim.is_paused());
    }

    #[test]
    fn meal_below_cap_adds_hunger() {
        let mut d = hatched(1);
        d.creature.set_levels(1, 1);
        select(&mut d, Icon::Food);
        d.press(Button::B);
        settle(&mut d);
        assert_eq!((d.creature().hunger, d.creature().happiness), (2, 1));
        // menu is back on screen afterwards
        assert!(ops(&d).drew("misc", "cursor", 2, 0));
    }

    #[test]
    fn snack_twice_from_three_clamps_and_eats_both_times() {
        let mut d = hatched(2);
        d.creature.set_levels(2, 3);
        select(&mut d, Icon::Food);
        d.press(Button::A);
        assert_eq!(d.food_option, FoodOption::Snack);
        let sheet = sheet_name(d.creature().gender);

        d.press(Button::B);
        settle(&mut d);
        let first = count(&d, sheet, "eat", 16, 8);
        assert!(first > 0);
        assert_eq!(d.creature().happiness, 4);

        d.press(Button::B);
        settle(&mut d);
        assert!(count(&d, sheet, "eat", 16, 8) > first);
        assert_eq!(d.creature().happiness, 4);
        assert_eq!(d.creature().hunger, 2);
    }

    #[test]
    fn back_in_idle_changes_nothing() {
        let mut d = hatched(4);
        d.press(Button::A);
        let before = (
            d.creature().clone(),
            d.mode(),
            d.active_icon(),
            d.is_busy(),
            d.anim.is_paused(),
        );
        d.press(Button::C);
        let after = (
            d.creature().clone(),
            d.mode(),
            d.active_icon(),
            d.is_busy(),
            d.anim.is_paused(),
        );
        assert_eq!(before, after);
    }

    #[test]
    fn reset_returns_everything_to_a_fresh_egg() {
        let mut d = hatched(5);
        d.creature.set_levels(3, 2);
        d.creature.has_poop = true;
        d.creature.is_sick = true;
        d.lights_off = true;
        d.food_option = FoodOption::Snack;
        d.active_icon = 4;
        d.status_page = 2;
        d.game = Some(GameSession { round: 3, score: 2 });
        d.start_action(Sequence::new().play(animations::happy(Gender::Boy)));

        d.apply(Action::Reset);
        let c = d.creature();
        assert_eq!((c.hunger, c.happiness), (0, 0));
        assert!(!c.has_poop && !c.is_sick && !c.is_waiting_to_poop && !c.is_waiting_to_die);
        assert!(c.needs_attention);
        assert_eq!(d.mode(), Mode::Egg);
        assert_eq!(d.active_icon(), Icon::Food);
        assert_eq!(d.food_option, FoodOption::Meal);
        assert_eq!(d.game_round(), 1);
        assert_eq!(d.status_page, 0);
        assert!(!d.lights_off() && !d.is_busy() && !d.anim.is_paused());
        assert!(!d.sequencer.is_running());
        assert_eq!(d.timers.remaining(TimerId::Hatch), Some(d.rules.hatch_ms));
        assert!(!d.timers.is_running(TimerId::HungerDecay));

        d.tick(100);
        assert!(ops(&d).drawn_names().ends_with(&["egg"]));
    }

    #[test]
    fn status_pages_wrap_both_ways() {
        let mut d = hatched(6);
        select(&mut d, Icon::Status);
        assert_eq!(d.mode(), Mode::Status);
        assert_eq!(d.status_page, 0);
        d.press(Button::A);
        assert_eq!(d.status_page, 3);
        d.press(Button::B);
        assert_eq!(d.status_page, 0);
        for _ in 0..STATUS_PAGES {
            d.press(Button::B);
        }
        assert_eq!(d.status_page, 0);
        d.press(Button::C);
        assert_eq!(d.mode(), Mode::Idle);
        assert!(!d.anim.is_paused());
    }

    #[test]
    fn lights_off_blocks_food_and_status() {
        let mut d = hatched(7);
        select(&mut d, Icon::Light);
        assert!(d.lights_off());
        assert_eq!(ops(&d).ops.last(), Some(&crate::testutils::Op::Fill));
        select(&mut d, Icon::Food);
        assert_eq!(d.mode(), Mode::Idle);
        select(&mut d, Icon::Status);
        assert_eq!(d.mode(), Mode::Idle);
    }

    #[test]
    fn missed_care_makes_sick_and_medicine_cures() {
        let mut d = hatched(8);
        assert!(d.creature().needs_attention);
        d.tick(d.rules.missed_care_ms);
        assert!(d.creature().is_sick);
        assert!(!d.creature().needs_attention);
        let sheet = sheet_name(d.creature().gender);

        d.creature.set_levels(2, 0);
        select(&mut d, Icon::Medicine);
        settle(&mut d);
        let c = d.creature();
        assert!(!c.is_sick);
        assert_eq!((c.hunger, c.happiness), (1, 0));
        assert!(ops(&d).drew(sheet, "happy", 12, 8));

        let refusals = count(&d, sheet, "refuse", 12, 8);
        select(&mut d, Icon::Medicine);
        settle(&mut d);
        assert!(count(&d, sheet, "refuse", 12, 8) > refusals);
    }

    #[test]
    fn needs_decay_while_live() {
        let mut d = hatched(9);
        d.creature.set_levels(3, 3);
        d.tick(0);
        d.tick(d.rules.hunger_every_ms);
        assert_eq!(d.creature().hunger, 2);
        assert_eq!(d.creature().happiness, 3);
        d.tick(d.rules.happiness_every_ms - d.rules.hunger_every_ms);
        assert_eq!(d.creature().happiness, 2);
    }

    #[test]
    fn poop_waits_for_idle_and_wash_clears_it() {
        let mut d = hatched(10);
        d.creature.set_levels(4, 4);
        d.tick(0);
        select(&mut d, Icon::Status);
        d.tick(d.rules.poop_every_ms);
        assert!(d.creature().is_waiting_to_poop);
        assert!(!d.creature().has_poop, "no poop outside idle");

        d.press(Button::C);
        d.tick(0);
        assert!(d.creature().has_poop);
        assert!(d.is_busy());
        settle(&mut d);

        select(&mut d, Icon::Bathroom);
        settle(&mut d);
        assert!(!d.creature().has_poop);
        assert!(ops(&d).drew("misc", "wave", 0, 8));
        let sheet = sheet_name(d.creature().gender);
        assert!(ops(&d).drew(sheet, "happy", 12, 8));
    }

    #[test]
    fn sickness_runs_out_into_death_and_c_starts_over() {
        let mut d = hatched(11);
        d.creature.set_levels(4, 4);
        d.creature.is_sick = true;
        d.tick(0);
        d.tick(d.rules.death_ms - 1);
        assert_eq!(d.mode(), Mode::Idle);
        d.tick(1);
        assert_eq!(d.mode(), Mode::Dead);
        assert!(d.is_busy());
        settle(&mut d);
        assert!(ops(&d).drew("misc", "tombstone", 12, 8));
        assert!(!d.timers.is_running(TimerId::HungerDecay));

        d.press(Button::C);
        assert_eq!(d.mode(), Mode::Egg);
    }

    #[test]
    fn three_rounds_with_two_wins_pays_out() {
        let mut d = hatched(12);
        d.creature.set_levels(2, 2);
        select(&mut d, Icon::Game);
        assert_eq!(d.mode(), Mode::Game);
        settle(&mut d);
        assert_eq!(d.game_round(), 1);

        for round in 1..=MAX_GAME_ROUNDS {
            let facing = Direction::random(&mut d.rng.clone());
            let guess = match (round < MAX_GAME_ROUNDS, facing) {
                (true, dir) => dir,
                (false, Direction::Left) => Direction::Right,
                (false, Direction::Right) => Direction::Left,
            };
            d.press(match guess {
                Direction::Left => Button::A,
                Direction::Right => Button::B,
            });
            settle(&mut d);
            if round < MAX_GAME_ROUNDS {
                assert_eq!(d.game_round(), round + 1);
                assert_eq!(d.mode(), Mode::Game);
            }
        }

        assert!(ops(&d).drew("digits", "2", 10, 2));
        assert!(ops(&d).drew("digits", "-", 14, 2));
        assert!(ops(&d).drew("digits", "1", 18, 2));
        assert_eq!(d.creature().happiness, 3);
        assert_eq!(d.mode(), Mode::Idle);
        assert_eq!(d.game_round(), 1);
        assert!(!d.anim.is_paused());
    }

    #[test]
    fn poop_left_too_long_makes_sick() {
        let mut d = hatched(14);
        d.creature.set_levels(4, 4);
        d.creature.has_poop = true;
        d.tick(0);
        d.tick(d.rules.poop_sick_ms - 1);
        assert!(!d.creature().is_sick);
        d.tick(1);
        assert!(d.creature().is_sick);
        assert!(!d.creature().needs_attention, "not from missed care");
    }

    #[test]
    fn losing_the_game_leaves_happiness_alone() {
        let mut d = hatched(15);
        d.creature.set_levels(2, 2);
        select(&mut d, Icon::Game);
        settle(&mut d);

        for _ in 0..MAX_GAME_ROUNDS {
            let facing = Direction::random(&mut d.rng.clone());
            d.press(match facing {
                Direction::Left => Button::B,
                Direction::Right => Button::A,
            });
            settle(&mut d);
        }

        assert!(ops(&d).drew("digits", "0", 10, 2));
        assert!(ops(&d).drew("digits", "3", 18, 2));
        assert!(ops(&d).drew("misc", "anger", 20, 0));
        assert!(!ops(&d).drawn_names().contains(&"sparkle"));
        assert_eq!((d.creature().hunger, d.creature().happiness), (2, 2));
        assert_eq!(d.mode(), Mode::Idle);
    }

    #[test]
    fn discipline_only_scolds() {
        let mut d = hatched(16);
        d.creature.set_levels(2, 3);
        let before = d.creature().clone();
        select(&mut d, Icon::Discipline);
        assert!(d.is_busy());
        settle(&mut d);

        let sheet = sheet_name(d.creature().gender);
        assert!(ops(&d).drew(sheet, "angry", 12, 8));
        assert_eq!(d.creature(), &before);
        assert_eq!(d.mode(), Mode::Idle);
    }

    #[test]
    fn leaving_a_game_drops_the_session() {
        let mut d = hatched(17);
        select(&mut d, Icon::Game);
        settle(&mut d);
        d.press(Button::A);
        settle(&mut d);
        assert_eq!(d.game_round(), 2);

        d.press(Button::C);
        assert_eq!(d.mode(), Mode::Idle);
        assert_eq!(d.game_round(), 1);
        assert!(d.game.is_none());

        select(&mut d, Icon::Game);
        settle(&mut d);
        assert_eq!(d.game_round(), 1);
    }

    #[test]
    fn game_loop_shows_poop_and_sickness() {
        let mut d = hatched(18);
        d.creature.set_levels(4, 4);
        select(&mut d, Icon::Game);
        settle(&mut d);
        d.creature.has_poop = true;
        d.creature.is_sick = true;
        d.tick(1_000);
        assert!(ops(&d).drew("misc", "skull", 24, 0));
        assert!(ops(&d).drew("misc", "poop_a", 24, 8));
    }

    #[test]
    fn without_a_surface_actions_finish_immediately() {
        let mut d: Device<RecordingSurface> = Device::new(None, 13);
        d.tick(15_000);
        assert_eq!(d.mode(), Mode::Idle);
        assert!(!d.is_busy());
        d.creature.set_levels(1, 1);
        d.apply(Action::ActivateIcon);
        d.apply(Action::Feed);
        d.tick(0);
        assert_eq!(d.creature().hunger, 2);
    }
}
