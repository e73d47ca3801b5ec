// Every named animation the device plays. Positions are LCD pixels on the
// 32×16 screen; the creature stands on the bottom row (y = 8).

use crate::animation::{pose, walk, Actor, Animation, AnimationFrame, FrameSprite};
use crate::assets::SheetId;
use crate::model::{Direction, FoodOption, Gender, MAX_NEED_LEVEL};

const GROUND: i32 = 8;
const CENTER: i32 = 12;
const DECOR_X: i32 = 24;
const WASH_STEP_MS: u64 = 150;

const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

// (x, cell) pairs for the wandering idle loop.
const IDLE_PATH: [(i32, u32); 19] = [
    (12, 0),
    (10, 0),
    (8, 1),
    (6, 0),
    (8, 0),
    (10, 0),
    (12, 1),
    (14, 1),
    (12, 0),
    (10, 0),
    (12, 1),
    (14, 1),
    (14, 0),
    (16, 0),
    (12, 1),
    (8, 0),
    (6, 0),
    (8, 1),
    (10, 1),
];

fn baby_sheet(gender: Gender) -> SheetId {
    match gender {
        Gender::Boy => SheetId::Boy,
        Gender::Girl => SheetId::Girl,
    }
}

fn baby(gender: Gender) -> Actor {
    Actor::new(baby_sheet(gender), CENTER, GROUND)
}

fn misc(name: &'static str, x: i32, y: i32) -> FrameSprite {
    FrameSprite::named(SheetId::Misc, name, x, y)
}

fn egg(name: &'static str) -> FrameSprite {
    FrameSprite::named(SheetId::Egg, name, CENTER, GROUND)
}

fn frame(sprites: Vec<FrameSprite>) -> AnimationFrame {
    AnimationFrame::new(sprites)
}

/// Poop and sickness markers drawn on top of resting animations. `tick`
/// alternates the poop between its two frames.
fn decorations(poop: bool, sick: bool, tick: usize) -> Vec<FrameSprite> {
    let mut out = Vec::new();
    if poop {
        let name = if tick % 2 == 0 { "poop_a" } else { "poop_b" };
        out.push(misc(name, DECOR_X, GROUND));
    }
    if sick {
        out.push(misc("skull", DECOR_X, 0));
    }
    out
}

fn decorate(animation: Animation, poop: bool, sick: bool) -> Animation {
    animation
        .into_iter()
        .enumerate()
        .map(|(i, mut f)| {
            f.sprites.extend(decorations(poop, sick, i));
            f
        })
        .collect()
}

pub(crate) fn egg_idle() -> Animation {
    vec![frame(vec![egg("egg")]), frame(vec![egg("squat")])]
}

/// Three wobbles of the egg before it breaks.
pub(crate) fn egg_bounce() -> Animation {
    let mut out = Vec::new();
    for _ in 0..3 {
        for name in ["egg", "egg", "squat", "squat"] {
            out.push(AnimationFrame::timed(250, vec![egg(name)]));
        }
    }
    out
}

pub(crate) fn egg_break(gender: Gender) -> Animation {
    let mut out = Vec::new();
    for _ in 0..3 {
        out.push(AnimationFrame::timed(200, vec![egg("crack_left")]));
        out.push(AnimationFrame::timed(200, vec![egg("crack_right")]));
    }
    let b = baby(gender);
    out.push(frame(vec![
        egg("shell"),
        pose(Actor::new(b.sheet, CENTER, 4), "stand"),
    ]));
    out.push(frame(vec![pose(b, "happy")]));
    out
}

pub(crate) fn idle(gender: Gender, poop: bool, sick: bool) -> Animation {
    let sheet = baby_sheet(gender);
    let walk: Animation = IDLE_PATH
        .iter()
        .map(|&(x, cell)| frame(vec![FrameSprite::cell(sheet, cell, 0, x, GROUND)]))
        .collect();
    decorate(walk, poop, sick)
}

/// Static menu screen: cursor next to the selected option.
pub(crate) fn food_screen(option: FoodOption) -> AnimationFrame {
    let cursor_y = match option {
        FoodOption::Meal => 0,
        FoodOption::Snack => GROUND,
    };
    frame(vec![
        misc("cursor", 2, cursor_y),
        FrameSprite::cell(SheetId::Food, 0, 0, CENTER, 0),
        FrameSprite::cell(SheetId::Food, 0, 1, CENTER, GROUND),
    ])
}

/// The food drops in, then gets eaten in three bites.
pub(crate) fn food(gender: Gender, option: FoodOption, poop: bool, sick: bool) -> Animation {
    let row = match option {
        FoodOption::Meal => 0,
        FoodOption::Snack => 1,
    };
    let b = Actor::new(baby_sheet(gender), 16, GROUND);
    let bites: [Option<(u32, i32)>; 9] = [
        Some((0, 0)),
        Some((0, GROUND)),
        Some((0, GROUND)),
        Some((1, GROUND)),
        Some((1, GROUND)),
        Some((2, GROUND)),
        Some((2, GROUND)),
        None,
        None,
    ];
    let eating: Animation = bites
        .iter()
        .enumerate()
        .map(|(i, bite)| {
            let mouth = if i % 2 == 1 { "eat" } else { "squat" };
            let mut sprites = vec![pose(b, mouth)];
            if let Some((col, y)) = *bite {
                sprites.push(FrameSprite::cell(SheetId::Food, col, row, 6, y));
            }
            frame(sprites)
        })
        .collect();
    decorate(eating, poop, sick)
}

pub(crate) fn happy(gender: Gender) -> Animation {
    let b = baby(gender);
    (0..4)
        .map(|i| {
            if i % 2 == 0 {
                frame(vec![pose(b, "happy"), misc("sparkle", 2, 0), misc("sparkle", 22, 0)])
            } else {
                frame(vec![pose(b, "stand")])
            }
        })
        .collect()
}

pub(crate) fn angry(gender: Gender) -> Animation {
    let b = baby(gender);
    (0..4)
        .map(|i| {
            if i % 2 == 0 {
                frame(vec![pose(b, "angry"), misc("anger", 20, 0)])
            } else {
                frame(vec![pose(b, "stand")])
            }
        })
        .collect()
}

/// Head shake for a refused action.
pub(crate) fn deny(gender: Gender) -> Animation {
    let b = baby(gender);
    ["refuse", "left", "refuse", "right"]
        .iter()
        .map(|name| AnimationFrame::timed(300, vec![pose(b, *name)]))
        .collect()
}

pub(crate) fn poop(gender: Gender) -> Animation {
    let b = baby(gender);
    vec![
        frame(vec![pose(b, "squat")]),
        frame(vec![pose(b, "squat")]),
        frame(vec![pose(b, "squat"), misc("poop_a", DECOR_X, GROUND)]),
        frame(vec![pose(b, "stand"), misc("poop_a", DECOR_X, GROUND)]),
    ]
}

/// A wave sweeps right to left over `last`, washing away any poop it passes.
pub(crate) fn wash(last: Option<&AnimationFrame>) -> Animation {
    let base: Vec<FrameSprite> = last.map(|f| f.sprites.clone()).unwrap_or_default();
    (0..=DECOR_X / 4)
        .rev()
        .map(|step| {
            let wave_x = step * 4;
            let mut sprites: Vec<FrameSprite> = base
                .iter()
                .filter(|s| !(is_poop(s) && s.x >= wave_x))
                .copied()
                .collect();
            sprites.push(misc("wave", wave_x, 0));
            sprites.push(misc("wave", wave_x, GROUND));
            AnimationFrame::timed(WASH_STEP_MS, sprites)
        })
        .collect()
}

fn is_poop(sprite: &FrameSprite) -> bool {
    sprite.is_named("poop_a") || sprite.is_named("poop_b")
}

/// The ghost drifts up out of the body, then the tombstone stays.
pub(crate) fn dying(gender: Gender) -> Animation {
    let b = baby(gender);
    let mut out = vec![
        frame(vec![pose(b, "refuse")]),
        frame(vec![pose(b, "squat")]),
    ];
    let mut ghost = Actor::new(SheetId::Misc, CENTER, GROUND + 2);
    for sprite in walk(&mut ghost, &["ghost"], (0, -2), 5) {
        out.push(AnimationFrame::timed(300, vec![sprite]));
    }
    out.push(AnimationFrame::timed(1000, vec![misc("tombstone", CENTER, GROUND)]));
    out
}

pub(crate) fn dead() -> Animation {
    vec![
        frame(vec![misc("tombstone", CENTER, GROUND), misc("ghost", 20, 0)]),
        frame(vec![misc("tombstone", CENTER, GROUND), misc("ghost", 20, 2)]),
    ]
}

pub(crate) fn game_start(gender: Gender) -> Animation {
    let b = baby(gender);
    let mut out: Animation = ["left", "right", "left", "right"]
        .iter()
        .map(|name| AnimationFrame::timed(250, vec![pose(b, *name)]))
        .collect();
    out.push(frame(vec![pose(b, "happy")]));
    out
}

/// Resting loop between guesses.
pub(crate) fn game_wait(gender: Gender, poop: bool, sick: bool) -> Animation {
    let b = baby(gender);
    let arrows = || vec![misc("arrow_left", 2, GROUND), misc("arrow_right", 22, GROUND)];
    let mut shown = vec![pose(b, "stand"), misc("question", CENTER, 0)];
    shown.extend(arrows());
    let mut hidden = vec![pose(b, "stand")];
    hidden.extend(arrows());
    decorate(vec![frame(shown), frame(hidden)], poop, sick)
}

/// The player's pick flashes, then the creature turns to `facing`.
pub(crate) fn game_action(gender: Gender, guess: Direction, facing: Direction) -> Animation {
    let b = baby(gender);
    let pick = match guess {
        Direction::Left => misc("arrow_left", 2, GROUND),
        Direction::Right => misc("arrow_right", 22, GROUND),
    };
    let turn = match facing {
        Direction::Left => "left",
        Direction::Right => "right",
    };
    vec![
        AnimationFrame::timed(250, vec![pose(b, "stand"), pick]),
        AnimationFrame::timed(250, vec![pose(b, "stand")]),
        AnimationFrame::timed(250, vec![pose(b, "stand"), pick]),
        AnimationFrame::timed(1000, vec![pose(b, turn)]),
    ]
}

fn digit(n: u8) -> &'static str {
    DIGITS[usize::from(n.min(9))]
}

/// Final tally: wins, a dash, losses.
pub(crate) fn game_score(gender: Gender, wins: u8, losses: u8) -> Animation {
    vec![AnimationFrame::timed(
        2000,
        vec![
            FrameSprite::named(SheetId::Digits, digit(wins), 10, 2),
            FrameSprite::named(SheetId::Digits, "-", 14, 2),
            FrameSprite::named(SheetId::Digits, digit(losses), 18, 2),
            pose(baby(gender), "stand"),
        ],
    )]
}

fn gauge(icon: &'static str, level: u8, full: &'static str, empty: &'static str) -> AnimationFrame {
    let mut sprites = vec![misc(icon, CENTER, 0)];
    for i in 0..MAX_NEED_LEVEL {
        let name = if i < level { full } else { empty };
        sprites.push(misc(name, i32::from(i) * 8, GROUND));
    }
    frame(sprites)
}

/// The four status pages: bio, discipline, hunger, happiness.
pub(crate) fn status_screens(gender: Gender, hunger: u8, happiness: u8) -> Vec<AnimationFrame> {
    let symbol = match gender {
        Gender::Boy => "male",
        Gender::Girl => "female",
    };
    vec![
        frame(vec![
            pose(Actor::new(baby_sheet(gender), 6, 4), "stand"),
            misc(symbol, 18, 4),
        ]),
        gauge("anger", 0, "box_full", "box_empty"),
        gauge("fork", hunger, "heart_full", "heart_empty"),
        gauge("smile", happiness, "heart_full", "heart_empty"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::total_ms;
    use crate::assets::Atlas;

    fn names(f: &AnimationFrame) -> Vec<&'static str> {
        f.sprites
            .iter()
            .filter_map(|s| match s.frame {
                crate::sprite::FrameRef::Named(n) => Some(n),
                crate::sprite::FrameRef::Cell(..) => None,
            })
            .collect()
    }

    #[test]
    fn every_sprite_resolves_against_the_atlas() {
        let atlas = Atlas::standard();
        let idle_frame = idle(Gender::Girl, true, true)[0].clone();
        let mut all: Vec<Animation> = vec![
            egg_idle(),
            egg_bounce(),
            egg_break(Gender::Boy),
            idle(Gender::Girl, true, true),
            food(Gender::Boy, FoodOption::Snack, true, true),
            vec![food_screen(FoodOption::Meal)],
            happy(Gender::Boy),
            angry(Gender::Girl),
            deny(Gender::Boy),
            poop(Gender::Girl),
            wash(Some(&idle_frame)),
            dying(Gender::Boy),
            dead(),
            game_start(Gender::Girl),
            game_wait(Gender::Boy, true, true),
            game_action(Gender::Boy, Direction::Left, Direction::Right),
            game_score(Gender::Girl, 3, 0),
        ];
        all.push(status_screens(Gender::Boy, 2, 4));
        for anim in &all {
            for f in anim {
                for s in &f.sprites {
                    assert!(atlas.sheet(s.sheet).resolve(s.frame).is_ok(), "{s:?}");
                }
            }
        }
    }

    #[test]
    fn idle_walks_the_ground_row() {
        let a = idle(Gender::Boy, false, false);
        assert_eq!(a.len(), 19);
        assert!(a.iter().all(|f| f.sprites.len() == 1 && f.sprites[0].y == GROUND));
        assert_eq!(a[3].sprites[0].x, 6);
    }

    #[test]
    fn idle_decorations_follow_state() {
        let a = idle(Gender::Girl, true, true);
        assert_eq!(names(&a[0]), vec!["poop_a", "skull"]);
        assert_eq!(names(&a[1]), vec!["poop_b", "skull"]);
        assert!(names(&idle(Gender::Girl, false, true)[0]) == vec!["skull"]);

        let game = game_wait(Gender::Boy, true, true);
        assert!(names(&game[0]).ends_with(&["poop_a", "skull"]));
        assert!(names(&game[1]).ends_with(&["poop_b", "skull"]));
        let healthy = game_wait(Gender::Boy, false, false);
        assert!(!names(&healthy[0]).contains(&"skull"));
        assert!(!healthy.iter().any(|f| f.sprites.iter().any(is_poop)));
    }

    #[test]
    fn wash_removes_poop_once_the_wave_passes() {
        let last = idle(Gender::Boy, true, false)[0].clone();
        let w = wash(Some(&last));
        assert_eq!(w.len(), 7);
        assert_eq!(w[0].sprites.iter().filter(|s| s.is_named("wave")).count(), 2);
        assert!(w.iter().all(|f| !f.sprites.iter().any(is_poop)));
        // the creature stays visible under the wave
        assert!(w.iter().all(|f| f.sprites.iter().any(|s| s.sheet == SheetId::Boy)));
        assert_eq!(total_ms(&w), 7 * WASH_STEP_MS);
        assert_eq!(wash(None)[6].sprites.len(), 2);
    }

    #[test]
    fn food_uses_the_row_of_the_chosen_option() {
        let meal = food(Gender::Boy, FoodOption::Meal, false, false);
        let snack = food(Gender::Boy, FoodOption::Snack, false, false);
        assert_eq!(meal.len(), 9);
        assert!(meal[0]
            .sprites
            .contains(&FrameSprite::cell(SheetId::Food, 0, 0, 6, 0)));
        assert!(snack[3]
            .sprites
            .contains(&FrameSprite::cell(SheetId::Food, 1, 1, 6, GROUND)));
        assert!(meal[1].sprites[0].is_named("eat"));
    }

    #[test]
    fn score_spells_wins_dash_losses() {
        let s = &game_score(Gender::Boy, 2, 1)[0];
        assert_eq!(names(s)[..3], ["2", "-", "1"]);
        assert_eq!(s.duration_ms(), 2000);
    }

    #[test]
    fn status_hearts_match_levels() {
        let pages = status_screens(Gender::Girl, 1, 3);
        assert_eq!(pages.len(), 4);
        assert_eq!(names(&pages[0]), vec!["stand", "female"]);
        let full = |f: &AnimationFrame| f.sprites.iter().filter(|s| s.is_named("heart_full")).count();
        assert_eq!(full(&pages[2]), 1);
        assert_eq!(full(&pages[3]), 3);
    }
}
