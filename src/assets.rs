// Pixel-art tables for every sprite sheet. Cells are 8×8 unless noted.

use crate::sprite::SpriteSheet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) enum SheetId {
    Boy,
    Girl,
    Egg,
    Food,
    Misc,
    Digits,
}

pub(crate) struct Atlas {
    boy: SpriteSheet,
    girl: SpriteSheet,
    egg: SpriteSheet,
    food: SpriteSheet,
    misc: SpriteSheet,
    digits: SpriteSheet,
}

impl Atlas {
    pub(crate) fn standard() -> Self {
        Self {
            boy: SpriteSheet::from_cells("boy", 8, 8, 8, 1, BOY).with_names(BABY_NAMES),
            girl: SpriteSheet::from_cells("girl", 8, 8, 8, 1, GIRL).with_names(BABY_NAMES),
            egg: SpriteSheet::from_cells("egg", 8, 8, 5, 1, EGG).with_names(EGG_NAMES),
            food: SpriteSheet::from_cells("food", 8, 8, 3, 2, FOOD),
            misc: SpriteSheet::from_cells("misc", 8, 8, 4, 5, MISC).with_names(MISC_NAMES),
            digits: SpriteSheet::from_cells("digits", 4, 5, 11, 1, DIGITS)
                .with_names(DIGIT_NAMES),
        }
    }

    pub(crate) fn sheet(&self, id: SheetId) -> &SpriteSheet {
        match id {
            SheetId::Boy => &self.boy,
            SheetId::Girl => &self.girl,
            SheetId::Egg => &self.egg,
            SheetId::Food => &self.food,
            SheetId::Misc => &self.misc,
            SheetId::Digits => &self.digits,
        }
    }
}

const BABY_NAMES: &[(&str, (u32, u32))] = &[
    ("stand", (0, 0)),
    ("squat", (1, 0)),
    ("happy", (2, 0)),
    ("eat", (3, 0)),
    ("angry", (4, 0)),
    ("left", (5, 0)),
    ("right", (6, 0)),
    ("refuse", (7, 0)),
];

const BOY: &[&[&str]] = &[
    &[
        "..####..", ".#....#.", "#.#..#.#", "#......#", "#..##..#", ".#....#.", "..####..",
        ".#....#.",
    ],
    &[
        "........", "..####..", ".#....#.", "#.#..#.#", "#......#", "#..##..#", ".######.",
        "#......#",
    ],
    &[
        "#.####.#", "##....##", "#.#..#.#", "#......#", "#.#..#.#", ".#.##.#.", "..####..",
        ".#....#.",
    ],
    &[
        "..####..", ".#....#.", "#.#..#.#", "#......#", "#.####.#", ".#.##.#.", "..####..",
        ".#....#.",
    ],
    &[
        "..####..", ".#....#.", "##....##", "#.#..#.#", "#......#", "#.####.#", "..####..",
        ".#....#.",
    ],
    &[
        "..####..", ".#....#.", "#.#....#", "#......#", "##.....#", ".#....#.", "..####..",
        ".#....#.",
    ],
    &[
        "..####..", ".#....#.", "#....#.#", "#......#", "#.....##", ".#....#.", "..####..",
        ".#....#.",
    ],
    &[
        "..####..", ".#....#.", "#.#..#.#", "#..##..#", "#......#", ".#.##.#.", "..####..",
        "#......#",
    ],
];

const GIRL: &[&[&str]] = &[
    &[
        "##.###..", "#####.#.", "#.#..#.#", "#......#", "#..##..#", ".#....#.", ".######.",
        ".#....#.",
    ],
    &[
        "........", "##.###..", "#####.#.", "#.#..#.#", "#......#", "#..##..#", ".######.",
        "#......#",
    ],
    &[
        "##.###.#", "####..##", "#.#..#.#", "#......#", "#.#..#.#", ".#.##.#.", ".######.",
        ".#....#.",
    ],
    &[
        "##.###..", "#####.#.", "#.#..#.#", "#......#", "#.####.#", ".#.##.#.", ".######.",
        ".#....#.",
    ],
    &[
        "##.###..", "#####.#.", "##....##", "#.#..#.#", "#......#", "#.####.#", ".######.",
        ".#....#.",
    ],
    &[
        "##.###..", "#####.#.", "#.#....#", "#......#", "##.....#", ".#....#.", ".######.",
        ".#....#.",
    ],
    &[
        "##.###..", "#####.#.", "#....#.#", "#......#", "#.....##", ".#....#.", ".######.",
        ".#....#.",
    ],
    &[
        "##.###..", "#####.#.", "#.#..#.#", "#..##..#", "#......#", ".#.##.#.", ".######.",
        "#......#",
    ],
];

const EGG_NAMES: &[(&str, (u32, u32))] = &[
    ("egg", (0, 0)),
    ("squat", (1, 0)),
    ("crack_left", (2, 0)),
    ("crack_right", (3, 0)),
    ("shell", (4, 0)),
];

const EGG: &[&[&str]] = &[
    &[
        "...##...", "..#..#..", ".#....#.", ".#.#..#.", "#....#.#", "#.#....#", ".#....#.",
        "..####..",
    ],
    &[
        "........", "...##...", "..#..#..", ".#.#..#.", "#....#.#", "#.#....#", ".#....#.",
        "..####..",
    ],
    &[
        "...##...", "..#..#..", ".#....#.", ".##.#.#.", "#..#.#.#", "#......#", ".#....#.",
        "..####..",
    ],
    &[
        "...##...", "..#..#..", ".#....#.", ".#.#.##.", "#.#.#..#", "#......#", ".#....#.",
        "..####..",
    ],
    &[
        "........", "........", "........", "........", "##.#.#.#", "#.#.#.##", ".#....#.",
        "..####..",
    ],
];

// Row 0 is the meal, row 1 the snack; columns are successive bites.
const FOOD: &[&[&str]] = &[
    &[
        "..####..", ".#....#.", "#......#", "########", "#.#.#.##", "########", "#......#",
        ".######.",
    ],
    &[
        "..###...", ".#...#..", "#.....#.", "#######.", "#.#.##..", "######..", "#.....#.",
        ".#####..",
    ],
    &[
        "........", "........", "##......", "#.#.....", "###.....", "#.......", "##......",
        "........",
    ],
    &[
        "...#....", "...#....", ".######.", "#.#.#.##", "########", "#......#", "#......#",
        "########",
    ],
    &[
        "........", "...#....", ".####...", "#.#.#...", "#####...", "#...#...", "#...#...",
        "#####...",
    ],
    &[
        "........", "........", "........", "........", "##......", ".#......", ".#......",
        "##......",
    ],
];

const MISC_NAMES: &[(&str, (u32, u32))] = &[
    ("poop_a", (0, 0)),
    ("poop_b", (1, 0)),
    ("skull", (2, 0)),
    ("ghost", (3, 0)),
    ("heart_full", (0, 1)),
    ("heart_empty", (1, 1)),
    ("cursor", (2, 1)),
    ("question", (3, 1)),
    ("wave", (0, 2)),
    ("sparkle", (1, 2)),
    ("anger", (2, 2)),
    ("tombstone", (3, 2)),
    ("arrow_left", (0, 3)),
    ("arrow_right", (1, 3)),
    ("fork", (2, 3)),
    ("smile", (3, 3)),
    ("box_empty", (0, 4)),
    ("box_full", (1, 4)),
    ("male", (2, 4)),
    ("female", (3, 4)),
];

const MISC: &[&[&str]] = &[
    // poop_a
    &[
        "........", "...#....", "..#.....", "...##...", "..#..#..", ".#.##.#.", "#......#",
        ".######.",
    ],
    // poop_b
    &[
        "........", "....#...", ".....#..", "...##...", "..#..#..", ".#.##.#.", "#......#",
        ".######.",
    ],
    // skull
    &[
        "..####..", ".#....#.", "#.#..#.#", "#......#", ".#.##.#.", "..#..#..", "..####..",
        "........",
    ],
    // ghost
    &[
        "..####..", ".#....#.", "#.#..#.#", "#......#", "#......#", "#......#", "#.#..#.#",
        ".#.##.#.",
    ],
    // heart_full
    &[
        "........", ".##.##..", "#######.", "#######.", ".#####..", "..###...", "...#....",
        "........",
    ],
    // heart_empty
    &[
        "........", ".##.##..", "#..#..#.", "#.....#.", ".#...#..", "..#.#...", "...#....",
        "........",
    ],
    // cursor
    &[
        "........", "..#.....", "..##....", "..###...", "..####..", "..###...", "..##....",
        "..#.....",
    ],
    // question
    &[
        "..####..", ".#....#.", "......#.", "....##..", "...#....", "...#....", "........",
        "...#....",
    ],
    // wave
    &[
        ".#......", "#.#.....", "...#..#.", "....##..", ".#......", "#.#.....", "...#..#.",
        "....##..",
    ],
    // sparkle
    &[
        "...#....", "...#....", ".#.#.#..", "..###...", "#######.", "..###...", ".#.#.#..",
        "...#....",
    ],
    // anger
    &[
        "........", ".#...#..", "..#.#...", "........", "..#.#...", ".#...#..", "........",
        "........",
    ],
    // tombstone
    &[
        "..####..", ".#....#.", "#..#...#", "#.###..#", "#..#...#", "#......#", "#......#",
        "########",
    ],
    // arrow_left
    &[
        "........", "...#....", "..##....", ".#######", "########", ".#######", "..##....",
        "...#....",
    ],
    // arrow_right
    &[
        "........", "....#...", "....##..", "#######.", "########", "#######.", "....##..",
        "....#...",
    ],
    // fork
    &[
        "#.#.#...", "#.#.#...", "#.#.#...", "#####...", "..#.....", "..#.....", "..#.....",
        "..#.....",
    ],
    // smile
    &[
        "..####..", ".#....#.", "#.#..#.#", "#......#", "#.#..#.#", "#..##..#", ".#....#.",
        "..####..",
    ],
    // box_empty
    &[
        "........", "#######.", "#.....#.", "#.....#.", "#.....#.", "#.....#.", "#######.",
        "........",
    ],
    // box_full
    &[
        "........", "#######.", "#######.", "#######.", "#######.", "#######.", "#######.",
        "........",
    ],
    // male
    &[
        "....###.", ".....##.", "....#.#.", ".###....", "#...#...", "#...#...", "#...#...",
        ".###....",
    ],
    // female
    &[
        "..###...", ".#...#..", ".#...#..", ".#...#..", "..###...", "...#....", "..###...",
        "...#....",
    ],
];

const DIGIT_NAMES: &[(&str, (u32, u32))] = &[
    ("0", (0, 0)),
    ("1", (1, 0)),
    ("2", (2, 0)),
    ("3", (3, 0)),
    ("4", (4, 0)),
    ("5", (5, 0)),
    ("6", (6, 0)),
    ("7", (7, 0)),
    ("8", (8, 0)),
    ("9", (9, 0)),
    ("-", (10, 0)),
];

// 4×5 glyphs.
const DIGITS: &[&[&str]] = &[
    &[".##.", "#..#", "#..#", "#..#", ".##."],
    &["..#.", ".##.", "..#.", "..#.", ".###"],
    &[".##.", "#..#", "..#.", ".#..", "####"],
    &["###.", "...#", ".##.", "...#", "###."],
    &["#..#", "#..#", "####", "...#", "...#"],
    &["####", "#...", "###.", "...#", "###."],
    &[".##.", "#...", "###.", "#..#", ".##."],
    &["####", "...#", "..#.", ".#..", ".#.."],
    &[".##.", "#..#", ".##.", "#..#", ".##."],
    &[".##.", "#..#", ".###", "...#", ".##."],
    &["....", "....", "####", "....", "...."],
];
