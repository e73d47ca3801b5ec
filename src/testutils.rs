use crate::render::Surface;
use crate::sprite::{SourceRect, SpriteSheet};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Op {
    Clear,
    Fill,
    Draw {
        sheet: &'static str,
        name: Option<&'static str>,
        src: SourceRect,
        x: i32,
        y: i32,
    },
}

/// Surface that remembers every call instead of drawing.
#[derive(Default)]
pub(crate) struct RecordingSurface {
    pub(crate) ops: Vec<Op>,
}

impl RecordingSurface {
    pub(crate) fn drawn_names(&self) -> Vec<&'static str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Draw { name, .. } => *name,
                _ => None,
            })
            .collect()
    }

    pub(crate) fn drew(&self, sheet: &str, name: &str, x: i32, y: i32) -> bool {
        self.ops.iter().any(|op| {
            matches!(op, Op::Draw { sheet: s, name: Some(n), x: ox, y: oy, .. }
                if *s == sheet && *n == name && *ox == x && *oy == y)
        })
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn fill(&mut self) {
        self.ops.push(Op::Fill);
    }

    fn draw_image(&mut self, sheet: &SpriteSheet, src: SourceRect, x: i32, y: i32) {
        self.ops.push(Op::Draw {
            sheet: sheet.name,
            name: sheet.name_of(src),
            src,
            x,
            y,
        });
    }
}
