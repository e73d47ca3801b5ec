use crate::assets::SheetId;
use crate::sprite::FrameRef;

pub(crate) const DEFAULT_FRAME_MS: u64 = 500;

/// One sprite blit: which frame of which sheet, and where on the LCD.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FrameSprite {
    pub(crate) sheet: SheetId,
    pub(crate) frame: FrameRef,
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl FrameSprite {
    pub(crate) fn named(sheet: SheetId, name: &'static str, x: i32, y: i32) -> Self {
        Self {
            sheet,
            frame: FrameRef::Named(name),
            x,
            y,
        }
    }

    pub(crate) fn cell(sheet: SheetId, col: u32, row: u32, x: i32, y: i32) -> Self {
        Self {
            sheet,
            frame: FrameRef::Cell(col, row),
            x,
            y,
        }
    }

    pub(crate) fn is_named(&self, name: &str) -> bool {
        matches!(self.frame, FrameRef::Named(n) if n == name)
    }
}

/// Sprites are drawn in order, so later entries end up on top.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct AnimationFrame {
    pub(crate) ms: Option<u64>,
    pub(crate) sprites: Vec<FrameSprite>,
}

impl AnimationFrame {
    pub(crate) fn new(sprites: Vec<FrameSprite>) -> Self {
        Self { ms: None, sprites }
    }

    pub(crate) fn timed(ms: u64, sprites: Vec<FrameSprite>) -> Self {
        Self {
            ms: Some(ms),
            sprites,
        }
    }

    pub(crate) fn duration_ms(&self) -> u64 {
        self.ms.unwrap_or(DEFAULT_FRAME_MS).max(1)
    }
}

pub(crate) type Animation = Vec<AnimationFrame>;

#[cfg(test)]
pub(crate) fn total_ms(animation: &[AnimationFrame]) -> u64 {
    animation.iter().map(AnimationFrame::duration_ms).sum()
}

/// A positioned drawable: a sheet plus where it currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Actor {
    pub(crate) sheet: SheetId,
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Actor {
    pub(crate) fn new(sheet: SheetId, x: i32, y: i32) -> Self {
        Self { sheet, x, y }
    }
}

pub(crate) fn pose(actor: Actor, name: &'static str) -> FrameSprite {
    FrameSprite::named(actor.sheet, name, actor.x, actor.y)
}

/// Moves `actor` by `(dx, dy)` once per step, alternating through `poses`.
/// Returns one sprite per step; the actor is left at its final position.
pub(crate) fn walk(
    actor: &mut Actor,
    poses: &[&'static str],
    (dx, dy): (i32, i32),
    steps: usize,
) -> Vec<FrameSprite> {
    let mut out = Vec::with_capacity(steps);
    for i in 0..steps {
        actor.x += dx;
        actor.y += dy;
        let name = if poses.is_empty() {
            "stand"
        } else {
            poses[i % poses.len()]
        };
        out.push(pose(*actor, name));
    }
    out
}
