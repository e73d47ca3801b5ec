use crate::animation::{Animation, AnimationFrame};
use crate::assets::Atlas;
use crate::render::Surface;
use log::warn;
use std::collections::VecDeque;

/// Clears the surface, or fills it when the lights are off.
pub(crate) fn blank<S: Surface>(surface: &mut S, lights_off: bool) {
    if lights_off {
        surface.fill();
    } else {
        surface.clear();
    }
}

/// Renders one frame: blank, then each sprite in listed order.
pub(crate) fn draw_frame<S: Surface>(
    surface: &mut S,
    atlas: &Atlas,
    frame: &AnimationFrame,
    lights_off: bool,
) {
    blank(surface, lights_off);
    for sprite in &frame.sprites {
        let sheet = atlas.sheet(sprite.sheet);
        match sheet.resolve(sprite.frame) {
            Ok(src) => surface.draw_image(sheet, src, sprite.x, sprite.y),
            Err(err) => warn!("skipping sprite: {err}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Progress {
    Running,
    Finished { leftover_ms: u64 },
}

/// Plays one animation through once. Each frame is drawn, then held for its
/// duration; when the last one has been held the surface is blanked.
pub(crate) struct Playback {
    frames: VecDeque<AnimationFrame>,
    lights_off: bool,
    wait_ms: u64,
    done: bool,
}

impl Playback {
    pub(crate) fn new(animation: Animation, lights_off: bool) -> Self {
        Self {
            frames: animation.into(),
            lights_off,
            wait_ms: 0,
            done: false,
        }
    }

    /// Drops every frame not yet drawn. The surface keeps whatever was drawn
    /// last.
    pub(crate) fn cancel(&mut self) {
        self.frames.clear();
        self.wait_ms = 0;
        self.done = true;
    }

    pub(crate) fn advance<S: Surface>(
        &mut self,
        surface: Option<&mut S>,
        atlas: &Atlas,
        mut dt: u64,
    ) -> Progress {
        if self.done {
            return Progress::Finished { leftover_ms: dt };
        }
        let Some(surface) = surface else {
            // nothing to draw on: the whole animation is a no-op
            self.cancel();
            return Progress::Finished { leftover_ms: dt };
        };

        loop {
            if self.wait_ms > dt {
                self.wait_ms -= dt;
                return Progress::Running;
            }
            dt -= self.wait_ms;
            self.wait_ms = 0;

            match self.frames.pop_front() {
                Some(frame) => {
                    draw_frame(surface, atlas, &frame, self.lights_off);
                    self.wait_ms = frame.duration_ms();
                }
                None => {
                    blank(surface, self.lights_off);
                    self.done = true;
                    return Progress::Finished { leftover_ms: dt };
                }
            }
        }
    }
}
