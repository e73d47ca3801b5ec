use crate::animation::{Animation, AnimationFrame};
use crate::assets::Atlas;
use crate::render::Surface;
use crate::scheduler::draw_frame;
use std::collections::VecDeque;

/// Keeps the screen alive between actions: drains pending one-shot frames
/// first, and refills from the looping animation whenever the queue runs dry.
pub(crate) struct AnimationLoop {
    looping: Animation,
    queue: VecDeque<AnimationFrame>,
    paused: bool,
    current: Option<AnimationFrame>,
    wait_ms: u64,
}

impl AnimationLoop {
    pub(crate) fn new(looping: Animation) -> Self {
        Self {
            queue: looping.iter().cloned().collect(),
            looping,
            paused: false,
            current: None,
            wait_ms: 0,
        }
    }

    /// Takes effect on the next refill.
    pub(crate) fn set_looping(&mut self, animation: Animation) {
        self.looping = animation;
    }

    /// Replaces whatever is pending. The frame on screen still finishes.
    pub(crate) fn set_one_shot(&mut self, animation: Animation) {
        self.queue = animation.into();
    }

    pub(crate) fn pause(&mut self) {
        self.paused = true;
    }

    pub(crate) fn resume(&mut self) {
        self.paused = false;
    }

    #[cfg(test)]
    pub(crate) fn is_paused(&self) -> bool {
        self.paused
    }

    #[cfg(test)]
    pub(crate) fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Last frame this loop rendered.
    pub(crate) fn current_frame(&self) -> Option<&AnimationFrame> {
        self.current.as_ref()
    }

    pub(crate) fn tick<S: Surface>(
        &mut self,
        surface: Option<&mut S>,
        atlas: &Atlas,
        lights_off: bool,
        mut dt: u64,
    ) {
        if self.paused {
            return;
        }
        let Some(surface) = surface else {
            return;
        };

        loop {
            if self.wait_ms > dt {
                self.wait_ms -= dt;
                return;
            }
            dt -= self.wait_ms;
            self.wait_ms = 0;

            if self.queue.is_empty() {
                self.queue.extend(self.looping.iter().cloned());
            }
            let Some(frame) = self.queue.pop_front() else {
                return;
            };
            draw_frame(surface, atlas, &frame, lights_off);
            self.wait_ms = frame.duration_ms();
            self.current = Some(frame);
        }
    }
}
