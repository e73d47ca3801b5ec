use crate::animation::Animation;
use crate::assets::Atlas;
use crate::render::Surface;
use crate::scheduler::{Playback, Progress};
use std::collections::VecDeque;

/// One unit of a multi-step action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Step<E> {
    Play(Animation),
    Delay(u64),
    Apply(E),
}

/// An ordered list of steps, built up front and run to completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Sequence<E> {
    steps: Vec<Step<E>>,
}

impl<E> Sequence<E> {
    pub(crate) fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub(crate) fn play(mut self, animation: Animation) -> Self {
        self.steps.push(Step::Play(animation));
        self
    }

    pub(crate) fn delay(mut self, ms: u64) -> Self {
        self.steps.push(Step::Delay(ms));
        self
    }

    pub(crate) fn apply(mut self, effect: E) -> Self {
        self.steps.push(Step::Apply(effect));
        self
    }

    pub(crate) fn then(mut self, other: Sequence<E>) -> Self {
        self.steps.extend(other.steps);
        self
    }

    #[cfg(test)]
    pub(crate) fn steps(&self) -> &[Step<E>] {
        &self.steps
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Advance<E> {
    /// Still inside a play or delay step.
    Running,
    /// Reached an effect step; the caller applies it, then advances again
    /// with the leftover time.
    Effect { effect: E, leftover_ms: u64 },
    /// Every step has run.
    Done { leftover_ms: u64 },
}

enum Active {
    Playing(Playback),
    Waiting(u64),
}

/// Drives one sequence at a time, step by step.
pub(crate) struct Sequencer<E> {
    pending: VecDeque<Step<E>>,
    active: Option<Active>,
}

impl<E> Default for Sequencer<E> {
    fn default() -> Self {
        Self {
            pending: VecDeque::new(),
            active: None,
        }
    }
}

impl<E> Sequencer<E> {
    pub(crate) fn start(&mut self, sequence: Sequence<E>) {
        self.pending = sequence.steps.into();
        self.active = None;
    }

    #[cfg(test)]
    pub(crate) fn is_running(&self) -> bool {
        self.active.is_some() || !self.pending.is_empty()
    }

    pub(crate) fn advance<S: Surface>(
        &mut self,
        mut surface: Option<&mut S>,
        atlas: &Atlas,
        lights_off: bool,
        mut dt: u64,
    ) -> Advance<E> {
        loop {
            match self.active.as_mut() {
                Some(Active::Playing(playback)) => {
                    match playback.advance(surface.as_deref_mut(), atlas, dt) {
                        Progress::Running => return Advance::Running,
                        Progress::Finished { leftover_ms } => {
                            dt = leftover_ms;
                            self.active = None;
                        }
                    }
                }
                Some(Active::Waiting(remaining)) => {
                    if *remaining > dt {
                        *remaining -= dt;
                        return Advance::Running;
                    }
                    dt -= *remaining;
                    self.active = None;
                }
                None => {}
            }

            match self.pending.pop_front() {
                None => return Advance::Done { leftover_ms: dt },
                Some(Step::Play(animation)) => {
                    self.active = Some(Active::Playing(Playback::new(animation, lights_off)));
                }
                Some(Step::Delay(ms)) => self.active = Some(Active::Waiting(ms)),
                Some(Step::Apply(effect)) => {
                    return Advance::Effect {
                        effect,
                        leftover_ms: dt,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{AnimationFrame, FrameSprite};
    use crate::assets::SheetId;
    use crate::testutils::RecordingSurface;

    fn anim(name: &'static str, frames: usize) -> Animation {
        (0..frames)
            .map(|_| AnimationFrame::timed(100, vec![FrameSprite::named(SheetId::Misc, name, 0, 0)]))
            .collect()
    }

    #[test]
    fn steps_run_strictly_in_order() {
        let atlas = Atlas::standard();
        let mut s = RecordingSurface::default();
        let mut seq = Sequencer::default();
        seq.start(
            Sequence::new()
                .play(anim("ghost", 2))
                .apply("scored")
                .delay(50)
                .play(anim("skull", 1))
                .apply("done"),
        );
        assert!(seq.is_running());

        assert_eq!(seq.advance(Some(&mut s), &atlas, false, 150), Advance::Running);
        assert_eq!(s.drawn_names(), vec!["ghost", "ghost"]);

        assert_eq!(
            seq.advance(Some(&mut s), &atlas, false, 60),
            Advance::Effect {
                effect: "scored",
                leftover_ms: 10
            }
        );
        // the delay swallows the leftover and 40 more
        assert_eq!(seq.advance(Some(&mut s), &atlas, false, 10), Advance::Running);
        assert_eq!(seq.advance(Some(&mut s), &atlas, false, 40), Advance::Running);
        assert_eq!(s.drawn_names(), vec!["ghost", "ghost", "skull"]);

        assert_eq!(
            seq.advance(Some(&mut s), &atlas, false, 100),
            Advance::Effect {
                effect: "done",
                leftover_ms: 0
            }
        );
        assert_eq!(
            seq.advance(Some(&mut s), &atlas, false, 0),
            Advance::Done { leftover_ms: 0 }
        );
        assert!(!seq.is_running());
    }

    #[test]
    fn without_a_surface_only_delays_take_time() {
        let atlas = Atlas::standard();
        let mut seq = Sequencer::default();
        seq.start(Sequence::new().play(anim("ghost", 5)).delay(30).apply(1u8));
        assert_eq!(
            seq.advance(None::<&mut RecordingSurface>, &atlas, false, 20),
            Advance::Running
        );
        assert_eq!(
            seq.advance(None::<&mut RecordingSurface>, &atlas, false, 20),
            Advance::Effect {
                effect: 1,
                leftover_ms: 10
            }
        );
    }

    #[test]
    fn sequences_compose_by_concatenation() {
        let hatch: Sequence<()> = Sequence::new()
            .play(anim("ghost", 1))
            .then(Sequence::new().play(anim("skull", 1)));
        assert_eq!(hatch.steps().len(), 2);
        assert!(matches!(hatch.steps()[1], Step::Play(ref a) if a[0].sprites[0].is_named("skull")));
    }
}
