use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum TimerId {
    Hatch,
    Poop,
    HungerDecay,
    HappinessDecay,
    MissedCare,
    PoopSick,
    Death,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Running {
        remaining_ms: u64,
        every_ms: Option<u64>,
    },
    // A one-shot timer that already fired; it stays spent until stopped.
    Elapsed,
}

/// Named countdowns. Each is started and stopped by lifecycle phase, never
/// touches the screen, and only reports which ids fired.
#[derive(Debug, Default)]
pub(crate) struct Timers {
    slots: BTreeMap<TimerId, Slot>,
}

impl Timers {
    pub(crate) fn start_once(&mut self, id: TimerId, ms: u64) {
        self.slots.insert(
            id,
            Slot::Running {
                remaining_ms: ms,
                every_ms: None,
            },
        );
    }

    pub(crate) fn start_every(&mut self, id: TimerId, ms: u64) {
        let ms = ms.max(1);
        self.slots.insert(
            id,
            Slot::Running {
                remaining_ms: ms,
                every_ms: Some(ms),
            },
        );
    }

    pub(crate) fn stop(&mut self, id: TimerId) {
        self.slots.remove(&id);
    }

    #[cfg(test)]
    pub(crate) fn is_running(&self, id: TimerId) -> bool {
        matches!(self.slots.get(&id), Some(Slot::Running { .. }))
    }

    #[cfg(test)]
    pub(crate) fn remaining(&self, id: TimerId) -> Option<u64> {
        match self.slots.get(&id) {
            Some(Slot::Running { remaining_ms, .. }) => Some(*remaining_ms),
            _ => None,
        }
    }

    /// Runs a one-shot timer for as long as `condition` holds. It fires at
    /// most once per stretch of the condition and re-arms once it drops.
    pub(crate) fn once_while(&mut self, id: TimerId, condition: bool, ms: u64) {
        if !condition {
            self.stop(id);
        } else if !self.slots.contains_key(&id) {
            self.start_once(id, ms);
        }
    }

    /// Runs a repeating timer for as long as `condition` holds.
    pub(crate) fn every_while(&mut self, id: TimerId, condition: bool, ms: u64) {
        if !condition {
            self.stop(id);
        } else if !self.slots.contains_key(&id) {
            self.start_every(id, ms);
        }
    }

    /// Moves every running timer forward and returns the ids that fired, in
    /// firing order. A repeating timer can fire several times in one call.
    pub(crate) fn advance(&mut self, dt: u64) -> Vec<TimerId> {
        let mut fired: Vec<(u64, TimerId)> = Vec::new();
        for (id, slot) in self.slots.iter_mut() {
            let Slot::Running {
                remaining_ms,
                every_ms,
            } = slot
            else {
                continue;
            };
            if *remaining_ms > dt {
                *remaining_ms -= dt;
                continue;
            }
            let mut at = *remaining_ms;
            match *every_ms {
                Some(every) => loop {
                    fired.push((at, *id));
                    if at + every > dt {
                        *remaining_ms = at + every - dt;
                        break;
                    }
                    at += every;
                },
                None => {
                    fired.push((at, *id));
                    *slot = Slot::Elapsed;
                }
            }
        }
        fired.sort();
        fired.into_iter().map(|(_, id)| id).collect()
    }
}
