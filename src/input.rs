use crate::model::{Direction, Mode};
use crate::render::Surface;
use crate::sim::{Action, Device};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::debug;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Button {
    A,
    B,
    C,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum KeyInput {
    Press(Button),
    Quit,
}

/// Drains pending key presses. Held-key repeats are dropped: every button
/// is a discrete press.
pub(crate) fn collect_input_nonblocking(max_frame_time: Duration) -> anyhow::Result<Vec<KeyCode>> {
    let mut out = Vec::new();

    // poll with a tiny timeout so we stay responsive
    let timeout = std::cmp::min(Duration::from_millis(1), max_frame_time);
    while event::poll(timeout)? {
        if let Event::Key(k) = event::read()? {
            if k.kind == KeyEventKind::Press {
                out.push(k.code);
                if out.len() >= 32 {
                    break;
                }
            }
        }
    }
    Ok(out)
}

pub(crate) fn map_key(key: KeyCode) -> Option<KeyInput> {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(KeyInput::Quit),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('z') | KeyCode::Char('Z') => {
            Some(KeyInput::Press(Button::A))
        }
        KeyCode::Left => Some(KeyInput::Press(Button::A)),
        KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Char('x') | KeyCode::Char('X') => {
            Some(KeyInput::Press(Button::B))
        }
        KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => Some(KeyInput::Press(Button::B)),
        KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Esc => {
            Some(KeyInput::Press(Button::C))
        }
        _ => None,
    }
}

/// What `button` means in `mode`. `None` means the press does nothing.
pub(crate) fn map_button(mode: Mode, lights_off: bool, button: Button) -> Option<Action> {
    match (mode, button) {
        (Mode::Idle, Button::A) => Some(Action::NextIcon),
        (Mode::Idle, Button::B) => Some(Action::ActivateIcon),

        (Mode::Food, Button::A) if !lights_off => Some(Action::ToggleFood),
        (Mode::Food, Button::B) => Some(Action::Feed),

        (Mode::Game, Button::A) => Some(Action::Guess(Direction::Left)),
        (Mode::Game, Button::B) => Some(Action::Guess(Direction::Right)),

        (Mode::Status, Button::A) => Some(Action::TurnPage(-1)),
        (Mode::Status, Button::B) => Some(Action::TurnPage(1)),

        (Mode::Food | Mode::Game | Mode::Status, Button::C) => Some(Action::Back),
        (Mode::Dead, Button::C) => Some(Action::Reset),

        _ => None,
    }
}

impl<S: Surface> Device<S> {
    /// Every button is ignored while an action is playing.
    pub(crate) fn press(&mut self, button: Button) {
        if self.is_busy() {
            debug!("{button:?} ignored, busy");
            return;
        }
        if let Some(action) = map_button(self.mode(), self.lights_off(), button) {
            debug!("{button:?} in {:?} -> {action:?}", self.mode());
            self.apply(action);
        }
    }
}
