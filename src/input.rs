use crossterm::event::KeyCode;

use crate::grid::Direction;
use crate::mode::Tier;

/// Raw input as delivered by an input source.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(KeyCode),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    SelectEasy,
    SelectHard,
    Quit,
}

impl Action {
    /// Unrecognized keys map to `None`.
    pub fn from_event(event: &InputEvent) -> Option<Action> {
        match event {
            InputEvent::Quit => Some(Action::Quit),
            InputEvent::KeyDown(code) => match code {
                KeyCode::Char('w') | KeyCode::Up => Some(Action::MoveUp),
                KeyCode::Char('a') | KeyCode::Left => Some(Action::MoveLeft),
                KeyCode::Char('s') | KeyCode::Down => Some(Action::MoveDown),
                KeyCode::Char('d') | KeyCode::Right => Some(Action::MoveRight),
                KeyCode::Char('1') => Some(Action::SelectEasy),
                KeyCode::Char('2') => Some(Action::SelectHard),
                KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
        }
    }

    pub fn direction(self) -> Option<Direction> {
        match self {
            Action::MoveUp => Some(Direction::Up),
            Action::MoveDown => Some(Direction::Down),
            Action::MoveLeft => Some(Direction::Left),
            Action::MoveRight => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn tier(self) -> Option<Tier> {
        match self {
            Action::SelectEasy => Some(Tier::Easy),
            Action::SelectHard => Some(Tier::Hard),
            _ => None,
        }
    }
}
