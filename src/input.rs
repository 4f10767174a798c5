//! Maps terminal key events onto scene, menu and results actions.

use crate::core::constants::KEY_HOLD_MS;
use crate::games::{CatchInput, FlappyInput};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

/// Actions on the game selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Up,
    Down,
    Select,
    Quit,
    None,
}

/// Actions on the results overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsAction {
    PlayAgain,
    Menu,
    Quit,
    None,
}

/// Ctrl+C quits from anywhere.
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

pub fn map_menu_key(key: &KeyEvent) -> MenuAction {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => MenuAction::Up,
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => MenuAction::Down,
        KeyCode::Enter | KeyCode::Char(' ') => MenuAction::Select,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => MenuAction::Quit,
        _ => MenuAction::None,
    }
}

pub fn map_results_key(key: &KeyEvent) -> ResultsAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') => ResultsAction::PlayAgain,
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => ResultsAction::Menu,
        KeyCode::Char('q') | KeyCode::Char('Q') => ResultsAction::Quit,
        _ => ResultsAction::None,
    }
}

pub fn map_catch_key(key: &KeyEvent) -> CatchInput {
    let input = match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => CatchInput::Start,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => CatchInput::Left,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => CatchInput::Right,
        KeyCode::Down | KeyCode::Char('s') => CatchInput::Stop,
        KeyCode::Esc => CatchInput::Forfeit,
        _ => CatchInput::Other,
    };
    // Terminals with release reporting tell us when a direction is let go
    if key.kind == KeyEventKind::Release {
        return match input {
            CatchInput::Left | CatchInput::Right => CatchInput::Stop,
            _ => CatchInput::Other,
        };
    }
    input
}

pub fn map_flappy_key(key: &KeyEvent) -> FlappyInput {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Up | KeyCode::Char('w') => {
            FlappyInput::Flap
        }
        KeyCode::Esc => FlappyInput::Forfeit,
        _ => FlappyInput::Other,
    }
}

/// Emulates a held direction key. Without release events a direction is
/// treated as held while the terminal's key repeat keeps re-sending it.
#[derive(Debug)]
pub struct HeldDirection {
    last_press: Option<Instant>,
    hold: Duration,
}

impl HeldDirection {
    pub fn new() -> Self {
        Self {
            last_press: None,
            hold: Duration::from_millis(KEY_HOLD_MS),
        }
    }

    pub fn press(&mut self, now: Instant) {
        self.last_press = Some(now);
    }

    pub fn release(&mut self) {
        self.last_press = None;
    }

    /// True exactly once when the hold window lapses without a repeat.
    pub fn expired(&mut self, now: Instant) -> bool {
        match self.last_press {
            Some(t) if now.duration_since(t) >= self.hold => {
                self.last_press = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_catch_keys() {
        assert_eq!(map_catch_key(&key(KeyCode::Left)), CatchInput::Left);
        assert_eq!(map_catch_key(&key(KeyCode::Char('d'))), CatchInput::Right);
        assert_eq!(map_catch_key(&key(KeyCode::Char(' '))), CatchInput::Start);
        assert_eq!(map_catch_key(&key(KeyCode::Esc)), CatchInput::Forfeit);
        assert_eq!(map_catch_key(&key(KeyCode::Char('x'))), CatchInput::Other);
    }

    #[test]
    fn test_release_stops_direction() {
        let release = KeyEvent {
            code: KeyCode::Right,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Release,
            state: KeyEventState::empty(),
        };
        assert_eq!(map_catch_key(&release), CatchInput::Stop);
    }

    #[test]
    fn test_flappy_keys() {
        assert_eq!(map_flappy_key(&key(KeyCode::Up)), FlappyInput::Flap);
        assert_eq!(map_flappy_key(&key(KeyCode::Enter)), FlappyInput::Flap);
        assert_eq!(map_flappy_key(&key(KeyCode::Esc)), FlappyInput::Forfeit);
        assert_eq!(map_flappy_key(&key(KeyCode::Left)), FlappyInput::Other);
    }

    #[test]
    fn test_menu_and_results_keys() {
        assert_eq!(map_menu_key(&key(KeyCode::Down)), MenuAction::Down);
        assert_eq!(map_menu_key(&key(KeyCode::Enter)), MenuAction::Select);
        assert_eq!(map_results_key(&key(KeyCode::Enter)), ResultsAction::PlayAgain);
        assert_eq!(map_results_key(&key(KeyCode::Esc)), ResultsAction::Menu);
        assert_eq!(map_results_key(&key(KeyCode::Char('q'))), ResultsAction::Quit);
    }

    #[test]
    fn test_interrupt() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(is_interrupt(&ctrl_c));
        assert!(!is_interrupt(&key(KeyCode::Char('c'))));
    }

    #[test]
    fn test_held_direction_expires_once() {
        let mut held = HeldDirection::new();
        let t0 = Instant::now();
        held.press(t0);
        assert!(!held.expired(t0 + Duration::from_millis(KEY_HOLD_MS / 2)));
        assert!(held.expired(t0 + Duration::from_millis(KEY_HOLD_MS)));
        assert!(!held.expired(t0 + Duration::from_millis(KEY_HOLD_MS * 2)));
    }

    #[test]
    fn test_hold_survives_initial_repeat_delay() {
        let mut held = HeldDirection::new();
        let t0 = Instant::now();
        held.press(t0);
        // First auto-repeat arrives after the terminal's repeat delay
        assert!(!held.expired(t0 + Duration::from_millis(660)));
        held.press(t0 + Duration::from_millis(660));
        assert!(!held.expired(t0 + Duration::from_millis(700)));
    }
}
