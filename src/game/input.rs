use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseEventKind};

use crate::config::KeyBindings;

/// Normalized input for the driver loop. Pointer events carry the raw
/// terminal column; the driver translates it into court-local x through the
/// current court transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    Quit,
    Reset,
    Serve,
    Pause,
    MoveLeft,
    MoveRight,
    PointerAt { column: u16 },
}

/// Drain all pending terminal events without blocking. Key auto-repeat makes
/// held movement keys stream MoveLeft/MoveRight actions.
pub fn poll_input(keys: &KeyBindings) -> Result<Vec<InputAction>, io::Error> {
    let mut actions = Vec::new();

    while event::poll(Duration::from_millis(0))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if binding_matches(&keys.quit, key.code) || key.code == KeyCode::Esc {
                    actions.push(InputAction::Quit);
                } else if binding_matches(&keys.reset, key.code) {
                    actions.push(InputAction::Reset);
                } else if binding_matches(&keys.serve, key.code) {
                    actions.push(InputAction::Serve);
                } else if binding_matches(&keys.pause, key.code) {
                    actions.push(InputAction::Pause);
                } else if binding_matches(&keys.move_left, key.code) {
                    actions.push(InputAction::MoveLeft);
                } else if binding_matches(&keys.move_right, key.code) {
                    actions.push(InputAction::MoveRight);
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                    actions.push(InputAction::PointerAt {
                        column: mouse.column,
                    });
                }
                _ => {}
            },
            _ => {}
        }
    }

    Ok(actions)
}

/// Match a config binding name ("Left", "Space", "P", ...) against a key
/// code. Single characters compare case-insensitively.
fn binding_matches(binding: &str, code: KeyCode) -> bool {
    match code {
        KeyCode::Left => binding.eq_ignore_ascii_case("left"),
        KeyCode::Right => binding.eq_ignore_ascii_case("right"),
        KeyCode::Up => binding.eq_ignore_ascii_case("up"),
        KeyCode::Down => binding.eq_ignore_ascii_case("down"),
        KeyCode::Enter => binding.eq_ignore_ascii_case("enter"),
        KeyCode::Esc => binding.eq_ignore_ascii_case("esc"),
        KeyCode::Char(' ') => binding.eq_ignore_ascii_case("space"),
        KeyCode::Char(c) => {
            let mut chars = binding.chars();
            matches!((chars.next(), chars.next()), (Some(b), None) if b.eq_ignore_ascii_case(&c))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_keys_resolve() {
        assert!(binding_matches("Left", KeyCode::Left));
        assert!(binding_matches("left", KeyCode::Left));
        assert!(binding_matches("Space", KeyCode::Char(' ')));
        assert!(binding_matches("Enter", KeyCode::Enter));
        assert!(!binding_matches("Left", KeyCode::Right));
    }

    #[test]
    fn single_characters_match_case_insensitively() {
        assert!(binding_matches("P", KeyCode::Char('p')));
        assert!(binding_matches("p", KeyCode::Char('P')));
        assert!(!binding_matches("P", KeyCode::Char('q')));
        // multi-character names never match a bare character
        assert!(!binding_matches("Space", KeyCode::Char('s')));
    }
}
