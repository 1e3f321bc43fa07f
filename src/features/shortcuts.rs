//! Keyboard shortcuts
//!
//! The journal keeps a small fixed key map; there is no rebinding UI.

use iced::keyboard::key::Named;
use iced::keyboard::{Key, Modifiers};

/// All keyboard-reachable actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Unlock the journal (lock page only)
    Unlock,
    /// Toggle the music flag
    ToggleMusic,
    /// Collapse the open note, if any
    CollapseNote,
}

/// Map a key press to an action
///
/// Returns `None` for unmapped keys and for any press with modifiers
/// held, so plain typing shortcuts never collide with OS chords.
pub fn find_action(key: &Key, modifiers: Modifiers) -> Option<Action> {
    if !modifiers.is_empty() {
        return None;
    }

    match key {
        Key::Named(Named::Enter) => Some(Action::Unlock),
        Key::Named(Named::Escape) => Some(Action::CollapseNote),
        Key::Character(c) if c.as_str() == "m" => Some(Action::ToggleMusic),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::key::Named;

    #[test]
    fn enter_maps_to_unlock() {
        let action = find_action(&Key::Named(Named::Enter), Modifiers::empty());
        assert_eq!(action, Some(Action::Unlock));
    }

    #[test]
    fn escape_maps_to_collapse() {
        let action = find_action(&Key::Named(Named::Escape), Modifiers::empty());
        assert_eq!(action, Some(Action::CollapseNote));
    }

    #[test]
    fn m_maps_to_toggle_music() {
        let action = find_action(&Key::Character("m".into()), Modifiers::empty());
        assert_eq!(action, Some(Action::ToggleMusic));
    }

    #[test]
    fn modifiers_disable_the_map() {
        let action = find_action(&Key::Named(Named::Enter), Modifiers::CTRL);
        assert_eq!(action, None, "chords must never trigger journal actions");
    }

    #[test]
    fn unmapped_keys_do_nothing() {
        let action = find_action(&Key::Character("x".into()), Modifiers::empty());
        assert_eq!(action, None);
    }
}
