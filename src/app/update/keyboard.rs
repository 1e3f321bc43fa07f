// src/app/update/keyboard.rs
//! Keyboard message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::shortcuts::{self, Action};

impl App {
    /// Handle keyboard-related messages
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, modifiers) => {
                if let Some(action) = shortcuts::find_action(key, *modifiers) {
                    return Some(self.execute_action(action));
                }
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Execute a shortcut action
    ///
    /// Each action is gated on the page it belongs to: Enter only
    /// unlocks, and the journal shortcuts only fire once unlocked.
    fn execute_action(&mut self, action: Action) -> Task<Message> {
        let unlocked = self.journal.gate.is_unlocked();
        match action {
            Action::Unlock if !unlocked => self.update(Message::Enter),
            Action::ToggleMusic if unlocked => self.update(Message::ToggleMusic),
            Action::CollapseNote if unlocked => self.update(Message::CollapseNote),
            _ => Task::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use iced::keyboard::key::Named;
    use iced::keyboard::{Key, Modifiers};

    use crate::app::state::{App, CoreState, JournalState};
    use crate::app::Message;
    use crate::features::Settings;

    fn test_app() -> App {
        App {
            core: CoreState::new(Settings::default()),
            journal: JournalState::default(),
        }
    }

    fn press(app: &mut App, key: Key) {
        let _ = app.update(Message::KeyPressed(key, Modifiers::empty()));
    }

    #[test]
    fn enter_key_unlocks_while_locked() {
        let mut app = test_app();
        press(&mut app, Key::Named(Named::Enter));
        assert!(app.journal.gate.is_unlocked());
    }

    #[test]
    fn journal_shortcuts_are_inert_while_locked() {
        let mut app = test_app();
        press(&mut app, Key::Character("m".into()));
        assert!(
            !app.journal.playback.is_playing(),
            "music toggle is unreachable behind the gate"
        );
    }

    #[test]
    fn m_toggles_music_once_unlocked() {
        let mut app = test_app();
        press(&mut app, Key::Named(Named::Enter));
        press(&mut app, Key::Character("m".into()));
        assert!(app.journal.playback.is_playing());
    }

    #[test]
    fn escape_collapses_the_open_note() {
        let mut app = test_app();
        press(&mut app, Key::Named(Named::Enter));
        let _ = app.update(Message::SelectNote("note-1"));
        press(&mut app, Key::Named(Named::Escape));
        assert_eq!(app.journal.notes.expanded(), None);
    }
}
