//! Message update handlers - thin dispatcher delegating to submodules

mod fonts;
mod gate;
mod keyboard;
mod notes;
mod playback;
mod settings;
mod window;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_gate(&message) {
            return task;
        }
        if let Some(task) = self.handle_playback(&message) {
            return task;
        }
        if let Some(task) = self.handle_notes(&message) {
            return task;
        }
        if let Some(task) = self.handle_fonts(&message) {
            return task;
        }
        if let Some(task) = self.handle_settings(&message) {
            return task;
        }
        if let Some(task) = self.handle_keyboard(&message) {
            return task;
        }
        if let Some(task) = self.handle_window(&message) {
            return task;
        }

        // Default: no task (covers Noop)
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use crate::app::state::{App, CoreState, JournalState};
    use crate::app::Message;
    use crate::features::Settings;

    fn test_app() -> App {
        App {
            core: CoreState::new(Settings::default()),
            journal: JournalState::default(),
        }
    }

    mod scenario {
        use super::*;

        #[test]
        fn reference_walkthrough() {
            let mut app = test_app();
            assert!(!app.journal.gate.is_unlocked());
            assert!(!app.journal.playback.is_playing());
            assert_eq!(app.journal.notes.expanded(), None);

            let _ = app.update(Message::Enter);
            assert!(app.journal.gate.is_unlocked());

            let _ = app.update(Message::ToggleMusic);
            assert!(app.journal.playback.is_playing());

            let _ = app.update(Message::SelectNote("note-1"));
            assert_eq!(app.journal.notes.expanded(), Some("note-1"));

            let _ = app.update(Message::SelectNote("note-2"));
            assert_eq!(app.journal.notes.expanded(), Some("note-2"));

            let _ = app.update(Message::SelectNote("note-2"));
            assert_eq!(app.journal.notes.expanded(), None);

            // Final snapshot: unlocked, playing, nothing expanded
            assert!(app.journal.gate.is_unlocked());
            assert!(app.journal.playback.is_playing());
            assert_eq!(app.journal.notes.expanded(), None);
        }

        #[test]
        fn state_variables_are_independent() {
            let mut app = test_app();
            let _ = app.update(Message::Enter);

            // Toggling music does not disturb the notes panel
            let _ = app.update(Message::SelectNote("note-3"));
            let _ = app.update(Message::ToggleMusic);
            let _ = app.update(Message::ToggleMusic);
            assert_eq!(app.journal.notes.expanded(), Some("note-3"));

            // Selecting notes does not disturb the flag
            let _ = app.update(Message::ToggleMusic);
            let _ = app.update(Message::SelectNote("note-1"));
            assert!(app.journal.playback.is_playing());
        }

        #[test]
        fn noop_changes_nothing() {
            let mut app = test_app();
            let _ = app.update(Message::Noop);
            assert!(!app.journal.gate.is_unlocked());
            assert!(!app.journal.playback.is_playing());
            assert_eq!(app.journal.notes.expanded(), None);
        }
    }
}
