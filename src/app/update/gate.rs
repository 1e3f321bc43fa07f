// src/app/update/gate.rs
//! Lock-screen gate message handler

use iced::Task;

use crate::app::helpers;
use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle gate-related messages
    pub fn handle_gate(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Enter => {
                if self.journal.gate.is_unlocked() {
                    // Terminal state: later enter actions are inert
                    return Some(Task::none());
                }

                self.journal.gate.unlock();
                tracing::info!("journal unlocked");

                // First unlock owns the typeface fetch; the lease
                // keeps remounts from duplicating it
                if self.core.fonts.acquire() {
                    return Some(Task::perform(helpers::fetch_journal_faces(), |result| {
                        Message::FontsFetched(result.map_err(|e| e.to_string()))
                    }));
                }

                Some(Task::none())
            }

            _ => None,
        }
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

    #[test]
    fn enter_unlocks_once() {
        let mut app = test_app();
        let _ = app.update(Message::Enter);
        assert!(app.journal.gate.is_unlocked());

        let _ = app.update(Message::Enter);
        assert!(app.journal.gate.is_unlocked(), "gate stays unlocked");
    }

    #[test]
    fn first_enter_claims_the_font_lease() {
        let mut app = test_app();
        assert!(!app.core.fonts.is_acquired());

        let _ = app.update(Message::Enter);
        assert!(app.core.fonts.is_acquired());

        // Repeated enters never reacquire; the lease already reports
        // acquired, so no duplicate fetch can be started
        let _ = app.update(Message::Enter);
        assert!(app.core.fonts.is_acquired());
    }
}
