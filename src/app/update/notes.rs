// src/app/update/notes.rs
//! "Things I Never Said" panel message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle notes panel messages
    pub fn handle_notes(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::SelectNote(id) => {
                self.journal.notes.select(*id);
                tracing::debug!(expanded = ?self.journal.notes.expanded(), "note selected");
                Some(Task::none())
            }

            Message::CollapseNote => {
                self.journal.notes.collapse();
                Some(Task::none())
            }

            _ => None,
        }
    }
}
