// src/app/update/settings.rs
//! Settings message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle settings-related messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ToggleDarkMode => {
                self.core.settings.display.dark_mode = !self.core.settings.display.dark_mode;
                if let Err(e) = self.core.settings.save() {
                    tracing::warn!("failed to save settings: {}", e);
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
