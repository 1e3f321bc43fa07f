// src/app/update/playback.rs
//! Music toggle message handler

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle playback-related messages
    pub fn handle_playback(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ToggleMusic => {
                self.journal.playback.toggle();
                tracing::info!(
                    playing = self.journal.playback.is_playing(),
                    "music toggled"
                );
                Some(Task::none())
            }

            _ => None,
        }
    }
}
