// src/app/update/fonts.rs
//! Typeface registration message handlers
//!
//! Failure anywhere on this path is cosmetic: the journal keeps
//! rendering with the system fallback and the miss is only logged.

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle typeface messages
    pub fn handle_fonts(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::FontsFetched(Ok(faces)) => {
                let tasks: Vec<Task<Message>> = faces
                    .iter()
                    .map(|(family, bytes)| {
                        tracing::info!("registering journal face: {}", family);
                        iced::font::load(bytes.clone()).map(Message::FontRegistered)
                    })
                    .collect();
                Some(Task::batch(tasks))
            }

            Message::FontsFetched(Err(e)) => {
                tracing::warn!("journal typefaces unavailable, using fallback: {}", e);
                Some(Task::none())
            }

            Message::FontRegistered(Ok(())) => {
                tracing::debug!("journal face registered");
                Some(Task::none())
            }

            Message::FontRegistered(Err(e)) => {
                tracing::warn!("failed to register journal face: {:?}", e);
                Some(Task::none())
            }

            _ => None,
        }
    }
}
