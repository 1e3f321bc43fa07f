// src/app/view.rs
//! Application view rendering

use iced::widget::{container, stack};
use iced::{Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::{components, pages};

impl App {
    /// Build the view from the current state snapshot
    ///
    /// Pure function of the state: the lock page and the journal are
    /// mutually exclusive subtrees, and all mutation lives in
    /// `update`, so every frame sees one consistent snapshot.
    pub fn view(&self) -> Element<'_, Message> {
        if !self.journal.gate.is_unlocked() {
            return pages::lock::view();
        }

        let journal = pages::journal::view(&self.journal.notes, self.core.window_size.width);

        // Fixed nav floats above the scrolled content
        let nav = components::nav_bar::view(
            self.journal.playback.is_playing(),
            self.core.settings.display.dark_mode,
        );

        stack![journal, container(nav).width(Fill).padding(16)]
            .width(Fill)
            .height(Fill)
            .into()
    }
}
