//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::content;
pub use message::Message;
pub use state::{App, CoreState, Gate, JournalState, NotesPanel, PlaybackFlag};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        // 1. Load settings first so the first frame uses the right theme
        let settings = crate::features::Settings::load();

        // 2. Initialize sub-states; the journal always starts locked
        let app = Self {
            core: CoreState::new(settings),
            journal: JournalState::default(),
        };

        (app, Task::none())
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title, annotated while the music flag is on
    pub fn title(&self) -> String {
        if self.journal.playback.is_playing() {
            format!("{} ♪", content::APP_TITLE)
        } else {
            content::APP_TITLE.to_string()
        }
    }

    /// Subscriptions for keyboard shortcuts and window resizes
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;

        // 1. Keyboard shortcuts
        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        // 2. Window resize (drives the scrapbook layout breakpoint)
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        iced::Subscription::batch([keyboard_sub, resize_sub])
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}
