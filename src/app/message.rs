//! Application messages

use iced::keyboard::{Key, Modifiers};

use crate::content::NoteId;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// No-op message for event interception
    Noop,

    // ============ Gate ============
    /// Unlock the journal (lock page "Enter" button)
    Enter,

    // ============ Playback ============
    /// Flip the music flag
    ToggleMusic,

    // ============ Notes ============
    /// Toggle-with-exclusivity selection of one note
    SelectNote(NoteId),
    /// Collapse the open note, if any
    CollapseNote,

    // ============ Typefaces ============
    /// Typeface fetch finished (family name + raw bytes per face)
    FontsFetched(Result<Vec<(&'static str, Vec<u8>)>, String>),
    /// One face registered with the renderer
    FontRegistered(Result<(), iced::font::Error>),

    // ============ Settings ============
    /// Flip and persist dark mode
    ToggleDarkMode,

    // ============ Input / window ============
    /// Raw key press from the keyboard subscription
    KeyPressed(Key, Modifiers),
    /// Window resized (drives the layout breakpoint)
    WindowResized(iced::Size),
}
