//! UI Components module - journal-specific composite components
//!
//! Components combine widgets with application logic. They are the
//! only UI layer that should import from `crate::app`.

pub mod nav_bar;
pub mod secrets_panel;
