//! Feature modules - application logic separated from UI
//!
//! Each feature module contains the core logic for a specific concern.
//! Features should not depend on UI components directly.

pub mod fonts;
pub mod settings;
pub mod shortcuts;

pub use fonts::FontLease;
pub use settings::Settings;
