//! Reusable UI widgets - composable components without business logic
//!
//! Widgets combine basic iced elements into reusable UI patterns.
//! They should not contain any business logic or depend on
//! `crate::app` directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Widgets must not import from `crate::app::Message`
//! - **Generic callbacks**: Use generic Message types
//! - **Composable**: Build on iced's built-in widgets

pub mod lesson_card;
pub mod scrapbook;
pub mod section_header;
pub mod timeline_item;

pub use scrapbook::{polaroid, sticker};
