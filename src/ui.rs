//! UI module for the memory journal
//! Soft lavender scrapbook aesthetic
//!
//! # Architecture
//!
//! The UI is organized into three layers:
//!
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Journal-specific UI with Message handling
//! - **Pages** (`pages`): Full-page views

pub mod components;
pub mod icons;
pub mod pages;
pub mod theme;
pub mod widgets;
