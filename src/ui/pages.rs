//! Pages module
//! Full-page views for the memory journal

pub mod journal;
pub mod lock;
