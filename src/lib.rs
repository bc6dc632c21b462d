//! gratitude - Interactive gratitude journal
//!
//! Keeps gratitude entries (title, description, optional photo, optional
//! freehand drawing) in memory for one session and renders them in English
//! or Spanish.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::GratitudeError;
