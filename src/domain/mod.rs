//! Domain layer - Journal data model

pub mod canvas;
pub mod draft;
pub mod entry;
pub mod language;
pub mod payload;
pub mod translations;

pub use canvas::{DrawingSurface, Point};
pub use draft::{Draft, DraftField};
pub use entry::{Entry, EntryId};
pub use language::Language;
pub use payload::ImagePayload;
pub use translations::{translations, Translations};
