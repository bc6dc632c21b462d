//! Application layer - Stores and the session that owns them

pub mod attachment;
pub mod entry_store;
pub mod language_store;
pub mod session;

pub use attachment::{AttachmentLoader, AttachmentReader};
pub use entry_store::{EntryStore, Rejection, SubmitOutcome};
pub use language_store::LanguageStore;
pub use session::Session;
