//! Entry list and draft ownership

use crate::domain::{Draft, DraftField, DrawingSurface, Entry, EntryId, ImagePayload};
use crate::error::Result;
use crate::infrastructure::{Clock, SystemClock};

/// Why a submission produced no entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Title or description is blank after trimming
    BlankField,
    /// A photo is still being read
    AttachmentPending,
}

/// Result of submitting the draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(Entry),
    Rejected(Rejection),
}

impl SubmitOutcome {
    pub fn entry(&self) -> Option<&Entry> {
        match self {
            SubmitOutcome::Created(entry) => Some(entry),
            SubmitOutcome::Rejected(_) => None,
        }
    }
}

/// Owns the saved entries (newest first) and the draft being edited
pub struct EntryStore {
    entries: Vec<Entry>,
    draft: Draft,
    clock: Box<dyn Clock>,
}

impl Default for EntryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryStore {
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        EntryStore {
            entries: Vec::new(),
            draft: Draft::default(),
            clock,
        }
    }

    /// Promote the draft to an entry at the head of the list.
    ///
    /// A blank title or description leaves the store untouched. On success
    /// the drawing is taken from `surface` when anything was drawn on it,
    /// otherwise from the draft's drawing field.
    pub fn submit_draft(&mut self, surface: &DrawingSurface) -> Result<SubmitOutcome> {
        if !self.draft.is_submittable() {
            tracing::debug!("draft rejected: blank title or description");
            return Ok(SubmitOutcome::Rejected(Rejection::BlankField));
        }

        let drawing = match surface.snapshot()? {
            Some(snapshot) => Some(snapshot),
            None => ImagePayload::from_draft_value(&self.draft.drawing),
        };

        let now = self.clock.now();
        let previous = self.entries.first().map(Entry::id);
        let draft = std::mem::take(&mut self.draft);
        let entry = Entry::new(
            EntryId::next_after(previous, now.timestamp_millis()),
            draft.title,
            draft.description,
            now.date_naive(),
            ImagePayload::from_draft_value(&draft.image),
            drawing,
        );

        tracing::info!(
            id = %entry.id(),
            date = %entry.iso_date(),
            image = entry.image().is_some(),
            drawing = entry.drawing().is_some(),
            "entry created"
        );

        self.entries.insert(0, entry.clone());
        Ok(SubmitOutcome::Created(entry))
    }

    /// Entries, most recently created first
    pub fn list_entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn update_draft_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    pub fn reset_draft(&mut self) {
        self.draft = Draft::default();
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
