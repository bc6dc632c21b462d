//! Journal entries

use super::payload::ImagePayload;
use chrono::NaiveDate;
use std::fmt;

/// Entry identifier: creation time in milliseconds since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(i64);

impl EntryId {
    pub fn from_millis(millis: i64) -> Self {
        EntryId(millis)
    }

    pub fn as_millis(&self) -> i64 {
        self.0
    }

    /// Next identifier for a creation at `millis`, never going back past `previous`.
    pub fn next_after(previous: Option<EntryId>, millis: i64) -> Self {
        match previous {
            Some(EntryId(last)) if millis <= last => EntryId(last + 1),
            _ => EntryId(millis),
        }
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A saved gratitude entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    id: EntryId,
    title: String,
    description: String,
    date: NaiveDate,
    image: Option<ImagePayload>,
    drawing: Option<ImagePayload>,
}

impl Entry {
    pub(crate) fn new(
        id: EntryId,
        title: String,
        description: String,
        date: NaiveDate,
        image: Option<ImagePayload>,
        drawing: Option<ImagePayload>,
    ) -> Self {
        Entry {
            id,
            title,
            description,
            date,
            image,
            drawing,
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Calendar date in ISO format (YYYY-MM-DD)
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn image(&self) -> Option<&ImagePayload> {
        self.image.as_ref()
    }

    pub fn drawing(&self) -> Option<&ImagePayload> {
        self.drawing.as_ref()
    }
}
