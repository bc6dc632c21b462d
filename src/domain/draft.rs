//! The in-progress entry being edited

use std::str::FromStr;

/// Editable draft fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Description,
    /// Photo attachment, as data URI text
    Image,
    /// Drawing snapshot, as data URI text
    Drawing,
}

impl FromStr for DraftField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(DraftField::Title),
            "description" | "desc" => Ok(DraftField::Description),
            "image" => Ok(DraftField::Image),
            "drawing" => Ok(DraftField::Drawing),
            _ => Err(format!(
                "Unknown draft field: '{}'. Valid fields are: title, description, image, drawing",
                s
            )),
        }
    }
}

/// Unvalidated draft. Every field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub image: String,
    pub drawing: String,
}

impl Draft {
    /// Overwrite a single field
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Title => self.title = value,
            DraftField::Description => self.description = value,
            DraftField::Image => self.image = value,
            DraftField::Drawing => self.drawing = value,
        }
    }

    /// Title and description both contain something besides whitespace
    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        *self == Draft::default()
    }
}
