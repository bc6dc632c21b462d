//! Embeddable image payloads (data URIs)

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fmt;

const BASE64_MARKER: &str = ";base64";

/// An image encoded as a `data:` URI, e.g. `data:image/png;base64,iVBOR...`
///
/// The payload is opaque to the journal: it is never decoded or validated,
/// only carried from the draft into an entry and described when rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    uri: String,
}

impl ImagePayload {
    /// Encode raw image bytes as a base64 data URI
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        ImagePayload {
            uri: format!("data:{}{},{}", mime, BASE64_MARKER, STANDARD.encode(bytes)),
        }
    }

    /// Wrap draft text as a payload. Empty text means "no image".
    pub fn from_draft_value(value: &str) -> Option<Self> {
        if value.is_empty() {
            None
        } else {
            Some(ImagePayload {
                uri: value.to_string(),
            })
        }
    }

    /// The full data URI
    pub fn as_data_uri(&self) -> &str {
        &self.uri
    }

    /// MIME type declared in the URI header, if the URI has one
    pub fn mime(&self) -> Option<&str> {
        let header = self.header()?;
        let mime = header.split(';').next().unwrap_or_default();
        if mime.is_empty() {
            None
        } else {
            Some(mime)
        }
    }

    /// Size of the embedded data in bytes
    pub fn byte_len(&self) -> usize {
        let Some((header, data)) = self.split() else {
            return self.uri.len();
        };

        if header.ends_with(BASE64_MARKER) {
            let padding = data.bytes().rev().take_while(|b| *b == b'=').count();
            (data.len() / 4 * 3).saturating_sub(padding)
        } else {
            data.len()
        }
    }

    fn split(&self) -> Option<(&str, &str)> {
        self.uri.strip_prefix("data:")?.split_once(',')
    }

    fn header(&self) -> Option<&str> {
        self.split().map(|(header, _)| header)
    }
}

impl fmt::Display for ImagePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kb = self.byte_len() as f64 / 1024.0;
        match self.mime() {
            Some(mime) => write!(f, "{}, {:.1} KB", mime, kb),
            None => write!(f, "{:.1} KB", kb),
        }
    }
}
