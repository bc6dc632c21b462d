//! Reading image attachments from disk

use crate::domain::ImagePayload;
use crate::error::Result;
use image::ImageFormat;
use std::fs;
use std::path::Path;

const FALLBACK_MIME: &str = "application/octet-stream";

/// Read a file and encode it as a data URI.
///
/// The MIME type is guessed from the file's magic bytes, then from its
/// extension. The content itself is not validated.
pub fn read_image_file(path: &Path) -> Result<ImagePayload> {
    let bytes = fs::read(path)?;
    Ok(ImagePayload::from_bytes(mime_for(path, &bytes), &bytes))
}

fn mime_for(path: &Path, bytes: &[u8]) -> &'static str {
    image::guess_format(bytes)
        .or_else(|_| ImageFormat::from_path(path))
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MIME)
}
