//! Background loading of photo attachments
//!
//! Reading runs on a worker thread. The worker never touches session state:
//! it sends one [`AttachmentEvent`] back over a channel, and the owner applies
//! it to the draft when it polls. Only the most recent request is current;
//! completions for superseded requests are dropped.

use crate::domain::ImagePayload;
use crate::error::{GratitudeError, Result};
use crate::infrastructure::read_image_file;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

/// Reads one attachment file into a payload
pub type AttachmentReader = Arc<dyn Fn(&Path) -> Result<ImagePayload> + Send + Sync>;

/// Completion message for one attach request
#[derive(Debug)]
pub struct AttachmentEvent {
    pub ticket: u64,
    pub path: PathBuf,
    pub result: Result<ImagePayload>,
}

pub struct AttachmentLoader {
    reader: AttachmentReader,
    sender: Sender<AttachmentEvent>,
    receiver: Receiver<AttachmentEvent>,
    next_ticket: u64,
    pending: Option<u64>,
}

impl Default for AttachmentLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl AttachmentLoader {
    /// Loader that reads files from disk
    pub fn new() -> Self {
        Self::with_reader(Arc::new(read_image_file))
    }

    pub fn with_reader(reader: AttachmentReader) -> Self {
        let (sender, receiver) = mpsc::channel();
        AttachmentLoader {
            reader,
            sender,
            receiver,
            next_ticket: 0,
            pending: None,
        }
    }

    /// Start reading `path`, superseding any request still in flight
    pub fn start(&mut self, path: PathBuf) -> u64 {
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.pending = Some(ticket);

        tracing::debug!(ticket, path = %path.display(), "attachment read started");

        let reader = Arc::clone(&self.reader);
        let sender = self.sender.clone();
        thread::spawn(move || {
            // A panicking reader still has to clear the pending request
            let result = panic::catch_unwind(AssertUnwindSafe(|| reader(&path)))
                .unwrap_or_else(|cause| Err(GratitudeError::Attachment(panic_message(cause))));
            // The loader may be gone; nothing left to update then.
            let _ = sender.send(AttachmentEvent {
                ticket,
                path,
                result,
            });
        });

        ticket
    }

    /// Forget the request in flight. Its completion will be dropped.
    pub fn cancel(&mut self) {
        if let Some(ticket) = self.pending.take() {
            tracing::debug!(ticket, "attachment read cancelled");
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drain completed reads without blocking.
    ///
    /// Returns the completion of the current request, if it has arrived.
    pub fn poll(&mut self) -> Option<Result<ImagePayload>> {
        let mut current = None;
        while let Ok(event) = self.receiver.try_recv() {
            if let Some(result) = self.accept(event) {
                current = Some(result);
            }
        }
        current
    }

    /// Block until the current request completes.
    ///
    /// Returns `None` immediately when nothing is pending.
    pub fn wait(&mut self) -> Option<Result<ImagePayload>> {
        while self.pending.is_some() {
            let event = self.receiver.recv().ok()?;
            if let Some(result) = self.accept(event) {
                return Some(result);
            }
        }
        None
    }

    fn accept(&mut self, event: AttachmentEvent) -> Option<Result<ImagePayload>> {
        if self.pending != Some(event.ticket) {
            tracing::debug!(ticket = event.ticket, "stale attachment read dropped");
            return None;
        }
        self.pending = None;

        match &event.result {
            Ok(payload) => tracing::info!(
                path = %event.path.display(),
                size = payload.byte_len(),
                "attachment loaded"
            ),
            Err(e) => tracing::warn!(path = %event.path.display(), error = %e, "attachment read failed"),
        }
        Some(event.result)
    }
}

fn panic_message(cause: Box<dyn Any + Send>) -> String {
    if let Some(msg) = cause.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = cause.downcast_ref::<String>() {
        msg.clone()
    } else {
        "reader panicked".to_string()
    }
}
