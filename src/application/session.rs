//! Session: the single owner of all journal state

use super::attachment::AttachmentLoader;
use super::entry_store::{EntryStore, Rejection, SubmitOutcome};
use super::language_store::LanguageStore;
use crate::domain::{
    Draft, DraftField, DrawingSurface, Entry, ImagePayload, Language, Point, Translations,
};
use crate::error::Result;
use crate::infrastructure::Clock;
use std::path::Path;

/// Holds the language selector, entries, draft, drawing surface and the
/// add-form state for one run of the application.
pub struct Session {
    language: LanguageStore,
    entries: EntryStore,
    surface: DrawingSurface,
    attachments: AttachmentLoader,
    form_open: bool,
}

impl Session {
    pub fn new(language: Language) -> Self {
        Self::with_parts(language, EntryStore::new(), AttachmentLoader::new())
    }

    pub fn with_clock(language: Language, clock: Box<dyn Clock>) -> Self {
        Self::with_parts(
            language,
            EntryStore::with_clock(clock),
            AttachmentLoader::new(),
        )
    }

    pub fn with_parts(
        language: Language,
        entries: EntryStore,
        attachments: AttachmentLoader,
    ) -> Self {
        Session {
            language: LanguageStore::new(language),
            entries,
            surface: DrawingSurface::new(),
            attachments,
            form_open: false,
        }
    }

    pub fn open_form(&mut self) {
        self.form_open = true;
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    /// Discard the draft, the drawing and any photo still loading
    pub fn cancel(&mut self) {
        self.entries.reset_draft();
        self.surface.clear();
        self.attachments.cancel();
        self.form_open = false;
    }

    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.entries.update_draft_field(field, value);
    }

    /// Begin loading a photo into the draft. No selection is ignored.
    pub fn attach_image(&mut self, path: Option<&Path>) {
        if let Some(path) = path {
            self.attachments.start(path.to_path_buf());
        }
    }

    /// Apply any photo reads that have completed, without blocking
    pub fn poll_attachments(&mut self) {
        if let Some(result) = self.attachments.poll() {
            self.apply_attachment(result);
        }
    }

    pub fn has_pending_attachment(&self) -> bool {
        self.attachments.is_pending()
    }

    /// Block until the photo being loaded, if any, lands in the draft
    pub fn wait_for_attachment(&mut self) {
        if let Some(result) = self.attachments.wait() {
            self.apply_attachment(result);
        }
    }

    pub fn pointer_down(&mut self, point: Point) {
        self.surface.pointer_down(point);
    }

    pub fn pointer_move(&mut self, point: Point) {
        self.surface.pointer_move(point);
    }

    pub fn pointer_up(&mut self) {
        self.surface.pointer_up();
    }

    /// One complete gesture through `points`
    pub fn draw_stroke(&mut self, points: &[Point]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.surface.pointer_down(*first);
        for point in rest {
            self.surface.pointer_move(*point);
        }
        self.surface.pointer_up();
    }

    pub fn has_drawing(&self) -> bool {
        !self.surface.is_blank()
    }

    /// Save the draft as a new entry.
    ///
    /// Refuses while a photo is still loading, so an attachment is never
    /// silently lost. On success the surface is cleared and the form closes.
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        self.poll_attachments();
        if self.attachments.is_pending() {
            tracing::debug!("submit refused: attachment still loading");
            return Ok(SubmitOutcome::Rejected(Rejection::AttachmentPending));
        }

        let outcome = self.entries.submit_draft(&self.surface)?;
        if let SubmitOutcome::Created(_) = outcome {
            self.surface.clear();
            self.form_open = false;
        }
        Ok(outcome)
    }

    pub fn toggle_language(&mut self) {
        self.language.toggle();
    }

    pub fn language(&self) -> Language {
        self.language.current()
    }

    pub fn texts(&self) -> &'static Translations {
        self.language.texts()
    }

    pub fn entries(&self) -> &[Entry] {
        self.entries.list_entries()
    }

    pub fn draft(&self) -> &Draft {
        self.entries.draft()
    }

    fn apply_attachment(&mut self, result: Result<ImagePayload>) {
        // Failures were logged by the loader; the draft keeps its old image.
        if let Ok(payload) = result {
            self.entries
                .update_draft_field(DraftField::Image, payload.as_data_uri());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::attachment::AttachmentReader;
    use crate::infrastructure::ManualClock;
    use chrono::{Local, TimeZone};
    use std::sync::mpsc::{self, Sender};
    use std::sync::{Arc, Mutex};

    fn clock() -> ManualClock {
        ManualClock::new(Local.with_ymd_and_hms(2025, 1, 17, 8, 30, 0).unwrap())
    }

    fn session_with_reader(reader: AttachmentReader) -> Session {
        Session::with_parts(
            Language::English,
            EntryStore::with_clock(Box::new(clock())),
            AttachmentLoader::with_reader(reader),
        )
    }

    fn instant_reader() -> AttachmentReader {
        Arc::new(|_: &Path| Ok(ImagePayload::from_bytes("image/jpeg", b"photo")))
    }

    fn gated_reader() -> (AttachmentReader, Sender<()>) {
        let (release, gate) = mpsc::channel::<()>();
        let gate = Mutex::new(gate);
        let reader: AttachmentReader = Arc::new(move |_: &Path| {
            let _ = gate.lock().unwrap().recv();
            Ok(ImagePayload::from_bytes("image/jpeg", b"photo"))
        });
        (reader, release)
    }

    fn fill(session: &mut Session) {
        session.update_field(DraftField::Title, "Morning Sunshine");
        session.update_field(DraftField::Description, "Sunlight through trees.");
    }

    #[test]
    fn test_submit_closes_form_and_prepends() {
        let mut session = Session::with_clock(Language::English, Box::new(clock()));
        session.open_form();
        fill(&mut session);

        let outcome = session.submit().unwrap();
        assert!(outcome.entry().is_some());
        assert!(!session.is_form_open());
        assert_eq!(session.entries().len(), 1);
        assert!(session.draft().is_empty());
    }

    #[test]
    fn test_invalid_submit_keeps_form_open() {
        let mut session = Session::with_clock(Language::English, Box::new(clock()));
        session.open_form();
        session.update_field(DraftField::Description, "x");

        let outcome = session.submit().unwrap();
        assert_eq!(outcome, SubmitOutcome::Rejected(Rejection::BlankField));
        assert!(session.is_form_open());
        assert!(session.entries().is_empty());
        assert_eq!(session.draft().description, "x");
    }

    #[test]
    fn test_cancel_discards_draft_and_drawing() {
        let mut session = Session::with_clock(Language::English, Box::new(clock()));
        session.open_form();
        fill(&mut session);
        session.draw_stroke(&[Point::new(1, 1), Point::new(30, 30)]);
        assert!(session.has_drawing());

        session.cancel();
        assert!(!session.is_form_open());
        assert!(session.draft().is_empty());
        assert!(!session.has_drawing());
        assert!(session.entries().is_empty());
    }

    #[test]
    fn test_drawing_captured_on_submit() {
        let mut session = Session::with_clock(Language::English, Box::new(clock()));
        fill(&mut session);
        session.pointer_down(Point::new(10, 10));
        session.pointer_move(Point::new(100, 80));
        session.pointer_up();

        let outcome = session.submit().unwrap();
        let entry = outcome.entry().unwrap();
        assert_eq!(entry.drawing().unwrap().mime(), Some("image/png"));
        assert!(!session.has_drawing());
    }

    #[test]
    fn test_no_selection_is_ignored() {
        let mut session = session_with_reader(instant_reader());
        session.attach_image(None);
        assert!(!session.has_pending_attachment());
        assert!(session.draft().image.is_empty());
    }

    #[test]
    fn test_submit_rejected_while_attachment_pending() {
        let (reader, release) = gated_reader();
        let mut session = session_with_reader(reader);
        fill(&mut session);
        session.attach_image(Some(Path::new("photo.jpg")));

        let outcome = session.submit().unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(Rejection::AttachmentPending)
        );
        assert!(session.entries().is_empty());
        assert_eq!(session.draft().title, "Morning Sunshine");

        release.send(()).unwrap();
        session.wait_for_attachment();
        let outcome = session.submit().unwrap();
        let entry = outcome.entry().unwrap();
        assert_eq!(entry.image().unwrap().mime(), Some("image/jpeg"));
    }

    #[test]
    fn test_cancel_drops_pending_attachment() {
        let (reader, release) = gated_reader();
        let mut session = session_with_reader(reader);
        session.attach_image(Some(Path::new("photo.jpg")));
        session.cancel();
        assert!(!session.has_pending_attachment());

        release.send(()).unwrap();
        session.wait_for_attachment();
        assert!(session.draft().image.is_empty());
    }

    #[test]
    fn test_failed_attachment_leaves_draft() {
        let reader: AttachmentReader = Arc::new(|_: &Path| {
            Err(crate::error::GratitudeError::Io(std::io::Error::from(
                std::io::ErrorKind::NotFound,
            )))
        });
        let mut session = session_with_reader(reader);
        session.update_field(DraftField::Image, "data:image/png;base64,AAAA");
        session.attach_image(Some(Path::new("missing.png")));
        session.wait_for_attachment();

        assert_eq!(session.draft().image, "data:image/png;base64,AAAA");
        assert!(!session.has_pending_attachment());
    }

    #[test]
    fn test_toggle_language_changes_texts() {
        let mut session = Session::new(Language::English);
        let before = session.texts().app_title;
        session.toggle_language();
        assert_eq!(session.language(), Language::Spanish);
        assert_ne!(session.texts().app_title, before);
        session.toggle_language();
        assert_eq!(session.texts().app_title, before);
    }
}
