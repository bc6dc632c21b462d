//! Active display language

use crate::domain::{translations, Language, Translations};

#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageStore {
    current: Language,
}

impl LanguageStore {
    pub fn new(initial: Language) -> Self {
        LanguageStore { current: initial }
    }

    /// Switch to the other language
    pub fn toggle(&mut self) {
        let previous = self.current;
        self.current = previous.toggled();
        tracing::info!(from = %previous, to = %self.current, "language toggled");
    }

    pub fn current(&self) -> Language {
        self.current
    }

    /// Text table for the current language. Looked up on every call.
    pub fn texts(&self) -> &'static Translations {
        translations(self.current)
    }
}
