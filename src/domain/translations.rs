//! Static translation tables
//!
//! Each language has one complete [`Translations`] table. Keys are struct
//! fields, so both tables always share the same key set.

use super::language::Language;

/// User-facing text for one language
#[derive(Debug, PartialEq, Eq)]
pub struct Translations {
    pub app_title: &'static str,
    pub subtitle: &'static str,
    pub add_entry: &'static str,
    pub title_label: &'static str,
    pub title_placeholder: &'static str,
    pub description_label: &'static str,
    pub description_placeholder: &'static str,
    pub image_label: &'static str,
    pub drawing_label: &'static str,
    pub cancel: &'static str,
    pub save: &'static str,
    pub empty_state: &'static str,
    pub empty_state_cta: &'static str,
    pub entries_heading: &'static str,
    pub image_attached: &'static str,
    pub drawing_attached: &'static str,
    pub attachment_pending: &'static str,
    pub language_name: &'static str,
}

const ENGLISH: Translations = Translations {
    app_title: "Gratitude Journal",
    subtitle: "Capture the moments you are thankful for",
    add_entry: "Add entry",
    title_label: "Title",
    title_placeholder: "What are you grateful for?",
    description_label: "Description",
    description_placeholder: "Describe the moment...",
    image_label: "Photo",
    drawing_label: "Drawing",
    cancel: "Cancel",
    save: "Save",
    empty_state: "No entries yet.",
    empty_state_cta: "Start by adding your first gratitude entry.",
    entries_heading: "Entries",
    image_attached: "photo attached",
    drawing_attached: "drawing attached",
    attachment_pending: "Photo is still loading; wait before saving.",
    language_name: "English",
};

const SPANISH: Translations = Translations {
    app_title: "Diario de Gratitud",
    subtitle: "Guarda los momentos por los que estás agradecido",
    add_entry: "Añadir entrada",
    title_label: "Título",
    title_placeholder: "¿Por qué estás agradecido?",
    description_label: "Descripción",
    description_placeholder: "Describe el momento...",
    image_label: "Foto",
    drawing_label: "Dibujo",
    cancel: "Cancelar",
    save: "Guardar",
    empty_state: "Todavía no hay entradas.",
    empty_state_cta: "Empieza añadiendo tu primera entrada de gratitud.",
    entries_heading: "Entradas",
    image_attached: "foto adjunta",
    drawing_attached: "dibujo adjunto",
    attachment_pending: "La foto todavía se está cargando; espera antes de guardar.",
    language_name: "Español",
};

/// Translation table for the given language
pub fn translations(language: Language) -> &'static Translations {
    match language {
        Language::English => &ENGLISH,
        Language::Spanish => &SPANISH,
    }
}
