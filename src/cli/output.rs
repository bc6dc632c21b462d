//! Text rendering of the session view
//!
//! Every render reads the current translation table; nothing is cached
//! between calls.

use crate::application::Session;
use crate::domain::{Entry, ImagePayload, Translations};

/// Render the whole view: header, add form (when open), then the entries or
/// the empty state.
pub fn render_view(session: &Session) -> String {
    let texts = session.texts();
    let mut output = String::new();

    output.push_str(&format!("== {} ==\n", texts.app_title));
    output.push_str(&format!("{}\n", texts.subtitle));
    output.push_str(&format!("[{}]\n\n", texts.language_name));

    if session.is_form_open() {
        output.push_str(&render_form(session, texts));
    } else {
        output.push_str(&format!("[+ {}]\n", texts.add_entry));
    }
    output.push('\n');

    output.push_str(&format_entry_list(session.entries(), texts));
    output
}

fn render_form(session: &Session, texts: &Translations) -> String {
    let draft = session.draft();
    let mut output = format!("-- {} --\n", texts.add_entry);

    output.push_str(&field_line(texts.title_label, &draft.title, texts.title_placeholder));
    output.push_str(&field_line(
        texts.description_label,
        &draft.description,
        texts.description_placeholder,
    ));

    let image = if session.has_pending_attachment() {
        texts.attachment_pending.to_string()
    } else {
        match ImagePayload::from_draft_value(&draft.image) {
            Some(payload) => format!("{} ({})", texts.image_attached, payload),
            None => "-".to_string(),
        }
    };
    output.push_str(&format!("{}: {}\n", texts.image_label, image));

    let drawing = if session.has_drawing() || !draft.drawing.is_empty() {
        texts.drawing_attached
    } else {
        "-"
    };
    output.push_str(&format!("{}: {}\n", texts.drawing_label, drawing));

    output.push_str(&format!("[{}] [{}]\n", texts.cancel, texts.save));
    output
}

fn field_line(label: &str, value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        format!("{}: ({})\n", label, placeholder)
    } else {
        format!("{}: {}\n", label, value)
    }
}

/// Format entries newest first, or the empty state when there are none
pub fn format_entry_list(entries: &[Entry], texts: &Translations) -> String {
    if entries.is_empty() {
        return format!("{}\n{}\n", texts.empty_state, texts.empty_state_cta);
    }

    let mut output = format!("{}\n", texts.entries_heading);
    for entry in entries {
        output.push_str(&format_entry(entry, texts));
    }
    output
}

/// Format one entry. Attachment lines appear only when present.
pub fn format_entry(entry: &Entry, texts: &Translations) -> String {
    let mut output = format!("{}  {}\n", entry.iso_date(), entry.title());
    for line in entry.description().lines() {
        output.push_str(&format!("    {}\n", line));
    }
    if let Some(image) = entry.image() {
        output.push_str(&format!("    {}: {}\n", texts.image_label, image));
    }
    if let Some(drawing) = entry.drawing() {
        output.push_str(&format!("    {}: {}\n", texts.drawing_label, drawing));
    }
    output
}

/// Command summary printed by `help`
pub fn help_text() -> &'static str {
    "Commands:\n\
    \x20 new                     open the add-entry form\n\
    \x20 title <text>            set the title\n\
    \x20 description <text>      set the description (alias: desc)\n\
    \x20 image [<path>]          attach a photo\n\
    \x20 wait                    wait for the photo to finish loading\n\
    \x20 draw <x,y> <x,y> ...    draw one stroke on the 400x200 surface\n\
    \x20 save                    save the entry\n\
    \x20 cancel                  discard the draft\n\
    \x20 list                    show the journal\n\
    \x20 lang                    switch language\n\
    \x20 quit                    leave\n"
}
