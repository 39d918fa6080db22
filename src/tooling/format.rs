//! Terminal rendering for `preview`.

use crate::types::NoteRecord;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::path::Path;

/// Longest note excerpt shown in the preview table, in characters.
pub const NOTE_PREVIEW_CHARS: usize = 60;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Collapse whitespace runs to single spaces and cut to `max_chars`, adding `...` when cut.
pub fn truncate_note(text: &str, max_chars: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut cut: String = flat.chars().take(max_chars).collect();
    cut.push_str("...");
    cut
}

/// Format extracted records as a table.
pub fn format_preview_text(source: &Path, records: &[NoteRecord]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading(&format!("Notes in {}", source.display()))
    ));
    if records.is_empty() {
        out.push_str("No notes found\n");
        return out;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["#", "Title path", "Note"]);
    for (index, record) in records.iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            record.title.clone(),
            truncate_note(&record.notes, NOTE_PREVIEW_CHARS),
        ]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!("Total: {}\n", records.len()));
    out
}
