//! Markdown report writer.
//!
//! The report lives next to the source document as `<stem>_notes.md`. Each
//! record is written as `<index>. <title><notes>`; title and body are joined
//! with no separator.

use crate::error::ReportError;
use crate::types::NoteRecord;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::info;

const REPORT_SUFFIX: &str = "_notes.md";
const SEPARATOR_LINE: &str = "---";

/// Report path for `source`: the source path without its extension, plus `_notes.md`.
pub fn report_path(source: &Path) -> PathBuf {
    let mut name: OsString = source
        .file_stem()
        .map(|stem| stem.to_os_string())
        .unwrap_or_default();
    name.push(REPORT_SUFFIX);
    source.with_file_name(name)
}

/// Render the full report text.
pub fn render_report(source: &Path, records: &[NoteRecord]) -> String {
    let source_name = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| source.display().to_string());

    let mut out = String::new();
    out.push_str("# XMind Notes Extraction\n\n");
    out.push_str(&format!("**Source file**: {}\n\n", source_name));
    out.push_str(&format!("**Notes extracted**: {}\n\n", records.len()));
    out.push_str(SEPARATOR_LINE);
    out.push_str("\n\n");

    for (index, record) in records.iter().enumerate() {
        out.push_str(&format!("{}. {}{}\n\n", index + 1, record.title, record.notes));
        out.push_str(SEPARATOR_LINE);
        out.push_str("\n\n");
    }
    out
}

/// Write the report for `records` next to `source`.
///
/// Returns `Ok(None)` without touching the filesystem when there is nothing to
/// write.
pub fn write_report(source: &Path, records: &[NoteRecord]) -> Result<Option<PathBuf>, ReportError> {
    if records.is_empty() {
        return Ok(None);
    }

    let output = report_path(source);
    std::fs::write(&output, render_report(source, records)).map_err(|err| ReportError::Write {
        path: output.clone(),
        source: err,
    })?;

    info!(
        report = %output.display(),
        records = records.len(),
        "Wrote notes report"
    );
    Ok(Some(output))
}
