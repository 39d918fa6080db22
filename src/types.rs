//! Core types shared by the collector, the report writer, and the CLI.

/// Name of the manifest entry inside an XMind archive.
pub const MANIFEST_ENTRY: &str = "content.json";

/// Separator placed between ancestor titles in a title path.
pub const PATH_SEPARATOR: &str = " > ";

/// One extracted note: the root-to-node title path and the note body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRecord {
    pub title: String,
    pub notes: String,
}

impl NoteRecord {
    pub fn new(title: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            notes: notes.into(),
        }
    }
}
