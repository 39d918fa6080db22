//! Extraction pipeline: manifest read, topic walk, and the top-level failure
//! policy.

use crate::error::ExtractError;
use crate::manifest::read_manifest;
use crate::topic::collect_notes;
use crate::types::NoteRecord;
use std::path::Path;
use tracing::{error, info, warn};

/// Extracts notes from XMind documents, one document per call.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoteExtractor;

impl NoteExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract all notes from the document at `path`.
    ///
    /// Any archive or decode failure aborts the extraction; there are no
    /// partial results.
    pub fn extract(&self, path: &Path) -> Result<Vec<NoteRecord>, ExtractError> {
        info!(path = %path.display(), "Extracting notes");
        let tree = read_manifest(path)?;
        let records = collect_notes(&tree);
        if records.is_empty() {
            warn!(path = %path.display(), "No notes found in document");
        } else {
            info!(
                path = %path.display(),
                records = records.len(),
                "Extracted notes"
            );
        }
        Ok(records)
    }

    /// Like [`extract`](Self::extract), but logs any failure and returns an
    /// empty list instead.
    pub fn extract_or_empty(&self, path: &Path) -> Vec<NoteRecord> {
        match self.extract(path) {
            Ok(records) => records,
            Err(e) => {
                error!(path = %path.display(), error = %e, "Note extraction failed");
                Vec::new()
            }
        }
    }
}
