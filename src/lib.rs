//! xmind-notes: Topic Note Extraction for XMind Documents
//!
//! Reads the `content.json` manifest out of an XMind archive, walks the topic
//! tree depth-first, and writes every topic note with its breadcrumb title path
//! to a Markdown report next to the source document.

pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod manifest;
pub mod report;
pub mod tooling;
pub mod topic;
pub mod types;

pub use error::{ApiError, ExtractError, ReportError};
pub use extract::NoteExtractor;
pub use types::NoteRecord;
