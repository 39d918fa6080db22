//! Note Collector
//!
//! Walks a decoded XMind topic tree depth-first, pre-order, and collects one
//! [`NoteRecord`] for every titled topic whose resolved note body is non-empty.
//!
//! Shape handling is best-effort: a `notes` value that is not a mapping, a
//! `content` that is not a string, or an `attached` that is not a sequence all
//! count as "nothing here" rather than an error.

use crate::types::{NoteRecord, PATH_SEPARATOR};
use serde_json::Value;
use std::borrow::Cow;

/// Collect every note in `tree` in traversal order.
pub fn collect_notes(tree: &Value) -> Vec<NoteRecord> {
    let mut records = Vec::new();
    collect(tree, "", &mut records);
    records
}

/// Append the notes found under `value` to `records`.
///
/// `value` is either a single topic mapping or a sequence of them. A sequence
/// adds nothing to the path; every element inherits `parent_path` unchanged.
///
/// For a mapping, `rootTopic` is visited first with the same `parent_path`,
/// then the mapping's own `title`, `notes` and `children.attached` are
/// handled. A mapping without `title` does not descend into its children.
pub fn collect(value: &Value, parent_path: &str, records: &mut Vec<NoteRecord>) {
    match value {
        Value::Array(items) => {
            for item in items {
                collect(item, parent_path, records);
            }
        }
        Value::Object(topic) => {
            if let Some(root) = topic.get("rootTopic") {
                collect(root, parent_path, records);
            }

            let Some(title) = topic.get("title") else {
                return;
            };
            let full_title = join_path(parent_path, &title_text(title));

            if let Some(body) = topic.get("notes").and_then(resolve_notes) {
                if !body.is_empty() {
                    records.push(NoteRecord::new(full_title.clone(), body));
                }
            }

            if let Some(children) = topic
                .get("children")
                .and_then(|children| children.get("attached"))
                .and_then(Value::as_array)
            {
                for child in children {
                    collect(child, &full_title, records);
                }
            }
        }
        _ => {}
    }
}

/// Resolve a topic's note body.
///
/// `plain.content` is taken first; a present `realHTML.content` always
/// replaces it, markup included. An HTML body that is empty or not a string
/// resolves to an empty body, never back to the plain one.
pub fn resolve_notes(notes: &Value) -> Option<&str> {
    let mut body = None;
    if let Some(plain) = content_of(notes, "plain").and_then(Value::as_str) {
        body = Some(plain);
    }
    if let Some(html) = content_of(notes, "realHTML") {
        body = Some(html.as_str().unwrap_or(""));
    }
    body
}

fn content_of<'a>(notes: &'a Value, format: &str) -> Option<&'a Value> {
    notes.as_object()?.get(format)?.as_object()?.get("content")
}

/// Titles are expected to be strings; anything else is rendered as JSON text
/// (`7`, `true`, `null`) so the topic keeps its place in the path.
fn title_text(title: &Value) -> Cow<'_, str> {
    match title {
        Value::String(text) => Cow::Borrowed(text),
        other => Cow::Owned(other.to_string()),
    }
}

fn join_path(parent_path: &str, title: &str) -> String {
    if parent_path.is_empty() {
        title.to_string()
    } else {
        format!("{parent_path}{PATH_SEPARATOR}{title}")
    }
}
