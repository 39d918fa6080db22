use std::io::Write;
use std::path::{Path, PathBuf};

use zip::write::FileOptions;
use zip::ZipWriter;

/// A two-sheet document: notes in plain text, rich text, and nested children.
pub const SAMPLE_CONTENT: &str = r#"[
  {
    "id": "sheet-1",
    "class": "sheet",
    "title": "Sheet 1",
    "rootTopic": {
      "id": "root",
      "title": "Roadmap",
      "notes": { "plain": { "content": "Quarterly plan" } },
      "children": { "attached": [
        {
          "title": "Q1",
          "children": { "attached": [
            { "title": "Hiring", "notes": { "plain": { "content": "two engineers" } } }
          ]}
        },
        {
          "title": "Q2",
          "notes": {
            "plain": { "content": "launch" },
            "realHTML": { "content": "<div><b>launch</b></div>" }
          }
        }
      ]}
    }
  },
  {
    "id": "sheet-2",
    "title": "Sheet 2",
    "rootTopic": { "title": "Ideas", "notes": { "plain": { "content": "backlog" } } }
  }
]"#;

/// Write an XMind-style archive into `dir` and return its path.
pub fn write_document(dir: &Path, name: &str, entries: &[(&str, &str)]) -> PathBuf {
    let path = dir.join(name);
    let file = std::fs::File::create(&path).unwrap();
    let mut writer = ZipWriter::new(file);
    for (entry, contents) in entries {
        writer.start_file(*entry, FileOptions::default()).unwrap();
        writer.write_all(contents.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
    path
}

pub fn write_sample(dir: &Path) -> PathBuf {
    write_document(
        dir,
        "roadmap.xmind",
        &[
            ("manifest.json", r#"{"file-entries":{}}"#),
            ("content.json", SAMPLE_CONTENT),
        ],
    )
}
