use std::fs;

use tempfile::TempDir;
use xmind_notes::config::NotesConfig;
use xmind_notes::error::{ApiError, ExtractError};
use xmind_notes::tooling::cli::{CliContext, Commands};

use crate::cli::support::{write_document, write_sample};

fn context() -> CliContext {
    CliContext::with_config(NotesConfig::default())
}

#[test]
fn extract_writes_report_next_to_document() {
    let temp = TempDir::new().unwrap();
    let source = write_sample(temp.path());

    let output = context()
        .execute(&Commands::Extract {
            path: Some(source.clone()),
        })
        .unwrap();

    let report_path = temp.path().join("roadmap_notes.md");
    assert!(output.contains("Extracted 4 notes"));
    assert!(output.contains(&report_path.display().to_string()));

    let report = fs::read_to_string(&report_path).unwrap();
    let expected = "# XMind Notes Extraction\n\n\
                    **Source file**: roadmap.xmind\n\n\
                    **Notes extracted**: 4\n\n\
                    ---\n\n\
                    1. RoadmapQuarterly plan\n\n\
                    ---\n\n\
                    2. Roadmap > Q1 > Hiringtwo engineers\n\n\
                    ---\n\n\
                    3. Roadmap > Q2<div><b>launch</b></div>\n\n\
                    ---\n\n\
                    4. Ideasbacklog\n\n\
                    ---\n\n";
    assert_eq!(report, expected);
}

#[test]
fn extract_twice_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let source = write_sample(temp.path());
    let cli = context();
    let report_path = temp.path().join("roadmap_notes.md");

    cli.execute(&Commands::Extract {
        path: Some(source.clone()),
    })
    .unwrap();
    let first = fs::read(&report_path).unwrap();
    cli.execute(&Commands::Extract { path: Some(source) })
        .unwrap();
    let second = fs::read(&report_path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn document_without_notes_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let source = write_document(
        temp.path(),
        "empty.xmind",
        &[("content.json", r#"[{"rootTopic":{"title":"Bare"}}]"#)],
    );

    let output = context()
        .execute(&Commands::Extract { path: Some(source) })
        .unwrap();
    assert!(output.contains("nothing written"));
    assert!(!temp.path().join("empty_notes.md").exists());
}

#[test]
fn missing_file_fails_without_output() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("absent.xmind");

    let err = context()
        .execute(&Commands::Extract { path: Some(source) })
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::Extract(ExtractError::FileNotFound(_))
    ));
    assert!(!temp.path().join("absent_notes.md").exists());
}

#[test]
fn missing_manifest_fails_without_output() {
    let temp = TempDir::new().unwrap();
    let source = write_document(
        temp.path(),
        "legacy.xmind",
        &[("content.xml", "<xmap-content/>")],
    );

    let err = context()
        .execute(&Commands::Extract { path: Some(source) })
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::Extract(ExtractError::ManifestMissing { .. })
    ));
    assert!(!temp.path().join("legacy_notes.md").exists());
}

#[test]
fn malformed_manifest_fails_without_output() {
    let temp = TempDir::new().unwrap();
    let source = write_document(temp.path(), "broken.xmind", &[("content.json", "{\"title\":")]);

    let err = context()
        .execute(&Commands::Extract { path: Some(source) })
        .unwrap_err();
    assert!(matches!(err, ApiError::Extract(ExtractError::Decode { .. })));
    assert!(!temp.path().join("broken_notes.md").exists());
}

#[test]
fn preview_prints_without_writing() {
    let temp = TempDir::new().unwrap();
    let source = write_sample(temp.path());

    let output = context()
        .execute(&Commands::Preview { path: Some(source) })
        .unwrap();
    assert!(output.contains("Roadmap > Q1 > Hiring"));
    assert!(output.contains("<div><b>launch</b></div>"));
    assert!(output.contains("Total: 4"));
    assert!(!temp.path().join("roadmap_notes.md").exists());
}

#[test]
fn context_loads_explicit_config_file() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("config.toml");
    fs::write(&config_path, "[logging]\nlevel = \"warn\"\noutput = \"stderr\"\n").unwrap();

    let cli = CliContext::new(Some(config_path)).unwrap();
    assert_eq!(cli.config().logging.level, "warn");
    assert_eq!(cli.config().logging.output, "stderr");
}

#[test]
fn context_rejects_missing_config_file() {
    let temp = TempDir::new().unwrap();
    let result = CliContext::new(Some(temp.path().join("missing.toml")));
    assert!(matches!(result, Err(ApiError::ConfigError(_))));
}
