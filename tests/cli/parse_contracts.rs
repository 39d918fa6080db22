use clap::{CommandFactory, Parser};
use xmind_notes::tooling::cli::{Cli, Commands};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["xmind-notes", "extract", "map.xmind"],
        vec!["xmind-notes", "extract"],
        vec!["xmind-notes", "preview", "map.xmind"],
        vec!["xmind-notes", "--config", "cfg.toml", "extract", "map.xmind"],
        vec![
            "xmind-notes",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "--log-output",
            "stderr",
            "preview",
            "map.xmind",
        ],
        vec!["xmind-notes", "--verbose", "extract", "map.xmind"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_invalid_invocations() {
    assert!(Cli::try_parse_from(["xmind-notes"]).is_err());
    assert!(Cli::try_parse_from(["xmind-notes", "convert", "map.xmind"]).is_err());
    assert!(Cli::try_parse_from(["xmind-notes", "extract", "a.xmind", "b.xmind"]).is_err());
}

#[test]
fn extract_path_is_optional() {
    let cli = Cli::try_parse_from(["xmind-notes", "extract"]).unwrap();
    assert!(matches!(cli.command, Commands::Extract { path: None }));

    let cli = Cli::try_parse_from(["xmind-notes", "extract", "plan.xmind"]).unwrap();
    match cli.command {
        Commands::Extract { path } => {
            assert_eq!(path.unwrap().to_string_lossy(), "plan.xmind")
        }
        _ => panic!("expected extract command"),
    }
}

#[test]
fn help_lists_commands() {
    let help = Cli::command().render_help().to_string();
    assert!(help.contains("extract"));
    assert!(help.contains("preview"));
    assert!(help.contains("--config"));
}
