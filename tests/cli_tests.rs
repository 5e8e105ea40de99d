// SPDX-FileCopyrightText: 2025 RAprogramm
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use clap::Parser;
use sql_splitter::cli::{Cli, Commands, Format, HistoryAction};

#[test]
fn test_split_defaults_to_stdin() {
    let cli = Cli::try_parse_from(["sql-splitter", "split"]).unwrap();
    match cli.command {
        Commands::Split {
            inputs,
            output_format,
            verbose,
            no_color
        } => {
            assert_eq!(inputs, vec![PathBuf::from("-")]);
            assert!(matches!(output_format, Format::Text));
            assert!(!verbose);
            assert!(!no_color);
        }
        other => panic!("unexpected command: {:?}", other)
    }
}

#[test]
fn test_split_multiple_inputs_and_format() {
    let cli =
        Cli::try_parse_from(["sql-splitter", "split", "a.sql", "b.sql", "-f", "yaml", "-v"])
            .unwrap();
    match cli.command {
        Commands::Split {
            inputs,
            output_format,
            verbose,
            ..
        } => {
            assert_eq!(inputs, vec![PathBuf::from("a.sql"), PathBuf::from("b.sql")]);
            assert!(matches!(output_format, Format::Yaml));
            assert!(verbose);
        }
        other => panic!("unexpected command: {:?}", other)
    }
}

#[test]
fn test_record_with_cap() {
    let cli = Cli::try_parse_from(["sql-splitter", "record", "q.sql", "--max-entries", "5"])
        .unwrap();
    match cli.command {
        Commands::Record {
            input,
            max_entries
        } => {
            assert_eq!(input, PathBuf::from("q.sql"));
            assert_eq!(max_entries, Some(5));
        }
        other => panic!("unexpected command: {:?}", other)
    }
}

#[test]
fn test_global_history_file_after_subcommand() {
    let cli = Cli::try_parse_from([
        "sql-splitter",
        "history",
        "list",
        "--history-file",
        "h.json"
    ])
    .unwrap();
    assert_eq!(cli.history_file, Some(PathBuf::from("h.json")));
    assert!(matches!(
        cli.command,
        Commands::History {
            action: HistoryAction::List { .. }
        }
    ));
}

#[test]
fn test_history_clear() {
    let cli = Cli::try_parse_from(["sql-splitter", "history", "clear"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::History {
            action: HistoryAction::Clear
        }
    ));
    assert!(cli.history_file.is_none());
}

#[test]
fn test_unknown_format_rejected() {
    let result = Cli::try_parse_from(["sql-splitter", "split", "-f", "sarif"]);
    assert!(result.is_err());
}

#[test]
fn test_missing_subcommand_rejected() {
    assert!(Cli::try_parse_from(["sql-splitter"]).is_err());
}

#[test]
fn test_format_debug() {
    let format = Format::Json;
    let debug = format!("{:?}", format);
    assert!(debug.contains("Json"));
}
