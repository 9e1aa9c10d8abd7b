use std::path::PathBuf;

use clap::Parser;
use lexi_types::Tier;

use crate::cli::{Cli, Command};

#[test]
fn generate_takes_tier_labels() {
    let cli =
        Cli::try_parse_from(["lexi", "generate", "--tier", "600-700", "--budget", "2.5"]).unwrap();
    assert_eq!(
        cli.command,
        Command::Generate {
            tier: Tier::From600,
            batch_size: None,
            budget: Some(2.5),
        }
    );
    assert_eq!(cli.config, PathBuf::from("lexi.json"));
}

#[test]
fn legacy_tier_label_is_accepted() {
    let cli = Cli::try_parse_from(["lexi", "generate", "-t", "900以上"]).unwrap();
    assert!(matches!(cli.command, Command::Generate { tier: Tier::Above900, .. }));
}

#[test]
fn unknown_tier_is_rejected() {
    let err = Cli::try_parse_from(["lexi", "generate", "--tier", "1000"]).unwrap_err();
    assert!(err.to_string().contains("unknown tier"));
}

#[test]
fn subcommands_parse() {
    let cli = Cli::try_parse_from([
        "lexi",
        "-c",
        "alt.json",
        "import-list",
        "words.txt",
        "--dry-run",
    ])
    .unwrap();
    assert_eq!(cli.config, PathBuf::from("alt.json"));
    assert_eq!(
        cli.command,
        Command::ImportList {
            file: PathBuf::from("words.txt"),
            dry_run: true,
        }
    );

    let cli = Cli::try_parse_from(["lexi", "classify", "ledger", "--pos", "verb"]).unwrap();
    assert_eq!(
        cli.command,
        Command::Classify {
            word: "ledger".to_string(),
            pos: "verb".to_string(),
        }
    );

    let cli = Cli::try_parse_from(["lexi", "cost", "--reset"]).unwrap();
    assert_eq!(cli.command, Command::Cost { reset: true });
}
