use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lexi_types::Tier;

#[derive(Parser, Debug)]
#[command(name = "lexi")]
#[command(about = "TOEIC vocabulary generation pipeline")]
#[command(version)]
pub struct Cli {
    /// JSON config file, defaults apply when it does not exist
    #[arg(short, long, default_value = "lexi.json")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Generate words for one tier until its target count is reached
    Generate {
        /// Tier label, e.g. `600-700` or `900+`
        #[arg(short, long, value_parser = parse_tier)]
        tier: Tier,

        /// Words requested per batch
        #[arg(long)]
        batch_size: Option<usize>,

        /// Spending ceiling in USD
        #[arg(long)]
        budget: Option<f64>,
    },

    /// Import a numbered TXT word list (`12. negotiate v 談判`)
    ImportList {
        file: PathBuf,

        /// Print the entries instead of storing them
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the tier a word would be classified into
    Classify {
        word: String,

        /// Part of speech
        #[arg(long, default_value = "noun")]
        pos: String,
    },

    /// Run the repair engine on a saved raw response
    Parse { file: PathBuf },

    /// Word counts per tier against their targets
    Stats,

    /// Write the whole vocabulary as an export document
    Export {
        /// Output file, stdout when omitted
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Merge an export document into the vocabulary
    ImportJson { file: PathBuf },

    /// Verify the generation endpoint and API key
    CheckApi,

    /// Show accumulated generation cost
    Cost {
        /// Clear the running totals
        #[arg(long)]
        reset: bool,
    },
}

pub fn parse_tier(label: &str) -> Result<Tier, String> {
    Tier::from_label(label).ok_or_else(|| {
        let known: Vec<&str> = Tier::ALL.iter().map(|t| t.as_str()).collect();
        format!("unknown tier `{label}`, expected one of {}", known.join(", "))
    })
}
