use anyhow::Context;
use clap::Parser;
use lexi_config::Config;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod commands;
pub mod ledger;
pub mod state;

#[cfg(test)]
mod tests;

use self::cli::Cli;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config {}", cli.config.display()))?;

    let state = AppState::new(config)?;
    let result = commands::dispatch(&state, cli.command).await;
    state.shutdown().await;

    result
}

/// `RUST_LOG` wins over the default `lexi=info`; `LOG_FORMAT=json` switches
/// to JSON lines
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lexi=info"));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
