use crate::cli::Command;
use crate::state::AppState;

pub mod api;
pub mod classify;
pub mod cost;
pub mod generate;
pub mod import_list;
pub mod parse;
pub mod stats;
pub mod transfer;

use api::handle_check_api;
use classify::handle_classify;
use cost::handle_cost;
use generate::handle_generate;
use import_list::handle_import_list;
use parse::handle_parse;
use stats::handle_stats;
use transfer::{handle_export, handle_import_json};

pub async fn dispatch(state: &AppState, command: Command) -> anyhow::Result<()> {
    tracing::debug!("Running {:?}", command);

    match command {
        Command::Generate {
            tier,
            batch_size,
            budget,
        } => handle_generate(state, tier, batch_size, budget).await,
        Command::ImportList { file, dry_run } => handle_import_list(state, &file, dry_run).await,
        Command::Classify { word, pos } => handle_classify(&word, &pos),
        Command::Parse { file } => handle_parse(&file),
        Command::Stats => handle_stats(state).await,
        Command::Export { out } => handle_export(state, out.as_deref()).await,
        Command::ImportJson { file } => handle_import_json(state, &file).await,
        Command::CheckApi => handle_check_api(state).await,
        Command::Cost { reset } => handle_cost(state, reset),
    }
}
