use crate::ledger::{load_ledger, save_ledger};
use crate::state::AppState;

pub fn handle_cost(state: &AppState, reset: bool) -> anyhow::Result<()> {
    let path = state.ledger_path();
    let mut ledger = load_ledger(&path, &state.config)?;

    if reset {
        ledger.reset();
        save_ledger(&path, &ledger)?;
        println!("Cost ledger cleared");
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(&ledger.report())?);
    Ok(())
}
