use lexi_generator::{OpenAiGenerator, TextGenerator};

use crate::state::AppState;

pub async fn handle_check_api(state: &AppState) -> anyhow::Result<()> {
    let generator = OpenAiGenerator::from_config(&state.config.generator);
    let metadata = generator.metadata();

    match generator.check_connection().await {
        Ok(()) => {
            println!("{} reachable, model {}", metadata.name, metadata.model);
            Ok(())
        }
        Err(e) => {
            tracing::error!("API check failed: {}", e);
            Err(e.into())
        }
    }
}
