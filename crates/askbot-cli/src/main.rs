use std::sync::Arc;

use askbot_cli::{config::Config, logging::init_logging, repl};
use askbot_client::HttpQaClient;
use askbot_session::SubmissionController;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    init_logging(&config.logging);

    tracing::info!(
        endpoint = %config.service.endpoint,
        timeout_ms = config.service.timeout_ms,
        context_budget = config.context.budget().max_chars(),
        "Starting askbot"
    );

    let client = Arc::new(HttpQaClient::new(config.service.clone())?);
    let controller = Arc::new(SubmissionController::new(client, config.context.budget()));

    repl::run(controller).await
}
