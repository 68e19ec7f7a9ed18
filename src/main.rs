use std::io;

use tracing::{error, info};
use valorant_tracker::{
    App, AppError, TokioDelay, config::Config, logging, menu::run_menu, valorant::ValorantClient,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    logging::init();

    let config =
        Config::from_env().inspect_err(|e| error!(error = %e, "❌ Invalid configuration"))?;

    info!(
        base_url = %config.api_base_url,
        timeout_secs = config.http_timeout_secs,
        "🎯 Starting..."
    );

    let client = ValorantClient::from_config(&config)?;
    let app = App::new(client, TokioDelay, config.retry_policy());

    run_menu(&app, io::stdin().lock(), io::stdout().lock()).await
}
