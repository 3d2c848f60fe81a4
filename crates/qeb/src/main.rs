use std::{process::ExitCode, sync::Arc};

use qeb_core::{
    config::Config,
    launcher::{self, EXIT_CONFIG_ERROR, EXIT_RUNTIME_ERROR},
    ports::BotService,
};
use qeb_telegram::QuickEscrowBot;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = qeb_core::logging::init("qeb") {
        eprintln!("failed to initialize logging: {e}");
        return ExitCode::from(EXIT_RUNTIME_ERROR);
    }

    tracing::info!("Starting QuickEscrowBot...");

    let cfg = match Config::load() {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(EXIT_CONFIG_ERROR);
        }
    };

    let bot: Arc<dyn BotService> = Arc::new(QuickEscrowBot::new(cfg.clone()));

    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    let outcome = launcher::run(&cfg, bot, shutdown).await;
    ExitCode::from(outcome.exit_code())
}
