use std::{future::Future, sync::Arc};

use crate::{config::Config, ports::BotService, probe, Error};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_RUNTIME_ERROR: u8 = 1;
pub const EXIT_CONFIG_ERROR: u8 = 2;

/// Terminal state of a launcher run.
#[derive(Debug)]
pub enum Outcome {
    /// The bot's update loop ended on its own.
    Completed,
    /// The shutdown signal fired while the bot was running.
    Interrupted,
    /// The bot failed during construction or inside its update loop.
    Failed(Error),
}

impl Outcome {
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Completed | Outcome::Interrupted => EXIT_SUCCESS,
            Outcome::Failed(_) => EXIT_RUNTIME_ERROR,
        }
    }
}

/// Startup sequence after configuration has been loaded: probe the API
/// server, then race the bot's update loop against `shutdown`.
///
/// The probe is best-effort; a failure only logs a degraded-mode warning.
/// `shutdown` is `tokio::signal::ctrl_c()` in the binary and a plain future
/// in tests. An interrupt is a deliberate stop, not a failure.
pub async fn run(
    cfg: &Config,
    bot: Arc<dyn BotService>,
    shutdown: impl Future<Output = ()>,
) -> Outcome {
    tracing::info!("Checking API connection...");
    if probe::check_api_connection(&cfg.api_stats_url, cfg.api_probe_timeout).await {
        tracing::info!("API connection established");
    } else {
        tracing::warn!("API server not accessible, bot will continue but may have limited functionality");
    }

    tracing::info!(bot = bot.name(), "Bot initialized successfully");
    tracing::info!("Bot is now running and ready to receive messages...");
    tracing::info!("Send /start to the bot to begin interaction");

    tokio::select! {
        res = bot.run() => match res {
            Ok(()) => {
                tracing::info!("Bot update loop ended");
                Outcome::Completed
            }
            Err(e) => {
                tracing::error!("Error running bot: {e}");
                Outcome::Failed(e)
            }
        },
        _ = shutdown => {
            tracing::info!("Bot stopped by user");
            Outcome::Interrupted
        }
    }
}
