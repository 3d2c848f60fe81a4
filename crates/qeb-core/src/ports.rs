use async_trait::async_trait;

use crate::Result;

/// Hexagonal port for the bot implementation behind the launcher.
///
/// The launcher knows nothing about the messaging backend: it constructs an
/// implementation of this trait, hands it the token via configuration, and
/// drives `run()` until it returns or the process is interrupted.
#[async_trait]
pub trait BotService: Send + Sync {
    /// Short human-readable name for logs.
    fn name(&self) -> &str;

    /// The bot's update loop. Blocks until the loop ends on its own (`Ok`)
    /// or a construction/runtime failure inside the bot surfaces (`Err`).
    async fn run(&self) -> Result<()>;
}
