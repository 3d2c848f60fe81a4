//! Teloxide adapter implementing the core `BotService` port.
//!
//! Deliberately thin: it authenticates against Telegram, starts long
//! polling, and drops updates on the floor. Command and escrow semantics
//! live in a different component.

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use teloxide::{dispatching::UpdateFilterExt, dptree, prelude::*};

use qeb_core::{config::Config, ports::BotService, Error, Result};

pub struct QuickEscrowBot {
    cfg: Arc<Config>,
}

impl QuickEscrowBot {
    pub fn new(cfg: Arc<Config>) -> Self {
        Self { cfg }
    }

    async fn run_polling(&self) -> anyhow::Result<()> {
        let bot = Bot::new(self.cfg.telegram_bot_token.clone());

        // Authentication check; a bad token fails here instead of looping
        // inside the dispatcher.
        let me = bot
            .get_me()
            .await
            .context("could not authenticate with Telegram")?;
        tracing::info!("QuickEscrowBot started: @{}", me.username());

        let handler = dptree::entry().branch(Update::filter_message().endpoint(on_message));

        Dispatcher::builder(bot, handler)
            .default_handler(|_| async {})
            .build()
            .dispatch()
            .await;

        Ok(())
    }
}

async fn on_message(msg: Message) -> ResponseResult<()> {
    tracing::debug!(chat_id = msg.chat.id.0, "update received");
    Ok(())
}

#[async_trait]
impl BotService for QuickEscrowBot {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn run(&self) -> Result<()> {
        self.run_polling()
            .await
            .map_err(|e| Error::Bot(format!("telegram bot failed: {e:#}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn construction_never_touches_the_network() {
        let cfg = Arc::new(Config {
            telegram_bot_token: "123456:not-a-real-token".to_string(),
            api_stats_url: "http://127.0.0.1:9/api/stats".to_string(),
            api_probe_timeout: Duration::from_millis(100),
        });
        let bot = QuickEscrowBot::new(cfg);
        assert_eq!(bot.name(), "telegram");
    }
}
