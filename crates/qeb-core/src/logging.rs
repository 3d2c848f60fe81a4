use std::{fs::OpenOptions, path::Path, sync::Arc};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::Result;

pub const DEFAULT_LOG_FILE: &str = "bot.log";

/// Initialize process-wide logging for the launcher.
///
/// Two sinks: stdout and an append-only log file (ANSI disabled). Default
/// level is `info` for our crates; override with `RUST_LOG`. The file path
/// comes from `QEB_LOG_FILE`, falling back to `bot.log` in the working
/// directory.
pub fn init(service_name: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("info,{service_name}=info,qeb_core=info")));

    let path = std::env::var("QEB_LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(Path::new(&path))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Arc::new(file)),
        )
        .init();

    Ok(())
}
