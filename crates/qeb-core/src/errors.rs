/// Core error type for the launcher.
///
/// Adapter crates map their specific errors into this type so failures are
/// handled consistently at the single top-level call site.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("bot error: {0}")]
    Bot(String),
}

pub type Result<T> = std::result::Result<T, Error>;
