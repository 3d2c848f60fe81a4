use std::{env, fmt, fs, path::Path, time::Duration};

use crate::{errors::Error, Result};

pub const DEFAULT_API_STATS_URL: &str = "http://0.0.0.0:5000/api/stats";
pub const DEFAULT_API_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Typed launcher configuration.
///
/// The token is required; everything else has a default. The token is held
/// only to hand to the bot constructor and is redacted from `Debug` output.
#[derive(Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub api_stats_url: String,
    pub api_probe_timeout: Duration,
}

impl Config {
    /// Load from the process environment, reading `.env` first if present.
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. `load()` delegates here;
    /// tests supply a map instead of touching the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let telegram_bot_token = lookup("TELEGRAM_BOT_TOKEN").unwrap_or_default();
        if telegram_bot_token.trim().is_empty() {
            return Err(Error::Config(
                "TELEGRAM_BOT_TOKEN environment variable is required".to_string(),
            ));
        }

        let api_stats_url = lookup("API_STATS_URL")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_API_STATS_URL.to_string());

        let api_probe_timeout = lookup("API_PROBE_TIMEOUT_MS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_API_PROBE_TIMEOUT);

        Ok(Self {
            telegram_bot_token,
            api_stats_url,
            api_probe_timeout,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("telegram_bot_token", &"<redacted>")
            .field("api_stats_url", &self.api_stats_url)
            .field("api_probe_timeout", &self.api_probe_timeout)
            .finish()
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }
        if env::var_os(key).is_some() {
            continue; // do not override existing env
        }

        let value = v.trim().trim_matches('"').trim_matches('\'');
        env::set_var(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn cfg_from(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn missing_token_is_a_config_error() {
        let err = cfg_from(&[]).unwrap_err();
        match err {
            Error::Config(msg) => assert!(msg.contains("TELEGRAM_BOT_TOKEN")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn blank_token_is_rejected() {
        assert!(cfg_from(&[("TELEGRAM_BOT_TOKEN", "   ")]).is_err());
    }

    #[test]
    fn defaults_apply_when_only_token_is_set() {
        let cfg = cfg_from(&[("TELEGRAM_BOT_TOKEN", "abc123")]).unwrap();
        assert_eq!(cfg.telegram_bot_token, "abc123");
        assert_eq!(cfg.api_stats_url, DEFAULT_API_STATS_URL);
        assert_eq!(cfg.api_probe_timeout, Duration::from_secs(5));
    }

    #[test]
    fn overrides_are_honored() {
        let cfg = cfg_from(&[
            ("TELEGRAM_BOT_TOKEN", "abc123"),
            ("API_STATS_URL", "http://127.0.0.1:8080/api/stats"),
            ("API_PROBE_TIMEOUT_MS", "250"),
        ])
        .unwrap();
        assert_eq!(cfg.api_stats_url, "http://127.0.0.1:8080/api/stats");
        assert_eq!(cfg.api_probe_timeout, Duration::from_millis(250));
    }

    #[test]
    fn debug_redacts_the_token() {
        let cfg = cfg_from(&[("TELEGRAM_BOT_TOKEN", "super-secret")]).unwrap();
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
