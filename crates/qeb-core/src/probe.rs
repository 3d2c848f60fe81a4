use std::time::Duration;

/// Best-effort health probe against the local API server.
///
/// Returns `true` iff the endpoint answers `200 OK` within the timeout. Any
/// other status, a transport error, or a timeout yields `false` with the
/// reason logged. The body is ignored. Never fatal: callers only downgrade
/// to a warning and continue.
pub async fn check_api_connection(url: &str, timeout: Duration) -> bool {
    let client = reqwest::Client::new();

    match client.get(url).timeout(timeout).send().await {
        Ok(resp) if resp.status() == reqwest::StatusCode::OK => true,
        Ok(resp) => {
            tracing::error!("API connection failed: unexpected status {}", resp.status());
            false
        }
        Err(e) => {
            tracing::error!("API connection failed: {e}");
            false
        }
    }
}
