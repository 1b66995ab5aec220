//! Shared HTTP plumbing for the LLM providers: retries and error mapping.

use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;

use crate::ports::AIError;

/// Runs `attempt` until it succeeds, fails with a non-retryable error, or
/// `max_retries` retries have been spent.
///
/// Backoff doubles from `base_delay`: 1x, 2x, 4x, ...
pub(crate) async fn with_retries<T, F, Fut>(
    provider: &'static str,
    max_retries: u32,
    base_delay: Duration,
    mut attempt: F,
) -> Result<T, AIError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AIError>>,
{
    let mut retry_count = 0;
    loop {
        match attempt().await {
            Ok(value) => return Ok(value),
            Err(err) if !err.is_retryable() || retry_count >= max_retries => return Err(err),
            Err(err) => {
                let delay = base_delay * (1u32 << retry_count.min(16));
                tracing::warn!(
                    provider,
                    retry = retry_count + 1,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "retrying LLM request"
                );
                sleep(delay).await;
                retry_count += 1;
            }
        }
    }
}

/// Maps a reqwest send failure onto the provider error taxonomy.
pub(crate) fn map_transport_error(err: reqwest::Error, timeout: Duration) -> AIError {
    if err.is_timeout() {
        AIError::Timeout {
            timeout_secs: timeout.as_secs() as u32,
        }
    } else if err.is_connect() {
        AIError::network(format!("Connection failed: {}", err))
    } else {
        AIError::network(err.to_string())
    }
}

/// Maps a non-success HTTP status and body onto the provider error taxonomy.
pub(crate) fn map_status_error(status: u16, body: String, retry_after_secs: u32) -> AIError {
    match status {
        401 | 403 => AIError::AuthenticationFailed,
        429 => AIError::rate_limited(retry_after_secs),
        400 | 404 | 422 => AIError::InvalidRequest(body),
        500..=599 => AIError::unavailable(format!("Server error {}: {}", status, body)),
        _ => AIError::network(format!("Unexpected status {}: {}", status, body)),
    }
}
