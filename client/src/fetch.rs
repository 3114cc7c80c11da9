//! HTTP fetching with retry and backoff

use std::time::Duration;

use anyhow::{Context, Result};
use lumidex_api::ApiError;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::DexClient;

/// Retry behavior for transient request failures
pub struct RetryPolicy {
    pub max_attempts: usize,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(5),
            backoff_multiplier: 2.0,
        }
    }
}

impl DexClient {
    /// GET a URL and decode the JSON body, retrying transient failures
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let mut delay = self.retry.initial_delay;
        let mut attempt = 1;

        loop {
            match self.try_get(url).await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    if attempt >= self.retry.max_attempts || !is_retryable(&e) {
                        return Err(e);
                    }
                    tracing::warn!(
                        attempt = attempt,
                        max_attempts = self.retry.max_attempts,
                        url = url,
                        error = %e,
                        "Request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    delay = Duration::from_secs_f64(
                        delay.as_secs_f64() * self.retry.backoff_multiplier,
                    )
                    .min(self.retry.max_delay);
                    attempt += 1;
                }
            }
        }
    }

    async fn try_get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(url.to_string()).into());
        }

        let body = response
            .error_for_status()
            .with_context(|| format!("Request to {} failed", url))?
            .text()
            .await
            .with_context(|| format!("Failed to read body from {}", url))?;

        Ok(lumidex_api::from_json(&body)?)
    }
}

/// Not-found and malformed payloads are terminal; transport errors and
/// server-side failures are worth retrying.
fn is_retryable(error: &anyhow::Error) -> bool {
    if error.downcast_ref::<ApiError>().is_some() {
        return false;
    }
    match error.downcast_ref::<reqwest::Error>() {
        Some(e) => e.status().is_none_or(|s| s.is_server_error()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_errors_are_terminal() {
        let not_found = anyhow::Error::from(ApiError::NotFound("gengarr".into()));
        assert!(!is_retryable(&not_found));

        let bad_payload = anyhow::Error::from(ApiError::InvalidPayload("eof".into()));
        assert!(!is_retryable(&bad_payload));
    }

    #[test]
    fn test_unrecognized_errors_are_terminal() {
        assert!(!is_retryable(&anyhow::anyhow!("something else")));
    }

    #[test]
    fn test_default_policy_backs_off() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 3);
        assert!(policy.initial_delay < policy.max_delay);
        assert!(policy.backoff_multiplier > 1.0);
    }
}
