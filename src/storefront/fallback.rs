//! Offline demo path used when the storefront cannot be reached.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use super::types::{CustomerRecord, RegistrationInput, SubmissionResult};
use crate::config::FallbackConfig;

pub const EMAIL_TAKEN_MESSAGE: &str = "Email already exists. Please use a different email address.";
pub const DEMO_SUCCESS_MESSAGE: &str = "Account created successfully! (Demo mode)";

/// Synthesizes a registration result without a backend.
#[derive(Debug, Clone)]
pub struct DemoFallback {
    delay: Duration,
    taken_email: String,
}

impl DemoFallback {
    /// Returns `None` when the fallback is switched off.
    pub fn from_config(config: &FallbackConfig) -> Option<Self> {
        config.enabled.then(|| Self {
            delay: Duration::from_millis(config.delay_ms),
            taken_email: config.taken_email.clone(),
        })
    }

    /// Deterministic failure for the reserved address, otherwise a
    /// synthesized success after the configured delay.
    pub async fn recover(&self, input: &RegistrationInput) -> SubmissionResult {
        if !self.taken_email.is_empty() && input.email.contains(&self.taken_email) {
            tracing::info!(email = %input.email, "Demo mode: reporting email as taken");
            return SubmissionResult::failed(EMAIL_TAKEN_MESSAGE);
        }

        tokio::time::sleep(self.delay).await;

        let id = format!("demo_user_{}", unix_millis());
        tracing::info!(id = %id, "Demo mode: synthesized customer");
        SubmissionResult::succeeded(
            DEMO_SUCCESS_MESSAGE,
            Some(CustomerRecord {
                id,
                first_name: Some(input.first_name.clone()),
                last_name: Some(input.last_name.clone()),
                email: Some(input.email.clone()),
            }),
        )
    }
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}
