//! Retry matrix configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::generation::RetryPolicy;

/// Bounds of the candidate × attempt retry matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Content attempts per model candidate.
    pub attempts_per_candidate: usize,

    /// Extra calls per candidate while it answers HTTP 503.
    pub unavailable_retries: usize,

    /// Pause between those calls, in milliseconds.
    pub unavailable_backoff_ms: u64,

    /// Accepted names required before a partial result is returned.
    pub min_accept: usize,
}

impl GenerationConfig {
    /// Retry policy described by this configuration.
    #[must_use]
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy {
            attempts_per_candidate: self.attempts_per_candidate,
            unavailable_retries: self.unavailable_retries,
            unavailable_backoff: Duration::from_millis(self.unavailable_backoff_ms),
            min_accept: self.min_accept,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        let policy = RetryPolicy::default();
        Self {
            attempts_per_candidate: policy.attempts_per_candidate,
            unavailable_retries: policy.unavailable_retries,
            unavailable_backoff_ms: 2000,
            min_accept: policy.min_accept,
        }
    }
}
