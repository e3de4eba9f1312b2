use std::time::Duration;

use crate::{AttemptError, RetryPolicy};

/// Linear backoff: the wait after the `attempt`-th failure (1-based).
///
/// With a 1000 ms base this yields 1 s after the first failure and 2 s
/// after the second.
pub fn backoff_delay(base_ms: u64, attempt: usize) -> Duration {
    let attempt = u64::try_from(attempt).unwrap_or(u64::MAX);
    Duration::from_millis(base_ms.saturating_mul(attempt))
}

/// Per-call retry bookkeeping. Never shared between calls.
#[derive(Debug)]
pub struct RetryState {
    /// Attempts made so far.
    pub attempt: usize,
    pub max_attempts: usize,
    pub last_error: Option<AttemptError>,
}

impl RetryState {
    pub fn new(max_attempts: usize) -> Self {
        Self {
            attempt: 0,
            max_attempts: max_attempts.max(1),
            last_error: None,
        }
    }

    /// Records a failed attempt and reports whether another one may follow.
    pub fn record_failure(&mut self, err: &AttemptError, policy: RetryPolicy) -> bool {
        self.attempt += 1;
        self.last_error = Some(err.clone());
        self.attempt < self.max_attempts && policy.should_retry(err)
    }
}

impl RetryPolicy {
    pub fn should_retry(&self, err: &AttemptError) -> bool {
        match self {
            Self::Always => true,
            Self::Transient => match err {
                AttemptError::Transport(_) | AttemptError::Timeout | AttemptError::Decode(_) => {
                    true
                }
                AttemptError::Http { status, .. } => *status == 429 || (500..=599).contains(status),
            },
        }
    }
}
