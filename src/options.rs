/// Which failures the retry loop is allowed to retry.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RetryPolicy {
    /// Retry every failure, including permanent 4xx responses.
    #[default]
    Always,
    /// Retry transport errors, timeouts, malformed bodies, 429 and 5xx only.
    /// Any other status fails on the spot.
    Transient,
}

/// Configures retry and timeout behavior.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientOptions {
    /// Total attempts per call, initial one included. `0` behaves like `1`.
    pub max_attempts: usize,
    /// Base retry backoff in milliseconds (linear strategy: `base * n`
    /// after the n-th failure).
    pub retry_backoff_ms: u64,
    /// Optional per-attempt timeout in milliseconds. `None` leaves timing
    /// to the transport.
    pub timeout_ms: Option<u64>,
    pub retry_policy: RetryPolicy,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retry_backoff_ms: 1_000,
            timeout_ms: None,
            retry_policy: RetryPolicy::Always,
        }
    }
}

impl ClientOptions {
    pub(crate) fn effective_max_attempts(&self) -> usize {
        self.max_attempts.max(1)
    }
}
