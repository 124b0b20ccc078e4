//! Per-call retry bookkeeping for the transport loop.
//!
//! Only 5xx statuses consume the retry budget. A 4xx status ends the loop
//! immediately, and network faults never reach this state at all.

/// How the transport should treat a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// 1xx, 2xx and 3xx: accept the body.
    Ok,
    /// 4xx: accept the body, never retry.
    ClientError,
    /// 5xx: retry while budget remains.
    ServerError,
}

impl StatusClass {
    pub fn of(status: u16) -> Self {
        match status {
            400..=499 => Self::ClientError,
            500..=599 => Self::ServerError,
            _ => Self::Ok,
        }
    }
}

/// State of one transport call. Discarded when the call returns.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RetryState {
    /// Number of failed (5xx) attempts so far.
    pub attempt: u32,
    /// Description of the most recent 5xx response.
    pub last_error: Option<String>,
    /// Set on a 4xx response; stops the loop regardless of budget.
    pub terminal: bool,
}

impl RetryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether another attempt may be sent with the given retry budget.
    ///
    /// `retry` counts retries after the first request, so `retry + 1`
    /// attempts are allowed in total.
    pub fn can_attempt(&self, retry: u32) -> bool {
        !self.terminal && self.attempt <= retry
    }

    /// Record a 4xx response.
    pub fn stop(&mut self) {
        self.terminal = true;
    }

    /// Record a 5xx response. Returns `true` if another attempt remains.
    pub fn record_failure(&mut self, message: String, retry: u32) -> bool {
        self.last_error = Some(message);
        self.attempt += 1;
        self.can_attempt(retry)
    }
}
