//! Client configuration.
//!
//! # Design
//! `HttpConfig` is bound to a `SimpleHttp` when it is built and applies to
//! every call it makes. There is no per-call override; callers
//! that need a different timeout build a second client.

use std::time::Duration;

use crate::constants;

/// Environment variable overriding the timeout, in milliseconds.
pub const TIMEOUT_ENV: &str = "SIMPLE_HTTP_TIMEOUT_MS";

/// Environment variable overriding the `User-Agent` value.
pub const USER_AGENT_ENV: &str = "SIMPLE_HTTP_USER_AGENT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: constants::TIMEOUT,
            user_agent: constants::USER_AGENT_DATA.to_string(),
        }
    }
}

impl HttpConfig {
    /// Defaults, overridden by `SIMPLE_HTTP_TIMEOUT_MS` and
    /// `SIMPLE_HTTP_USER_AGENT` when they are set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.timeout = Duration::from_millis(ms),
                Err(err) => {
                    tracing::warn!(value = %raw, error = %err, "ignoring invalid {TIMEOUT_ENV}");
                }
            }
        }

        if let Some(agent) = lookup(USER_AGENT_ENV) {
            if !agent.is_empty() {
                config.user_agent = agent;
            }
        }

        config
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
