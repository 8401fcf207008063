//! Error type for the client.
//!
//! # Design
//! Every transport failure (refused connection, elapsed timeout, protocol
//! violation, unreadable body) collapses into `HttpExecutionError`. The
//! original cause is kept as the error source. HTTP status codes are never
//! errors: a 404 or 500 with a body is returned like a 200.

use std::error::Error as StdError;

use thiserror::Error;

use crate::http::HttpMethod;

/// Boxed failure reported by a `Transport`.
pub type TransportError = Box<dyn StdError + Send + Sync + 'static>;

/// A request did not complete.
#[derive(Debug, Error)]
#[error("{method} {url} failed: {source}")]
pub struct HttpExecutionError {
    method: HttpMethod,
    url: String,
    #[source]
    source: TransportError,
}

impl HttpExecutionError {
    pub fn new(method: HttpMethod, url: impl Into<String>, source: TransportError) -> Self {
        Self {
            method,
            url: url.into(),
            source,
        }
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// The transport failure that caused this error.
    pub fn cause(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.source.as_ref()
    }

    pub fn into_cause(self) -> TransportError {
        self.source
    }
}
