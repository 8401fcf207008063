//! Pluggable HTTP engines.
//!
//! # Design
//! `Transport` is the seam between request construction and the network.
//! It performs exactly one blocking round-trip per call and returns the body
//! text. Status codes are not inspected. Implementations must be safe to
//! share across threads since one client may serve concurrent callers.

use std::fmt;

use ureq::RequestBuilder;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest};

/// One blocking HTTP round-trip.
pub trait Transport: Send + Sync {
    /// Send `request` and return the full response body as text, whatever
    /// the status code. Fails only when the call itself does not complete.
    fn send(&self, request: &HttpRequest) -> Result<String, TransportError>;
}

/// Default transport backed by a `ureq` agent.
///
/// The request's timeout is applied as both the connect and the global
/// timeout. Redirects are not followed and HTTP error statuses are returned
/// as ordinary responses, so a 3xx/4xx/5xx body comes back as-is. The body is
/// buffered without a size limit and decoded as UTF-8, replacing invalid
/// sequences.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .max_redirects(0)
            .max_redirects_will_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Use a pre-configured agent. Per-request settings still override its
    /// timeouts, redirect policy and status handling.
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

/// Apply the per-request config and headers to `builder`.
fn prepare<B>(builder: RequestBuilder<B>, request: &HttpRequest) -> RequestBuilder<B> {
    let timeout = Some(request.timeout);
    let mut builder = builder
        .config()
        .timeout_connect(timeout)
        .timeout_global(timeout)
        .http_status_as_error(false)
        .max_redirects(0)
        .max_redirects_will_error(false)
        .build();
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

impl Transport for UreqTransport {
    fn send(&self, request: &HttpRequest) -> Result<String, TransportError> {
        let mut response = match (request.method, &request.body) {
            (HttpMethod::Get, _) => prepare(self.agent.get(&request.url), request).call()?,
            (HttpMethod::Post, Some(body)) => {
                prepare(self.agent.post(&request.url), request).send(body.as_bytes())?
            }
            (HttpMethod::Post, None) => prepare(self.agent.post(&request.url), request).send_empty()?,
        };

        tracing::trace!(status = response.status().as_u16(), url = %request.url, "response received");

        let bytes = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
