//! Minimal blocking HTTP client returning response bodies as text.
//!
//! # Overview
//! `SimpleHttp` exposes `get` and `post`, each taking a URL and a
//! `RequestOptions` (query parameters, caller headers, JSON body, encode
//! flag). One call performs exactly one blocking round-trip through a
//! pluggable `Transport` and returns the body, whatever the status code.
//!
//! # Design
//! - Request construction is pure: `build_url`, `Body::select` and
//!   `merge_headers` produce a plain-data `HttpRequest`.
//! - `Transport` is the only place that touches the network. `UreqTransport`
//!   is the default; tests substitute a recording fake.
//! - Any transport failure becomes `HttpExecutionError` carrying the cause.
//!   A 4xx/5xx response is not an error.
//!
//! ```no_run
//! use simple_http::{Params, RequestOptions, SimpleHttp};
//!
//! let http = SimpleHttp::new();
//! let options = RequestOptions::new()
//!     .params(Params::new().param("q", "rust lang"))
//!     .encode(true);
//! let body = http.get("https://example.com/search", &options)?;
//! println!("{body}");
//! # Ok::<(), simple_http::HttpExecutionError>(())
//! ```

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod header;
pub mod http;
pub mod query;
pub mod transport;

pub use client::{RequestOptions, SimpleHttp};
pub use config::HttpConfig;
pub use error::{HttpExecutionError, TransportError};
pub use header::HttpHeader;
pub use http::{merge_headers, Body, HttpMethod, HttpRequest};
pub use query::{build_url, Params};
pub use transport::{Transport, UreqTransport};
