//! Fixed values shared by every request.

use std::time::Duration;

/// Connect and whole-call timeout applied to each request.
pub const TIMEOUT: Duration = Duration::from_millis(3000);

pub const USER_AGENT: &str = "User-Agent";

/// Value sent in the `User-Agent` header unless a caller overrides it.
pub const USER_AGENT_DATA: &str = concat!("simple-http/", env!("CARGO_PKG_VERSION"));

pub const CONTENT_TYPE: &str = "Content-Type";

pub const CONTENT_ENCODING: &str = "Content-Encoding";

/// Name of the only text encoding used for request and response bodies.
pub const DEFAULT_ENCODING: &str = "UTF-8";

pub const CONTENT_TYPE_JSON: &str = "application/json";
