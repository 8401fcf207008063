//! Request data handed to a transport.
//!
//! # Design
//! These types describe one HTTP call as plain owned data. The client builds
//! an `HttpRequest` fresh for every call and passes it by reference to a
//! `Transport`, which performs the network round-trip. Nothing here does I/O,
//! so body selection and header merging are tested without a network.

use std::fmt;
use std::time::Duration;

use crate::constants;
use crate::header::HttpHeader;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body descriptor chosen before execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// No request body.
    Empty,
    /// UTF-8 text sent as `application/json`.
    Json(String),
}

impl Body {
    /// `None` and `""` produce `Empty`; any other text is sent as JSON.
    pub fn select(data: Option<&str>) -> Self {
        match data {
            Some(text) if !text.is_empty() => Body::Json(text.to_string()),
            _ => Body::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Body::Empty)
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Body::Empty => None,
            Body::Json(text) => Some(text),
        }
    }
}

/// An HTTP request described as plain data.
///
/// `body` is `None` for a bodiless call. `headers` already contains the
/// mandatory headers merged with the caller's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    pub timeout: Duration,
}

/// Merge the mandatory headers with the caller's.
///
/// `User-Agent` always comes first, followed by `Content-Type` and
/// `Content-Encoding` when `body` carries text. Caller headers are applied
/// last in their own order and replace a mandatory header of the same name.
pub fn merge_headers(user_agent: &str, body: &Body, caller: Option<&HttpHeader>) -> HttpHeader {
    let mut merged = HttpHeader::new().add(constants::USER_AGENT, user_agent);

    if !body.is_empty() {
        merged.insert(constants::CONTENT_TYPE, constants::CONTENT_TYPE_JSON);
        merged.insert(constants::CONTENT_ENCODING, constants::DEFAULT_ENCODING);
    }

    if let Some(caller) = caller {
        for (name, value) in caller.iter() {
            merged.insert(name, value);
        }
    }

    merged
}
