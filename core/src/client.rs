//! Blocking `get` / `post` facade.
//!
//! # Design
//! `SimpleHttp` holds a shared `Transport` and an `HttpConfig` and nothing
//! else; no state is carried between calls. Every call runs the same steps:
//! build the URL from the query parameters, select the body, merge headers,
//! then hand one `HttpRequest` to the transport.
//!
//! Optional arguments live in `RequestOptions` instead of overloads. A POST
//! with `params` sends them in the query string; with `data` it sends a JSON
//! body. Setting both does both.

use std::sync::Arc;

use crate::config::HttpConfig;
use crate::error::HttpExecutionError;
use crate::header::HttpHeader;
use crate::http::{merge_headers, Body, HttpMethod, HttpRequest};
use crate::query::{build_url, Params};
use crate::transport::{Transport, UreqTransport};

/// Optional arguments for a call. Everything defaults to absent / `false`.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Query parameters appended to the URL.
    pub params: Option<Params>,
    /// Caller headers, applied after the mandatory ones.
    pub header: Option<HttpHeader>,
    /// JSON body text. Ignored by `get`.
    pub data: Option<String>,
    /// Percent-encode parameter values.
    pub encode: bool,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn params(mut self, params: Params) -> Self {
        self.params = Some(params);
        self
    }

    pub fn header(mut self, header: HttpHeader) -> Self {
        self.header = Some(header);
        self
    }

    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn encode(mut self, encode: bool) -> Self {
        self.encode = encode;
        self
    }
}

/// Synchronous HTTP client returning response bodies as text.
///
/// Cloning is cheap and clones share the transport.
#[derive(Clone)]
pub struct SimpleHttp {
    transport: Arc<dyn Transport>,
    config: HttpConfig,
}

impl std::fmt::Debug for SimpleHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleHttp")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for SimpleHttp {
    fn default() -> Self {
        Self::new()
    }
}

impl SimpleHttp {
    /// Client using `ureq` and the default configuration.
    pub fn new() -> Self {
        Self::with_config(HttpConfig::default())
    }

    pub fn with_config(config: HttpConfig) -> Self {
        Self::with_transport(Arc::new(UreqTransport::new()), config)
    }

    pub fn with_transport(transport: Arc<dyn Transport>, config: HttpConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// GET `url` with no parameters or caller headers.
    pub fn get_url(&self, url: &str) -> Result<String, HttpExecutionError> {
        self.get(url, &RequestOptions::default())
    }

    /// Bodiless POST to `url`.
    pub fn post_url(&self, url: &str) -> Result<String, HttpExecutionError> {
        self.post(url, &RequestOptions::default())
    }

    /// POST `data` as a JSON body.
    pub fn post_json(&self, url: &str, data: &str) -> Result<String, HttpExecutionError> {
        self.post(url, &RequestOptions::new().data(data))
    }

    pub fn get(&self, url: &str, options: &RequestOptions) -> Result<String, HttpExecutionError> {
        let request = self.build_request(HttpMethod::Get, url, options, Body::Empty);
        self.execute(request)
    }

    pub fn post(&self, url: &str, options: &RequestOptions) -> Result<String, HttpExecutionError> {
        let body = Body::select(options.data.as_deref());
        let request = self.build_request(HttpMethod::Post, url, options, body);
        self.execute(request)
    }

    fn build_request(
        &self,
        method: HttpMethod,
        url: &str,
        options: &RequestOptions,
        body: Body,
    ) -> HttpRequest {
        let url = match &options.params {
            Some(params) => build_url(url, params, options.encode),
            None => url.to_string(),
        };
        let headers = merge_headers(&self.config.user_agent, &body, options.header.as_ref());

        HttpRequest {
            method,
            url,
            headers: headers.into(),
            body: body.into_text(),
            timeout: self.config.timeout,
        }
    }

    fn execute(&self, request: HttpRequest) -> Result<String, HttpExecutionError> {
        tracing::debug!(method = %request.method, url = %request.url, "sending request");

        self.transport.send(&request).map_err(|source| {
            tracing::warn!(method = %request.method, url = %request.url, error = %source, "request failed");
            HttpExecutionError::new(request.method, request.url.clone(), source)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Mutex;
    use std::time::Duration;

    use super::*;
    use crate::error::TransportError;

    /// Records every request and answers with a canned result.
    #[derive(Default)]
    struct RecordingTransport {
        requests: Mutex<Vec<HttpRequest>>,
        fail: bool,
    }

    impl RecordingTransport {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        fn last(&self) -> HttpRequest {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }
    }

    impl Transport for RecordingTransport {
        fn send(&self, request: &HttpRequest) -> Result<String, TransportError> {
            self.requests.lock().unwrap().push(request.clone());
            if self.fail {
                return Err(Box::new(io::Error::new(io::ErrorKind::ConnectionRefused, "refused")));
            }
            Ok(format!("ok {}", request.method))
        }
    }

    fn client(transport: &Arc<RecordingTransport>) -> SimpleHttp {
        let config = HttpConfig::default()
            .user_agent("test-agent")
            .timeout(Duration::from_millis(500));
        SimpleHttp::with_transport(transport.clone(), config)
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn get_url_sends_only_user_agent() {
        let transport = Arc::new(RecordingTransport::default());
        let body = client(&transport).get_url("http://x/y").unwrap();
        assert_eq!(body, "ok GET");

        let req = transport.last();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://x/y");
        assert_eq!(req.headers, pairs(&[("User-Agent", "test-agent")]));
        assert!(req.body.is_none());
        assert_eq!(req.timeout, Duration::from_millis(500));
    }

    #[test]
    fn get_with_params_and_headers() {
        let transport = Arc::new(RecordingTransport::default());
        let options = RequestOptions::new()
            .params(Params::new().param("q", "a b").param_opt("page", None))
            .header(HttpHeader::new().add("Accept", "text/plain"))
            .encode(true);
        client(&transport).get("http://x/search", &options).unwrap();

        let req = transport.last();
        assert_eq!(req.url, "http://x/search?q=a%20b&page=");
        assert_eq!(
            req.headers,
            pairs(&[("User-Agent", "test-agent"), ("Accept", "text/plain")])
        );
    }

    #[test]
    fn get_ignores_data() {
        let transport = Arc::new(RecordingTransport::default());
        client(&transport)
            .get("http://x/y", &RequestOptions::new().data("{}"))
            .unwrap();

        let req = transport.last();
        assert!(req.body.is_none());
        assert_eq!(req.headers.len(), 1);
    }

    #[test]
    fn post_json_sets_content_headers() {
        let transport = Arc::new(RecordingTransport::default());
        client(&transport).post_json("http://x/y", r#"{"a":1}"#).unwrap();

        let req = transport.last();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.body.as_deref(), Some(r#"{"a":1}"#));
        assert_eq!(
            req.headers,
            pairs(&[
                ("User-Agent", "test-agent"),
                ("Content-Type", "application/json"),
                ("Content-Encoding", "UTF-8"),
            ])
        );
    }

    #[test]
    fn post_without_data_is_bodiless() {
        let transport = Arc::new(RecordingTransport::default());
        let c = client(&transport);

        c.post_url("http://x/y").unwrap();
        let req = transport.last();
        assert!(req.body.is_none());
        assert_eq!(req.headers, pairs(&[("User-Agent", "test-agent")]));

        c.post_json("http://x/y", "").unwrap();
        let req = transport.last();
        assert!(req.body.is_none());
        assert_eq!(req.headers.len(), 1);
    }

    #[test]
    fn post_params_go_to_query_string() {
        let transport = Arc::new(RecordingTransport::default());
        let params: Params = [("a", "1"), ("b", "2")].into_iter().collect();
        client(&transport)
            .post("http://x/y", &RequestOptions::new().params(params))
            .unwrap();

        let req = transport.last();
        assert_eq!(req.url, "http://x/y?a=1&b=2");
        assert!(req.body.is_none());
        assert_eq!(req.headers.len(), 1);
    }

    #[test]
    fn post_params_and_data_together() {
        let transport = Arc::new(RecordingTransport::default());
        let options = RequestOptions::new()
            .params(Params::new().param("id", "7"))
            .data("[]");
        client(&transport).post("http://x/y?v=1", &options).unwrap();

        let req = transport.last();
        assert_eq!(req.url, "http://x/y?v=1&id=7");
        assert_eq!(req.body.as_deref(), Some("[]"));
    }

    #[test]
    fn caller_header_overrides_content_type() {
        let transport = Arc::new(RecordingTransport::default());
        let options = RequestOptions::new()
            .data("{}")
            .header(HttpHeader::new().add("Content-Type", "application/merge-patch+json"));
        client(&transport).post("http://x/y", &options).unwrap();

        let req = transport.last();
        assert_eq!(
            req.headers,
            pairs(&[
                ("User-Agent", "test-agent"),
                ("Content-Type", "application/merge-patch+json"),
                ("Content-Encoding", "UTF-8"),
            ])
        );
    }

    #[test]
    fn transport_failure_wraps_cause_for_every_form() {
        let transport = Arc::new(RecordingTransport::failing());
        let c = client(&transport);
        let params = RequestOptions::new().params(Params::new().param("a", "1"));

        let results = [
            c.get_url("http://x/y"),
            c.get("http://x/y", &params),
            c.post_url("http://x/y"),
            c.post_json("http://x/y", "{}"),
            c.post("http://x/y", &params),
        ];

        for result in results {
            let err = result.unwrap_err();
            let io_err = err.cause().downcast_ref::<io::Error>().unwrap();
            assert_eq!(io_err.kind(), io::ErrorKind::ConnectionRefused);
        }
        assert_eq!(transport.requests.lock().unwrap().len(), 5);
    }

    #[test]
    fn error_carries_request_identity() {
        let transport = Arc::new(RecordingTransport::failing());
        let params = RequestOptions::new().params(Params::new().param("a", "1"));
        let err = client(&transport).post("http://x/y", &params).unwrap_err();
        assert_eq!(err.method(), HttpMethod::Post);
        assert_eq!(err.url(), "http://x/y?a=1");
    }
}
