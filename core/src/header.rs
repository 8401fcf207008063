//! Ordered header container.
//!
//! # Design
//! Headers are kept as an insertion-ordered `Vec` of owned pairs, like the
//! rest of the request data. Names compare ASCII case-insensitively, and
//! adding a name that is already present replaces its value in place. The
//! client relies on this to let caller headers overwrite the mandatory
//! `User-Agent` / `Content-Type` / `Content-Encoding` entries.

/// Insertion-ordered header set with replace-on-collision semantics.
///
/// Names are case-folded for comparison: `X-A` and `x-a` collapse into one
/// entry holding the spelling and value added last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpHeader {
    headers: Vec<(String, String)>,
}

impl HttpHeader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header, replacing the value of an existing header with the same
    /// name. The replaced entry keeps its position and takes the new spelling.
    pub fn add(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add every pair from `headers` in iteration order.
    pub fn add_all<K, V>(mut self, headers: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in headers {
            self.insert(name, value);
        }
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self
            .headers
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some(entry) => *entry = (name, value),
            None => self.headers.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Borrow the headers as `(name, value)` pairs.
    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.headers
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for HttpHeader {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new().add_all(iter)
    }
}

impl From<HttpHeader> for Vec<(String, String)> {
    fn from(header: HttpHeader) -> Self {
        header.headers
    }
}
