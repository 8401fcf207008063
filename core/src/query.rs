//! Query-string assembly.

/// Ordered query parameters. A `None` value is emitted as `name=`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, Option<String>)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.param_opt(name, Some(value.into()))
    }

    pub fn param_opt(mut self, name: impl Into<String>, value: Option<String>) -> Self {
        self.pairs.push((name.into(), value));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |params, (k, v)| params.param(k, v))
    }
}

/// Append `params` to `base` as a query string.
///
/// Returns `base` unchanged when there are no parameters. The first
/// separator is `&` if `base` already contains a `?` and `?` otherwise; a
/// base ending in `?` therefore yields `?&`. With `encode` set, values are
/// percent-encoded (RFC 3986 unreserved characters are kept). Names are
/// always inserted as given.
pub fn build_url(base: &str, params: &Params, encode: bool) -> String {
    if params.is_empty() {
        return base.to_string();
    }

    let mut url = String::from(base);
    url.push(if base.contains('?') { '&' } else { '?' });

    for (i, (name, value)) in params.iter().enumerate() {
        if i > 0 {
            url.push('&');
        }
        url.push_str(name);
        url.push('=');
        if let Some(value) = value {
            if encode {
                url.push_str(&urlencoding::encode(value));
            } else {
                url.push_str(value);
            }
        }
    }

    url
}
