//! Query string parameters.
//!
//! Parameters are kept in insertion order. Absent optional values are never
//! recorded, so they never reach the wire.

use url::form_urlencoded;

use trello_core::error::{TrelloError, TrelloResult};

/// Ordered set of query string parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.pairs.push((key.into(), value.into()));
        self
    }

    /// Append a parameter only when a value is present.
    pub fn push_opt<V: Into<String>>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(v) = value {
            self.push(key, v);
        }
        self
    }

    /// Append a boolean as `true`/`false`.
    pub fn push_bool(&mut self, key: &str, value: bool) -> &mut Self {
        self.push(key, if value { "true" } else { "false" })
    }

    /// Append a boolean only when a value is present.
    pub fn push_opt_bool(&mut self, key: &str, value: Option<bool>) -> &mut Self {
        if let Some(v) = value {
            self.push_bool(key, v);
        }
        self
    }

    /// Append a sequence as one comma-separated value.
    pub fn push_list<S: AsRef<str>>(&mut self, key: &str, values: &[S]) -> &mut Self {
        let joined = values
            .iter()
            .map(|v| v.as_ref())
            .collect::<Vec<_>>()
            .join(",");
        self.push(key, joined)
    }

    /// Append a sequence only when one is present.
    pub fn push_opt_list<S: AsRef<str>>(&mut self, key: &str, values: Option<&[S]>) -> &mut Self {
        if let Some(v) = values {
            self.push_list(key, v);
        }
        self
    }

    /// First value recorded for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encode as `application/x-www-form-urlencoded`.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }

    /// Decode an `application/x-www-form-urlencoded` string. A leading `?` is ignored.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self {
            pairs: form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
        }
    }
}

/// Join segments into a resource path, percent-encoding each one so that an
/// id containing `/`, `?` or `#` stays inside its own segment.
///
/// `.` and `..` are rejected: URL normalization would resolve them to a
/// different resource.
pub fn resource_path(segments: &[&str]) -> TrelloResult<String> {
    let mut encoded = Vec::with_capacity(segments.len());
    for segment in segments {
        if *segment == "." || *segment == ".." {
            return Err(TrelloError::InvalidArgument(format!(
                "{segment:?} is not a valid path segment"
            )));
        }
        encoded.push(urlencoding::encode(segment));
    }
    Ok(encoded.join("/"))
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
