//! Header map and the header composition policy.
//!
//! # Design
//! `Headers` keeps insertion order and treats names case-insensitively, the
//! way HTTP does: inserting `content-type` replaces an earlier
//! `Content-Type` rather than adding a second entry.
//!
//! It is a plain string map rather than an `http::HeaderMap` so that the
//! caller's spelling of each name survives composition and serialization,
//! and so that building a request never fails. Names and values are checked
//! only when a transport puts them on the wire; a bad one comes back as a
//! `TransportError::InvalidRequest` in the envelope.
//!
//! `compose_headers` is a pure function. It never touches the configured
//! global headers in place; every call starts from a fresh map and layers,
//! lowest to highest precedence:
//!
//! 1. `Content-Type: application/json` (plus `Authorization` when asked for
//!    and a token is configured)
//! 2. the configured global headers
//! 3. the per-call custom headers
//! 4. for form-data requests, removal of `Content-Type`

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::ApiConfig;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
pub const APPLICATION_JSON: &str = "application/json";

/// Ordered, case-insensitive mapping of header names to values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing any entry whose name matches
    /// case-insensitively. The new spelling of the name wins.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.position(&name) {
            Some(i) => self.entries[i] = (name, value),
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.entries[i].1.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.position(name).map(|i| self.entries.remove(i).1)
    }

    /// Overlay every entry of `other` on top of `self`.
    pub fn extend_from(&mut self, other: &Headers) {
        for (name, value) in other.iter() {
            self.insert(name, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<(String, String)> {
        self.entries
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(k, _)| k.eq_ignore_ascii_case(name))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Headers::new();
        for (k, v) in iter {
            headers.insert(k, v);
        }
        headers
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Headers {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl Serialize for Headers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for Headers {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HeadersVisitor;

        impl<'de> Visitor<'de> for HeadersVisitor {
            type Value = Headers;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of header names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Headers, A::Error> {
                let mut headers = Headers::new();
                while let Some((name, value)) = map.next_entry::<String, String>()? {
                    headers.insert(name, value);
                }
                Ok(headers)
            }
        }

        deserializer.deserialize_map(HeadersVisitor)
    }
}

/// Build the final header set for one request.
///
/// An empty token with `with_auth` set silently yields no `Authorization`
/// header. For form-data requests `Content-Type` is always absent so the
/// transport can supply the multipart boundary, even when a global or custom
/// header asked for one.
pub fn compose_headers(
    config: &ApiConfig,
    with_auth: bool,
    custom_headers: &Headers,
    is_form_data: bool,
) -> Headers {
    let mut headers = Headers::new();
    headers.insert(CONTENT_TYPE, APPLICATION_JSON);

    if with_auth && !config.token.is_empty() {
        headers.insert(AUTHORIZATION, format!("Bearer {}", config.token));
    }

    headers.extend_from(&config.global_headers);
    headers.extend_from(custom_headers);

    if is_form_data {
        headers.remove(CONTENT_TYPE);
    }
    headers
}
