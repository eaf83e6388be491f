//! HTTP transport types shared by the executor and the transports.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The
//! executor builds `HttpRequest` values and classifies `HttpResponse` values
//! without knowing which transport moved the bytes, so stubbed transports in
//! tests exercise exactly the same code path as the real ones.
//!
//! All fields use owned types (`String`, `Vec`) so a request can be handed to
//! a transport by value and a response can be kept in the result envelope.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::form::FormData;
use crate::headers::Headers;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outgoing request payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpBody {
    /// JSON text produced by `serde_json::to_string`.
    Json(String),
    /// A multipart form. The transport encodes it and sets the
    /// `multipart/form-data` `Content-Type` with its boundary.
    FormData(FormData),
}

/// An HTTP request described as plain data.
///
/// Built by `FetchClient::build_request`. A `Transport` executes it and
/// returns the corresponding `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Headers,
    pub body: Option<HttpBody>,
}

/// An HTTP response described as plain data.
///
/// Returned by a `Transport` whatever the status code; status
/// interpretation happens in `FetchClient::parse_response`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// True for statuses in the 200–299 range.
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    /// First header value matching `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
