//! Uniform success/error result of a request.
//!
//! # Design
//! `Outcome` makes "exactly one of `error` or `success`" a property of the
//! type. On the wire (serde) the envelope flattens to
//! `{"success": "...", "data": ...}` or `{"error": "...", "data": ...}`, and
//! `data` is left out entirely when the call never produced a parsed body.
//! The raw `HttpResponse` is carried for callers that need status or headers
//! but is not serialized.

use serde::{Deserialize, Serialize};

use crate::http::HttpResponse;

pub const SUCCESS_MESSAGE: &str = "Request Successful!";
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success(String),
    Error(String),
}

/// Result of `FetchClient::fetch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEnvelope<R = serde_json::Value> {
    #[serde(flatten)]
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<R>,
    #[serde(skip)]
    pub response: Option<HttpResponse>,
}

impl<R> ResultEnvelope<R> {
    /// Completed call with a 2xx status.
    pub fn success(data: R, response: HttpResponse) -> Self {
        Self {
            outcome: Outcome::Success(SUCCESS_MESSAGE.to_string()),
            data: Some(data),
            response: Some(response),
        }
    }

    /// Completed call with a non-2xx status; the parsed body is kept.
    pub fn http_error(data: R, response: HttpResponse) -> Self {
        Self {
            outcome: Outcome::Error(format!("Failed with status {}", response.status)),
            data: Some(data),
            response: Some(response),
        }
    }

    /// The call failed before a parsed body was available. An empty message
    /// falls back to a generic one.
    pub fn transport_error(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_string()
        } else {
            message
        };
        Self {
            outcome: Outcome::Error(message),
            data: None,
            response: None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Error(message) => Some(message),
            Outcome::Success(_) => None,
        }
    }

    pub fn success_message(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Success(message) => Some(message),
            Outcome::Error(_) => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success(_))
    }

    /// HTTP status, when the call completed.
    pub fn status(&self) -> Option<u16> {
        self.response.as_ref().map(|r| r.status)
    }
}
