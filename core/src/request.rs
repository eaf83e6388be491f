//! The caller-facing description of one API call.

use serde::{Deserialize, Serialize};

use crate::error::FetchError;
use crate::form::FormData;
use crate::headers::Headers;
use crate::http::HttpMethod;

/// Payload attached to a request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Serialized to JSON text before sending.
    Json(serde_json::Value),
    /// Sent as multipart bytes, never JSON-encoded.
    FormData(FormData),
}

/// Everything `FetchClient::fetch` needs to issue one request.
///
/// `endpoint` is appended to the base URL verbatim, so it normally starts
/// with `/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestOptions {
    pub endpoint: String,
    pub method: HttpMethod,
    #[serde(default)]
    pub with_auth: bool,
    #[serde(default, deserialize_with = "json_body")]
    pub body: Option<RequestBody>,
    #[serde(default)]
    pub custom_headers: Headers,
    #[serde(default)]
    pub is_body_form_data: bool,
}

fn json_body<'de, D>(deserializer: D) -> Result<Option<RequestBody>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.map(RequestBody::Json))
}

impl RequestOptions {
    pub fn new(method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method,
            with_auth: false,
            body: None,
            custom_headers: Headers::new(),
            is_body_form_data: false,
        }
    }

    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, endpoint)
    }

    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, endpoint)
    }

    pub fn put(endpoint: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, endpoint)
    }

    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, endpoint)
    }

    pub fn patch(endpoint: impl Into<String>) -> Self {
        Self::new(HttpMethod::Patch, endpoint)
    }

    /// Send the configured bearer token, if there is one.
    pub fn with_auth(mut self) -> Self {
        self.with_auth = true;
        self
    }

    /// JSON body. `null` means no body at all.
    pub fn json(mut self, value: serde_json::Value) -> Self {
        self.body = match value {
            serde_json::Value::Null => None,
            value => Some(RequestBody::Json(value)),
        };
        self
    }

    /// Like `json`, for any serializable value.
    pub fn try_json<T: Serialize + ?Sized>(self, value: &T) -> Result<Self, FetchError> {
        let value = serde_json::to_value(value).map_err(FetchError::Serialization)?;
        Ok(self.json(value))
    }

    /// Attach a multipart body. This also switches the request into
    /// form-data mode.
    pub fn form_data(mut self, form: FormData) -> Self {
        self.body = Some(RequestBody::FormData(form));
        self.is_body_form_data = true;
        self
    }

    /// Force form-data header handling on or off.
    pub fn body_form_data(mut self, is_form_data: bool) -> Self {
        self.is_body_form_data = is_form_data;
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_headers.insert(name, value);
        self
    }

    pub fn headers(mut self, headers: Headers) -> Self {
        self.custom_headers.extend_from(&headers);
        self
    }

    /// Whether `Content-Type` must be left to the transport.
    pub fn is_form_data(&self) -> bool {
        self.is_body_form_data || matches!(self.body, Some(RequestBody::FormData(_)))
    }
}
