//! Request executor for a single backend API.
//!
//! # Design
//! `FetchClient` holds a shared `ConfigStore` and a `Transport`. Each call
//! captures one configuration snapshot at the start and uses it for the base
//! URL, the token and the global headers, so a concurrent `set_config` cannot
//! mix old and new values within one request.
//!
//! As in a host-does-IO client, the work is split in two pure halves around
//! the network call: `build_request` produces an `HttpRequest` and
//! `parse_response` classifies an `HttpResponse`. `fetch` wires them to the
//! transport. Callers that drive their own I/O can use the halves directly.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::{ApiConfig, ConfigStore};
use crate::envelope::ResultEnvelope;
use crate::error::FetchError;
use crate::headers::compose_headers;
use crate::http::{HttpBody, HttpRequest, HttpResponse};
use crate::request::{RequestBody, RequestOptions};
use crate::transport::Transport;

/// Issues JSON requests against the configured base URL and reports every
/// outcome as a `ResultEnvelope`.
#[derive(Debug, Clone)]
pub struct FetchClient<T> {
    config: Arc<ConfigStore>,
    transport: T,
}

impl<T: Transport> FetchClient<T> {
    pub fn new(config: Arc<ConfigStore>, transport: T) -> Self {
        Self { config, transport }
    }

    /// A client with its own store holding `config`.
    pub fn with_config(config: ApiConfig, transport: T) -> Self {
        Self::new(Arc::new(ConfigStore::from_config(config)), transport)
    }

    pub fn config(&self) -> &Arc<ConfigStore> {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build the outgoing request from the current configuration.
    ///
    /// Fails with `FetchError::MissingBaseUrl` when no base URL is set.
    pub fn build_request(&self, options: &RequestOptions) -> Result<HttpRequest, FetchError> {
        build_request(&self.config.snapshot(), options)
    }

    /// Classify a completed call.
    ///
    /// The body is parsed as JSON whatever the status. A body that does not
    /// parse as `R` makes the whole call a transport-class failure, with no
    /// `data` and no `response`.
    pub fn parse_response<R: DeserializeOwned>(&self, response: HttpResponse) -> ResultEnvelope<R> {
        parse_response(response)
    }

    /// Send one request and normalize the result.
    ///
    /// `Err` is reserved for misconfiguration detected before any I/O;
    /// network failures, failure statuses and unparsable bodies are all
    /// reported through the envelope.
    pub async fn fetch<R: DeserializeOwned>(
        &self,
        options: RequestOptions,
    ) -> Result<ResultEnvelope<R>, FetchError> {
        let request = self.build_request(&options)?;
        tracing::debug!(method = %request.method, url = %request.url, "sending request");

        match self.transport.send(request).await {
            Ok(response) => Ok(parse_response(response)),
            Err(e) => {
                tracing::error!(endpoint = %options.endpoint, error = %e, "API call failed");
                Ok(ResultEnvelope::transport_error(e.to_string()))
            }
        }
    }
}

fn build_request(config: &ApiConfig, options: &RequestOptions) -> Result<HttpRequest, FetchError> {
    if config.base_url.is_empty() {
        return Err(FetchError::MissingBaseUrl);
    }

    let is_form_data = options.is_form_data();
    let headers = compose_headers(config, options.with_auth, &options.custom_headers, is_form_data);

    let body = match &options.body {
        None => None,
        Some(RequestBody::Json(value)) => Some(HttpBody::Json(
            serde_json::to_string(value).map_err(FetchError::Serialization)?,
        )),
        Some(RequestBody::FormData(form)) => Some(HttpBody::FormData(form.clone())),
    };

    Ok(HttpRequest {
        method: options.method,
        url: format!("{}{}", config.base_url, options.endpoint),
        headers,
        body,
    })
}

fn parse_response<R: DeserializeOwned>(response: HttpResponse) -> ResultEnvelope<R> {
    tracing::debug!(status = response.status, "response received");

    let data: R = match serde_json::from_slice(&response.body) {
        Ok(data) => data,
        Err(e) => {
            tracing::error!(status = response.status, error = %e, "API call failed");
            return ResultEnvelope::transport_error(e.to_string());
        }
    };

    if !response.is_success() {
        tracing::warn!(status = response.status, "request failed with non-success status");
        return ResultEnvelope::http_error(data, response);
    }
    ResultEnvelope::success(data, response)
}
