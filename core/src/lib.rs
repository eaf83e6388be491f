//! JSON request helper for client applications talking to one backend API.
//!
//! # Overview
//! Centralizes base URL, bearer token and default headers, and exposes one
//! operation, `FetchClient::fetch`, that issues a JSON request and normalizes
//! the result into a `ResultEnvelope` carrying either `success` or `error`.
//!
//! # Design
//! - `ConfigStore` is injected into the client; every request captures one
//!   immutable `ApiConfig` snapshot.
//! - Header composition is a pure function (`compose_headers`).
//! - `FetchClient` splits each call into `build_request` and
//!   `parse_response` around a pluggable `Transport`; `ReqwestTransport` is
//!   the bundled async one.
//! - Only misconfiguration is returned as `Err`; HTTP and network failures
//!   are ordinary envelope values.
//! - `set_config` and `fetch_wrapper` offer the same operations on a
//!   process-wide store for callers that want a single global setup.

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod form;
pub mod headers;
pub mod http;
pub mod request;
pub mod transport;

pub use client::FetchClient;
pub use config::{global_config, set_config, ApiConfig, ConfigStore};
pub use envelope::{Outcome, ResultEnvelope};
pub use error::{FetchError, TransportError};
pub use form::{FormData, FormPart};
pub use headers::{compose_headers, Headers};
pub use http::{HttpBody, HttpMethod, HttpRequest, HttpResponse};
pub use request::{RequestBody, RequestOptions};
pub use transport::{ReqwestTransport, Transport};

use std::sync::LazyLock;

static GLOBAL_TRANSPORT: LazyLock<ReqwestTransport> = LazyLock::new(ReqwestTransport::new);

/// Issue `options` against the process-wide configuration set with
/// `set_config`.
///
/// All calls share one `ReqwestTransport` and its connection pool. Pooled
/// connections belong to the tokio runtime that opened them, so use this
/// from a single long-lived runtime.
pub async fn fetch_wrapper<R: serde::de::DeserializeOwned>(
    options: RequestOptions,
) -> Result<ResultEnvelope<R>, FetchError> {
    FetchClient::new(global_config(), GLOBAL_TRANSPORT.clone())
        .fetch(options)
        .await
}
