//! Error types for the request executor.
//!
//! # Design
//! Only `FetchError` ever leaves `FetchClient::fetch` as an `Err`. It covers
//! problems in the caller's setup, raised before any network I/O. Everything
//! that happens on the wire, including HTTP failure statuses and bodies that
//! are not valid JSON, is reported inside the `ResultEnvelope` instead.
//! `TransportError` is what transports hand back; its `Display` text becomes
//! the envelope's `error` message.

/// Misconfiguration raised before a request is sent.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// No base URL has been configured.
    #[error("baseurl error: Base URL is missing or empty, ensure it is correctly configured.")]
    MissingBaseUrl,

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),
}

/// A request that never produced an HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// DNS failure, refused connection, TLS handshake failure.
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The transport could not turn the `HttpRequest` into a wire request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("{0}")]
    Other(String),
}
