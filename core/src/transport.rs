//! Pluggable network transports.
//!
//! A `Transport` moves one `HttpRequest` over the wire and hands back the
//! `HttpResponse` whatever its status. It reports an `Err` only when no
//! response was received at all. Form bodies have no `Content-Type` in the
//! composed headers; the transport must supply the multipart one.

use std::future::Future;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

mod reqwest_transport;
pub use reqwest_transport::ReqwestTransport;

/// Executes requests built by `FetchClient`.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}
