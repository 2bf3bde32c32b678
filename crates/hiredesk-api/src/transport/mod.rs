//! HTTP transport seam: request/response types and the reqwest backend.

mod http;
mod request;
mod response;

use async_trait::async_trait;

use crate::FetchError;

pub use http::ReqwestTransport;
pub use request::{ApiRequest, CacheMode, RequestOptions};
pub use response::ApiResponse;

/// Sends one fully built request and buffers the response.
///
/// Implementations return every HTTP status as `Ok`; `Err` means the
/// request never produced a response (DNS, connect, timeout, body read).
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, FetchError>;
}
