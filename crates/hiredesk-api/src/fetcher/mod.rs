//! The two fetcher variants and the request preparation they share.

mod client;
mod gate;
mod server;


use reqwest::header::{HeaderValue, AUTHORIZATION};

use crate::transport::{ApiRequest, RequestOptions};
use crate::url::resolve_url;
use crate::FetchError;

pub use client::{AuthenticatedFetcher, DEFAULT_LOGIN_REDIRECT};
pub use server::ServerFetcher;

/// Resolve the URL and copy caller options into an outgoing request.
pub(crate) fn prepare(origin: &str, endpoint: &str, options: &RequestOptions) -> ApiRequest {
    ApiRequest::from_options(resolve_url(origin, endpoint), options)
}

/// Whether the caller supplied its own `Authorization` header. Such
/// requests are sent as built: the caller's credential wins.
pub(crate) fn has_caller_authorization(request: &ApiRequest) -> bool {
    request.headers.contains_key(AUTHORIZATION)
}

/// Set `Authorization: Bearer <token>`, replacing any previous bearer value.
pub(crate) fn set_bearer(request: &mut ApiRequest, token: &str) -> Result<(), FetchError> {
    let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|e| FetchError::InvalidHeader(format!("authorization: {e}")))?;
    value.set_sensitive(true);
    request.headers.insert(AUTHORIZATION, value);
    Ok(())
}
