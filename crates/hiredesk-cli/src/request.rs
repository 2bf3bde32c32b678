//! Turn command-line flags into request options.

use hiredesk_api::{CacheMode, FetchError, Method, RequestOptions};

pub fn build_options(
    method: &str,
    headers: &[String],
    data: Option<&str>,
    no_cache: bool,
) -> Result<RequestOptions, FetchError> {
    let method = Method::from_bytes(method.trim().to_ascii_uppercase().as_bytes())
        .map_err(|e| FetchError::ParseError(format!("invalid method {method:?}: {e}")))?;
    let mut options = RequestOptions::new(method);

    for header in headers {
        let (name, value) = header.split_once(':').ok_or_else(|| {
            FetchError::InvalidHeader(format!("expected `Name: value`, got {header:?}"))
        })?;
        options = options.try_header(name, value)?;
    }

    if let Some(data) = data {
        options = match serde_json::from_str::<serde_json::Value>(data) {
            Ok(json) => options.json(&json)?,
            Err(_) => options.body(data),
        };
    }

    if no_cache {
        options = options.cache(CacheMode::NoStore);
    }
    Ok(options)
}
