use crate::schema::HiredeskConfig;

use super::helpers::{validate_http_url, validate_range};

pub(crate) fn validate_auth(errors: &mut Vec<String>, config: &HiredeskConfig) {
    if !config.auth.login_path.starts_with('/') {
        errors.push(format!(
            "auth.login_path = {:?} must be an absolute path",
            config.auth.login_path
        ));
    }
    if let Some(ref endpoint) = config.auth.token_endpoint {
        validate_http_url(errors, "auth.token_endpoint", endpoint);
    }
    validate_range(
        errors,
        "auth.refresh_skew_secs",
        config.auth.refresh_skew_secs,
        0,
        3600,
    );
}
