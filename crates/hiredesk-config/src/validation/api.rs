use crate::schema::HiredeskConfig;

use super::helpers::{validate_http_url, validate_range};

pub(crate) fn validate_api(errors: &mut Vec<String>, config: &HiredeskConfig) {
    validate_http_url(errors, "api.origin", &config.api.origin);
    validate_range(
        errors,
        "api.connect_timeout_secs",
        config.api.connect_timeout_secs,
        1,
        60,
    );
    validate_range(errors, "api.timeout_secs", config.api.timeout_secs, 1, 600);
}
