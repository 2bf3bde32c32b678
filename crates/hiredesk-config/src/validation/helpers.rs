//! Shared validation helpers.

use std::sync::OnceLock;

use regex::Regex;

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error unless `value` is an absolute http(s) URL with a host.
pub(crate) fn validate_http_url(errors: &mut Vec<String>, name: &str, value: &str) {
    static HTTP_URL: OnceLock<Regex> = OnceLock::new();
    let re = HTTP_URL.get_or_init(|| {
        Regex::new(r"^https?://[^\s/?#]+(/[^\s]*)?$").expect("static regex is valid")
    });
    if !re.is_match(value) {
        errors.push(format!("{name} = {value:?} is not an http(s) URL"));
    }
}
