//! Endpoint URL resolution.

/// Join the API `origin` and an `endpoint` path with exactly one slash.
///
/// Trailing slashes on the origin and leading slashes on the endpoint are
/// stripped first, so the result does not depend on how many slashes the
/// caller supplied.
pub fn resolve_url(origin: &str, endpoint: &str) -> String {
    let origin = origin.trim_end_matches('/');
    let path = endpoint.trim_start_matches('/');
    format!("{origin}/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_single_slash() {
        assert_eq!(
            resolve_url("https://api.example.com/", "/jobs"),
            "https://api.example.com/jobs"
        );
    }

    #[test]
    fn slash_combinations_all_resolve_the_same() {
        let origins = [
            "https://api.example.com",
            "https://api.example.com/",
            "https://api.example.com///",
        ];
        let endpoints = ["jobs/42", "/jobs/42", "///jobs/42"];
        for origin in origins {
            for endpoint in endpoints {
                assert_eq!(
                    resolve_url(origin, endpoint),
                    "https://api.example.com/jobs/42",
                    "origin={origin:?} endpoint={endpoint:?}"
                );
            }
        }
    }

    #[test]
    fn resolving_is_idempotent_on_the_path() {
        let once = resolve_url("https://api.example.com/", "//candidates");
        let path = once.trim_start_matches("https://api.example.com");
        assert_eq!(resolve_url("https://api.example.com/", path), once);
    }

    #[test]
    fn keeps_origin_base_path_and_query() {
        assert_eq!(
            resolve_url("https://example.com/api/v1/", "/jobs?status=open"),
            "https://example.com/api/v1/jobs?status=open"
        );
    }

    #[test]
    fn inner_slashes_are_untouched() {
        assert_eq!(
            resolve_url("http://localhost:8000", "/jobs//7/"),
            "http://localhost:8000/jobs//7/"
        );
    }

    #[test]
    fn empty_endpoint_hits_origin_root() {
        assert_eq!(resolve_url("http://localhost:8000/", ""), "http://localhost:8000/");
    }
}
