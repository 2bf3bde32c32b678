use std::path::PathBuf;

use clap::Parser;

/// hiredesk: issue one authenticated request against the hiredesk API.
#[derive(Parser, Debug)]
#[command(name = "hiredesk", version, about)]
pub struct Args {
    /// Endpoint path relative to the API origin, e.g. `/jobs`.
    pub endpoint: String,

    /// HTTP method.
    #[arg(short = 'X', long, default_value = "GET")]
    pub method: String,

    /// Extra request header as `Name: value`. Repeatable.
    #[arg(short = 'H', long = "header")]
    pub headers: Vec<String>,

    /// Request body. Sent as JSON when it parses as JSON.
    #[arg(short = 'd', long)]
    pub data: Option<String>,

    /// Bypass HTTP caches (`Cache-Control: no-store`).
    #[arg(long)]
    pub no_cache: bool,

    /// Access token. Falls back to `HIREDESK_ACCESS_TOKEN`.
    #[arg(long)]
    pub token: Option<String>,

    /// Refresh token used to rotate the access token. Falls back to
    /// `HIREDESK_REFRESH_TOKEN`.
    #[arg(long)]
    pub refresh_token: Option<String>,

    /// Server-side mode: read the session once, never refresh or retry.
    #[arg(long)]
    pub server: bool,

    /// API origin override (beats config file and `HIREDESK_API_URL`).
    #[arg(long)]
    pub origin: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_curl_like_flags() {
        let args = Args::try_parse_from([
            "hiredesk",
            "/jobs",
            "-X",
            "POST",
            "-H",
            "X-Tenant: acme",
            "-H",
            "Accept: application/json",
            "-d",
            r#"{"title":"Designer"}"#,
            "--server",
        ])
        .unwrap();
        assert_eq!(args.endpoint, "/jobs");
        assert_eq!(args.method, "POST");
        assert_eq!(args.headers.len(), 2);
        assert!(args.data.is_some());
        assert!(args.server);
        assert!(!args.no_cache);
    }

    #[test]
    fn defaults_to_get() {
        let args = Args::try_parse_from(["hiredesk", "jobs"]).unwrap();
        assert_eq!(args.method, "GET");
        assert!(args.headers.is_empty());
        assert!(args.token.is_none());
    }

    #[test]
    fn endpoint_is_required() {
        assert!(Args::try_parse_from(["hiredesk"]).is_err());
    }
}
