//! hiredesk: issue one authenticated request against the hiredesk API.
//!
//! Resolves the endpoint against the configured origin, attaches the
//! session's bearer token and, unless `--server` is given, recovers from a
//! 401 by refreshing the session and retrying once.

mod cli;
mod request;
mod wiring;

use std::path::Path;
use std::process::ExitCode;

use hiredesk_api::{resolve_url, ApiResponse};
use hiredesk_common::{ConfigError, Event, HiredeskError};
use hiredesk_config::HiredeskConfig;
use tokio::sync::broadcast;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::wiring::{build_client, Credentials};

/// Only a missing file falls back to defaults (plus env overrides); the
/// notice is handed back so it can be logged once tracing is up. Parse and
/// validation errors are fatal.
fn load_config(
    path: Option<&Path>,
) -> Result<(HiredeskConfig, Option<ConfigError>), ConfigError> {
    let loaded = match path {
        Some(path) => hiredesk_config::load_config_from(path),
        None => hiredesk_config::load_config(),
    };
    match loaded {
        Ok(config) => Ok((config, None)),
        Err(e @ ConfigError::FileNotFound(_)) => {
            let mut config = HiredeskConfig::default();
            hiredesk_config::apply_env_overrides(&mut config);
            Ok((config, Some(e)))
        }
        Err(e) => Err(e),
    }
}

fn init_logging(args: &Args, config: &HiredeskConfig) {
    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.as_directive().to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_response(response: &ApiResponse) {
    eprintln!("HTTP {}", response.status());
    let body = response.bytes();
    if body.is_empty() {
        return;
    }
    match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(json) => match serde_json::to_string_pretty(&json) {
            Ok(pretty) => println!("{pretty}"),
            Err(_) => println!("{}", String::from_utf8_lossy(body)),
        },
        Err(_) => println!("{}", String::from_utf8_lossy(body)),
    }
}

fn report_events(events: &mut broadcast::Receiver<Event>, origin: &str) {
    while let Ok(event) = events.try_recv() {
        match event {
            Event::SignedOut { redirect_to } => {
                eprintln!(
                    "Signed out; sign in again at {}",
                    resolve_url(origin, &redirect_to)
                );
            }
            Event::SessionRefreshed { .. } => tracing::info!("Session refreshed"),
            Event::RefreshFailed { reason } => tracing::warn!(%reason, "Session refresh failed"),
            Event::Unknown => {}
        }
    }
}

async fn run(args: Args, config: HiredeskConfig) -> Result<ExitCode, HiredeskError> {
    let options = request::build_options(
        &args.method,
        &args.headers,
        args.data.as_deref(),
        args.no_cache,
    )
    .map_err(|e| HiredeskError::Other(e.to_string()))?;

    let credentials = Credentials::resolve(args.token, args.refresh_token);
    let client = build_client(&config, credentials, args.server)?;
    let mut events = client.events.subscribe();

    tracing::debug!(endpoint = %args.endpoint, server = args.server, "Sending request");
    let response = client
        .fetcher
        .request(&args.endpoint, options)
        .await
        .map_err(|e| HiredeskError::Network(e.to_string()))?;

    print_response(&response);
    report_events(&mut events, &config.api.origin);

    Ok(if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();
    let (mut config, load_error) = match load_config(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("hiredesk: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(ref origin) = args.origin {
        config.api.origin = origin.clone();
    }
    init_logging(&args, &config);
    if let Some(e) = load_error {
        tracing::warn!(error = %e, "Config file missing, using defaults");
    }

    match run(args, config).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("hiredesk: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[api]\norigin = \"https://api.prod.example.com\"\ntimeout_secs = 0\n",
        )
        .unwrap();

        let err = load_config(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn unparsable_config_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api\norigin = ").unwrap();

        let err = load_config(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let (config, notice) = load_config(Some(path.as_path())).unwrap();
        assert!(matches!(notice, Some(ConfigError::FileNotFound(_))));
        assert_eq!(config.auth.login_path, "/login");
    }

    #[test]
    fn valid_config_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[auth]\nlogin_path = \"/signin\"\n").unwrap();

        let (config, notice) = load_config(Some(path.as_path())).unwrap();
        assert!(notice.is_none());
        assert_eq!(config.auth.login_path, "/signin");
    }
}
