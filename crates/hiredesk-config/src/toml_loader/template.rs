//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# hiredesk configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[api]
# Backend origin. HIREDESK_API_URL overrides this value.
# origin = "http://localhost:8000"
# connect_timeout_secs = 10   # 1-60
# timeout_secs = 30           # 1-600

[auth]
# login_path = "/login"       # where a forced sign-out redirects
# OAuth2 token endpoint for refresh_token grants.
# HIREDESK_TOKEN_ENDPOINT overrides this value.
# token_endpoint = "https://id.example.com/oauth/token"
# client_id = "hiredesk-dashboard"
# refresh_skew_secs = 30      # 0-3600

[logging]
# level = "INFO"              # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
