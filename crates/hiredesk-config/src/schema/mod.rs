//! Configuration schema types for hiredesk.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod api;
mod auth;
mod system;

pub use api::*;
pub use auth::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for hiredesk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct HiredeskConfig {
    pub api: ApiConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
