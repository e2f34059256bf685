//! Rewrite configuration.
//!
//! The embedding server decides where the config file lives; this module
//! only parses it. Absent file or absent keys fall back to defaults.

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Path-parameter name the session layer recognizes on inbound URLs. The
/// rewritten parameter must use exactly this name or the container will
/// never see the id again.
pub const DEFAULT_SESSION_PARAM: &str = "jsessionid";

/// Configuration for session URL rewriting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteConfig {
    /// Name of the embedded session path parameter.
    #[serde(default = "default_session_param")]
    pub session_param_name: String,
}

fn default_session_param() -> String {
    DEFAULT_SESSION_PARAM.to_string()
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            session_param_name: default_session_param(),
        }
    }
}

impl RewriteConfig {
    /// Parses a TOML document into a config.
    pub fn from_toml(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }

    /// Loads configuration from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("no rewrite config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)?;
        Self::from_toml(&data)
    }
}
