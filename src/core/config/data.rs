use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::catalog::{lookup, CatalogEntry, ModelRef, NotFound, Personality};
use crate::core::inference::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// User preferences read from `config.toml`.
///
/// The API credential is deliberately absent: it only ever lives in memory.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Display name or provider id of the model selected at startup
    pub default_model: Option<String>,
    /// Display name or slug of the personality selected at startup
    pub default_personality: Option<String>,
    /// Base URL of the OpenAI-compatible endpoint
    pub base_url: Option<String>,
    /// Per-request timeout in seconds
    pub request_timeout_secs: Option<u64>,
}

impl Config {
    /// Model to start with: explicit override, then config, then catalog default.
    pub fn resolve_model(&self, override_name: Option<&str>) -> Result<ModelRef, NotFound> {
        match override_name.or(self.default_model.as_deref()) {
            Some(name) => lookup::<ModelRef>(name),
            None => Ok(ModelRef::default_entry()),
        }
    }

    pub fn resolve_personality(
        &self,
        override_name: Option<&str>,
    ) -> Result<Personality, NotFound> {
        match override_name.or(self.default_personality.as_deref()) {
            Some(name) => lookup::<Personality>(name),
            None => Ok(Personality::default_entry()),
        }
    }

    pub fn base_url_or_default(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// A zero timeout would fail every request, so it falls back to the default.
    pub fn request_timeout(&self) -> Duration {
        let secs = self
            .request_timeout_secs
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }
}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}
