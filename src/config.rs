use crate::constants::DEFAULT_USER_AGENT;
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Shared fetch settings, constructed once at startup and passed explicitly
/// into the HTTP fetcher. Never mutated after construction.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: 30,
        }
    }
}

impl FetchConfig {
    /// Loads `config.toml` if present, otherwise falls back to defaults.
    pub fn load() -> Result<Self> {
        let config_path = "config.toml";
        if !Path::new(config_path).exists() {
            return Ok(Self::default());
        }
        let config_content = fs::read_to_string(config_path)?;
        let config: FetchConfig = toml::from_str(&config_content)?;
        Ok(config)
    }
}

/// Strava requires an authenticated API; without this token the Strava
/// source degrades to an empty result.
pub fn strava_access_token() -> Option<String> {
    std::env::var("STRAVA_ACCESS_TOKEN")
        .ok()
        .filter(|token| !token.trim().is_empty())
}
