// SPDX-License-Identifier: GPL-3.0-or-later
use std::path::Path;

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::info;

pub const DISCOGS_API_BASE: &str = "https://api.discogs.com";

const CONFIG_KEYS: [&str; 4] = ["base_url", "currency", "user_agent", "token"];

/// Settings used to construct a Discogs client.
///
/// Values are not validated here; the client factory rejects an empty
/// user agent or an unsupported currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DiscogsConfig {
    /// API endpoint, overridable to point at a mock server.
    pub base_url: String,
    /// Marketplace currency code. Empty means USD.
    pub currency: String,
    /// Sent as `User-Agent` on every request. Required by Discogs.
    pub user_agent: String,
    /// Personal access token, required for search and user-scoped calls.
    pub token: Option<String>,
}

impl Default for DiscogsConfig {
    fn default() -> Self {
        Self {
            base_url: DISCOGS_API_BASE.to_string(),
            currency: String::new(),
            user_agent: String::new(),
            token: None,
        }
    }
}

impl DiscogsConfig {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            ..Self::default()
        }
    }

    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// Load configuration from defaults, optional TOML file, and environment overrides (prefix: SPINDLE_DISCOGS_).
pub fn load(config_path: Option<&Path>) -> Result<DiscogsConfig> {
    let mut figment = Figment::from(Serialized::defaults(DiscogsConfig::default()));

    if let Some(path) = config_path {
        figment = figment.merge(Toml::file(path));
    }

    // Every field is a string, so env values are merged verbatim instead of
    // letting figment parse `1234` or `2.0` into numbers.
    let env = Env::prefixed("SPINDLE_DISCOGS_").only(&CONFIG_KEYS);
    for (key, value) in env.iter() {
        figment = figment.merge(Serialized::default(key.as_str(), value));
    }

    let config: DiscogsConfig = figment.extract()?;
    info!(
        target: "config",
        base_url = %config.base_url,
        token_set = config.token.is_some(),
        "configuration loaded"
    );
    Ok(config)
}
