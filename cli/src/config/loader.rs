//! CLI configuration loader for cite-verify
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./cite-verify.json or ./.cite-verify/config.json
//! 3. User config: $XDG_CONFIG_HOME/cite-verify/config.json
//! 4. Built-in defaults (public Crossref API)
//!
//! Flag overrides (which clap also fills from `CITE_VERIFY_*` environment
//! variables) are applied on top of whichever source was found.

use anyhow::{anyhow, Context, Result};
use cite_verify_core::RegistryConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file name looked up in the working directory
const CONFIG_FILE_NAME: &str = "cite-verify.json";

/// Directory name used under the working directory and the user config dir
const CONFIG_DIR_NAME: &str = "cite-verify";

/// Raw configuration file format. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    /// Registry base URL
    pub base_url: Option<String>,
    /// User-Agent header value
    pub user_agent: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
}

/// CLI configuration loader
#[derive(Debug, Clone, Default)]
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Flag overrides
    base_url_override: Option<String>,
    user_agent_override: Option<String>,
    timeout_override: Option<u64>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set base URL override
    pub fn with_base_url_override(mut self, base_url: String) -> Self {
        self.base_url_override = Some(base_url);
        self
    }

    /// Set user agent override
    pub fn with_user_agent_override(mut self, user_agent: String) -> Self {
        self.user_agent_override = Some(user_agent);
        self
    }

    /// Set timeout override
    pub fn with_timeout_override(mut self, timeout_secs: u64) -> Self {
        self.timeout_override = Some(timeout_secs);
        self
    }

    /// Load and resolve configuration
    pub async fn load(&self) -> Result<RegistryConfig> {
        // Step 1: Find and load base configuration
        let mut config = if let Some(override_path) = &self.config_override {
            self.load_from_path(override_path).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?
        } else {
            self.search_and_load().await?
        };

        // Step 2: Apply flag overrides
        if let Some(base_url) = &self.base_url_override {
            config.base_url = Some(base_url.clone());
        }
        if let Some(user_agent) = &self.user_agent_override {
            config.user_agent = Some(user_agent.clone());
        }
        if let Some(timeout_secs) = self.timeout_override {
            config.timeout_secs = Some(timeout_secs);
        }

        // Step 3: Resolve to final registry config
        resolve_config(config)
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<RawConfig> {
        let cwd = std::env::current_dir()?;
        let mut candidates = vec![
            cwd.join(CONFIG_FILE_NAME),
            cwd.join(format!(".{}", CONFIG_DIR_NAME)).join("config.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join(CONFIG_DIR_NAME).join("config.json"));
        }

        for candidate in candidates {
            if candidate.is_file() {
                debug!("Using config file {}", candidate.display());
                return self.load_file(&candidate).await;
            }
        }

        debug!("No config file found, using defaults");
        Ok(RawConfig::default())
    }

    /// Load configuration from a specific path (file or directory)
    async fn load_from_path(&self, path: &Path) -> Result<RawConfig> {
        if path.is_file() {
            self.load_file(path).await
        } else if path.is_dir() {
            let config_file = path.join("config.json");
            if config_file.exists() {
                self.load_file(&config_file).await
            } else {
                Err(anyhow!(
                    "No config.json found in directory: {}",
                    path.display()
                ))
            }
        } else {
            Err(anyhow!("Config path does not exist: {}", path.display()))
        }
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> Result<RawConfig> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

/// Fill unset fields with defaults and validate
fn resolve_config(raw: RawConfig) -> Result<RegistryConfig> {
    let mut config = RegistryConfig::default();

    if let Some(base_url) = raw.base_url {
        config.base_url = base_url;
    }
    if let Some(user_agent) = raw.user_agent {
        config.user_agent = user_agent;
    }
    if let Some(timeout_secs) = raw.timeout_secs {
        config.timeout_secs = timeout_secs;
    }

    config
        .validate()
        .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

    Ok(config)
}
