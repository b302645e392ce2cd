//! Server configuration read from Shuttle secrets (Secrets.toml)

use anyhow::{bail, Context, Result};
use shuttle_runtime::SecretStore;

const DEFAULT_PAGE_SIZE: i64 = 20;

/// Runtime settings for the API server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Page size used when a paginated request omits `pageSize`
    pub default_page_size: i64,
    /// Whether to install the permissive CORS layer
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            cors_permissive: true,
        }
    }
}

impl ServerConfig {
    pub fn from_secrets(secrets: &SecretStore) -> Result<Self> {
        Self::from_lookup(|key| secrets.get(key))
    }

    /// Build from any key lookup; missing keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("DEFAULT_PAGE_SIZE") {
            let size: i64 = raw
                .trim()
                .parse()
                .with_context(|| format!("DEFAULT_PAGE_SIZE is not an integer: {:?}", raw))?;
            if size < 1 {
                bail!("DEFAULT_PAGE_SIZE must be at least 1, got {}", size);
            }
            config.default_page_size = size;
        }

        if let Some(raw) = lookup("CORS_PERMISSIVE") {
            config.cors_permissive = raw
                .trim()
                .parse()
                .with_context(|| format!("CORS_PERMISSIVE is not a boolean: {:?}", raw))?;
        }

        Ok(config)
    }
}
