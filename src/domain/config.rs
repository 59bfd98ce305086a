//! Configuration for the upstream API and the fetch-and-cache layer.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::AppError;

/// Default config file name, looked up in the current directory.
pub const CONFIG_FILE: &str = "dexter.toml";

/// Upstream Pokémon API configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the Pokémon API.
    pub api_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Number of catalogue entries requested from the list endpoint.
    pub list_limit: u32,
    /// Offset into the upstream catalogue.
    pub list_offset: u32,
    /// Delay before the single detail-fetch retry, in milliseconds.
    pub retry_delay_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: 30,
            list_limit: 151,
            list_offset: 0,
            retry_delay_ms: 500,
        }
    }
}

fn default_api_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}

/// Caching policy for catalogue fetches.
///
/// Mirrors the upstream framework's cache modes: refetch every time, fetch
/// once for the process lifetime, or reuse a snapshot until it is older than
/// a fixed interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    /// Fetch on every request; nothing is reused.
    #[default]
    NoStore,
    /// Fetch once and reuse the snapshot for the process lifetime.
    ForceCache,
    /// Reuse the snapshot until it is older than the given number of seconds.
    Revalidate(u64),
}

impl CachePolicy {
    /// Parse a CLI-style policy string: `no-store`, `force-cache`, or
    /// `revalidate=<secs>`.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        match input {
            "no-store" => Ok(CachePolicy::NoStore),
            "force-cache" => Ok(CachePolicy::ForceCache),
            other => {
                if let Some(secs) = other.strip_prefix("revalidate=") {
                    let secs = secs.parse::<u64>().map_err(|_| {
                        AppError::config_error(format!(
                            "Invalid revalidation interval '{}': expected a number of seconds",
                            secs
                        ))
                    })?;
                    return Ok(CachePolicy::Revalidate(secs));
                }
                Err(AppError::config_error(format!(
                    "Unknown cache policy '{}': expected no-store, force-cache, or revalidate=<secs>",
                    other
                )))
            }
        }
    }
}

/// TOML-facing cache configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Policy name: `no-store`, `force-cache`, or `revalidate`.
    pub policy: String,
    /// Snapshot lifetime in seconds; required when `policy = "revalidate"`.
    pub revalidate_secs: Option<u64>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { policy: "no-store".to_string(), revalidate_secs: None }
    }
}

impl CacheConfig {
    pub fn policy(&self) -> Result<CachePolicy, AppError> {
        match self.policy.as_str() {
            "no-store" => Ok(CachePolicy::NoStore),
            "force-cache" => Ok(CachePolicy::ForceCache),
            "revalidate" => self.revalidate_secs.map(CachePolicy::Revalidate).ok_or_else(|| {
                AppError::config_error(
                    "Cache policy 'revalidate' requires revalidate_secs to be set",
                )
            }),
            other => Err(AppError::config_error(format!(
                "Unknown cache policy '{}': expected no-store, force-cache, or revalidate",
                other
            ))),
        }
    }
}

/// Top-level configuration loaded from `dexter.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DexConfig {
    pub api: ApiConfig,
    pub cache: CacheConfig,
}

impl DexConfig {
    /// Load configuration from `path`, or from `dexter.toml` in the current
    /// directory when no path is given.
    ///
    /// An explicitly requested file must exist; the implicit lookup falls
    /// back to defaults when the file is absent.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let (file, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(CONFIG_FILE), false),
        };

        if !file.exists() {
            if required {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    file.display()
                )));
            }
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&file)?;
        let config: DexConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
