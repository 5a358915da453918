//! Application configuration
//!
//! Loaded from `<config dir>/code-translator/config.json` (or an explicit
//! path), then overridden by `CODE_TRANSLATOR_*` environment variables.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use code_translator_core::error::{CoreError, CoreResult};
use code_translator_engine::{EngineConfig, EngineType};

/// Directory name used under the platform config/data directories.
const APP_DIR_NAME: &str = "code-translator";
const CONFIG_FILE_NAME: &str = "config.json";
const DATABASE_FILE_NAME: &str = "history.db";

/// Maximum config file size (1 MB)
const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

const DEFAULT_MAX_RETRIES: u32 = 2;

pub const ENV_ENDPOINT: &str = "CODE_TRANSLATOR_ENDPOINT";
pub const ENV_API_KEY: &str = "CODE_TRANSLATOR_API_KEY";
pub const ENV_ENGINE: &str = "CODE_TRANSLATOR_ENGINE";
pub const ENV_MODEL: &str = "CODE_TRANSLATOR_MODEL";
pub const ENV_DB: &str = "CODE_TRANSLATOR_DB";
pub const ENV_USER: &str = "CODE_TRANSLATOR_USER";

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub engine: EngineSettings,
    pub storage: StorageSettings,
    pub session: SessionSettings,
}

/// Remote engine selection and credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineSettings {
    pub kind: EngineType,
    /// Edge-function URL (function engine only).
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    /// Gemini model id; engine default when unset.
    pub model: Option<String>,
    /// Gemini API base; engine default when unset.
    pub base_url: Option<String>,
    pub max_retries: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            kind: EngineType::default(),
            endpoint: None,
            api_key: None,
            model: None,
            base_url: None,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageSettings {
    /// SQLite database file; platform data dir when unset.
    pub database_path: Option<PathBuf>,
}

/// Identity the frontend signs in with at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionSettings {
    pub user_id: Option<String>,
    pub email: Option<String>,
}

impl AppConfig {
    /// Default config file location, `None` on platforms without a config dir.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the config file. A missing file yields the defaults.
    ///
    /// # Errors
    /// `CoreError::Configuration` if the file cannot be read, is too large or
    /// is not valid JSON.
    pub async fn load(path: Option<&Path>) -> CoreResult<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) => path,
                None => {
                    log::debug!("No platform config directory, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let metadata = match tokio::fs::metadata(&path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("Config file {} not found, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(CoreError::Configuration(format!(
                    "Failed to read config metadata {}: {e}",
                    path.display()
                )));
            }
        };

        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(CoreError::Configuration(format!(
                "Config file too large: {} bytes (max {MAX_CONFIG_FILE_SIZE})",
                metadata.len()
            )));
        }

        let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
            CoreError::Configuration(format!("Failed to read {}: {e}", path.display()))
        })?;

        let config = serde_json::from_str(&content).map_err(|e| {
            CoreError::Configuration(format!("Invalid config {}: {e}", path.display()))
        })?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Apply `CODE_TRANSLATOR_*` overrides read through `lookup`.
    ///
    /// # Errors
    /// `CoreError::Configuration` for an unknown engine kind.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> CoreResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(kind) = get(ENV_ENGINE) {
            self.engine.kind = kind.parse().map_err(CoreError::Configuration)?;
        }
        if let Some(endpoint) = get(ENV_ENDPOINT) {
            self.engine.endpoint = Some(endpoint);
        }
        if let Some(api_key) = get(ENV_API_KEY) {
            self.engine.api_key = Some(api_key);
        }
        if let Some(model) = get(ENV_MODEL) {
            self.engine.model = Some(model);
        }
        if let Some(db) = get(ENV_DB) {
            self.storage.database_path = Some(PathBuf::from(db));
        }
        if let Some(user) = get(ENV_USER) {
            self.session.user_id = Some(user);
        }
        Ok(())
    }

    /// Apply overrides from the process environment.
    ///
    /// # Errors
    /// See [`apply_overrides`](Self::apply_overrides).
    pub fn apply_env(&mut self) -> CoreResult<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Engine settings as consumed by `create_engine`.
    ///
    /// # Errors
    /// `CoreError::Configuration` when the selected engine lacks its
    /// required endpoint or API key.
    pub fn engine_config(&self) -> CoreResult<EngineConfig> {
        let settings = &self.engine;
        match settings.kind {
            EngineType::Function => {
                let endpoint = settings.endpoint.clone().ok_or_else(|| {
                    CoreError::Configuration(format!(
                        "function engine requires an endpoint (set {ENV_ENDPOINT})"
                    ))
                })?;
                Ok(EngineConfig::Function {
                    endpoint,
                    api_key: settings.api_key.clone(),
                    max_retries: settings.max_retries,
                })
            }
            EngineType::Gemini => {
                let api_key = settings.api_key.clone().ok_or_else(|| {
                    CoreError::Configuration(format!(
                        "gemini engine requires an API key (set {ENV_API_KEY})"
                    ))
                })?;
                Ok(EngineConfig::Gemini {
                    api_key,
                    model: settings.model.clone().unwrap_or_default(),
                    base_url: settings.base_url.clone().unwrap_or_default(),
                    max_retries: settings.max_retries,
                })
            }
        }
    }

    /// History database path: configured, or the platform data dir.
    ///
    /// # Errors
    /// `CoreError::Configuration` if neither is available.
    pub fn database_path(&self) -> CoreResult<PathBuf> {
        if let Some(path) = &self.storage.database_path {
            return Ok(path.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(DATABASE_FILE_NAME))
            .ok_or_else(|| {
                CoreError::Configuration(format!(
                    "Cannot determine data directory (set {ENV_DB})"
                ))
            })
    }
}
