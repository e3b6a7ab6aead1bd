use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub tags: TagSettings,
    #[serde(default)]
    pub newsletter: NewsletterSettings,
    #[serde(default)]
    pub admin: AdminSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Directory holding one file per storage key. Falls back to the
    /// platform data directory when unset.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_preview_limit")]
    pub preview_limit: usize,

    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagSettings {
    #[serde(default = "default_max_tags")]
    pub max_tags: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterSettings {
    /// Simulated signup latency in milliseconds.
    #[serde(default = "default_newsletter_delay_ms")]
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSettings {
    #[serde(default = "default_admin_username")]
    pub username: String,

    /// Hex-encoded BLAKE3 digest of the admin password.
    #[serde(default = "default_admin_password_blake3")]
    pub password_blake3: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub log_to_file: bool,

    #[serde(default = "default_log_file")]
    pub log_file: String,

    #[serde(default)]
    pub json_format: bool,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .map_err(|_| Error::NotFound(path.as_ref().display().to_string()))?;

        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_lookup(path, |name| std::env::var(name).ok())
    }

    /// Load `path`, then apply overrides resolved through `lookup` and
    /// validate the result.
    fn load_with_lookup<P, F>(path: P, lookup: F) -> Result<Self>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::load(path)?;
        config.apply_overrides(lookup);
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise starts from defaults. Environment
    /// overrides apply in both cases.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            return Self::load_with_env(path);
        }
        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(e.to_string()))?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.search.preview_limit == 0 {
            return Err(Error::Config("Search preview limit must be greater than 0".to_string()));
        }

        if self.tags.max_tags == 0 {
            return Err(Error::Config("Max tags must be greater than 0".to_string()));
        }

        if self.admin.username.trim().is_empty() {
            return Err(Error::Config("Admin username cannot be empty".to_string()));
        }

        blake3::Hash::from_hex(self.admin.password_blake3.as_str())
            .map_err(|e| Error::Config(format!("Invalid admin password digest: {}", e)))?;

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides<F: Fn(&str) -> Option<String>>(&mut self, lookup: F) {
        if let Some(dir) = lookup("NEWSPORTAL_DATA_DIR") {
            if !dir.trim().is_empty() {
                self.storage.data_dir = Some(PathBuf::from(dir));
            }
        }

        if let Some(level) = lookup("NEWSPORTAL_LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Some(limit) = lookup("NEWSPORTAL_SEARCH_LIMIT") {
            if let Ok(val) = limit.parse() {
                self.search.preview_limit = val;
            }
        }
    }

    /// Resolved data directory: configured value or the platform default.
    pub fn resolved_data_dir(&self) -> Result<PathBuf> {
        match &self.storage.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Self::data_dir(),
        }
    }

    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("newsportal"))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    pub fn data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join("newsportal"))
            .ok_or_else(|| Error::Config("Could not determine data directory".to_string()))
    }

    pub fn default_config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            preview_limit: default_preview_limit(),
            min_query_len: default_min_query_len(),
        }
    }
}

impl Default for TagSettings {
    fn default() -> Self {
        Self {
            max_tags: default_max_tags(),
        }
    }
}

impl Default for NewsletterSettings {
    fn default() -> Self {
        Self {
            delay_ms: default_newsletter_delay_ms(),
        }
    }
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            username: default_admin_username(),
            password_blake3: default_admin_password_blake3(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_to_file: false,
            log_file: default_log_file(),
            json_format: false,
        }
    }
}

fn default_preview_limit() -> usize { 5 }
fn default_min_query_len() -> usize { 2 }
fn default_max_tags() -> usize { 15 }
fn default_newsletter_delay_ms() -> u64 { 1500 }

fn default_admin_username() -> String { "admin".to_string() }
fn default_admin_password_blake3() -> String {
    blake3::hash(b"admin123").to_hex().to_string()
}

fn default_log_level() -> String { "warn".to_string() }
fn default_log_file() -> String { "logs/newsportal.log".to_string() }
