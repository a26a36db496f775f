use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub root: Root,
    #[serde(default)]
    pub app: App,
    #[serde(default)]
    pub logging: Logging,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Root { pub root_dir: Option<PathBuf> }

#[derive(Debug, Deserialize, Clone)]
pub struct App {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_company")]
    pub company: String,
    #[serde(default)]
    pub developer: Option<String>,
}
fn default_app_name() -> String { "LockedMe".to_string() }
fn default_company() -> String { "Company Lockers Pvt. Ltd.".to_string() }

impl Default for App {
    fn default() -> Self {
        Self { name: default_app_name(), company: default_company(), developer: None }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}
fn default_level() -> String { "warn".to_string() }

impl Default for Logging {
    fn default() -> Self {
        Self { level: default_level(), format: LogFormat::default() }
    }
}

const LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)?;
        if path.extension().map(|e| e == "json").unwrap_or(false) {
            Ok(serde_json::from_str(&raw)?)
        } else {
            Ok(toml::from_str(&raw)?)
        }
    }

    /// Loads `path` when it exists. A missing file is only an error when the
    /// caller asked for it explicitly.
    pub fn load_or_default(path: &Path, explicit: bool) -> anyhow::Result<Self> {
        if !explicit && !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(dir) = &self.root.root_dir {
            if !dir.is_dir() {
                anyhow::bail!("root_dir does not exist or is not a directory: {}", dir.display());
            }
        }
        if self.app.name.trim().is_empty() { anyhow::bail!("app name must not be empty"); }
        if !LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            anyhow::bail!("unknown log level: {}", self.logging.level);
        }
        Ok(())
    }
}
