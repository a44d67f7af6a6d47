//! # Settings Store
//!
//! Loads `settings.json` from the user's config directory and layers environment
//! overrides on top. A missing file is not an error: every field has a default.
//!
//! Lookup order for the file:
//! * `$TURSO_SETTINGS_PATH`
//! * `settings.json` in the platform config directory (`$XDG_CONFIG_HOME/turso` on
//!   Linux, `~/Library/Application Support/io.turso.turso` on macOS, `%APPDATA%` on Windows)

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_API_BASE_URL: &str = "https://api.turso.io";
pub const DEFAULT_DATA_SCHEME: &str = "libsql";
pub const DEFAULT_HTTP_SCHEME: &str = "https";
const DEFAULT_TOKEN_USERNAME: &str = "token";

const SETTINGS_FILE: &str = "settings.json";

const ENV_SETTINGS_PATH: &str = "TURSO_SETTINGS_PATH";
const ENV_API_TOKEN: &str = "TURSO_API_TOKEN";
const ENV_API_BASE_URL: &str = "TURSO_API_BASE_URL";
const ENV_PROBE_TIMEOUT: &str = "TURSO_PROBE_TIMEOUT_SECS";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not locate a config directory, set TURSO_SETTINGS_PATH")]
    NoConfigDir,
    #[error("could not read settings from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("settings file {} is malformed: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("environment variable {key} has an invalid value: {value}")]
    InvalidEnv { key: &'static str, value: String },
}

/// Username and password pair embedded in basic-auth URLs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Platform API token; also used as the basic-auth password fallback.
    pub token: Option<String>,
    /// Account name paired with `token` in basic-auth URLs.
    pub username: Option<String>,
    pub api_base_url: String,
    pub data_scheme: String,
    pub http_scheme: String,
    /// Per-probe timeout. `None` keeps the transport default.
    pub probe_timeout_secs: Option<u64>,
    /// Database credentials keyed by database id.
    pub databases: HashMap<String, Credentials>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            token: None,
            username: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            data_scheme: DEFAULT_DATA_SCHEME.to_string(),
            http_scheme: DEFAULT_HTTP_SCHEME.to_string(),
            probe_timeout_secs: None,
            databases: HashMap::new(),
        }
    }
}

impl Settings {
    /// Reads the settings file from its default location and applies environment overrides.
    pub fn read() -> Result<Self, SettingsError> {
        let lookup = |key: &str| std::env::var(key).ok();
        let path: PathBuf = settings_path(lookup)?;
        let mut settings: Settings = Self::read_from(&path)?;
        settings.apply_env(lookup)?;
        Ok(settings)
    }

    pub fn read_from(path: &Path) -> Result<Self, SettingsError> {
        match std::fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("no settings file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Overrides file values with `TURSO_*` environment variables.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup(ENV_API_TOKEN).filter(|t| !t.is_empty()) {
            self.token = Some(token);
        }
        if let Some(base) = lookup(ENV_API_BASE_URL).filter(|b| !b.is_empty()) {
            self.api_base_url = base;
        }
        if let Some(raw) = lookup(ENV_PROBE_TIMEOUT) {
            let secs: u64 = raw.trim().parse().map_err(|_| SettingsError::InvalidEnv {
                key: ENV_PROBE_TIMEOUT,
                value: raw.clone(),
            })?;
            self.probe_timeout_secs = Some(secs);
        }
        Ok(())
    }

    /// Credentials for a database: its own entry first, then the account token.
    pub fn credentials_for(&self, database_id: &str) -> Option<Credentials> {
        if let Some(creds) = self.databases.get(database_id) {
            return Some(creds.clone());
        }
        self.token.as_ref().map(|token| Credentials {
            username: self
                .username
                .clone()
                .unwrap_or_else(|| DEFAULT_TOKEN_USERNAME.to_string()),
            password: token.clone(),
        })
    }

    pub fn probe_timeout(&self) -> Option<Duration> {
        self.probe_timeout_secs.map(Duration::from_secs)
    }
}

fn settings_path<F>(lookup: F) -> Result<PathBuf, SettingsError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = lookup(ENV_SETTINGS_PATH).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    project_dirs()
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
        .ok_or(SettingsError::NoConfigDir)
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("io", "turso", "turso")
}
