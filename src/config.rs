//! Layered configuration: defaults, then the env-style file, then process
//! environment, then values set by the program itself.
//!
//! The file is read with `dotenvy` without touching the process environment,
//! so loading is side-effect free and the result is an explicit [`Config`].

use crate::error::AppError;
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

/// Value injected under `developer`, overriding every external source.
pub const DEVELOPER: &str = "Hozana";

pub const DEFAULT_ENV_FILE: &str = ".env";

/// Process environment keys consulted by [`Config::load`].
const ENV_KEYS: &[&str] = &["conn_str", "loglevel"];

/// Where the env-style config file lives and whether it has to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFile {
    Required(PathBuf),
    Optional(PathBuf),
}

#[derive(Debug, Deserialize)]
struct EnvFileSettings {
    #[serde(default = "default_env_file")]
    env_file: PathBuf,
    #[serde(default)]
    env_file_optional: bool,
}

fn default_env_file() -> PathBuf {
    PathBuf::from(DEFAULT_ENV_FILE)
}

impl Default for EnvFile {
    fn default() -> Self {
        EnvFile::Required(default_env_file())
    }
}

impl EnvFile {
    /// Resolve the file location from `PGSEED_ENV_FILE` and
    /// `PGSEED_ENV_FILE_OPTIONAL` (`true`/`false`).
    pub fn from_process_env() -> Result<Self, AppError> {
        let settings: EnvFileSettings = Figment::from(Env::prefixed("PGSEED_")).extract()?;
        Ok(if settings.env_file_optional {
            EnvFile::Optional(settings.env_file)
        } else {
            EnvFile::Required(settings.env_file)
        })
    }

    pub fn path(&self) -> &Path {
        match self {
            EnvFile::Required(p) | EnvFile::Optional(p) => p,
        }
    }

    /// Parse the file into lower-cased keys. A missing optional file yields
    /// an empty map; anything else that goes wrong is an error.
    fn read(&self) -> Result<BTreeMap<String, String>, AppError> {
        let iter = match dotenvy::from_path_iter(self.path()) {
            Ok(iter) => iter,
            Err(e) if e.not_found() && matches!(self, EnvFile::Optional(_)) => {
                debug!(path = %self.path().display(), "optional env file not found; skipping");
                return Ok(BTreeMap::new());
            }
            Err(e) => return Err(e.into()),
        };

        iter.map(|item| {
            item.map(|(key, value)| (key.to_lowercase(), value))
                .map_err(AppError::from)
        })
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// PostgreSQL URI; empty when no source provides `CONN_STR`.
    pub conn_str: String,
    pub developer: String,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            conn_str: String::new(),
            developer: String::new(),
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    /// Load from `env_file` and the process environment.
    pub fn load(env_file: &EnvFile) -> Result<Self, AppError> {
        Self::load_with(env_file, Env::raw().only(ENV_KEYS))
    }

    /// Same as [`Config::load`] with a caller-chosen environment provider.
    pub fn load_with(env_file: &EnvFile, env: Env) -> Result<Self, AppError> {
        let file_values = env_file.read()?;
        let cfg = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Serialized::defaults(file_values))
            .merge(env)
            .merge(Serialized::default("developer", DEVELOPER))
            .extract()?;
        Ok(cfg)
    }

    /// Connection string with any password masked, for logs.
    pub fn redacted_conn_str(&self) -> String {
        if self.conn_str.is_empty() {
            return "<empty>".to_string();
        }
        match Url::parse(&self.conn_str) {
            Ok(mut url) => {
                if url.password().is_some() {
                    let _ = url.set_password(Some("***"));
                }
                url.to_string()
            }
            Err(_) => "<unparsed>".to_string(),
        }
    }
}
