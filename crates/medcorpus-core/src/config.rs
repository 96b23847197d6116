//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge built-in defaults + `config.toml` +
//! `config.<env>.toml` + `MEDCORPUS_*` env vars. Provides helpers to expand
//! `~` and `${VAR}` and to resolve relative paths against a known base
//! directory.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Typed view of the settings every binary needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusSettings {
    /// Extra JSON content packs merged over the built-in corpus.
    pub content_dir: Option<String>,
    pub index_dir: String,
    pub default_limit: usize,
    pub max_limit: usize,
    pub default_level: u8,
    pub log_filter: String,
    pub strict_validation: bool,
}

impl Default for CorpusSettings {
    fn default() -> Self {
        Self {
            content_dir: None,
            index_dir: "data/indexes/tantivy".to_string(),
            default_limit: 10,
            max_limit: 100,
            default_level: 1,
            log_filter: "info".to_string(),
            strict_validation: false,
        }
    }
}

pub struct Config {
    figment: Figment,
    env_name: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::from(Serialized::defaults(CorpusSettings::default()))
            .merge(Toml::file("config.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("MEDCORPUS_"));

        Self::from_figment(figment, &env_name)
    }

    /// Wraps an already-assembled figment, e.g. one built from inline TOML in tests.
    pub fn from_figment(figment: Figment, env_name: &str) -> Result<Self> {
        let config = Self { figment, env_name: env_name.to_string() };
        config.validate_for_env(env_name)?;
        Ok(config)
    }

    pub fn env_name(&self) -> &str {
        &self.env_name
    }

    pub fn get<T>(&self, key: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| Error::InvalidConfig(format!("Failed to get '{}': {}", key, e)))
    }

    pub fn settings(&self) -> Result<CorpusSettings> {
        self.figment
            .extract()
            .map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    fn validate_for_env(&self, env: &str) -> Result<()> {
        let settings = self.settings()?;
        if !(1..=5).contains(&settings.default_level) {
            return Err(Error::InvalidConfig(format!(
                "default_level must be between 1 and 5, got {}",
                settings.default_level
            )));
        }
        if settings.default_limit == 0 || settings.default_limit > settings.max_limit {
            return Err(Error::InvalidConfig(format!(
                "default_limit {} must be between 1 and max_limit {}",
                settings.default_limit, settings.max_limit
            )));
        }
        match env {
            "prod" | "production" => {
                if !settings.strict_validation {
                    return Err(Error::InvalidConfig(
                        "production config must enable strict_validation".to_string(),
                    ));
                }
            }
            "dev" | "development" => {}
            "test" | "testing" => {}
            _ => {}
        }
        Ok(())
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    // Expand env vars first
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    // Expand ~ at start
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
