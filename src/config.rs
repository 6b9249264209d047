//! TOML configuration for the command-line front end.
//!
//! ```toml
//! catalog = "~/shop/catalog.json"
//! currency = "€"
//!
//! [display]
//! scores = false
//! trace = false
//! ```

use crate::cli::Cli;
use crate::error::ConfigError;
use crate::format::{DEFAULT_CURRENCY, DisplayOptions};
use serde::Deserialize;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Catalog JSON file. `~` is expanded.
    pub catalog: Option<PathBuf>,
    /// Symbol prefixed to formatted prices.
    pub currency: String,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub scores: bool,
    pub trace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            currency: DEFAULT_CURRENCY.to_string(),
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    pub fn from_toml_str(raw: &str, origin: &Path) -> Result<Self, ConfigError> {
        let mut cfg: Self = toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;

        normalize(&mut cfg);
        validate(&cfg)?;

        Ok(cfg)
    }

    /// Effective config for one run: defaults, then the config file
    /// (`--config` or `$CATALOG_SEARCH_CONFIG`), then CLI flags.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut cfg = match &cli.config {
            Some(path) => load(path)?,
            None => Self::default(),
        };
        cfg.apply_cli(cli)?;
        Ok(cfg)
    }

    /// Overlay CLI flags on top of this config and re-validate.
    ///
    /// Paths and the currency replace the configured value; display switches
    /// can only be turned on.
    pub fn apply_cli(&mut self, cli: &Cli) -> Result<(), ConfigError> {
        if let Some(catalog) = &cli.catalog {
            self.catalog = Some(catalog.clone());
        }
        if let Some(currency) = &cli.currency {
            self.currency = currency.clone();
        }
        self.display.scores |= cli.scores;
        self.display.trace |= cli.trace;

        normalize(self);
        validate(self)
    }

    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            currency: self.currency.clone(),
            scores: self.display.scores,
            trace: self.display.trace,
        }
    }

    /// Catalog path with `~` expanded, if one is configured.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog
            .as_ref()
            .map(|path| PathBuf::from(expand_tilde(&path.to_string_lossy()).into_owned()))
    }
}

/// Read and validate a config file.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let cfg = Config::from_toml_str(&raw, path)?;
    tracing::debug!("Loaded config from {}", path.display());

    Ok(cfg)
}

fn normalize(cfg: &mut Config) {
    cfg.currency = cfg.currency.trim().to_string();
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.currency.is_empty() {
        return Err(ConfigError::Validation {
            message: "currency must be non-empty.".to_string(),
        });
    }
    if cfg
        .catalog
        .as_ref()
        .is_some_and(|path| path.as_os_str().is_empty())
    {
        return Err(ConfigError::Validation {
            message: "catalog must be a non-empty path when set.".to_string(),
        });
    }

    Ok(())
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
///
/// Returns `Cow::Borrowed` if no expansion needed, `Cow::Owned` if expanded.
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}
