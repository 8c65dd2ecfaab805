//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/modcat/modcat.toml`
//! 3. Environment variables: `MODCAT_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Unified configuration for modcat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// JSON translation map used for subtitles (default: untranslated)
    pub locale_file: Option<PathBuf>,
    /// Include categories without mods in flat listings
    pub show_empty: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale_file: None,
            show_empty: true,
        }
    }
}

impl Settings {
    /// Load settings from all layers.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::global_config_path().as_deref())
    }

    /// Load settings with an explicit global config file.
    /// Env vars still apply on top; tests use this to stay hermetic.
    pub fn load_from(global_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder().set_default("show_empty", true)?;

        if let Some(path) = global_file {
            if path.exists() {
                builder = builder.add_source(File::from(path.to_path_buf()));
            }
        }

        builder = builder.add_source(Environment::with_prefix("MODCAT"));

        builder.build()?.try_deserialize()
    }

    /// Path of the global config file, if a home directory can be resolved.
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "modcat").map(|dirs| dirs.config_dir().join("modcat.toml"))
    }

    /// TOML template with the compiled defaults, for `config init`.
    pub fn template() -> String {
        let header = "# modcat configuration\n# All keys are optional; these are the defaults.\n\n";
        let body = toml::to_string_pretty(&Settings::default())
            .unwrap_or_else(|_| String::from("show_empty = true\n"));
        format!("{header}{body}")
    }
}
