//! Configuration loading.
//!
//! Options come from an optional `ts2cs.json` file and are overridden by
//! command-line flags.

use camino::Utf8Path;
use csharp_emitter::ConvertOptions;
use serde::Deserialize;
use std::fs;
use tracing::{debug, warn};

use crate::cli::Args;
use crate::error::{CliError, ConfigSource};

/// The config file looked up in the working directory.
pub const CONFIG_FILE: &str = "ts2cs.json";

/// Contents of a `ts2cs.json` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Ts2csConfig {
    /// Only convert exported declarations.
    pub exported_only: Option<bool>,
    /// Prefix for generated class names.
    pub name_prefix: Option<String>,
    /// Suffix for generated class names.
    pub name_suffix: Option<String>,
}

impl Ts2csConfig {
    /// Loads `ts2cs.json` from `dir` if it exists.
    ///
    /// A malformed file is reported as a warning and ignored.
    pub fn discover(dir: &Utf8Path) -> Self {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }

        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path, error = %e, "ignoring config file");
                Self::default()
            }
        }
    }

    /// Loads a config file, failing if it is missing or malformed.
    pub fn load(path: &Utf8Path) -> Result<Self, CliError> {
        let to_error = |source: ConfigSource| CliError::Config {
            path: path.to_owned(),
            source,
        };
        let content = fs::read_to_string(path).map_err(|e| to_error(e.into()))?;
        let config = Self::parse(&content).map_err(|e| to_error(e.into()))?;
        debug!(path = %path, ?config, "loaded config");
        Ok(config)
    }

    /// Parses config JSON.
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

/// Merges command-line flags over file config.
pub fn resolve_options(args: &Args, config: &Ts2csConfig) -> ConvertOptions {
    ConvertOptions {
        exported_only: args.exported_only || config.exported_only.unwrap_or(false),
        name_prefix: args
            .prefix
            .clone()
            .or_else(|| config.name_prefix.clone())
            .unwrap_or_default(),
        name_suffix: args
            .suffix
            .clone()
            .or_else(|| config.name_suffix.clone())
            .unwrap_or_default(),
    }
}
