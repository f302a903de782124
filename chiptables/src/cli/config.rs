//! Command-line interface configuration
//!
//! The [Config] type handles loading of the optional `chiptables.toml`
//! configuration file. A missing file in the current directory is not an
//! error; a missing file passed explicitly is.

use std::{
    fs::read_to_string,
    io,
    path::{Path, PathBuf},
};

use log::debug;
use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};

use crate::{
    efuse::{EfuseMaskTable, MaskVariant},
    Error,
};

/// Name of the configuration file looked up in the current directory
pub const CONFIG_FILE_NAME: &str = "chiptables.toml";

/// Efuse mask configuration
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct EfuseConfig {
    /// Built-in mask table
    #[serde(default)]
    pub variant: MaskVariant,
    /// Mask file overriding the built-in table
    #[serde(default)]
    pub mask_file: Option<PathBuf>,
    /// Leave efuse maps untouched when filtering
    #[serde(default)]
    pub disable_mask: bool,
}

/// Tool configuration
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Efuse mask configuration
    #[serde(default)]
    pub efuse: EfuseConfig,
}

impl Config {
    /// Load configuration from `path`, or from [CONFIG_FILE_NAME] in the
    /// current directory.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let explicit = path.is_some();
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

        let raw_data = match read_to_string(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound && !explicit => {
                debug!("No configuration file found, using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(Error::FileOpenError(path.display().to_string(), e).into()),
        };

        let mut config = Self::parse(&raw_data)
            .wrap_err_with(|| format!("Failed to parse configuration file {}", path.display()))?;

        // Mask files are relative to the configuration file
        if let (Some(mask_file), Some(dir)) = (&config.efuse.mask_file, path.parent()) {
            if mask_file.is_relative() {
                config.efuse.mask_file = Some(dir.join(mask_file));
            }
        }

        debug!("Config: {:#?}", &config);

        Ok(config)
    }

    pub fn parse(raw_data: &str) -> Result<Self> {
        toml::from_str(raw_data).into_diagnostic()
    }

    /// The mask table selected by this configuration.
    pub fn mask_table(&self) -> Result<EfuseMaskTable<'static>, Error> {
        match &self.efuse.mask_file {
            Some(path) => EfuseMaskTable::load(path),
            None => Ok(self.efuse.variant.table().clone()),
        }
    }
}
