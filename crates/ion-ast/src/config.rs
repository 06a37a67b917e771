//! Printer configuration (`ion.toml`) parsing and validation.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Digits printed after the decimal point when nothing is configured.
pub const DEFAULT_FLOAT_PRECISION: usize = 6;

/// Largest accepted float precision; enough to round-trip any `f64`.
pub const MAX_FLOAT_PRECISION: usize = 17;

/// Errors that can occur when loading printer configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("float precision {0} exceeds the maximum of {max}", max = MAX_FLOAT_PRECISION)]
    PrecisionOutOfRange(usize),
}

/// Options controlling the S-expression printer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PrintConfig {
    /// Digits after the decimal point for float literals.
    #[serde(rename = "float-precision")]
    pub float_precision: usize,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            float_precision: DEFAULT_FLOAT_PRECISION,
        }
    }
}

/// Layout of a config file: everything printer related lives in `[printer]`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    printer: PrintConfig,
}

impl PrintConfig {
    /// Use a specific float precision, up to [`MAX_FLOAT_PRECISION`].
    pub fn with_float_precision(mut self, precision: usize) -> Result<Self, ConfigError> {
        self.float_precision = precision;
        self.validate()?;
        Ok(self)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(source)?;
        file.printer.validate()?;
        tracing::debug!(
            float_precision = file.printer.float_precision,
            "loaded printer config"
        );
        Ok(file.printer)
    }

    /// Load configuration from a TOML file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.float_precision > MAX_FLOAT_PRECISION {
            return Err(ConfigError::PrecisionOutOfRange(self.float_precision));
        }
        Ok(())
    }
}
