//! # Configuration
//!
//! TOML configuration for the `stego` binary. Every field has a default, so
//! an empty file (or no file at all) is a valid configuration.
//!
//! ```toml
//! [logging]
//! level = "debug"
//!
//! [output]
//! format = "png"
//! default_file_name = "fingerprint.png"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::processing::OutputFormat;

/// Load a TOML configuration file and deserialize it into the specified type.
///
/// # Arguments
/// - `path`: Path to the TOML configuration file
///
/// # Returns
/// - `Ok(T)`: Successfully loaded and parsed configuration
/// - `Err`: File I/O or parsing error, with the path in its context
///
/// # Example
/// ```ignore
/// let config: StegoConfig = load_config("config/stego.toml")?;
/// ```
pub fn load_config<T, P>(path: P) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: T = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StegoConfig {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

impl StegoConfig {
    /// Loads `path` if given, otherwise returns the defaults.
    ///
    /// # Errors
    /// - The file cannot be read or parsed
    /// - The output section fails [`OutputConfig::validate`]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config: StegoConfig = match path {
            Some(path) => load_config(path)?,
            None => StegoConfig::default(),
        };
        config.output.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.level
            .parse()
            .map_err(|_| anyhow!("Unknown log level '{}'", self.level))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format of images written by `encode`.
    pub format: OutputFormat,
    /// File written by `encode` when no `--output` is given.
    pub default_file_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Png,
            default_file_name: "fingerprint.png".to_string(),
        }
    }
}

impl OutputConfig {
    /// Path written by `encode` when no explicit output is given.
    ///
    /// The configured file name keeps its stem, but its extension is replaced
    /// with the one matching `format`, so `fingerprint.png` becomes
    /// `fingerprint.bmp` when writing BMP.
    pub fn default_path(&self, format: OutputFormat) -> PathBuf {
        Path::new(&self.default_file_name).with_extension(format.extension())
    }

    /// Checks that the output section can actually carry a hidden message.
    ///
    /// # Errors
    /// - `format` is lossy
    /// - `default_file_name` is blank
    pub fn validate(&self) -> Result<()> {
        if !self.format.is_lossless() {
            bail!(
                "Output format '{}' is lossy and would destroy the hidden message",
                self.format
            );
        }
        if self.default_file_name.trim().is_empty() {
            bail!("Output default_file_name must not be empty");
        }
        Ok(())
    }
}
