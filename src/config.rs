use crate::options::Options;
use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    /// Default formatting options, layered under CLI flags.
    #[serde(default)]
    pub format: Options,
}

impl Config {
    /// Validate all configuration
    pub fn validate(&self) -> Result<()> {
        if self.format.unit_count == Some(0) {
            anyhow::bail!("format.unit_count must be at least 1");
        }
        Ok(())
    }
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to build config loader")?;

    loader
        .try_deserialize()
        .context("Failed to parse config file")
}

pub fn load() -> Result<Config> {
    let config_dir = home::home_dir()
        .context("Could not find home directory")?
        .join(".prettytime");
    let config_path = config_dir.join("config.toml");

    let config = load_from_path(&config_path)?;
    config.validate()?;

    Ok(config)
}
