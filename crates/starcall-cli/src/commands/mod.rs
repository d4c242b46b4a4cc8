//! Subcommand implementations.

pub mod config;
pub mod normalize;
pub mod parse;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use starcall_core::StarcallConfig;

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("starcall")
        .join("config.json")
}

/// Load the configuration from `path`, or from the default location if it
/// exists, or fall back to defaults.
pub fn load_config(path: Option<&str>) -> anyhow::Result<StarcallConfig> {
    if let Some(path) = path {
        return Ok(StarcallConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Using config file {}", default_path.display());
        Ok(StarcallConfig::from_file(&default_path)?)
    } else {
        Ok(StarcallConfig::default())
    }
}

/// Read dialog text from a file, or from stdin when no path or `-` is given.
pub fn read_input(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        Some(path) if path != Path::new("-") => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            debug!("Reading dialog text from {}", path.display());
            Ok(fs::read_to_string(path)?)
        }
        _ => {
            debug!("Reading dialog text from stdin");
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
