//! CLI command implementations.

pub mod batch;
pub mod calc;
pub mod config;
pub mod parse;
pub mod report;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use pingjia_core::PingjiaConfig;

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pingjia")
        .join("config.json")
}

/// Load configuration from the given path, the default file, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<PingjiaConfig> {
    if let Some(path) = config_path {
        return Ok(PingjiaConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Loading configuration from {}", default_path.display());
        Ok(PingjiaConfig::from_file(&default_path)?)
    } else {
        Ok(PingjiaConfig::default())
    }
}

/// Read a text input; `-` reads stdin.
pub fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    Ok(fs::read_to_string(path)?)
}
