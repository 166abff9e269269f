//! `config.toml` for the command-line tool.
//!
//! ```toml
//! [grid]
//! max_rows = 65536
//! max_columns = 256
//!
//! [output]
//! notation = "r1c1"
//! absolute = true
//! ```

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use gridrange_core::GridConfig;
use gridrange_engine::{NotationKind, ReferenceNotation, ReferenceStyle};

use crate::error::{CliError, Result};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub grid: GridConfig,
    pub output: OutputConfig,
}

/// Default output notation; command-line flags override it.
#[derive(Copy, Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub notation: NotationKind,
    pub absolute: bool,
}

impl OutputConfig {
    pub fn notation(&self) -> ReferenceNotation {
        let style = if self.absolute {
            ReferenceStyle::ABSOLUTE
        } else {
            ReferenceStyle::RELATIVE
        };
        self.notation.with_style(style)
    }
}

pub fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "gridrange")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}

pub fn parse_config(content: &str, path: &Path) -> Result<Config> {
    let config: Config = toml::from_str(content).map_err(|source| CliError::Config {
        path: path.to_path_buf(),
        source,
    })?;
    config.grid.validate()?;
    Ok(config)
}

/// Load `explicit`, or the user config if one exists, or the defaults.
///
/// An explicit path must exist; a missing user config is not an error.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match user_config_path() {
            Some(path) if path.is_file() => path,
            _ => return Ok(Config::default()),
        },
    };
    let content = std::fs::read_to_string(&path).map_err(|source| CliError::Io {
        path: path.clone(),
        source,
    })?;
    let config = parse_config(&content, &path)?;
    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}
