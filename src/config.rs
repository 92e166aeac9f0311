use std::fs;
use std::path::{Path, PathBuf};

use anstyle::AnsiColor;
use serde::Deserialize;

use crate::error::ConfigError;

pub const CONFIG_ENV: &str = "PRETTYPS_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl From<PaletteColor> for AnsiColor {
    fn from(value: PaletteColor) -> Self {
        match value {
            PaletteColor::Black => AnsiColor::Black,
            PaletteColor::Red => AnsiColor::Red,
            PaletteColor::Green => AnsiColor::Green,
            PaletteColor::Yellow => AnsiColor::Yellow,
            PaletteColor::Blue => AnsiColor::Blue,
            PaletteColor::Magenta => AnsiColor::Magenta,
            PaletteColor::Cyan => AnsiColor::Cyan,
            PaletteColor::White => AnsiColor::White,
            PaletteColor::BrightBlack => AnsiColor::BrightBlack,
            PaletteColor::BrightRed => AnsiColor::BrightRed,
            PaletteColor::BrightGreen => AnsiColor::BrightGreen,
            PaletteColor::BrightYellow => AnsiColor::BrightYellow,
            PaletteColor::BrightBlue => AnsiColor::BrightBlue,
            PaletteColor::BrightMagenta => AnsiColor::BrightMagenta,
            PaletteColor::BrightCyan => AnsiColor::BrightCyan,
            PaletteColor::BrightWhite => AnsiColor::BrightWhite,
        }
    }
}

pub fn default_palette() -> Vec<PaletteColor> {
    vec![
        PaletteColor::BrightBlue,
        PaletteColor::BrightGreen,
        PaletteColor::BrightRed,
        PaletteColor::BrightCyan,
        PaletteColor::BrightYellow,
        PaletteColor::BrightMagenta,
    ]
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            program: "docker".to_owned(),
            args: vec!["ps".to_owned(), "-a".to_owned()],
        }
    }
}

/// Immutable rendering and engine settings, built once per invocation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub palette: Vec<PaletteColor>,
    pub label_width: usize,
    pub indent: usize,
    pub engine: EngineConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            label_width: 16,
            indent: 4,
            engine: EngineConfig::default(),
        }
    }
}

impl ReportConfig {
    pub fn from_toml(raw: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: ReportConfig = toml::from_str(raw).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })?;
        if config.palette.is_empty() {
            return Err(ConfigError::EmptyPalette {
                path: path.to_path_buf(),
            });
        }
        Ok(config)
    }

    /// Explicit path, then `PRETTYPS_CONFIG`, then built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => std::env::var_os(CONFIG_ENV)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
        };
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(&path).map_err(|error| ConfigError::Read {
            path: path.clone(),
            error,
        })?;
        tracing::debug!(path = %path.display(), "loaded report config");
        Self::from_toml(&raw, &path)
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
