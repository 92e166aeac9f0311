use std::path::PathBuf;

use thiserror::Error;

use crate::ui::UiError;

#[derive(Error, Debug)]
pub enum PrettyPsError {
    #[error("{message}")]
    SourceUnavailable { message: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("render failed: {0}")]
    Ui(#[from] UiError),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PrettyPsError {
    pub fn source_unavailable(message: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {error}", path.display())]
    Read {
        path: PathBuf,
        error: std::io::Error,
    },

    #[error("failed to parse config {}: {error}", path.display())]
    Parse {
        path: PathBuf,
        error: toml::de::Error,
    },

    #[error("config {} defines an empty palette", path.display())]
    EmptyPalette { path: PathBuf },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: expected at least 6 columns, found {fragments}")]
    MalformedLine { line: usize, fragments: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemporalError {
    #[error("unrecognized time phrase `{phrase}`")]
    Unrecognized { phrase: String },
}
