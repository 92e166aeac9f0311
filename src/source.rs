//! Producers of the raw listing text.

use std::io::Read;
use std::path::PathBuf;
use std::process::Command as ProcessCommand;

use crate::config::EngineConfig;
use crate::error::PrettyPsError;

const ENGINE_ERROR_MARKERS: [&str; 2] = ["Error", "Cannot connect"];

pub trait ListingSource {
    /// Produce the complete listing, header line included.
    fn fetch(&self) -> Result<String, PrettyPsError>;
}

/// Runs the engine's listing command once and captures its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSource {
    program: String,
    args: Vec<String>,
}

impl EngineSource {
    pub fn new(engine: &EngineConfig) -> Self {
        Self {
            program: engine.program.clone(),
            args: engine.args.clone(),
        }
    }

    fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl ListingSource for EngineSource {
    fn fetch(&self) -> Result<String, PrettyPsError> {
        tracing::debug!(command = %self.command_line(), "querying container engine");
        let output = ProcessCommand::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|error| {
                PrettyPsError::source_unavailable(format!(
                    "failed to run `{}`: {error}",
                    self.command_line()
                ))
            })?;
        // Engine diagnostics arrive on stderr; keep them so they can be detected.
        let mut blob = String::from_utf8_lossy(&output.stdout).into_owned();
        blob.push_str(&String::from_utf8_lossy(&output.stderr));
        if !output.status.success() {
            tracing::debug!(status = %output.status, "engine listing exited unsuccessfully");
        }
        Ok(blob)
    }
}

/// A listing captured earlier, read from a file or from stdin (`-`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    File(PathBuf),
    Stdin,
    Inline(String),
}

impl TextSource {
    pub fn from_arg(raw: &str) -> Self {
        if raw == "-" {
            TextSource::Stdin
        } else {
            TextSource::File(PathBuf::from(raw))
        }
    }
}

impl ListingSource for TextSource {
    fn fetch(&self) -> Result<String, PrettyPsError> {
        match self {
            TextSource::File(path) => Ok(std::fs::read_to_string(path)?),
            TextSource::Stdin => {
                let mut blob = String::new();
                std::io::stdin().read_to_string(&mut blob)?;
                Ok(blob)
            }
            TextSource::Inline(blob) => Ok(blob.clone()),
        }
    }
}

/// Reject output that carries an engine error instead of a listing.
///
/// Only the leading line is inspected; rows of a real listing may mention the
/// markers in names, images or commands.
pub fn check_engine_output(blob: &str) -> Result<(), PrettyPsError> {
    let Some(first) = blob.lines().map(str::trim).find(|line| !line.is_empty()) else {
        return Ok(());
    };
    if ENGINE_ERROR_MARKERS.iter().any(|m| first.contains(m)) {
        return Err(PrettyPsError::source_unavailable(first));
    }
    Ok(())
}
