use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::options::{ColumnSet, OrderKey, OutputFormat, ReportOptions, UnknownColumnCode};
use crate::ui::OutputMode;

#[derive(Debug, Parser)]
#[command(name = "prettyps")]
#[command(about = "Compact, colorized view of `docker ps -a`")]
#[command(version, disable_version_flag = true)]
pub struct Cli {
    /// Phrase to search container names, comma separate multiples
    pub search: Option<String>,

    /// Include stopped containers
    #[arg(short, long)]
    pub all: bool,

    /// Columns to display: (r)unning state, (s)tatus, (c)reated, (p)orts,
    /// co(n)tainer id, (i)mage id, co(m)mand
    #[arg(short, long, value_name = "LETTERS", value_parser = parse_columns)]
    pub include: Option<ColumnSet>,

    /// Sort key
    #[arg(short, long, value_enum, default_value_t = OrderKey::Status)]
    pub order: OrderKey,

    /// Reverse the display order
    #[arg(short, long)]
    pub reverse: bool,

    /// Emit a JSON document instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Read the listing from a file (`-` for stdin) instead of the container engine
    #[arg(long, value_name = "PATH")]
    pub input: Option<String>,

    /// Configuration file (TOML)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// When to color output
    #[arg(long, value_enum, value_name = "MODE")]
    pub color: Option<OutputMode>,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

fn parse_columns(raw: &str) -> Result<ColumnSet, UnknownColumnCode> {
    ColumnSet::from_codes(raw)
}

pub fn split_search_terms(raw: Option<&str>) -> Vec<String> {
    raw.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_owned)
            .collect()
    })
    .unwrap_or_default()
}

impl Cli {
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            search_terms: split_search_terms(self.search.as_deref()),
            include_stopped: self.all,
            columns: self.include.clone().unwrap_or_default(),
            order: self.order,
            reverse: self.reverse,
            format: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
        }
    }

    pub fn output_mode(&self) -> OutputMode {
        self.color.unwrap_or_else(OutputMode::from_env)
    }
}

#[cfg(test)]
#[path = "tests/cli_tests.rs"]
mod tests;
