pub mod cli;
pub mod config;
pub mod error;
pub mod listing;
pub mod options;
pub mod pipeline;
pub mod report;
pub mod source;
pub mod ui;

pub use cli::Cli;
pub use config::ReportConfig;
pub use error::PrettyPsError;
pub use listing::ContainerRecord;
pub use options::{Column, ColumnSet, OrderKey, OutputFormat, ReportOptions};
pub use pipeline::{build_report, run_report, Report};
pub use source::{EngineSource, ListingSource, TextSource};

#[cfg(test)]
#[path = "tests/fixtures.rs"]
pub(crate) mod fixtures;
