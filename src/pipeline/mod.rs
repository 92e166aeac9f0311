//! parse → enrich → filter → order → render.

pub mod filter;
pub mod order;

use chrono::{DateTime, Utc};

use crate::config::ReportConfig;
use crate::error::PrettyPsError;
use crate::listing::{parse_listing, ContainerRecord};
use crate::options::{OutputFormat, ReportOptions};
use crate::report::{render_json_report, render_text_report};
use crate::source::{check_engine_output, ListingSource};
use crate::ui::Palette;

pub use filter::filter_records;
pub use order::order_records;

/// The records to display plus the listing-wide counts shown in the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub records: Vec<ContainerRecord>,
    pub total_containers: usize,
    pub total_running: usize,
}

pub fn build_report(
    blob: &str,
    options: &ReportOptions,
    palette: &Palette,
    now: DateTime<Utc>,
) -> Report {
    let mut records = parse_listing(blob, now);
    palette.assign(&mut records);

    let total_containers = records.len();
    let total_running = records.iter().filter(|record| record.running).count();

    let records = filter_records(records, options);
    tracing::debug!(
        kept = records.len(),
        total = total_containers,
        "filtered listing"
    );
    let records = order_records(records, options.order, options.reverse);

    Report {
        records,
        total_containers,
        total_running,
    }
}

/// Fetch the listing once and render it in the requested format.
pub fn run_report(
    options: &ReportOptions,
    config: &ReportConfig,
    source: &dyn ListingSource,
    color_enabled: bool,
) -> Result<String, PrettyPsError> {
    let blob = source.fetch()?;
    check_engine_output(&blob)?;

    let palette = Palette::from_config(config);
    let report = build_report(&blob, options, &palette, Utc::now());

    match options.format {
        OutputFormat::Text => Ok(render_text_report(&report, options, config, color_enabled)?),
        OutputFormat::Json => Ok(render_json_report(&report)?),
    }
}

#[cfg(test)]
#[path = "../tests/pipeline_tests.rs"]
mod tests;
