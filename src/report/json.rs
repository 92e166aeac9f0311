use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::listing::ContainerRecord;
use crate::pipeline::Report;

#[derive(Serialize)]
struct JsonReport<'a> {
    total_containers: usize,
    objects: &'a [ContainerRecord],
}

/// `{ "objects": [...], "total_containers": n }` with keys sorted at every level.
pub fn render_json_report(report: &Report) -> Result<String, serde_json::Error> {
    // Going through `Value` sorts object keys.
    let value = serde_json::to_value(JsonReport {
        total_containers: report.records.len(),
        objects: &report.records,
    })?;

    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    String::from_utf8(out).map_err(<serde_json::Error as serde::ser::Error>::custom)
}

#[cfg(test)]
#[path = "../tests/json_report_tests.rs"]
mod tests;
