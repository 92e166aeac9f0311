use std::io::Write;

use crate::config::ReportConfig;
use crate::listing::ContainerRecord;
use crate::options::{Column, ReportOptions};
use crate::pipeline::Report;
use crate::ui::{KeyValue, PlainRenderer, Renderer, SummaryCounts, Theme, UiResult};

pub fn headline(options: &ReportOptions) -> String {
    let terms = options.search_terms.join(",");
    match (options.search_active(), options.include_stopped) {
        (true, false) => format!("Currently running containers with: {terms}"),
        (true, true) => format!("Containers with: {terms}"),
        (false, false) => "All currently running docker containers".to_owned(),
        (false, true) => "All docker containers".to_owned(),
    }
}

/// The record's name in its assigned color, with the first search match bolded in place.
pub fn display_name(
    record: &ContainerRecord,
    search_terms: &[String],
    color_enabled: bool,
    theme: &Theme,
) -> String {
    if !color_enabled {
        return record.name.clone();
    }

    let color = record.color.as_str();
    let reset = anstyle::Reset.render();
    let hit = search_terms
        .iter()
        .filter(|term| !term.is_empty())
        .find_map(|term| Some((record.name.find(term.as_str())?, term.len())));
    let Some((start, len)) = hit else {
        return format!("{color}{}{reset}", record.name);
    };

    let (before, rest) = record.name.split_at(start);
    let (matched, after) = rest.split_at(len);
    let bold = theme.highlight.render();
    let highlighted = format!("{bold}{color}{matched}{reset}");
    format!("{color}{before}{highlighted}{color}{after}{reset}")
}

/// Section heading for one record: the display name, bold as a whole.
pub fn record_heading(
    record: &ContainerRecord,
    search_terms: &[String],
    color_enabled: bool,
    theme: &Theme,
) -> String {
    let name = display_name(record, search_terms, color_enabled, theme);
    if !color_enabled {
        return name;
    }
    format!("{}{name}", theme.highlight.render())
}

pub fn record_fields<W: Write>(
    record: &ContainerRecord,
    options: &ReportOptions,
    renderer: &PlainRenderer<W>,
) -> Vec<KeyValue> {
    let theme = renderer.theme();
    let mut fields = Vec::new();
    for column in options.columns.iter() {
        let label = column.label();
        match column {
            Column::State => {
                if !options.include_stopped {
                    continue;
                }
                let state = if record.running {
                    renderer.style_text(theme.running, "[ON]")
                } else {
                    renderer.style_text(theme.stopped, "[OFF]")
                };
                fields.push(KeyValue::new(label, state));
            }
            Column::Status => fields.push(KeyValue::new(label, record.status_text.as_str())),
            Column::Created => fields.push(KeyValue::new(label, record.created_text.as_str())),
            Column::Ports => {
                let mut ports = record.ports.iter();
                let first = ports.next().map(String::as_str).unwrap_or_default();
                fields.push(KeyValue::new(label, first));
                fields.extend(ports.map(|port| KeyValue::continuation(port.trim())));
            }
            Column::ContainerId => fields.push(KeyValue::new(label, record.container_id.as_str())),
            Column::ImageId => fields.push(KeyValue::new(label, record.image_id.as_str())),
            Column::Command => fields.push(KeyValue::new(label, record.command.as_str())),
        }
    }
    fields
}

pub fn render_text_report(
    report: &Report,
    options: &ReportOptions,
    config: &ReportConfig,
    color_enabled: bool,
) -> UiResult<String> {
    let renderer = PlainRenderer::new(Vec::<u8>::new(), color_enabled);
    let mut renderer = renderer.with_layout(config);
    let theme = renderer.theme();

    renderer.section(&headline(options))?;
    for record in &report.records {
        let heading = record_heading(record, &options.search_terms, color_enabled, &theme);
        renderer.text(&heading)?;
        let fields = record_fields(record, options, &renderer);
        renderer.key_values(&fields)?;
        renderer.text("")?;
    }

    renderer.summary(SummaryCounts {
        total: report.total_containers,
        running: report.total_running,
        matches: options.search_active().then_some(report.records.len()),
    })?;

    Ok(String::from_utf8(renderer.into_inner())?)
}

#[cfg(test)]
#[path = "../tests/text_report_tests.rs"]
mod tests;
