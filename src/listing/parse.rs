use chrono::{DateTime, Utc};

use super::{is_running, normalize_at, ContainerRecord};
use crate::error::ParseError;

/// Column positions after the fixed leading fields, resolved by fragment count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLayout<'a> {
    WithPorts { ports: &'a str, name: &'a str },
    WithoutPorts { name: &'a str },
}

impl<'a> RowLayout<'a> {
    /// `None` when the row has fewer than the six mandatory columns.
    pub fn resolve(fragments: &[&'a str]) -> Option<Self> {
        match *fragments {
            [_, _, _, _, _, name] => Some(RowLayout::WithoutPorts { name }),
            [_, _, _, _, _, ports, name, ..] => Some(RowLayout::WithPorts { ports, name }),
            _ => None,
        }
    }
}

/// Split a listing row on runs of two or more spaces, dropping blank pieces.
pub fn split_fragments(line: &str) -> Vec<&str> {
    line.split("  ")
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}

pub fn parse_ports(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(", ").map(str::to_owned).collect()
}

/// Build a record from one listing row. `line` is the 1-based row number, used for diagnostics.
pub fn parse_line(
    row: &str,
    line: usize,
    now: DateTime<Utc>,
) -> Result<ContainerRecord, ParseError> {
    let fragments = split_fragments(row);
    let Some(layout) = RowLayout::resolve(&fragments) else {
        return Err(ParseError::MalformedLine {
            line,
            fragments: fragments.len(),
        });
    };

    let (ports, name) = match layout {
        RowLayout::WithPorts { ports, name } => (parse_ports(ports), name),
        RowLayout::WithoutPorts { name } => (Vec::new(), name),
    };
    let created_text = fragments[3].to_owned();
    let status_text = fragments[4].to_owned();

    Ok(ContainerRecord {
        container_id: fragments[0].to_owned(),
        image_id: fragments[1].to_owned(),
        command: fragments[2].replace('"', ""),
        created_at: normalize_at(&created_text, now),
        created_text,
        status_at: normalize_at(&status_text, now),
        running: is_running(&status_text),
        status_text,
        ports,
        name: name.to_owned(),
        color: String::new(),
    })
}

/// Parse the whole listing, skipping the header and any malformed rows.
pub fn parse_listing(blob: &str, now: DateTime<Utc>) -> Vec<ContainerRecord> {
    let mut records = Vec::new();
    for (idx, row) in blob.lines().enumerate().skip(1) {
        if row.trim().is_empty() {
            continue;
        }
        match parse_line(row, idx + 1, now) {
            Ok(record) => records.push(record),
            Err(error) => tracing::warn!(%error, "skipping listing row"),
        }
    }
    tracing::debug!(count = records.len(), "parsed listing");
    records
}

#[cfg(test)]
#[path = "../tests/parse_tests.rs"]
mod tests;
