use std::collections::BTreeSet;

use thiserror::Error;

/// A display column of the text report. Variant order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    State,
    Status,
    Created,
    Ports,
    ContainerId,
    ImageId,
    Command,
}

impl Column {
    pub const ALL: [Column; 7] = [
        Column::State,
        Column::Status,
        Column::Created,
        Column::Ports,
        Column::ContainerId,
        Column::ImageId,
        Column::Command,
    ];

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'r' => Some(Column::State),
            's' => Some(Column::Status),
            'c' => Some(Column::Created),
            'p' => Some(Column::Ports),
            'n' => Some(Column::ContainerId),
            'i' => Some(Column::ImageId),
            'm' => Some(Column::Command),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Column::State => "State:",
            Column::Status => "Status:",
            Column::Created => "Created:",
            Column::Ports => "Ports:",
            Column::ContainerId => "Container ID:",
            Column::ImageId => "Image ID:",
            Column::Command => "Command:",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown column code `{0}` (expected any of r, s, c, p, n, i, m)")]
pub struct UnknownColumnCode(pub char);

/// The set of columns selected for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSet(BTreeSet<Column>);

impl ColumnSet {
    pub fn all() -> Self {
        Self(Column::ALL.into_iter().collect())
    }

    pub fn from_codes(codes: &str) -> Result<Self, UnknownColumnCode> {
        let mut set = BTreeSet::new();
        let letters = codes.chars().filter(|c| !c.is_whitespace() && *c != ',');
        for code in letters {
            let Some(column) = Column::from_code(code) else {
                return Err(UnknownColumnCode(code));
            };
            set.insert(column);
        }
        if set.is_empty() {
            return Ok(Self::all());
        }
        Ok(Self(set))
    }

    pub fn contains(&self, column: Column) -> bool {
        self.0.contains(&column)
    }

    pub fn iter(&self) -> impl Iterator<Item = Column> + '_ {
        self.0.iter().copied()
    }
}

impl Default for ColumnSet {
    fn default() -> Self {
        Self::all()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OrderKey {
    /// Most recent status change first
    #[default]
    #[value(name = "status", alias = "default")]
    Status,
    #[value(
        name = "container-id",
        aliases = ["container", "container-name"]
    )]
    ContainerId,
    #[value(name = "image-id", aliases = ["image", "image-name"])]
    ImageId,
    Created,
    Name,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Validated report options. Produced by the CLI layer, consumed by the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub search_terms: Vec<String>,
    pub include_stopped: bool,
    pub columns: ColumnSet,
    pub order: OrderKey,
    pub reverse: bool,
    pub format: OutputFormat,
}

impl ReportOptions {
    pub fn search_active(&self) -> bool {
        !self.search_terms.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod tests;
