use anstyle::{AnsiColor, Color, Style};

use crate::config::{default_palette, ReportConfig};
use crate::listing::ContainerRecord;

/// Ordinal color cycle: position `i` gets `colors[i % colors.len()]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<AnsiColor>,
}

impl Palette {
    pub fn new(colors: Vec<AnsiColor>) -> Self {
        if colors.is_empty() {
            return Self::default();
        }
        Self { colors }
    }

    pub fn from_config(config: &ReportConfig) -> Self {
        let colors = config.palette.iter().map(|color| AnsiColor::from(*color));
        Self::new(colors.collect())
    }

    pub fn color_at(&self, position: usize) -> AnsiColor {
        self.colors[position % self.colors.len()]
    }

    pub fn style_at(&self, position: usize) -> Style {
        let color = Color::Ansi(self.color_at(position));
        Style::new().fg_color(Some(color))
    }

    /// Escape sequence for `position`, e.g. `"\x1b[94m"`.
    pub fn code_at(&self, position: usize) -> String {
        self.style_at(position).render().to_string()
    }

    /// Stamp every record with the color of its listing position.
    pub fn assign(&self, records: &mut [ContainerRecord]) {
        for (position, record) in records.iter_mut().enumerate() {
            record.color = self.code_at(position);
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        let colors = default_palette().into_iter().map(AnsiColor::from);
        Self {
            colors: colors.collect(),
        }
    }
}
