use std::io::{IsTerminal, Write};

use anstream::{AutoStream, ColorChoice};
use anstyle::Style;

use crate::config::ReportConfig;
use crate::ui::renderer::{Renderer, UiResult};
use crate::ui::table::{render_table, summary_table};
use crate::ui::theme::{resolve_color_enabled, OutputMode, Theme};
use crate::ui::widgets::{KeyValue, MessageBlock, SummaryCounts, TableSpec};

pub struct PlainRenderer<W: Write> {
    writer: W,
    color_enabled: bool,
    theme: Theme,
    label_width: usize,
    indent: usize,
}

impl<W: Write> PlainRenderer<W> {
    pub fn new(writer: W, color_enabled: bool) -> Self {
        let defaults = ReportConfig::default();
        Self {
            writer,
            color_enabled,
            theme: Theme::default(),
            label_width: defaults.label_width,
            indent: defaults.indent,
        }
    }

    pub fn with_layout(mut self, config: &ReportConfig) -> Self {
        self.label_width = config.label_width;
        self.indent = config.indent;
        self
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn style_text(&self, style: Style, text: &str) -> String {
        if !self.color_enabled {
            return text.to_owned();
        }
        format!("{}{}{}", style.render(), text, style.render_reset())
    }
}

fn color_choice(mode: OutputMode) -> ColorChoice {
    match mode {
        OutputMode::Auto => ColorChoice::Auto,
        OutputMode::Always => ColorChoice::AlwaysAnsi,
        OutputMode::Never => ColorChoice::Never,
    }
}

impl PlainRenderer<AutoStream<std::io::Stderr>> {
    pub fn stderr(mode: OutputMode) -> Self {
        let stream = AutoStream::new(std::io::stderr(), color_choice(mode));
        let color_enabled = resolve_color_enabled(mode, std::io::stderr().is_terminal());
        Self::new(stream, color_enabled)
    }
}

impl<W: Write> Renderer for PlainRenderer<W> {
    fn text(&mut self, body: &str) -> UiResult<()> {
        write!(self.writer, "{body}")?;
        if !body.ends_with('\n') {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn section(&mut self, title: &str) -> UiResult<()> {
        let rendered = self.style_text(self.theme.accent, title);
        writeln!(self.writer, "{rendered}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn error_line(&mut self, body: &str) -> UiResult<()> {
        let label = self.style_text(self.theme.error, "error");
        writeln!(self.writer, "{label}: {body}")?;
        Ok(())
    }

    fn error_block(&mut self, block: &MessageBlock) -> UiResult<()> {
        let marker = self.style_text(self.theme.error, "[error]");
        writeln!(self.writer, "{marker} {}", block.title)?;
        writeln!(self.writer, "  {}", block.body)?;
        if let Some(hint) = &block.hint {
            let hint_label = self.style_text(self.theme.muted, "hint");
            writeln!(self.writer, "  {hint_label}: {hint}")?;
        }
        Ok(())
    }

    fn key_values(&mut self, items: &[KeyValue]) -> UiResult<()> {
        let indent = " ".repeat(self.indent);
        for item in items {
            // Pad before styling so escape sequences do not count toward the width.
            let padded = format!("{:<width$}", item.key, width = self.label_width);
            let key = if item.key.is_empty() {
                padded
            } else {
                self.style_text(self.theme.label, &padded)
            };
            let line = format!("{indent}{key}{}", item.value);
            writeln!(self.writer, "{}", line.trim_end())?;
        }
        Ok(())
    }

    fn summary(&mut self, counts: SummaryCounts) -> UiResult<()> {
        self.table(&summary_table(counts))
    }

    fn table(&mut self, spec: &TableSpec) -> UiResult<()> {
        let rendered = render_table(spec);
        for line in rendered.lines() {
            writeln!(self.writer, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::renderer::Renderer;

    #[test]
    fn renders_blocks_without_color_when_disabled() {
        let mut renderer = PlainRenderer::new(Vec::<u8>::new(), false);

        renderer
            .error_block(
                &MessageBlock::new("Invalid config", "palette must not be empty")
                    .with_hint("Remove `palette` to use the defaults"),
            )
            .expect("render error block");

        let rendered = String::from_utf8(renderer.into_inner()).expect("utf8");
        assert_eq!(
            rendered,
            "[error] Invalid config\n  palette must not be empty\n  hint: Remove `palette` to use the defaults\n"
        );
    }

    #[test]
    fn key_values_pad_labels_and_indent_continuations() {
        let mut renderer = PlainRenderer::new(Vec::<u8>::new(), false);

        renderer
            .key_values(&[
                KeyValue::new("Ports:", "0.0.0.0:80->80/tcp"),
                KeyValue::continuation("0.0.0.0:443->443/tcp"),
                KeyValue::new("Created:", ""),
            ])
            .expect("key values");

        let rendered = String::from_utf8(renderer.into_inner()).expect("utf8");
        assert_eq!(
            rendered,
            concat!(
                "    Ports:          0.0.0.0:80->80/tcp\n",
                "                    0.0.0.0:443->443/tcp\n",
                "    Created:\n",
            )
        );
    }

    #[test]
    fn key_values_follow_configured_layout() {
        let config = ReportConfig {
            label_width: 10,
            indent: 1,
            ..ReportConfig::default()
        };
        let mut renderer = PlainRenderer::new(Vec::<u8>::new(), false).with_layout(&config);

        renderer
            .key_values(&[KeyValue::new("Status:", "Up 3 weeks")])
            .expect("key values");

        let rendered = String::from_utf8(renderer.into_inner()).expect("utf8");
        assert_eq!(rendered, " Status:   Up 3 weeks\n");
    }

    #[test]
    fn styled_labels_keep_alignment_when_color_enabled() {
        let mut renderer = PlainRenderer::new(Vec::<u8>::new(), true);

        renderer
            .key_values(&[KeyValue::new("Status:", "Up 3 weeks")])
            .expect("key values");

        let rendered = String::from_utf8(renderer.into_inner()).expect("utf8");
        assert_eq!(
            rendered,
            "    \u{1b}[1mStatus:         \u{1b}[0mUp 3 weeks\n"
        );
    }

    #[test]
    fn summary_lists_search_count_only_when_present() {
        let mut renderer = PlainRenderer::new(Vec::<u8>::new(), false);
        renderer
            .summary(SummaryCounts {
                total: 6,
                running: 5,
                matches: None,
            })
            .expect("summary");
        let rendered = String::from_utf8(renderer.into_inner()).expect("utf8");
        assert!(rendered.contains("Total containers:"));
        assert!(rendered.contains("Total running:"));
        assert!(!rendered.contains("Containers in search:"));

        let mut renderer = PlainRenderer::new(Vec::<u8>::new(), false);
        renderer
            .summary(SummaryCounts {
                total: 6,
                running: 5,
                matches: Some(1),
            })
            .expect("summary");
        let rendered = String::from_utf8(renderer.into_inner()).expect("utf8");
        let search_line = rendered
            .lines()
            .find(|line| line.starts_with("Containers in search:"))
            .expect("search line");
        assert!(search_line.ends_with('1'));
    }

    #[test]
    fn error_line_is_a_single_line() {
        let mut renderer = PlainRenderer::new(Vec::<u8>::new(), false);
        renderer
            .error_line("Docker does not appear to be running.")
            .expect("error line");
        let rendered = String::from_utf8(renderer.into_inner()).expect("utf8");
        assert_eq!(rendered, "error: Docker does not appear to be running.\n");
    }
}
