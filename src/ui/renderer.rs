use thiserror::Error;

use crate::ui::widgets::{KeyValue, MessageBlock, SummaryCounts, TableSpec};

pub type UiResult<T> = Result<T, UiError>;

#[derive(Error, Debug)]
pub enum UiError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid utf-8 in rendered output: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub trait Renderer {
    fn text(&mut self, body: &str) -> UiResult<()>;
    fn section(&mut self, title: &str) -> UiResult<()>;
    /// One `error: ...` line, for failures that need no further context.
    fn error_line(&mut self, body: &str) -> UiResult<()>;
    fn error_block(&mut self, block: &MessageBlock) -> UiResult<()>;

    /// Indented, label-padded rows under a record heading.
    fn key_values(&mut self, items: &[KeyValue]) -> UiResult<()>;
    fn summary(&mut self, counts: SummaryCounts) -> UiResult<()>;
    fn table(&mut self, spec: &TableSpec) -> UiResult<()>;
}
