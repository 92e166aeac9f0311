#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBlock {
    pub title: String,
    pub body: String,
    pub hint: Option<String>,
}

impl MessageBlock {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// One indented `Label: value` row. An empty key renders as a continuation row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn continuation(value: impl Into<String>) -> Self {
        Self::new("", value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryCounts {
    pub total: usize,
    pub running: usize,
    pub matches: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    pub rows: Vec<Vec<String>>,
}

impl TableSpec {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }
}
