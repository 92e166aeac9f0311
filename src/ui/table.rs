use tabled::builder::Builder;
use tabled::settings::{Padding, Style};

use crate::ui::widgets::{SummaryCounts, TableSpec};

pub fn render_table(spec: &TableSpec) -> String {
    let mut builder = Builder::default();
    for row in &spec.rows {
        builder.push_record(row.iter().map(String::as_str));
    }
    let mut table = builder.build();
    table.with(Style::blank());
    table.with(Padding::new(0, 2, 0, 0));
    table.to_string()
}

pub fn summary_table(counts: SummaryCounts) -> TableSpec {
    let mut rows = vec![
        vec!["Total containers:".to_owned(), counts.total.to_string()],
        vec!["Total running:".to_owned(), counts.running.to_string()],
    ];
    if let Some(matches) = counts.matches {
        let label = "Containers in search:".to_owned();
        rows.push(vec![label, matches.to_string()]);
    }
    TableSpec::new(rows)
}
