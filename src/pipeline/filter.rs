use crate::listing::ContainerRecord;
use crate::options::ReportOptions;

fn matches_any(name: &str, terms: &[String]) -> bool {
    terms.iter().any(|term| name.contains(term.as_str()))
}

/// Keep records whose name contains any search term, then drop stopped
/// containers unless they were asked for. Order is preserved.
pub fn filter_records(
    records: Vec<ContainerRecord>,
    options: &ReportOptions,
) -> Vec<ContainerRecord> {
    if !options.search_active() && options.include_stopped {
        return records;
    }

    records
        .into_iter()
        .filter(|record| {
            !options.search_active() || matches_any(&record.name, &options.search_terms)
        })
        .filter(|record| options.include_stopped || record.running)
        .collect()
}

#[cfg(test)]
#[path = "../tests/filter_tests.rs"]
mod tests;
