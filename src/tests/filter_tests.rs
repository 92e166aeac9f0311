use super::filter_records;
use crate::fixtures::{names, parsed, PS_LISTING};
use crate::options::ReportOptions;

fn options(terms: &[&str], include_stopped: bool) -> ReportOptions {
    ReportOptions {
        search_terms: terms.iter().map(|term| (*term).to_owned()).collect(),
        include_stopped,
        ..ReportOptions::default()
    }
}

#[test]
fn default_keeps_only_running_containers() {
    let filtered = filter_records(parsed(PS_LISTING), &options(&[], false));
    assert_eq!(filtered.len(), 5);
    assert!(filtered.iter().all(|record| record.running));
}

#[test]
fn all_without_search_returns_everything_unchanged() {
    let records = parsed(PS_LISTING);
    let filtered = filter_records(records.clone(), &options(&[], true));
    assert_eq!(filtered, records);
}

#[test]
fn single_term_matches_name_substrings() {
    let filtered = filter_records(parsed(PS_LISTING), &options(&["postgres"], false));
    assert_eq!(names(&filtered), vec!["some-postgres"]);
}

#[test]
fn multiple_terms_are_or_combined_in_listing_order() {
    let opts = options(&["postgres", "bad"], false);
    let filtered = filter_records(parsed(PS_LISTING), &opts);
    assert_eq!(
        names(&filtered),
        vec![
            "badactorservices_bad-actor-services_1",
            "badactorservices_bad-actor-services-data_1",
            "some-postgres",
        ]
    );
}

#[test]
fn search_hides_stopped_matches_unless_all_is_set() {
    let running_only = filter_records(parsed(PS_LISTING), &options(&["alpine"], false));
    assert_eq!(names(&running_only), vec!["alpine-sshd"]);

    let with_stopped = filter_records(parsed(PS_LISTING), &options(&["alpine"], true));
    assert_eq!(names(&with_stopped), vec!["alpine-sshd", "alpine-sshd2"]);
}

#[test]
fn matching_is_case_sensitive() {
    let filtered = filter_records(parsed(PS_LISTING), &options(&["POST"], true));
    assert!(filtered.is_empty());
}

#[test]
fn filtering_twice_is_idempotent() {
    for opts in [
        options(&[], false),
        options(&[], true),
        options(&["post"], false),
        options(&["alpine", "nginx"], true),
    ] {
        let once = filter_records(parsed(PS_LISTING), &opts);
        let twice = filter_records(once.clone(), &opts);
        assert_eq!(once, twice);
    }
}
