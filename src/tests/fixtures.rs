use chrono::{DateTime, TimeZone, Utc};

use crate::listing::{parse_listing, ContainerRecord};
use crate::ui::Palette;

/// Six containers, one stopped, mixed port layouts.
pub(crate) const PS_LISTING: &str = include_str!("../../tests/fixtures/ps_listing.txt");

/// Six containers whose status phrases span seconds to days.
pub(crate) const PS_TIMELINE: &str = include_str!("../../tests/fixtures/ps_timeline.txt");

pub(crate) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2019, 1, 19, 3, 6, 40)
        .single()
        .expect("valid fixed time")
}

pub(crate) fn parsed(blob: &str) -> Vec<ContainerRecord> {
    let mut records = parse_listing(blob, fixed_now());
    Palette::default().assign(&mut records);
    records
}

pub(crate) fn names(records: &[ContainerRecord]) -> Vec<&str> {
    records.iter().map(|record| record.name.as_str()).collect()
}
