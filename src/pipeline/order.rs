use std::cmp::Ordering;

use crate::listing::ContainerRecord;
use crate::options::OrderKey;

fn compare(key: OrderKey, a: &ContainerRecord, b: &ContainerRecord) -> Ordering {
    match key {
        OrderKey::Status => a.status_at.cmp(&b.status_at),
        OrderKey::ContainerId => a.container_id.cmp(&b.container_id),
        OrderKey::ImageId => a.image_id.cmp(&b.image_id),
        OrderKey::Created => a.created_at.cmp(&b.created_at),
        OrderKey::Name => a.name.cmp(&b.name),
    }
}

/// Stable ascending sort on `key`, flipped by `reverse`.
///
/// Quirk: the status key runs the other way round. Without `reverse` the
/// ascending result is flipped so the most recent status change comes first;
/// with `reverse` the oldest comes first.
pub fn order_records(
    mut records: Vec<ContainerRecord>,
    key: OrderKey,
    reverse: bool,
) -> Vec<ContainerRecord> {
    if records.is_empty() {
        return records;
    }

    records.sort_by(|a, b| compare(key, a, b));
    let flip = match key {
        OrderKey::Status => !reverse,
        _ => reverse,
    };
    if flip {
        records.reverse();
    }
    records
}

#[cfg(test)]
#[path = "../tests/order_tests.rs"]
mod tests;
