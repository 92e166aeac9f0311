use chrono::{DateTime, TimeDelta, Utc};

use crate::error::TemporalError;

type UnitCtor = fn(i64) -> Option<TimeDelta>;

const UNITS: [(&str, UnitCtor); 4] = [
    ("seconds", TimeDelta::try_seconds),
    ("minutes", TimeDelta::try_minutes),
    ("hours", TimeDelta::try_hours),
    ("days", TimeDelta::try_days),
];

/// Reduce a status or creation phrase to its `<magnitude> <unit>` core.
fn clean_phrase(phrase: &str) -> String {
    let trimmed = phrase.trim();
    let mut cleaned = trimmed.strip_prefix("Up ").unwrap_or(trimmed).to_lowercase();

    // "restarting (1) 36 seconds ago"
    if cleaned.contains("restarting") {
        if let Some(idx) = cleaned.find(')') {
            cleaned = cleaned[idx + 1..].to_owned();
        }
    }

    let mut cleaned = cleaned.trim().to_owned();
    if let Some(stripped) = cleaned.strip_suffix("ago") {
        cleaned = stripped.trim().to_owned();
    }

    if let Some(idx) = cleaned
        .find("(health")
        .or_else(|| cleaned.find("(unhealthy"))
    {
        cleaned.truncate(idx);
        cleaned = cleaned.trim().to_owned();
    }

    if let Some(start) = cleaned.find("exited (") {
        if let Some(close) = cleaned[start..].find(')') {
            cleaned = cleaned[start + close + 1..].trim().to_owned();
        }
    }

    cleaned
}

fn magnitude(cleaned: &str) -> Option<i64> {
    cleaned.split_whitespace().next()?.parse().ok()
}

/// How long ago a phrase such as `Up 3 days` or `Exited (1) 22 minutes ago` happened.
pub fn elapsed(phrase: &str) -> Result<TimeDelta, TemporalError> {
    let unrecognized = || TemporalError::Unrecognized {
        phrase: phrase.to_owned(),
    };
    let cleaned = clean_phrase(phrase);
    if cleaned.contains("about an hour") {
        return Ok(TimeDelta::hours(1));
    }

    for (unit, to_delta) in UNITS {
        if cleaned.contains(unit) {
            return magnitude(&cleaned)
                .and_then(to_delta)
                .ok_or_else(unrecognized);
        }
    }
    Err(unrecognized())
}

/// Absolute instant for `phrase` relative to `now`. Unknown phrases map to `now`.
pub fn normalize_at(phrase: &str, now: DateTime<Utc>) -> DateTime<Utc> {
    match elapsed(phrase) {
        Ok(delta) => now
            .checked_sub_signed(delta)
            .unwrap_or(DateTime::<Utc>::MIN_UTC),
        Err(error) => {
            tracing::debug!(%error, "falling back to current time");
            now
        }
    }
}

#[cfg(test)]
#[path = "../tests/temporal_tests.rs"]
mod tests;
