//! Weekly outreach scheduling
//!
//! Partitions ranked contacts into fixed-size weekly cohorts keyed by a
//! simple `YYYY-W<week-of-year>` label. Week numbering follows strftime
//! `%W` (Monday-based week of year, zero-padded), not ISO-8601 week rules.

use std::collections::BTreeMap;

use crate::error::{PropelError, Result};
use crate::scoring::engine::prioritize_contacts;
use crate::types::{Contact, Interaction};
use chrono::{DateTime, Duration, Utc};

/// Default cohort size when the caller does not specify one
pub const DEFAULT_CONTACTS_PER_WEEK: usize = 5;

/// Label for the week `weeks_out` weeks after `now`
fn week_key(now: DateTime<Utc>, weeks_out: i64) -> String {
    (now + Duration::weeks(weeks_out))
        .format("%Y-W%W")
        .to_string()
}

/// Build a weekly outreach plan from a contact batch
///
/// Contacts are ranked with no limit, then split into consecutive groups of
/// `contacts_per_week` in rank order; the last group may be shorter. Group
/// `i` is keyed to the week `i` weeks from `now`. Keys are year-first and
/// zero-padded, so the map's key order is chronological.
pub fn outreach_schedule(
    contacts: Vec<Contact>,
    interactions: &[Interaction],
    contacts_per_week: usize,
    now: DateTime<Utc>,
) -> Result<BTreeMap<String, Vec<Contact>>> {
    if contacts_per_week == 0 {
        return Err(PropelError::InvalidInput(
            "contacts_per_week must be at least 1".to_string(),
        ));
    }

    let ranked = prioritize_contacts(contacts, interactions, None, now)?;

    let mut schedule: BTreeMap<String, Vec<Contact>> = BTreeMap::new();
    for (i, contact) in ranked.into_iter().enumerate() {
        let key = week_key(now, (i / contacts_per_week) as i64);
        schedule.entry(key).or_default().push(contact);
    }

    Ok(schedule)
}
