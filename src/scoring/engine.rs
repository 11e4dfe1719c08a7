//! Contact priority scoring
//!
//! Blends recency, relationship strength, interaction frequency, and warmth
//! into a single 0-100 priority score per contact, then ranks whole batches.
//! Every function takes `now` explicitly so results are reproducible for a
//! fixed input.

use crate::error::{PropelError, Result};
use crate::types::{Contact, Interaction, RelationshipType};
use chrono::{DateTime, Duration, Utc};

/// Maximum contribution of the warmth term
const WARMTH_MAX: f32 = 15.0;

/// Warmth assumed for a contact that carries no warmth score
const NEUTRAL_WARMTH: f32 = 50.0;

/// Warmth for a contact with history but nothing inside the window
const COLD_WARMTH: f32 = 40.0;

/// Trailing window for the frequency term, in days
const FREQUENCY_WINDOW_DAYS: i64 = 365;

/// Trailing window for the warmth calculation, in days
const WARMTH_WINDOW_DAYS: i64 = 180;

/// Number of qualifying interactions the warmth calculation inspects
const WARMTH_SAMPLE: usize = 10;

/// Interaction matching needs a concrete contact id
fn require_id(contact: &Contact) -> Result<i64> {
    contact.id.ok_or_else(|| {
        PropelError::InvalidInput(format!(
            "contact '{}' has no id; interaction matching requires one",
            contact.name
        ))
    })
}

/// Recency term (40 points max)
///
/// Staler contacts rank higher; a contact never reached before gets the
/// full 40.
fn recency_score(contact: &Contact, now: DateTime<Utc>) -> f32 {
    let Some(last) = contact.last_interaction_date else {
        return 40.0;
    };

    let days_since = (now - last).num_days();

    if days_since < 30 {
        5.0
    } else if days_since < 60 {
        15.0
    } else if days_since < 90 {
        25.0
    } else if days_since < 180 {
        35.0
    } else {
        40.0
    }
}

/// Frequency term (20 points max)
///
/// Counts this contact's interactions in the trailing year; more recent
/// activity means less urgency.
fn frequency_score(contact_id: i64, interactions: &[Interaction], now: DateTime<Utc>) -> f32 {
    let cutoff = now - Duration::days(FREQUENCY_WINDOW_DAYS);

    let count = interactions
        .iter()
        .filter(|i| i.contact_id == contact_id && i.date > cutoff)
        .count();

    match count {
        0 => 20.0,
        1..=2 => 15.0,
        3..=5 => 10.0,
        6..=11 => 5.0,
        _ => 2.0,
    }
}

/// Composite 0-100 priority score for one contact
///
/// The frequency term only participates when an interaction history is
/// supplied; an empty slice contributes nothing rather than the 20-point
/// "no recent contact" value. The final sum clamps to [0, 100], which only
/// matters when the caller supplies an out-of-range warmth score.
pub fn priority_score(
    contact: &Contact,
    interactions: &[Interaction],
    now: DateTime<Utc>,
) -> Result<f32> {
    let mut score = recency_score(contact, now);

    score += contact
        .relationship
        .unwrap_or(RelationshipType::Unknown)
        .weight();

    if !interactions.is_empty() {
        let contact_id = require_id(contact)?;
        score += frequency_score(contact_id, interactions, now);
    }

    let warmth = contact.warmth_score.unwrap_or(NEUTRAL_WARMTH);
    score += (warmth / 100.0) * WARMTH_MAX;

    Ok(score.clamp(0.0, 100.0))
}

/// Relationship warmth (0-100) from interaction quality
///
/// With no interaction history at all the contact keeps its stored warmth
/// (neutral 50.0 if unset). History with nothing inside the 180-day window
/// comes back slightly cold at 40.0. Otherwise the first ten qualifying
/// interactions, in input order, each add a sentiment and a channel
/// adjustment on top of the neutral baseline; the total clamps once at the
/// end, not per step.
pub fn warmth_score(
    contact: &Contact,
    interactions: &[Interaction],
    now: DateTime<Utc>,
) -> Result<f32> {
    if interactions.is_empty() {
        return Ok(contact.warmth_score.unwrap_or(NEUTRAL_WARMTH));
    }

    let contact_id = require_id(contact)?;
    let cutoff = now - Duration::days(WARMTH_WINDOW_DAYS);

    let recent: Vec<&Interaction> = interactions
        .iter()
        .filter(|i| i.contact_id == contact_id && i.date > cutoff)
        .collect();

    if recent.is_empty() {
        return Ok(COLD_WARMTH);
    }

    let mut total = NEUTRAL_WARMTH;
    for interaction in recent.iter().take(WARMTH_SAMPLE) {
        total += interaction.sentiment.warmth_weight();
        total += interaction.kind.warmth_weight();
    }

    Ok(total.clamp(0.0, 100.0))
}

/// Score and rank a batch of contacts for outreach
///
/// Takes the batch by value and returns a new scored vector sorted
/// descending by priority; equal scores keep their input order. A `limit`
/// of `None` or zero means unlimited; a negative limit yields an empty
/// result. Scoring is all-or-nothing: one malformed contact fails the
/// whole batch.
pub fn prioritize_contacts(
    mut contacts: Vec<Contact>,
    interactions: &[Interaction],
    limit: Option<i64>,
    now: DateTime<Utc>,
) -> Result<Vec<Contact>> {
    for contact in &mut contacts {
        let score = priority_score(contact, interactions, now)?;
        contact.priority_score = score;
    }

    contacts.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));

    match limit {
        Some(n) if n < 0 => contacts.clear(),
        Some(n) if n > 0 => contacts.truncate(n as usize),
        _ => {}
    }

    Ok(contacts)
}
