//! Contact prioritization and outreach scheduling
//!
//! The scoring core of the backend: pure, synchronous functions over
//! in-memory contact and interaction batches. The HTTP layer feeds request
//! payloads in and serializes the results back out; nothing here touches
//! storage or the network.

pub mod engine;
pub mod schedule;

pub use engine::{prioritize_contacts, priority_score, warmth_score};
pub use schedule::{outreach_schedule, DEFAULT_CONTACTS_PER_WEEK};
