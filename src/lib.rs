//! PropelMe - Personal Networking Assistant Backend
//!
//! A CRUD backend that stores contacts and job applications, drafts outreach
//! messages with Gemini, searches Eventbrite for networking events, and ranks
//! contacts for outreach with a deterministic prioritization engine.
//!
//! # Architecture
//!
//! The system is organized into several layers:
//! - **Types**: Core data structures (Contact, Interaction, etc.)
//! - **Scoring**: Pure prioritization engine and weekly outreach scheduler
//! - **Storage**: SQLite persistence behind a storage trait
//! - **Services**: Gemini drafting, Eventbrite event search
//! - **API**: Axum HTTP interface
//!
//! # Example
//!
//! ```ignore
//! use propelme::{prioritize_contacts, Contact};
//! use chrono::Utc;
//!
//! let contacts: Vec<Contact> = load_batch();
//! let ranked = prioritize_contacts(contacts, &[], Some(10), Utc::now())?;
//! for contact in &ranked {
//!     println!("{}: {:.1}", contact.name, contact.priority_score);
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod scoring;
pub mod services;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use config::Settings;
pub use error::{PropelError, Result};
pub use scoring::{outreach_schedule, prioritize_contacts, priority_score, warmth_score};
pub use services::{EventbriteClient, LlmConfig, LlmService};
pub use storage::{sqlite::SqliteStorage, StorageBackend};
pub use types::{
    Contact, ContactCreate, ContactSource, Interaction, InteractionKind, JobApplication,
    JobApplicationCreate, PlannerAction, PlannerTask, RelationshipType, Sentiment, WarmthBucket,
};
