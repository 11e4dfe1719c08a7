//! Outbound service clients
//!
//! Gemini-backed message drafting and Eventbrite event search.

pub mod eventbrite;
pub mod llm;

pub use eventbrite::{EventSearchResults, EventbriteClient, NetworkingEvent};
pub use llm::{LlmConfig, LlmService};
