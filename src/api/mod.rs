//! HTTP API for the networking assistant
//!
//! Axum routes for contact prioritization and scheduling, contact and job
//! CRUD, planner tasks, AI drafting, and event search.

pub mod ai;
pub mod contacts;
pub mod events;
pub mod jobs;
pub mod planner;
pub mod server;

use crate::error::PropelError;
use crate::services::{EventbriteClient, LlmService};
use crate::storage::StorageBackend;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::sync::Arc;

pub use server::{router, ApiServer, ApiServerConfig};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn StorageBackend>,

    /// Drafting service; absent when no Gemini key is configured
    pub llm: Option<Arc<LlmService>>,

    /// Event search client; absent when no Eventbrite key is configured
    pub events: Option<Arc<EventbriteClient>>,
}

impl AppState {
    pub fn require_llm(&self) -> Result<Arc<LlmService>, PropelError> {
        self.llm.clone().ok_or_else(|| {
            PropelError::NotConfigured(
                "Gemini API not configured. Set PROPELME_GEMINI_API_KEY.".to_string(),
            )
        })
    }

    pub fn require_events(&self) -> Result<Arc<EventbriteClient>, PropelError> {
        self.events.clone().ok_or_else(|| {
            PropelError::NotConfigured(
                "Eventbrite API not configured. Set PROPELME_EVENTBRITE_API_KEY.".to_string(),
            )
        })
    }
}

impl IntoResponse for PropelError {
    fn into_response(self) -> Response {
        let status = match &self {
            PropelError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            PropelError::NotFound(_) => StatusCode::NOT_FOUND,
            PropelError::NotConfigured(_) => StatusCode::NOT_IMPLEMENTED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(serde_json::json!({
            "status": "error",
            "detail": self.to_string(),
        }));

        (status, body).into_response()
    }
}
