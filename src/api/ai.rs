//! AI drafting endpoints

use super::AppState;
use crate::error::Result;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/ai/generate-message", post(generate_message))
        .route("/ai/analyze-network", post(analyze_network))
}

#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub contact_name: String,
    pub company: String,

    #[serde(default)]
    pub context: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub status: &'static str,
    pub message: String,
    pub contact: String,
}

/// Draft an outreach message to a contact
async fn generate_message(
    State(state): State<AppState>,
    Json(req): Json<MessageRequest>,
) -> Result<Json<MessageResponse>> {
    let llm = state.require_llm()?;

    let message = llm
        .draft_outreach_message(&req.contact_name, &req.company, &req.context)
        .await?;

    Ok(Json(MessageResponse {
        status: "success",
        message,
        contact: req.contact_name,
    }))
}

#[derive(Debug, Deserialize)]
pub struct NetworkAnalysisRequest {
    pub total_contacts: i64,
    pub active_contacts: i64,
}

#[derive(Debug, Serialize)]
pub struct NetworkAnalysisResponse {
    pub status: &'static str,
    pub analysis: String,
    pub total_contacts: i64,
    pub active_contacts: i64,
}

/// Summarize network health
async fn analyze_network(
    State(state): State<AppState>,
    Json(req): Json<NetworkAnalysisRequest>,
) -> Result<Json<NetworkAnalysisResponse>> {
    let llm = state.require_llm()?;

    let analysis = llm
        .analyze_network(req.total_contacts, req.active_contacts)
        .await?;

    Ok(Json(NetworkAnalysisResponse {
        status: "success",
        analysis,
        total_contacts: req.total_contacts,
        active_contacts: req.active_contacts,
    }))
}
