//! Job application endpoints

use super::AppState;
use crate::error::{PropelError, Result};
use crate::types::{JobApplication, JobApplicationCreate};
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/jobs", get(list_jobs).post(create_job))
        .route("/jobs/parse", post(parse_description))
        .route("/jobs/draft-message", post(draft_message))
        .route("/jobs/:job_id/status", post(update_status))
}

async fn list_jobs(State(state): State<AppState>) -> Result<Json<Vec<JobApplication>>> {
    Ok(Json(state.storage.list_job_applications().await?))
}

async fn create_job(
    State(state): State<AppState>,
    Json(req): Json<JobApplicationCreate>,
) -> Result<Json<JobApplication>> {
    Ok(Json(state.storage.insert_job_application(&req).await?))
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: String,

    #[serde(default)]
    pub notes_append: Option<String>,
}

/// Update a job's status and optionally append a note
async fn update_status(
    State(state): State<AppState>,
    Path(job_id): Path<i64>,
    Json(req): Json<StatusUpdateRequest>,
) -> Result<Json<JobApplication>> {
    let job = state
        .storage
        .update_job_status(job_id, &req.status, req.notes_append.as_deref())
        .await?;

    Ok(Json(job))
}

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub text: String,
}

/// Extract structured application fields from a free-text job description
async fn parse_description(
    State(state): State<AppState>,
    Json(req): Json<ParseRequest>,
) -> Result<Json<serde_json::Value>> {
    if req.text.trim().is_empty() {
        return Err(PropelError::InvalidInput("text is required".to_string()));
    }

    let llm = state.require_llm()?;
    Ok(Json(llm.extract_application_fields(&req.text).await?))
}

#[derive(Debug, Deserialize)]
pub struct DraftMessageRequest {
    pub your_background: String,
    pub company: String,
    pub job_title: String,

    #[serde(default)]
    pub hiring_manager_name: String,

    #[serde(default)]
    pub jd_keywords: String,
}

#[derive(Debug, Serialize)]
pub struct DraftMessageResponse {
    pub message: String,
}

/// Draft a LinkedIn message to a hiring manager
async fn draft_message(
    State(state): State<AppState>,
    Json(req): Json<DraftMessageRequest>,
) -> Result<Json<DraftMessageResponse>> {
    let llm = state.require_llm()?;

    let message = llm
        .draft_job_message(
            &req.your_background,
            &req.company,
            &req.job_title,
            &req.hiring_manager_name,
            &req.jd_keywords,
        )
        .await?;

    Ok(Json(DraftMessageResponse { message }))
}
