//! Contact endpoints: prioritization, scheduling, warmth, and CRUD

use super::AppState;
use crate::error::Result;
use crate::scoring::{outreach_schedule, prioritize_contacts, warmth_score};
use crate::types::{
    Contact, ContactCreate, Interaction, InteractionKind, Sentiment, WarmthBucket,
};
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/contacts", get(list_contacts).post(create_contact))
        .route("/contacts/prioritize", post(prioritize))
        .route("/contacts/schedule", post(schedule))
        .route("/contacts/calculate-warmth", post(calculate_warmth))
        .route("/contacts/:contact_id", get(get_contact))
        .route(
            "/contacts/:contact_id/interactions",
            get(list_interactions).post(log_interaction),
        )
}

#[derive(Debug, Deserialize)]
pub struct PrioritizeRequest {
    pub contacts: Vec<Contact>,

    #[serde(default)]
    pub interactions: Vec<Interaction>,

    #[serde(default)]
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct PrioritizeResponse {
    pub status: &'static str,
    pub total_contacts: usize,
    pub prioritized_contacts: Vec<Contact>,
}

/// Rank a contact batch for outreach
async fn prioritize(
    State(_state): State<AppState>,
    Json(req): Json<PrioritizeRequest>,
) -> Result<Json<PrioritizeResponse>> {
    let total_contacts = req.contacts.len();
    let prioritized = prioritize_contacts(req.contacts, &req.interactions, req.limit, Utc::now())?;

    Ok(Json(PrioritizeResponse {
        status: "success",
        total_contacts,
        prioritized_contacts: prioritized,
    }))
}

fn default_contacts_per_week() -> usize {
    crate::scoring::DEFAULT_CONTACTS_PER_WEEK
}

#[derive(Debug, Deserialize)]
pub struct ScheduleRequest {
    pub contacts: Vec<Contact>,

    #[serde(default)]
    pub interactions: Vec<Interaction>,

    #[serde(default = "default_contacts_per_week")]
    pub contacts_per_week: usize,
}

#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    pub status: &'static str,
    pub weeks: usize,
    pub total_contacts: usize,
    pub schedule: BTreeMap<String, Vec<Contact>>,
}

/// Build a weekly outreach schedule
async fn schedule(
    State(_state): State<AppState>,
    Json(req): Json<ScheduleRequest>,
) -> Result<Json<ScheduleResponse>> {
    let total_contacts = req.contacts.len();
    let schedule = outreach_schedule(
        req.contacts,
        &req.interactions,
        req.contacts_per_week,
        Utc::now(),
    )?;

    Ok(Json(ScheduleResponse {
        status: "success",
        weeks: schedule.len(),
        total_contacts,
        schedule,
    }))
}

#[derive(Debug, Deserialize)]
pub struct WarmthRequest {
    pub contact: Contact,

    #[serde(default)]
    pub interactions: Vec<Interaction>,
}

#[derive(Debug, Serialize)]
pub struct WarmthResponse {
    pub status: &'static str,
    pub contact: String,
    pub warmth_score: f32,
    pub warmth_bucket: WarmthBucket,
}

/// Compute a contact's warmth from its interaction history
async fn calculate_warmth(
    State(_state): State<AppState>,
    Json(req): Json<WarmthRequest>,
) -> Result<Json<WarmthResponse>> {
    let warmth = warmth_score(&req.contact, &req.interactions, Utc::now())?;

    Ok(Json(WarmthResponse {
        status: "success",
        contact: req.contact.name,
        warmth_score: warmth,
        warmth_bucket: WarmthBucket::from_score(warmth),
    }))
}

async fn list_contacts(State(state): State<AppState>) -> Result<Json<Vec<Contact>>> {
    Ok(Json(state.storage.list_contacts().await?))
}

async fn create_contact(
    State(state): State<AppState>,
    Json(req): Json<ContactCreate>,
) -> Result<Json<Contact>> {
    Ok(Json(state.storage.insert_contact(&req).await?))
}

async fn get_contact(
    State(state): State<AppState>,
    Path(contact_id): Path<i64>,
) -> Result<Json<Contact>> {
    Ok(Json(state.storage.get_contact(contact_id).await?))
}

#[derive(Debug, Deserialize)]
pub struct InteractionCreate {
    #[serde(default = "Utc::now")]
    pub date: DateTime<Utc>,

    #[serde(rename = "type")]
    pub kind: InteractionKind,

    #[serde(default)]
    pub notes: String,

    #[serde(default)]
    pub sentiment: Sentiment,

    #[serde(default)]
    pub follow_up_needed: bool,

    #[serde(default)]
    pub follow_up_date: Option<DateTime<Utc>>,
}

/// Log an interaction against a stored contact
async fn log_interaction(
    State(state): State<AppState>,
    Path(contact_id): Path<i64>,
    Json(req): Json<InteractionCreate>,
) -> Result<Json<Interaction>> {
    let interaction = Interaction {
        id: None,
        contact_id,
        date: req.date,
        kind: req.kind,
        notes: req.notes,
        sentiment: req.sentiment,
        follow_up_needed: req.follow_up_needed,
        follow_up_date: req.follow_up_date,
    };

    Ok(Json(state.storage.insert_interaction(&interaction).await?))
}

async fn list_interactions(
    State(state): State<AppState>,
    Path(contact_id): Path<i64>,
) -> Result<Json<Vec<Interaction>>> {
    Ok(Json(state.storage.list_interactions(contact_id).await?))
}
