//! Networking event endpoints

use super::AppState;
use crate::error::Result;
use crate::services::NetworkingEvent;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Recommendations cap after dedup
const RECOMMENDATION_CAP: usize = 20;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/events/search", get(search))
        .route("/events/details/:event_id", get(details))
        .route("/events/recommendations", get(recommendations))
}

fn default_keywords() -> String {
    "networking".to_string()
}

fn default_page() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default = "default_keywords")]
    pub keywords: String,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default = "default_page")]
    pub page: u32,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub status: &'static str,
    pub total: usize,
    pub page: u32,
    pub events: Vec<NetworkingEvent>,
}

/// Search networking events
async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>> {
    let client = state.require_events()?;

    let results = client
        .search_events(&params.keywords, params.location.as_deref(), params.page)
        .await?;

    Ok(Json(SearchResponse {
        status: "success",
        total: results.total,
        page: params.page,
        events: results.events,
    }))
}

#[derive(Debug, Serialize)]
pub struct DetailsResponse {
    pub status: &'static str,
    pub event: NetworkingEvent,
}

/// Fetch one event by id
async fn details(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Json<DetailsResponse>> {
    let client = state.require_events()?;
    let event = client.event_details(&event_id).await?;

    Ok(Json(DetailsResponse {
        status: "success",
        event,
    }))
}

fn default_interests() -> String {
    "technology,business,professional development".to_string()
}

#[derive(Debug, Deserialize)]
pub struct RecommendationParams {
    #[serde(default)]
    pub location: Option<String>,

    #[serde(default = "default_interests")]
    pub interests: String,
}

/// Curated recommendations: one search per interest keyword, deduplicated by
/// event id, sorted by start time, capped
async fn recommendations(
    State(state): State<AppState>,
    Query(params): Query<RecommendationParams>,
) -> Result<Json<SearchResponse>> {
    let client = state.require_events()?;

    let mut all_events = Vec::new();
    for keyword in params.interests.split(',') {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            continue;
        }

        let results = client
            .search_events(keyword, params.location.as_deref(), 1)
            .await?;
        all_events.extend(results.events);
    }

    let mut seen = HashSet::new();
    let mut unique: Vec<NetworkingEvent> = all_events
        .into_iter()
        .filter(|event| seen.insert(event.id.clone()))
        .collect();

    unique.sort_by(|a, b| a.start.cmp(&b.start));
    unique.truncate(RECOMMENDATION_CAP);

    Ok(Json(SearchResponse {
        status: "success",
        total: unique.len(),
        page: 1,
        events: unique,
    }))
}
