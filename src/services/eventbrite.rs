//! Eventbrite client for networking-event discovery
//!
//! Wraps the Eventbrite search and details endpoints and flattens the nested
//! wire payload into compact event summaries for API consumers.

use crate::error::{PropelError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

const EVENTBRITE_BASE_URL: &str = "https://www.eventbriteapi.com/v3";

/// Eventbrite category ids for Business and Networking
const DEFAULT_CATEGORIES: &str = "101,103";

const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);

/// Eventbrite API client
#[derive(Debug)]
pub struct EventbriteClient {
    api_key: String,
    client: reqwest::Client,
}

/// Flattened event summary returned to API consumers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkingEvent {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub url: Option<String>,

    /// UTC start time, RFC 3339
    #[serde(default)]
    pub start: Option<String>,

    #[serde(default)]
    pub venue: Option<String>,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub is_free: Option<bool>,
}

/// Search result page
#[derive(Debug, Clone, Serialize)]
pub struct EventSearchResults {
    pub total: usize,
    pub events: Vec<NetworkingEvent>,
}

// Wire shapes: the subset of the Eventbrite payload this backend reads.

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    events: Vec<ApiEvent>,

    #[serde(default)]
    pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
struct Pagination {
    #[serde(default)]
    object_count: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct ApiEvent {
    id: String,

    #[serde(default)]
    name: Option<TextField>,

    #[serde(default)]
    url: Option<String>,

    #[serde(default)]
    start: Option<TimeField>,

    #[serde(default)]
    summary: Option<String>,

    #[serde(default)]
    venue: Option<ApiVenue>,

    #[serde(default)]
    is_free: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct TextField {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TimeField {
    #[serde(default)]
    utc: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiVenue {
    #[serde(default)]
    name: Option<String>,
}

impl From<ApiEvent> for NetworkingEvent {
    fn from(event: ApiEvent) -> Self {
        Self {
            id: event.id,
            name: event.name.and_then(|n| n.text).unwrap_or_default(),
            url: event.url,
            start: event.start.and_then(|s| s.utc),
            venue: event.venue.and_then(|v| v.name),
            summary: event.summary,
            is_free: event.is_free,
        }
    }
}

impl EventbriteClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(PropelError::NotConfigured(
                "Eventbrite API key not set".to_string(),
            ));
        }

        Ok(Self {
            api_key,
            client: reqwest::Client::new(),
        })
    }

    /// Search Business/Networking events matching `keywords`, optionally
    /// near `location`
    pub async fn search_events(
        &self,
        keywords: &str,
        location: Option<&str>,
        page: u32,
    ) -> Result<EventSearchResults> {
        debug!("Searching Eventbrite for '{}'", keywords);

        let mut params: Vec<(&str, String)> = vec![
            ("q", keywords.to_string()),
            ("page", page.to_string()),
            ("expand", "venue,organizer".to_string()),
            ("categories", DEFAULT_CATEGORIES.to_string()),
        ];
        if let Some(location) = location {
            params.push(("location.address", location.to_string()));
        }

        let response = self
            .client
            .get(format!("{}/events/search/", EVENTBRITE_BASE_URL))
            .bearer_auth(&self.api_key)
            .query(&params)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(PropelError::EventsApi(format!(
                "search failed with status {}: {}",
                status, error_text
            )));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| PropelError::EventsApi(format!("Failed to parse response: {}", e)))?;

        let events: Vec<NetworkingEvent> = body.events.into_iter().map(Into::into).collect();
        let total = body
            .pagination
            .and_then(|p| p.object_count)
            .unwrap_or(events.len());

        Ok(EventSearchResults { total, events })
    }

    /// Fetch one event by id
    pub async fn event_details(&self, event_id: &str) -> Result<NetworkingEvent> {
        debug!("Fetching Eventbrite event {}", event_id);

        let response = self
            .client
            .get(format!("{}/events/{}/", EVENTBRITE_BASE_URL, event_id))
            .bearer_auth(&self.api_key)
            .query(&[("expand", "venue")])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(PropelError::NotFound(format!("event {}", event_id)));
        }
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(PropelError::EventsApi(format!(
                "details failed with status {}: {}",
                status, error_text
            )));
        }

        let event: ApiEvent = response
            .json()
            .await
            .map_err(|e| PropelError::EventsApi(format!("Failed to parse response: {}", e)))?;

        Ok(event.into())
    }
}
