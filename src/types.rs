//! Core data types for the PropelMe networking assistant
//!
//! This module defines the fundamental data structures used throughout the
//! backend: contacts and their interaction history, job applications, and
//! planner tasks, together with the closed enumerations the scoring engine
//! weighs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// How the user knows a contact
///
/// Closed set; anything unrecognized deserializes to `Unknown`, which scores
/// with the same default weight as a missing relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    CloseFriend,
    Friend,
    CurrentColleague,
    FormerColleague,
    Acquaintance,
    MetOnce,
    NeverMet,
    #[serde(other)]
    Unknown,
}

impl RelationshipType {
    /// Relationship-strength weight (25 points max) for the priority score
    pub fn weight(&self) -> f32 {
        match self {
            RelationshipType::CloseFriend => 25.0,
            RelationshipType::Friend => 20.0,
            RelationshipType::CurrentColleague => 18.0,
            RelationshipType::FormerColleague => 15.0,
            RelationshipType::Acquaintance => 10.0,
            RelationshipType::MetOnce => 5.0,
            RelationshipType::NeverMet => 2.0,
            RelationshipType::Unknown => 10.0,
        }
    }
}

/// Channel an interaction happened over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    Coffee,
    PhoneCall,
    Event,
    LinkedinMessage,
    Email,
    #[serde(other)]
    Other,
}

impl InteractionKind {
    /// Channel-quality adjustment used by the warmth calculation
    ///
    /// Richer channels warm the relationship more; an unrecognized channel
    /// counts like email.
    pub fn warmth_weight(&self) -> f32 {
        match self {
            InteractionKind::Coffee => 15.0,
            InteractionKind::PhoneCall => 12.0,
            InteractionKind::Event => 10.0,
            InteractionKind::LinkedinMessage => 7.0,
            InteractionKind::Email => 5.0,
            InteractionKind::Other => 5.0,
        }
    }
}

/// Sentiment recorded against an interaction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
    #[serde(other)]
    Unknown,
}

impl Sentiment {
    /// Sentiment adjustment used by the warmth calculation
    pub fn warmth_weight(&self) -> f32 {
        match self {
            Sentiment::Positive => 10.0,
            Sentiment::Neutral => 5.0,
            Sentiment::Negative => -5.0,
            Sentiment::Unknown => 0.0,
        }
    }
}

/// Warmth bucket presented to API consumers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarmthBucket {
    Hot,
    Warm,
    Cold,
}

impl WarmthBucket {
    /// Bucket a warmth score: >= 70 hot, >= 40 warm, else cold
    pub fn from_score(score: f32) -> Self {
        if score >= 70.0 {
            WarmthBucket::Hot
        } else if score >= 40.0 {
            WarmthBucket::Warm
        } else {
            WarmthBucket::Cold
        }
    }
}

/// Where a contact record came from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactSource {
    Linkedin,
    #[default]
    Manual,
    CsvImport,
    Eventbrite,
}

/// A person in the user's network
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    /// Row id; absent for contacts not yet persisted
    #[serde(default)]
    pub id: Option<i64>,

    pub name: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub linkedin_url: Option<String>,

    #[serde(default)]
    pub company: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    /// Missing relationship scores with the default weight
    #[serde(default)]
    pub relationship: Option<RelationshipType>,

    /// Absent means never contacted
    #[serde(default)]
    pub last_interaction_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub interaction_count: i64,

    /// 0-100 relationship quality; absent is treated as the neutral 50.0
    #[serde(default)]
    pub warmth_score: Option<f32>,

    #[serde(default)]
    pub warmth_bucket: Option<WarmthBucket>,

    /// 0-100 outreach urgency, written by the scoring engine
    #[serde(default)]
    pub priority_score: f32,

    #[serde(default)]
    pub source: ContactSource,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for creating a contact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactCreate {
    pub name: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub linkedin_url: Option<String>,

    #[serde(default)]
    pub company: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub relationship: Option<RelationshipType>,

    #[serde(default)]
    pub source: Option<ContactSource>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub notes: Option<String>,
}

/// A single touchpoint with a contact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    #[serde(default)]
    pub id: Option<String>,

    pub contact_id: i64,

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

fn default_job_status() -> String {
    "Planned".to_string()
}

/// A tracked job application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: i64,
    pub company: String,
    pub role_title: String,

    #[serde(default)]
    pub link: String,

    #[serde(default = "default_job_status")]
    pub status: String,

    #[serde(default)]
    pub contact_name: String,

    #[serde(default)]
    pub contact_linkedin_url: String,

    #[serde(default)]
    pub notes: String,
}

/// Payload for creating a job application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobApplicationCreate {
    pub company: String,
    pub role_title: String,

    #[serde(default)]
    pub link: String,

    #[serde(default = "default_job_status")]
    pub status: String,

    #[serde(default)]
    pub contact_name: String,

    #[serde(default)]
    pub contact_linkedin_url: String,

    #[serde(default)]
    pub notes: String,
}

/// Follow-up action the planner schedules against a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlannerAction {
    CheckProfile,
    Comment,
    Message,
    CoffeeChat,
}

/// Planner task row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerTask {
    #[serde(default)]
    pub id: Option<i64>,

    pub contact_id: i64,

    pub action_type: PlannerAction,

    /// Due date, serialized as an ISO `YYYY-MM-DD` string
    pub due_date: NaiveDate,

    #[serde(default)]
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_snake_case_wire_format() {
        let rel: RelationshipType = serde_json::from_str("\"close_friend\"").unwrap();
        assert_eq!(rel, RelationshipType::CloseFriend);
        assert_eq!(serde_json::to_string(&rel).unwrap(), "\"close_friend\"");
    }

    #[test]
    fn test_unrecognized_relationship_maps_to_unknown() {
        let rel: RelationshipType = serde_json::from_str("\"college_roommate\"").unwrap();
        assert_eq!(rel, RelationshipType::Unknown);
        assert_eq!(rel.weight(), 10.0);
    }

    #[test]
    fn test_unrecognized_channel_counts_like_email() {
        let kind: InteractionKind = serde_json::from_str("\"sms\"").unwrap();
        assert_eq!(kind, InteractionKind::Other);
        assert_eq!(kind.warmth_weight(), 5.0);
    }

    #[test]
    fn test_unrecognized_sentiment_is_neutral_adjustment() {
        let sentiment: Sentiment = serde_json::from_str("\"ecstatic\"").unwrap();
        assert_eq!(sentiment, Sentiment::Unknown);
        assert_eq!(sentiment.warmth_weight(), 0.0);
    }

    #[test]
    fn test_interaction_kind_wire_name_is_type() {
        let interaction: Interaction = serde_json::from_str(
            r#"{"contact_id": 1, "type": "coffee", "date": "2025-06-01T12:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(interaction.kind, InteractionKind::Coffee);
        assert_eq!(interaction.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_warmth_bucket_thresholds() {
        assert_eq!(WarmthBucket::from_score(75.0), WarmthBucket::Hot);
        assert_eq!(WarmthBucket::from_score(70.0), WarmthBucket::Hot);
        assert_eq!(WarmthBucket::from_score(55.0), WarmthBucket::Warm);
        assert_eq!(WarmthBucket::from_score(40.0), WarmthBucket::Warm);
        assert_eq!(WarmthBucket::from_score(39.9), WarmthBucket::Cold);
    }

    #[test]
    fn test_contact_minimal_payload() {
        let contact: Contact = serde_json::from_str(r#"{"name": "Ada"}"#).unwrap();
        assert_eq!(contact.name, "Ada");
        assert!(contact.id.is_none());
        assert!(contact.relationship.is_none());
        assert!(contact.warmth_score.is_none());
        assert_eq!(contact.priority_score, 0.0);
        assert_eq!(contact.source, ContactSource::Manual);
    }
}
