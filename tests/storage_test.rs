//! Storage backend integration tests

mod common;

use chrono::{Duration, NaiveDate, Utc};
use propelme::types::{
    ContactCreate, Interaction, InteractionKind, JobApplicationCreate, PlannerAction, PlannerTask,
    RelationshipType, Sentiment,
};
use propelme::{PropelError, StorageBackend};

fn contact(name: &str) -> ContactCreate {
    ContactCreate {
        name: name.to_string(),
        email: None,
        linkedin_url: None,
        company: None,
        title: None,
        location: None,
        relationship: None,
        source: None,
        tags: vec![],
        notes: None,
    }
}

fn job(company: &str, role: &str) -> JobApplicationCreate {
    JobApplicationCreate {
        company: company.to_string(),
        role_title: role.to_string(),
        link: String::new(),
        status: "Planned".to_string(),
        contact_name: String::new(),
        contact_linkedin_url: String::new(),
        notes: String::new(),
    }
}

#[tokio::test]
async fn test_contact_roundtrip() {
    let (storage, _db) = common::create_test_storage().await;

    let mut create = contact("Ada Lovelace");
    create.relationship = Some(RelationshipType::FormerColleague);
    create.tags = vec!["engineering".to_string(), "mentor".to_string()];

    let stored = storage.insert_contact(&create).await.unwrap();
    let id = stored.id.unwrap();

    let fetched = storage.get_contact(id).await.unwrap();
    assert_eq!(fetched.name, "Ada Lovelace");
    assert_eq!(fetched.relationship, Some(RelationshipType::FormerColleague));
    assert_eq!(fetched.tags, vec!["engineering", "mentor"]);
    assert_eq!(fetched.interaction_count, 0);
    assert!(fetched.warmth_score.is_none());
    assert!(fetched.last_interaction_date.is_none());
    assert!(fetched.created_at.is_some());
}

#[tokio::test]
async fn test_get_missing_contact_is_not_found() {
    let (storage, _db) = common::create_test_storage().await;

    let err = storage.get_contact(9999).await.unwrap_err();
    assert!(matches!(err, PropelError::NotFound(_)));
}

#[tokio::test]
async fn test_interaction_rollup_tracks_newest_date() {
    let (storage, _db) = common::create_test_storage().await;

    let stored = storage.insert_contact(&contact("Ada")).await.unwrap();
    let id = stored.id.unwrap();

    let recent = Utc::now() - Duration::days(3);
    let older = Utc::now() - Duration::days(30);

    for date in [recent, older] {
        storage
            .insert_interaction(&Interaction {
                id: None,
                contact_id: id,
                date,
                kind: InteractionKind::Email,
                notes: String::new(),
                sentiment: Sentiment::Neutral,
                follow_up_needed: false,
                follow_up_date: None,
            })
            .await
            .unwrap();
    }

    let fetched = storage.get_contact(id).await.unwrap();
    assert_eq!(fetched.interaction_count, 2);
    // The older interaction must not regress the rollup
    assert_eq!(
        fetched.last_interaction_date.unwrap().timestamp(),
        recent.timestamp()
    );

    let log = storage.list_interactions(id).await.unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].date.timestamp(), recent.timestamp());
}

#[tokio::test]
async fn test_interaction_requires_existing_contact() {
    let (storage, _db) = common::create_test_storage().await;

    let err = storage
        .insert_interaction(&Interaction {
            id: None,
            contact_id: 123,
            date: Utc::now(),
            kind: InteractionKind::Coffee,
            notes: String::new(),
            sentiment: Sentiment::Positive,
            follow_up_needed: false,
            follow_up_date: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, PropelError::NotFound(_)));
}

#[tokio::test]
async fn test_job_application_lifecycle() {
    let (storage, _db) = common::create_test_storage().await;

    let mut first = job("Acme", "Platform Engineer");
    first.notes = "referred by Sam".to_string();
    let first = storage.insert_job_application(&first).await.unwrap();
    assert_eq!(first.status, "Planned");

    let second = storage
        .insert_job_application(&job("Globex", "SRE"))
        .await
        .unwrap();

    // Newest first
    let listed = storage.list_job_applications().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);

    let updated = storage
        .update_job_status(first.id, "Interview", Some("phone screen booked"))
        .await
        .unwrap();
    assert_eq!(updated.status, "Interview");
    assert_eq!(updated.notes, "referred by Sam\nphone screen booked");

    // Appending nothing keeps the notes
    let updated = storage
        .update_job_status(first.id, "Offer", None)
        .await
        .unwrap();
    assert_eq!(updated.status, "Offer");
    assert_eq!(updated.notes, "referred by Sam\nphone screen booked");
}

#[tokio::test]
async fn test_update_missing_job_is_not_found() {
    let (storage, _db) = common::create_test_storage().await;

    let err = storage
        .update_job_status(42, "Interview", None)
        .await
        .unwrap_err();
    assert!(matches!(err, PropelError::NotFound(_)));
}

#[tokio::test]
async fn test_planner_tasks_sorted_by_due_date() {
    let (storage, _db) = common::create_test_storage().await;

    let stored = storage.insert_contact(&contact("Ada")).await.unwrap();
    let contact_id = stored.id.unwrap();

    let later = PlannerTask {
        id: None,
        contact_id,
        action_type: PlannerAction::CoffeeChat,
        due_date: NaiveDate::from_ymd_opt(2026, 9, 20).unwrap(),
        completed: false,
    };
    let sooner = PlannerTask {
        id: None,
        contact_id,
        action_type: PlannerAction::Message,
        due_date: NaiveDate::from_ymd_opt(2026, 8, 15).unwrap(),
        completed: false,
    };

    storage.insert_planner_task(&later).await.unwrap();
    storage.insert_planner_task(&sooner).await.unwrap();

    let tasks = storage.list_planner_tasks().await.unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].action_type, PlannerAction::Message);
    assert_eq!(tasks[1].action_type, PlannerAction::CoffeeChat);
}
