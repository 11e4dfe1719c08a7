//! HTTP contract tests for the contact, AI, and event endpoints

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use chrono::{Duration, Utc};
use propelme::api::router;
use serde_json::{json, Value};
use tower::ServiceExt; // for oneshot

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health() {
    let (state, _db) = common::create_test_state().await;
    let app = router(state);

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_prioritize_ranks_and_truncates() {
    let (state, _db) = common::create_test_state().await;
    let app = router(state);

    let request = post_json(
        "/contacts/prioritize",
        &json!({
            "contacts": [
                {"id": 1, "name": "Met Once", "relationship": "met_once"},
                {"id": 2, "name": "Close Friend", "relationship": "close_friend"},
                {"id": 3, "name": "Never Met", "relationship": "never_met"},
                {"id": 4, "name": "Friend", "relationship": "friend"},
                {"id": 5, "name": "Acquaintance", "relationship": "acquaintance"}
            ],
            "limit": 2
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["total_contacts"], 5);

    let ranked = body["prioritized_contacts"].as_array().unwrap();
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0]["name"], "Close Friend");
    assert_eq!(ranked[1]["name"], "Friend");
    assert!(
        ranked[0]["priority_score"].as_f64().unwrap()
            >= ranked[1]["priority_score"].as_f64().unwrap()
    );
}

#[tokio::test]
async fn test_prioritize_rejects_contact_without_id_when_matching() {
    let (state, _db) = common::create_test_state().await;
    let app = router(state);

    let request = post_json(
        "/contacts/prioritize",
        &json!({
            "contacts": [{"name": "No Id"}],
            "interactions": [{
                "contact_id": 1,
                "type": "email",
                "date": (Utc::now() - Duration::days(10)).to_rfc3339()
            }]
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["status"], "error");
}

#[tokio::test]
async fn test_schedule_buckets_twelve_contacts() {
    let (state, _db) = common::create_test_state().await;
    let app = router(state);

    let contacts: Vec<Value> = (1..=12)
        .map(|i| json!({"id": i, "name": format!("c{}", i)}))
        .collect();

    let request = post_json(
        "/contacts/schedule",
        &json!({"contacts": contacts, "contacts_per_week": 5}),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["weeks"], 3);
    assert_eq!(body["total_contacts"], 12);

    let schedule = body["schedule"].as_object().unwrap();
    let sizes: Vec<usize> = schedule
        .values()
        .map(|week| week.as_array().unwrap().len())
        .collect();
    assert_eq!(sizes, vec![5, 5, 2]);

    let first_key = schedule.keys().next().unwrap();
    assert_eq!(first_key, &Utc::now().format("%Y-W%W").to_string());
}

#[tokio::test]
async fn test_schedule_uses_default_cohort_size() {
    let (state, _db) = common::create_test_state().await;
    let app = router(state);

    let contacts: Vec<Value> = (1..=7)
        .map(|i| json!({"id": i, "name": format!("c{}", i)}))
        .collect();

    let response = app
        .oneshot(post_json("/contacts/schedule", &json!({"contacts": contacts})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["weeks"], 2);
}

#[tokio::test]
async fn test_calculate_warmth_positive_coffee() {
    let (state, _db) = common::create_test_state().await;
    let app = router(state);

    let request = post_json(
        "/contacts/calculate-warmth",
        &json!({
            "contact": {"id": 1, "name": "Ada"},
            "interactions": [{
                "contact_id": 1,
                "type": "coffee",
                "sentiment": "positive",
                "date": (Utc::now() - Duration::days(30)).to_rfc3339()
            }]
        }),
    );

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["contact"], "Ada");
    assert_eq!(body["warmth_score"], 75.0);
    assert_eq!(body["warmth_bucket"], "hot");
}

#[tokio::test]
async fn test_calculate_warmth_without_history_keeps_stored_warmth() {
    let (state, _db) = common::create_test_state().await;
    let app = router(state);

    let request = post_json(
        "/contacts/calculate-warmth",
        &json!({"contact": {"id": 1, "name": "Ada", "warmth_score": 33.0}}),
    );

    let response = app.oneshot(request).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["warmth_score"], 33.0);
    assert_eq!(body["warmth_bucket"], "cold");
}

#[tokio::test]
async fn test_unconfigured_integrations_return_501() {
    let (state, _db) = common::create_test_state().await;
    let app = router(state);

    let response = app.clone().oneshot(get("/events/search")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);

    let response = app
        .oneshot(post_json(
            "/ai/generate-message",
            &json!({"contact_name": "Ada", "company": "Acme"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
}

#[tokio::test]
async fn test_contact_crud_and_interaction_rollup() {
    let (state, _db) = common::create_test_state().await;
    let app = router(state);

    // Create
    let response = app
        .clone()
        .oneshot(post_json(
            "/contacts",
            &json!({"name": "Ada", "relationship": "friend", "company": "Acme"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["interaction_count"], 0);
    assert_eq!(created["source"], "manual");

    // Log an interaction
    let response = app
        .clone()
        .oneshot(post_json(
            &format!("/contacts/{}/interactions", id),
            &json!({"type": "coffee", "sentiment": "positive", "notes": "catch-up"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The rollup lands on the contact
    let response = app
        .clone()
        .oneshot(get(&format!("/contacts/{}", id)))
        .await
        .unwrap();
    let fetched = body_json(response).await;
    assert_eq!(fetched["interaction_count"], 1);
    assert!(!fetched["last_interaction_date"].is_null());

    // And shows up in the interaction log
    let response = app
        .clone()
        .oneshot(get(&format!("/contacts/{}/interactions", id)))
        .await
        .unwrap();
    let log = body_json(response).await;
    let entries = log.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["type"], "coffee");

    // Unknown ids 404
    let response = app.oneshot(get("/contacts/9999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
