//! Common test utilities and helpers

use propelme::api::AppState;
use propelme::{SqliteStorage, StorageBackend};
use std::sync::Arc;
use tempfile::TempDir;

/// Create a scratch SQLite storage inside a temp directory
///
/// A real file rather than :memory: because each pooled connection would
/// otherwise get its own private in-memory database. The returned guard
/// keeps the directory alive for the duration of the test.
pub async fn create_test_storage() -> (SqliteStorage, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("propelme_test.db");

    let storage = SqliteStorage::new(&format!("sqlite://{}", db_path.display()))
        .await
        .expect("Failed to create test storage");

    storage
        .init_schema()
        .await
        .expect("Failed to init schema");

    (storage, dir)
}

/// App state with storage only; no external integrations configured
pub async fn create_test_state() -> (AppState, TempDir) {
    let (storage, dir) = create_test_storage().await;

    let state = AppState {
        storage: Arc::new(storage),
        llm: None,
        events: None,
    };

    (state, dir)
}
