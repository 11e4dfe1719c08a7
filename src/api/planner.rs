//! Planner task endpoints

use super::AppState;
use crate::error::Result;
use crate::types::PlannerTask;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

pub fn routes() -> Router<AppState> {
    Router::new().route("/planner/tasks", get(list_tasks).post(create_task))
}

async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<PlannerTask>>> {
    Ok(Json(state.storage.list_planner_tasks().await?))
}

async fn create_task(
    State(state): State<AppState>,
    Json(task): Json<PlannerTask>,
) -> Result<Json<PlannerTask>> {
    Ok(Json(state.storage.insert_planner_task(&task).await?))
}
