use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use serde_json::{Value, json};

use fusen_core::domain::Item;

use super::AppState;
use super::error::ApiError;

/// Body of POST /todos.
///
/// `task` stays optional here on purpose: its presence is a domain-level
/// validation, not a deserialization failure, so `{}` and `{"task": null}`
/// both reach the service and come back as a 400 with an error body.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub task: Option<String>,
}

/// GET /todos
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state.items.list_items().await?;
    Ok(Json(items))
}

/// POST /todos
pub async fn create_todo(
    State(state): State<AppState>,
    Json(body): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let item = state.items.create_item(body.task).await?;
    tracing::info!(id = %item.id, "created item");
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let counts = state.items.counts().await?;
    Ok(Json(json!({
        "status": "ok",
        "service": "fusen-api",
        "timestamp": chrono::Utc::now().timestamp(),
        "items": counts.items,
    })))
}
