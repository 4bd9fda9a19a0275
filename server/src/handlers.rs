//! HTTP-facing todo handlers.
//!
//! # Design
//! Handlers own all HTTP concerns: path and body parsing, status codes, and
//! the `{"error": ...}` payload. Extractor rejections are taken as `Result`s
//! so every client mistake comes back as a 400 with a JSON body instead of
//! axum's plain-text defaults.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::error;

use crate::dto::{CreateTodo, ErrorBody, TodoFilter, TodoView, UpdateTodo};
use crate::error::{Error, Result};
use crate::AppState;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = match self {
            Error::Storage(err) => {
                error!("responding 500: {err}");
                "internal storage error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}

pub async fn list_todos(
    State(state): State<AppState>,
    filter: Result<Query<TodoFilter>, QueryRejection>,
) -> Result<Json<Vec<TodoView>>> {
    let Query(filter) = filter.map_err(|rejection| Error::validation(rejection.body_text()))?;
    Ok(Json(state.todos.list_filtered(filter).await?))
}

pub async fn create_todo(
    State(state): State<AppState>,
    input: Result<Json<CreateTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<TodoView>)> {
    let Json(input) = input.map_err(body_error)?;
    let todo = state.todos.create(input).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TodoView>> {
    let id = parse_id(&id)?;
    Ok(Json(state.todos.get(id).await?))
}

pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    input: Result<Json<UpdateTodo>, JsonRejection>,
) -> Result<Json<TodoView>> {
    let id = parse_id(&id)?;
    let Json(input) = input.map_err(body_error)?;
    Ok(Json(state.todos.update(id, input).await?))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&id)?;
    state.todos.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Identifiers are plain decimal digits that fit the database's signed
/// column. `u64::from_str` alone would also take a leading `+`.
fn parse_id(raw: &str) -> Result<i64> {
    Some(raw)
        .filter(|raw| raw.starts_with(|c: char| c.is_ascii_digit()))
        .and_then(|raw| raw.parse::<u64>().ok())
        .and_then(|id| i64::try_from(id).ok())
        .ok_or_else(|| Error::validation("invalid id"))
}

fn body_error(rejection: JsonRejection) -> Error {
    Error::validation(rejection.body_text())
}
