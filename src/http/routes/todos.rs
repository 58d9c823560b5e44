use axum::{extract::{Path, Query, State}, routing::get, Router, Json};
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use serde::Deserialize;

use crate::{application::todo_service::TodoService, domain::todo::{CreateTodo, Todo, TodoId, UpdateTodo}};
use crate::http::types::ApiError;

#[derive(Clone)]
pub struct AppState<S: TodoService> { pub service: S }

pub fn router<S: TodoService + Clone + Send + Sync + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/todos", get(list_todos::<S>).post(create_todo::<S>))
        .route("/todos/:id", get(get_todo::<S>).put(update_todo::<S>).delete(delete_todo::<S>))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct ListParams { first_n: Option<i64> }

type ApiResult<T> = Result<Json<T>, ApiError>;

async fn list_todos<S: TodoService>(State(state): State<AppState<S>>, params: Result<Query<ListParams>, QueryRejection>) -> ApiResult<Vec<Todo>> {
    let Query(params) = params?;
    Ok(Json(state.service.list(params.first_n).await?))
}

async fn create_todo<S: TodoService>(State(state): State<AppState<S>>, payload: Result<Json<CreateTodo>, JsonRejection>) -> ApiResult<Todo> {
    let Json(payload) = payload?;
    Ok(Json(state.service.create(payload).await?))
}

async fn get_todo<S: TodoService>(State(state): State<AppState<S>>, id: Result<Path<String>, PathRejection>) -> ApiResult<Todo> {
    let id = parse_id(id)?;
    Ok(Json(state.service.get(id).await?))
}

async fn update_todo<S: TodoService>(State(state): State<AppState<S>>, id: Result<Path<String>, PathRejection>, payload: Result<Json<UpdateTodo>, JsonRejection>) -> ApiResult<Todo> {
    let id = parse_id(id)?;
    let Json(payload) = payload?;
    Ok(Json(state.service.update(id, payload).await?))
}

async fn delete_todo<S: TodoService>(State(state): State<AppState<S>>, id: Result<Path<String>, PathRejection>) -> ApiResult<Todo> {
    let id = parse_id(id)?;
    Ok(Json(state.service.delete(id).await?))
}

/// Integers outside the id range cannot name a stored todo, so they miss
/// rather than fail validation.
fn parse_id(id: Result<Path<String>, PathRejection>) -> Result<TodoId, ApiError> {
    let Path(raw) = id?;
    match raw.parse::<i64>() {
        Ok(id) => Ok(TodoId(id)),
        Err(_) if is_integer_literal(&raw) => Err(ApiError::NotFound(raw)),
        Err(_) => Err(ApiError::Unprocessable(format!("todo_id: expected an integer, got {raw:?}"))),
    }
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
