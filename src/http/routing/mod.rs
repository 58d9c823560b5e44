use axum::{routing::get, Router};

use crate::http::routes::todos;
use crate::application::todo_service::TodoService;

pub fn app(router: Router) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(router)
}

/// Full application router over a service.
pub fn todo_app<S: TodoService + Clone + Send + Sync + 'static>(service: S) -> Router {
    app(todos::router(todos::AppState { service }))
}
