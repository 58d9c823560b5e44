use todo_api::{application::todo_service::TodoServiceImpl, http::routing, infrastructure::memory_repo::InMemoryTodoRepository};
use axum::body::to_bytes;
use axum::Router;
use serde_json::{json, Value};

fn seeded_app() -> Router {
    routing::todo_app(TodoServiceImpl::new(InMemoryTodoRepository::seeded()))
}

#[tokio::test]
async fn acceptance_seed_scenario() {
    let app = seeded_app();

    // fresh store holds the five fixtures
    let (status, body) = send(&app, "GET", "/todos", None).await;
    assert_eq!(status, 200);
    assert_eq!(ids(&body), vec![1, 2, 3, 4, 5]);
    assert_eq!(body[0], json!({ "todo_id": 1, "todo_name": "Sports", "todo_description": "Play football", "priority": 1 }));

    // create
    let (status, created) = send(&app, "POST", "/todos", Some(json!({ "todo_name": "Test", "todo_description": "desc" }))).await;
    assert_eq!(status, 200);
    assert_eq!(created, json!({ "todo_id": 6, "todo_name": "Test", "todo_description": "desc", "priority": 3 }));

    // get returns what was created
    let (status, got) = send(&app, "GET", "/todos/6", None).await;
    assert_eq!(status, 200);
    assert_eq!(got, created);

    // delete
    let (status, deleted) = send(&app, "DELETE", "/todos/3", None).await;
    assert_eq!(status, 200);
    assert_eq!(deleted["todo_name"], "Shop");

    let (_, body) = send(&app, "GET", "/todos", None).await;
    assert_eq!(ids(&body), vec![1, 2, 4, 5, 6]);

    let (status, body) = send(&app, "GET", "/todos/3", None).await;
    assert_eq!(status, 404);
    assert_eq!(body, json!({ "detail": "Todo 3 not found" }));
}

#[tokio::test]
async fn acceptance_first_n() {
    let app = seeded_app();
    let (_, body) = send(&app, "GET", "/todos?first_n=2", None).await;
    assert_eq!(ids(&body), vec![1, 2]);
    let (_, body) = send(&app, "GET", "/todos?first_n=0", None).await;
    assert_eq!(ids(&body).len(), 5);
    let (status, _) = send(&app, "GET", "/todos?first_n=two", None).await;
    assert_eq!(status, 422);
}

#[tokio::test]
async fn acceptance_update_is_partial() {
    let app = seeded_app();
    let (status, body) = send(&app, "PUT", "/todos/4", Some(json!({ "todo_name": "Revise", "priority": null }))).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "todo_id": 4, "todo_name": "Revise", "todo_description": "Study for exams", "priority": 2 }));

    let (status, body) = send(&app, "PUT", "/todos/4", Some(json!({ "priority": 1 }))).await;
    assert_eq!(status, 200);
    assert_eq!(body["priority"], 1);
    assert_eq!(body["todo_name"], "Revise");

    let (status, _) = send(&app, "PUT", "/todos/40", Some(json!({ "priority": 1 }))).await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn acceptance_validation_errors() {
    let app = seeded_app();

    let (status, body) = send(&app, "POST", "/todos", Some(json!({ "todo_name": "ab", "todo_description": "d" }))).await;
    assert_eq!(status, 422);
    assert!(body["detail"].as_str().unwrap().starts_with("todo_name"));

    let (status, _) = send(&app, "POST", "/todos", Some(json!({ "todo_name": "abc" }))).await;
    assert_eq!(status, 422);

    let (status, _) = send(&app, "POST", "/todos", Some(json!({ "todo_name": "abc", "todo_description": "d", "priority": 4 }))).await;
    assert_eq!(status, 422);

    let (status, _) = send(&app, "PUT", "/todos/1", Some(json!({ "todo_name": "x" }))).await;
    assert_eq!(status, 422);
    let (_, body) = send(&app, "GET", "/todos/1", None).await;
    assert_eq!(body["todo_name"], "Sports");

    let (status, _) = send(&app, "PUT", "/todos/1", Some(json!({ "priority": 4 }))).await;
    assert_eq!(status, 422);
    let (_, body) = send(&app, "GET", "/todos/1", None).await;
    assert_eq!(body["priority"], 1);

    let (status, _) = send(&app, "GET", "/todos/abc", None).await;
    assert_eq!(status, 422);

    // nothing was created by the rejected requests
    let (_, body) = send(&app, "GET", "/todos", None).await;
    assert_eq!(ids(&body).len(), 5);
}

#[tokio::test]
async fn acceptance_missing_ids() {
    let app = seeded_app();

    let (status, body) = send(&app, "GET", "/todos/-1", None).await;
    assert_eq!(status, 404);
    assert_eq!(body, json!({ "detail": "Todo -1 not found" }));

    let (status, body) = send(&app, "DELETE", "/todos/42", None).await;
    assert_eq!(status, 404);
    assert_eq!(body, json!({ "detail": "Todo 42 not found" }));

    let (status, _) = send(&app, "GET", "/todos/99999999999999999999999", None).await;
    assert_eq!(status, 404);

    let (status, _) = send(&app, "PUT", "/todos/-7", Some(json!({ "priority": 2 }))).await;
    assert_eq!(status, 404);

    // the failed delete removed nothing
    let (_, body) = send(&app, "GET", "/todos", None).await;
    assert_eq!(ids(&body).len(), 5);
}

#[tokio::test]
async fn acceptance_health() {
    let app = seeded_app();
    let res = request(&app, "GET", "/health", None).await;
    assert_eq!(res.status(), 200);
}

fn ids(body: &Value) -> Vec<u64> {
    body.as_array().unwrap().iter().map(|t| t["todo_id"].as_u64().unwrap()).collect()
}

async fn send(app: &Router, method: &str, path: &str, body: Option<Value>) -> (u16, Value) {
    let res = request(app, method, path, body).await;
    let status = res.status().as_u16();
    let bytes = to_bytes(res.into_body(), 1024 * 1024).await.unwrap();
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap_or(Value::Null) };
    (status, value)
}

async fn request(app: &Router, method: &str, path: &str, body: Option<Value>) -> hyper::Response<axum::body::Body> {
    use axum::body::Body;
    use axum::http::{Request, Method};
    use tower::ServiceExt;

    let req = Request::builder().method(Method::from_bytes(method.as_bytes()).unwrap()).uri(path);
    let req = match body {
        Some(json) => req.header("content-type", "application/json").body(Body::from(json.to_string())).unwrap(),
        None => req.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(req).await.unwrap()
}
