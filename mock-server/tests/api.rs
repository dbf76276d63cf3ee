use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, Todo, TodoList};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn list_request() -> Request<String> {
    Request::builder().uri("/todos").body(String::new()).unwrap()
}

fn seed(texts: &[&str]) -> Vec<Todo> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| Todo {
            id: i as u64 + 1,
            todo: text.to_string(),
            completed: false,
            user_id: 1,
        })
        .collect()
}

// --- list ---

#[tokio::test]
async fn list_todos_empty() {
    let resp = app().oneshot(list_request()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let list: TodoList = body_json(resp).await;
    assert!(list.todos.is_empty());
    assert_eq!(list.total, 0);
}

#[tokio::test]
async fn list_todos_wraps_seed_in_envelope() {
    let resp = app_with(seed(&["a", "b", "c"])).oneshot(list_request()).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json: serde_json::Value = body_json(resp).await;
    assert_eq!(json["total"], 3);
    assert_eq!(json["skip"], 0);
    assert_eq!(json["limit"], 3);
    assert_eq!(json["todos"][0]["todo"], "a");
    assert_eq!(json["todos"][2]["userId"], 1);
}

// --- add ---

#[tokio::test]
async fn add_todo_returns_201() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/todos/add",
            r#"{"todo":"Buy milk","completed":false,"userId":1}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let todo: Todo = body_json(resp).await;
    assert_eq!(todo.id, 1);
    assert_eq!(todo.todo, "Buy milk");
    assert!(!todo.completed);
}

#[tokio::test]
async fn add_todo_continues_after_highest_id() {
    let mut seeded = seed(&["a"]);
    seeded[0].id = 41;
    let resp = app_with(seeded)
        .oneshot(json_request("POST", "/todos/add", r#"{"todo":"next"}"#))
        .await
        .unwrap();

    let todo: Todo = body_json(resp).await;
    assert_eq!(todo.id, 42);
    assert_eq!(todo.user_id, 1);
}

#[tokio::test]
async fn add_todo_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/todos/add", r#"{"title":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let resp = app()
        .oneshot(Request::builder().uri("/missing").body(String::new()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_bytes(resp).await.is_empty());
}

// --- add then list ---

#[tokio::test]
async fn added_todo_appears_in_list() {
    use tower::Service;

    let mut app = app_with(seed(&["first"])).into_service();

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/todos/add", r#"{"todo":"Walk dog"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Todo = body_json(resp).await;
    assert_eq!(created.id, 2);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(list_request())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let list: TodoList = body_json(resp).await;
    assert_eq!(list.total, 2);
    assert_eq!(list.todos[1], created);
}
