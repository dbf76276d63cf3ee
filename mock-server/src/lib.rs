//! In-memory stand-in for the remote todo source.
//!
//! Serves `GET /todos` (the list envelope) and `POST /todos/add` with the
//! same JSON shapes as the public source, so the viewer can run and be
//! tested without network access.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::{get, post}, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub todo: String,
    pub completed: bool,
    pub user_id: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodoList {
    pub todos: Vec<Todo>,
    pub total: usize,
    pub skip: usize,
    pub limit: usize,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTodo {
    pub todo: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default = "default_user_id")]
    pub user_id: u64,
}

fn default_user_id() -> u64 {
    1
}

pub type Db = Arc<RwLock<Vec<Todo>>>;

/// Router with an empty collection.
pub fn app() -> Router {
    app_with(Vec::new())
}

/// Router seeded with `todos`, listed in the given order.
pub fn app_with(todos: Vec<Todo>) -> Router {
    let db: Db = Arc::new(RwLock::new(todos));
    Router::new()
        .route("/todos", get(list_todos))
        .route("/todos/add", post(add_todo))
        .with_state(db)
}

/// A handful of todos for running the viewer against a local server.
pub fn demo_todos() -> Vec<Todo> {
    [
        "Do something nice for someone you care about",
        "Memorize a poem",
        "Watch a classic movie",
        "Contribute code or a monetary donation to an open-source project",
        "Solve a Rubik's cube",
        "Bake pastries for yourself and neighbor",
        "Go see a Broadway production",
        "Write a thank you letter to an influential person in your life",
        "Invite some friends over for a game night",
        "Have a football scrimmage with some friends",
        "Text a friend you haven't talked to in a long time",
        "Organize pantry",
    ]
    .into_iter()
    .enumerate()
    .map(|(i, text)| Todo {
        id: i as u64 + 1,
        todo: text.to_string(),
        completed: i % 3 == 0,
        user_id: (i as u64 % 4) + 1,
    })
    .collect()
}

/// Serve a router seeded with `todos` on `listener` until the task ends.
pub async fn run(listener: TcpListener, todos: Vec<Todo>) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(todos)).await
}

async fn list_todos(State(db): State<Db>) -> Json<TodoList> {
    let todos = db.read().await.clone();
    let total = todos.len();
    Json(TodoList {
        todos,
        total,
        skip: 0,
        limit: total,
    })
}

async fn add_todo(State(db): State<Db>, Json(input): Json<AddTodo>) -> (StatusCode, Json<Todo>) {
    let mut todos = db.write().await;
    let id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
    let todo = Todo {
        id,
        todo: input.todo,
        completed: input.completed,
        user_id: input.user_id,
    };
    todos.push(todo.clone());
    info!(id, "created todo");
    (StatusCode::CREATED, Json(todo))
}
