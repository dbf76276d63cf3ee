//! Domain DTOs for the remote todo source and the annotated collection.
//!
//! # Design
//! `RemoteTodo` mirrors the wire schema exactly and has no creation date.
//! `Todo` is what the viewer holds in memory: the same fields plus a
//! `created_at` that is always present, so a `Todo` can only come out of
//! the annotator or the add-path.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Owner id sent with every created todo.
pub const DEFAULT_USER_ID: u64 = 1;

/// A single todo item as returned by the remote source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RemoteTodo {
    pub id: u64,
    #[serde(rename = "todo")]
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default = "default_user_id")]
    pub user_id: u64,
}

/// The list envelope returned by `GET <base>`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoPage {
    pub todos: Vec<RemoteTodo>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

/// Request payload for `POST <base>/add`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddTodo {
    pub todo: String,
    pub completed: bool,
    pub user_id: u64,
}

impl AddTodo {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            todo: text.into(),
            completed: false,
            user_id: DEFAULT_USER_ID,
        }
    }
}

/// A todo item held by the viewer, stamped with a creation date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    pub user_id: u64,
    pub created_at: NaiveDate,
}

impl Todo {
    /// The creation date in `YYYY-MM-DD` form, as shown in the list.
    pub fn created_on(&self) -> String {
        self.created_at.format("%Y-%m-%d").to_string()
    }
}

fn default_user_id() -> u64 {
    DEFAULT_USER_ID
}
