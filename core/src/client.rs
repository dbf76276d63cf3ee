//! Stateless HTTP request builder and response parser for the todo source.
//!
//! # Design
//! `TodoClient` holds only a `base_url`, the collection URL itself (for
//! example `https://dummyjson.com/todos`). Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. The caller executes the round-trip.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{AddTodo, RemoteTodo, TodoPage};

/// Synchronous, stateless client for the remote todo source.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.base_url.clone(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_add_todo(&self, input: &AddTodo) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/add", self.base_url),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Parse the `{ todos: [...] }` envelope and return the items in
    /// response order.
    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<RemoteTodo>, ApiError> {
        check_status(&response)?;
        let page: TodoPage =
            serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))?;
        Ok(page.todos)
    }

    pub fn parse_add_todo(&self, response: HttpResponse) -> Result<RemoteTodo, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

/// Any 2xx is accepted; the public source answers `add` with 200 or 201.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
