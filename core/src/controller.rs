//! Action orchestration and application state.
//!
//! # Design
//! The `Controller` owns all mutable state: the annotated collection, the
//! current page, the action status and the host surface. Network actions use
//! the same host-does-IO split as `TodoClient`: `begin_*` updates the status
//! and returns the request to run, `finish_*` takes the outcome. A
//! single-threaded host can therefore release its borrow on the controller
//! while a request is in flight, and other events (filter edits, page
//! clicks, a second action) are handled in between.

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::annotate::{annotate, stamp};
use crate::client::TodoClient;
use crate::config::Config;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{AddTodo, Todo};
use crate::view::{render, Surface, View};

/// Action status shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Idle,
    Loading,
    Error(String),
}

#[derive(Debug)]
pub struct Controller<S> {
    client: TodoClient,
    surface: S,
    todos: Vec<Todo>,
    page: usize,
    page_size: usize,
    status: Status,
    view: View,
}

impl<S: Surface> Controller<S> {
    pub fn new(config: &Config, surface: S) -> Self {
        Self {
            client: TodoClient::new(&config.base_url),
            surface,
            todos: Vec::new(),
            page: 1,
            page_size: config.page_size.max(1),
            status: Status::Idle,
            view: View::default(),
        }
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// What the last render pass drew.
    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Enter `Loading` and return the list request for the host to execute.
    pub fn begin_fetch(&mut self) -> HttpRequest {
        self.clear_error();
        self.status = Status::Loading;
        self.surface.set_loading(true);
        self.client.build_list_todos()
    }

    /// Apply the outcome of the list request. On success the collection is
    /// replaced, annotated relative to `today`, and page 1 is drawn.
    pub fn finish_fetch(&mut self, outcome: Result<HttpResponse, ApiError>, today: NaiveDate) {
        self.surface.set_loading(false);
        match outcome.and_then(|response| self.client.parse_list_todos(response)) {
            Ok(raw) => {
                info!(count = raw.len(), "fetched todos");
                self.todos = annotate(raw, today);
                self.page = 1;
                // An add that failed meanwhile keeps its error on screen.
                if self.status == Status::Loading {
                    self.status = Status::Idle;
                }
                self.render();
            }
            Err(err) => self.fail("Failed to fetch todos", &err),
        }
    }

    /// Start adding `text`. Blank text is ignored and yields `None`.
    pub fn begin_add(&mut self, text: &str) -> Option<HttpRequest> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.clear_error();
        match self.client.build_add_todo(&AddTodo::new(text)) {
            Ok(request) => Some(request),
            Err(err) => {
                self.fail("Failed to add todo", &err);
                None
            }
        }
    }

    /// Apply the outcome of the create request. On success the new item is
    /// prepended, dated `today`, and page 1 is drawn.
    pub fn finish_add(&mut self, outcome: Result<HttpResponse, ApiError>, today: NaiveDate) {
        match outcome.and_then(|response| self.client.parse_add_todo(response)) {
            Ok(mut created) => {
                if self.todos.iter().any(|todo| todo.id == created.id) {
                    let fresh = unused_id(&self.todos);
                    debug!(server_id = created.id, local_id = fresh, "reassigned duplicate todo id");
                    created.id = fresh;
                }
                info!(id = created.id, "added todo");
                self.todos.insert(0, stamp(created, today));
                self.surface.clear_new_todo();
                self.page = 1;
                self.render();
            }
            Err(err) => self.fail("Failed to add todo", &err),
        }
    }

    /// Show page `page` of the current filtered view.
    pub fn select_page(&mut self, page: usize) {
        self.page = page;
        self.render();
    }

    /// Search text or a date bound changed on the surface.
    pub fn filters_changed(&mut self) {
        self.page = 1;
        self.render();
    }

    pub fn reset_filters(&mut self) {
        self.surface.clear_filter_inputs();
        self.filters_changed();
    }

    pub fn render(&mut self) {
        self.view = render(&mut self.surface, &self.todos, self.page, self.page_size);
        debug!(page = self.page, pages = self.view.page_count(), rows = self.view.rows.len(), "rendered");
    }

    fn clear_error(&mut self) {
        if matches!(self.status, Status::Error(_)) {
            self.status = Status::Idle;
        }
        self.surface.set_error(None);
    }

    fn fail(&mut self, what: &str, err: &ApiError) {
        warn!(error = ?err, "{what}");
        let message = format!("{what}: {err}");
        self.surface.set_error(Some(&message));
        self.status = Status::Error(message);
    }
}

/// One past the highest id, or the lowest free id when the highest is
/// `u64::MAX`.
fn unused_id(todos: &[Todo]) -> u64 {
    let max = todos.iter().map(|todo| todo.id).max().unwrap_or(0);
    if let Some(next) = max.checked_add(1) {
        return next;
    }
    let taken: HashSet<u64> = todos.iter().map(|todo| todo.id).collect();
    (0..u64::MAX).find(|id| !taken.contains(id)).unwrap_or(0)
}
