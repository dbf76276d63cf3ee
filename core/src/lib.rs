//! Core of the todo viewer: a searchable, date-filterable, paginated view
//! over a remote todo collection.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). Everything between the
//! response and the screen is plain Rust: fetched items are annotated with
//! synthetic creation dates, filtered, paged, and drawn onto a host
//! `Surface`.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only the collection URL.
//! - `annotate`, `Filter` and `paginate` are pure functions over slices.
//! - `view::render` is the only code that writes to a `Surface`.
//! - `Controller` owns all mutable state and splits each network action
//!   into `begin_*` / `finish_*` so the host can await between them.

pub mod annotate;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod http;
pub mod paginate;
pub mod types;
pub mod view;

pub use annotate::{annotate, stamp};
pub use client::TodoClient;
pub use config::{Config, DEFAULT_BASE_URL, PAGE_SIZE};
pub use controller::{Controller, Status};
pub use error::ApiError;
pub use filter::{Filter, FilterInputs};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use paginate::{page_count, paginate};
pub use types::{AddTodo, RemoteTodo, Todo, TodoPage};
pub use view::{build_view, render, PageControl, Surface, TodoRow, View};
