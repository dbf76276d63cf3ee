//! Synthetic creation dates for fetched todos.
//!
//! The remote source has no creation date, so one is derived from fetch
//! order: the item at index `i` is dated `i` days before `today`.

use chrono::{Days, NaiveDate};

use crate::types::{RemoteTodo, Todo};

/// Stamp every item with `today - index` days, keeping order and length.
pub fn annotate(raw: Vec<RemoteTodo>, today: NaiveDate) -> Vec<Todo> {
    raw.into_iter()
        .enumerate()
        .map(|(index, item)| {
            let created_at = today
                .checked_sub_days(Days::new(index as u64))
                .unwrap_or(NaiveDate::MIN);
            stamp(item, created_at)
        })
        .collect()
}

/// Turn a single remote item into an in-memory `Todo` dated `created_at`.
pub fn stamp(item: RemoteTodo, created_at: NaiveDate) -> Todo {
    Todo {
        id: item.id,
        text: item.text,
        completed: item.completed,
        user_id: item.user_id,
        created_at,
    }
}
