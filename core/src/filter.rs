//! Search and date-range filtering of the annotated collection.
//!
//! # Design
//! `FilterInputs` holds the three raw strings exactly as the surface reports
//! them. `Filter::parse` turns them into typed constraints: the search text
//! is lowercased once, and the date bounds become `NaiveDate`s. A bound that
//! is not a `YYYY-MM-DD` date imposes no constraint.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::types::Todo;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw filter values read from the search box and the two date inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInputs {
    pub search: String,
    pub from: String,
    pub to: String,
}

/// Parsed, conjunctive constraints. The default filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    search: Option<String>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl Filter {
    pub fn parse(inputs: &FilterInputs) -> Self {
        let search = Some(inputs.search.to_lowercase()).filter(|s| !s.is_empty());
        Self {
            search,
            from: parse_bound("from", &inputs.from),
            to: parse_bound("to", &inputs.to),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.from.is_none() && self.to.is_none()
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        if let Some(search) = &self.search {
            if !todo.text.to_lowercase().contains(search.as_str()) {
                return false;
            }
        }
        if self.from.is_some_and(|from| todo.created_at < from) {
            return false;
        }
        if self.to.is_some_and(|to| todo.created_at > to) {
            return false;
        }
        true
    }

    /// Keep the matching items in their original order.
    pub fn apply<'a>(&self, todos: &'a [Todo]) -> Vec<&'a Todo> {
        let kept: Vec<&Todo> = todos.iter().filter(|todo| self.matches(todo)).collect();
        debug!(total = todos.len(), kept = kept.len(), "filtered todos");
        kept
    }
}

fn parse_bound(name: &str, raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(err) => {
            warn!(bound = name, value = raw, error = %err, "ignoring malformed date bound");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: u64, text: &str, created: &str) -> Todo {
        Todo {
            id,
            text: text.to_string(),
            completed: false,
            user_id: 1,
            created_at: NaiveDate::parse_from_str(created, DATE_FORMAT).unwrap(),
        }
    }

    fn sample() -> Vec<Todo> {
        vec![
            todo(1, "Buy milk", "2024-05-10"),
            todo(2, "Walk the dog", "2024-05-09"),
            todo(3, "Book flights", "2024-05-08"),
            todo(4, "Call mom", "2024-05-07"),
        ]
    }

    fn inputs(search: &str, from: &str, to: &str) -> FilterInputs {
        FilterInputs {
            search: search.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    fn ids(todos: &[&Todo]) -> Vec<u64> {
        todos.iter().map(|t| t.id).collect()
    }

    #[test]
    fn empty_inputs_keep_everything() {
        let todos = sample();
        let filter = Filter::parse(&FilterInputs::default());
        assert!(filter.is_empty());
        assert_eq!(ids(&filter.apply(&todos)), [1, 2, 3, 4]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let todos = sample();
        let filter = Filter::parse(&inputs("BOO", "", ""));
        assert_eq!(ids(&filter.apply(&todos)), [3]);

        let filter = Filter::parse(&inputs("l", "", ""));
        assert_eq!(ids(&filter.apply(&todos)), [1, 2, 3, 4]);
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let todos = sample();
        let filter = Filter::parse(&inputs("", "2024-05-08", "2024-05-09"));
        assert_eq!(ids(&filter.apply(&todos)), [2, 3]);
    }

    #[test]
    fn constraints_combine_conjunctively() {
        let todos = sample();
        let filter = Filter::parse(&inputs("o", "2024-05-08", ""));
        assert_eq!(ids(&filter.apply(&todos)), [2, 3]);

        let filter = Filter::parse(&inputs("milk", "2024-05-08", "2024-05-09"));
        assert!(filter.apply(&todos).is_empty());
    }

    #[test]
    fn from_after_every_item_yields_nothing() {
        let todos = sample();
        let filter = Filter::parse(&inputs("", "2024-06-01", ""));
        assert!(filter.apply(&todos).is_empty());
    }

    #[test]
    fn malformed_bounds_impose_no_constraint() {
        let todos = sample();
        let filter = Filter::parse(&inputs("", "05/08/2024", "tomorrow"));
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&todos).len(), 4);
    }

    #[test]
    fn bounds_are_trimmed() {
        let todos = sample();
        let filter = Filter::parse(&inputs("", " 2024-05-10 ", ""));
        assert_eq!(ids(&filter.apply(&todos)), [1]);
    }

    #[test]
    fn output_is_subsequence_preserving_order() {
        let todos = sample();
        for search in ["", "a", "o", "x", "call"] {
            let kept = Filter::parse(&inputs(search, "", "")).apply(&todos);
            let positions: Vec<usize> = kept
                .iter()
                .map(|k| todos.iter().position(|t| t.id == k.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "{search}");
        }
    }
}
