//! Rendering of the visible page and its pagination controls.
//!
//! # Design
//! `build_view` is pure: collection + filter + page in, `View` out.
//! `render` is the impure half. It reads the live filter inputs from a
//! `Surface`, builds the view and replaces the surface's list and page
//! controls wholesale. Calling it twice with unchanged state draws the same
//! thing twice.

use crate::filter::{Filter, FilterInputs};
use crate::paginate::{page_count, paginate};
use crate::types::Todo;

/// The host rendering surface: inputs the viewer reads and outputs it sets.
///
/// Implemented over DOM elements in the browser and by recording fakes in
/// tests. Page controls handed to `replace_pages` must route activation back
/// to `Controller::select_page`.
pub trait Surface {
    /// Current search text and date bounds.
    fn filter_inputs(&self) -> FilterInputs;

    fn clear_filter_inputs(&mut self);

    /// Empty the add-item text field.
    fn clear_new_todo(&mut self);

    fn set_loading(&mut self, visible: bool);

    /// Show `Some(message)` or hide the error display on `None`.
    fn set_error(&mut self, message: Option<&str>);

    fn replace_rows(&mut self, rows: &[TodoRow]);

    fn replace_pages(&mut self, pages: &[PageControl]);
}

/// One rendered line of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub id: u64,
    pub text: String,
    pub created_at: String,
    pub completed: bool,
}

impl From<&Todo> for TodoRow {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            text: todo.text.clone(),
            created_at: todo.created_on(),
            completed: todo.completed,
        }
    }
}

/// One page button; `active` marks the page currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    pub number: usize,
    pub active: bool,
}

/// Everything drawn by one render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    pub rows: Vec<TodoRow>,
    pub pages: Vec<PageControl>,
    /// Size of the filtered view before paging.
    pub matched: usize,
}

impl View {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

pub fn build_view(todos: &[Todo], filter: &Filter, page: usize, page_size: usize) -> View {
    let filtered = filter.apply(todos);
    let pages = (1..=page_count(filtered.len(), page_size))
        .map(|number| PageControl {
            number,
            active: number == page,
        })
        .collect();
    let rows = paginate(&filtered, page, page_size)
        .iter()
        .map(|todo| TodoRow::from(*todo))
        .collect();
    View {
        rows,
        pages,
        matched: filtered.len(),
    }
}

/// Redraw the list and pagination from `todos` and the surface's inputs.
pub fn render<S: Surface + ?Sized>(surface: &mut S, todos: &[Todo], page: usize, page_size: usize) -> View {
    let filter = Filter::parse(&surface.filter_inputs());
    let view = build_view(todos, &filter, page, page_size);
    surface.replace_rows(&view.rows);
    surface.replace_pages(&view.pages);
    view
}


#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::testing::RecordingSurface;
    use super::*;

    fn todos(texts: &[&str]) -> Vec<Todo> {
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| Todo {
                id: i as u64 + 1,
                text: text.to_string(),
                completed: false,
                user_id: 1,
                created_at: today - chrono::Days::new(i as u64),
            })
            .collect()
    }

    fn texts(view: &View) -> Vec<&str> {
        view.rows.iter().map(|r| r.text.as_str()).collect()
    }

    #[test]
    fn builds_current_page_and_controls() {
        let all = todos(&["a", "b", "c", "d", "e", "f", "g"]);
        let view = build_view(&all, &Filter::default(), 2, 5);
        assert_eq!(texts(&view), ["f", "g"]);
        assert_eq!(view.matched, 7);
        assert_eq!(
            view.pages,
            [
                PageControl { number: 1, active: false },
                PageControl { number: 2, active: true },
            ]
        );
    }

    #[test]
    fn rows_carry_formatted_dates() {
        let all = todos(&["a", "b"]);
        let view = build_view(&all, &Filter::default(), 1, 5);
        assert_eq!(view.rows[0].created_at, "2024-05-10");
        assert_eq!(view.rows[1].created_at, "2024-05-09");
    }

    #[test]
    fn empty_collection_has_no_controls() {
        let view = build_view(&[], &Filter::default(), 1, 5);
        assert!(view.rows.is_empty());
        assert_eq!(view.page_count(), 0);
    }

    #[test]
    fn render_reads_inputs_and_replaces_output() {
        let all = todos(&["alpha", "beta", "gamma"]);
        let mut surface = RecordingSurface::default();
        surface.inputs.search = "ET".to_string();

        let view = render(&mut surface, &all, 1, 5);
        assert_eq!(texts(&view), ["beta"]);
        assert_eq!(surface.rows, view.rows);
        assert_eq!(surface.pages, [PageControl { number: 1, active: true }]);
    }

    #[test]
    fn render_is_idempotent() {
        let all = todos(&["a", "b", "c", "d", "e", "f"]);
        let mut surface = RecordingSurface::default();
        let first = render(&mut surface, &all, 2, 5);
        let second = render(&mut surface, &all, 2, 5);
        assert_eq!(first, second);
        assert_eq!(surface.renders, 2);
    }
}
