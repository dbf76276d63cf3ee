//! `Surface` implementation over the page's DOM elements.
//!
//! Rows and page buttons are rebuilt from scratch on every render. Todo text
//! is written with `set_text_content`, never as markup.

use todo_viewer_core::{FilterInputs, PageControl, Surface, TodoRow};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement};

/// Bootstrap's "hide me" class.
const HIDDEN: &str = "d-none";

/// Attribute carrying the page number on each pagination button.
pub const PAGE_ATTR: &str = "data-page";

pub struct DomSurface {
    document: Document,
    list: Element,
    pagination: Element,
    loading: Element,
    error: Element,
    search: HtmlInputElement,
    from: HtmlInputElement,
    to: HtmlInputElement,
    new_todo: HtmlInputElement,
}

impl DomSurface {
    pub fn from_document(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            document: document.clone(),
            list: element(document, "todoList")?,
            pagination: element(document, "pagination")?,
            loading: element(document, "loading")?,
            error: element(document, "error")?,
            search: input(document, "search")?,
            from: input(document, "fromDate")?,
            to: input(document, "toDate")?,
            new_todo: input(document, "newTodo")?,
        })
    }

    /// Text currently typed into the add-item field.
    pub fn new_todo_text(&self) -> String {
        self.new_todo.value()
    }

    fn draw_rows(&self, rows: &[TodoRow]) -> Result<(), JsValue> {
        self.list.set_inner_html("");
        for row in rows {
            let item = self.document.create_element("li")?;
            item.set_class_name("list-group-item d-flex justify-content-between align-items-center");

            let text = self.document.create_element("span")?;
            text.set_text_content(Some(&row.text));
            if row.completed {
                text.set_class_name("text-decoration-line-through");
            }
            let date = self.document.create_element("small")?;
            date.set_class_name("text-muted");
            date.set_text_content(Some(&row.created_at));

            item.append_child(&text)?;
            item.append_child(&date)?;
            self.list.append_child(&item)?;
        }
        Ok(())
    }

    fn draw_pages(&self, pages: &[PageControl]) -> Result<(), JsValue> {
        self.pagination.set_inner_html("");
        for page in pages {
            let item = self.document.create_element("li")?;
            item.set_class_name(if page.active { "page-item active" } else { "page-item" });

            let number = page.number.to_string();
            let button = self.document.create_element("button")?;
            button.set_class_name("page-link");
            button.set_attribute("type", "button")?;
            button.set_attribute(PAGE_ATTR, &number)?;
            button.set_text_content(Some(&number));

            item.append_child(&button)?;
            self.pagination.append_child(&item)?;
        }
        Ok(())
    }
}

impl Surface for DomSurface {
    fn filter_inputs(&self) -> FilterInputs {
        FilterInputs {
            search: self.search.value(),
            from: self.from.value(),
            to: self.to.value(),
        }
    }

    fn clear_filter_inputs(&mut self) {
        self.search.set_value("");
        self.from.set_value("");
        self.to.set_value("");
    }

    fn clear_new_todo(&mut self) {
        self.new_todo.set_value("");
    }

    fn set_loading(&mut self, visible: bool) {
        set_visible(&self.loading, visible);
    }

    fn set_error(&mut self, message: Option<&str>) {
        self.error.set_text_content(message);
        set_visible(&self.error, message.is_some());
    }

    fn replace_rows(&mut self, rows: &[TodoRow]) {
        if let Err(err) = self.draw_rows(rows) {
            warn!(?err, "failed to draw todo rows");
        }
    }

    fn replace_pages(&mut self, pages: &[PageControl]) {
        if let Err(err) = self.draw_pages(pages) {
            warn!(?err, "failed to draw pagination");
        }
    }
}

pub fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{id} element")))
}

fn input(document: &Document, id: &str) -> Result<HtmlInputElement, JsValue> {
    element(document, id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str(&format!("#{id} is not an <input>")))
}

fn set_visible(target: &Element, visible: bool) {
    if let Err(err) = target.class_list().toggle_with_force(HIDDEN, !visible) {
        warn!(?err, "failed to toggle visibility");
    }
}
