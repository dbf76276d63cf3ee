//! Event wiring between the page and the `Controller`.
//!
//! The controller lives in an `Rc<RefCell<_>>` shared by every listener.
//! Borrows are taken around `begin_*` and `finish_*` only, never across an
//! `.await`, so filter edits and page clicks keep working while a request is
//! in flight.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Local, NaiveDate};
use todo_viewer_core::{Config, Controller};
use tracing::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, EventTarget};

use crate::dom::{element, DomSurface, PAGE_ATTR};
use crate::fetch;

type Shared = Rc<RefCell<Controller<DomSurface>>>;

/// Attach all listeners and kick off the initial fetch.
pub fn start(document: &Document, config: Config) -> Result<(), JsValue> {
    let surface = DomSurface::from_document(document)?;
    let controller: Shared = Rc::new(RefCell::new(Controller::new(&config, surface)));

    let c = controller.clone();
    listen(element(document, "addTodoForm")?.as_ref(), "submit", move |event| {
        event.prevent_default();
        let text = c.borrow().surface().new_todo_text();
        spawn_add(c.clone(), text);
    })?;

    for (id, kind) in [("search", "input"), ("fromDate", "change"), ("toDate", "change")] {
        let c = controller.clone();
        listen(element(document, id)?.as_ref(), kind, move |_| c.borrow_mut().filters_changed())?;
    }

    let c = controller.clone();
    listen(element(document, "resetFilters")?.as_ref(), "click", move |_| {
        c.borrow_mut().reset_filters()
    })?;

    // One delegated listener; page buttons are recreated on every render.
    let c = controller.clone();
    listen(element(document, "pagination")?.as_ref(), "click", move |event| {
        if let Some(page) = clicked_page(&event) {
            c.borrow_mut().select_page(page);
        }
    })?;

    spawn_fetch(controller);
    Ok(())
}

fn spawn_fetch(controller: Shared) {
    spawn_local(async move {
        let request = controller.borrow_mut().begin_fetch();
        let outcome = fetch::execute(request).await;
        controller.borrow_mut().finish_fetch(outcome, today());
    });
}

fn spawn_add(controller: Shared, text: String) {
    let Some(request) = controller.borrow_mut().begin_add(&text) else {
        return;
    };
    spawn_local(async move {
        let outcome = fetch::execute(request).await;
        controller.borrow_mut().finish_add(outcome, today());
    });
}

fn listen<F>(target: &EventTarget, kind: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

fn clicked_page(event: &Event) -> Option<usize> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let button = target.closest(&format!("[{PAGE_ATTR}]")).ok()??;
    let page = button.get_attribute(PAGE_ATTR)?.parse().ok();
    debug!(?page, "page control clicked");
    page
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
