mod app;
mod dom;
mod fetch;

use todo_viewer_core::Config;
use wasm_bindgen::JsValue;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    tracing::info!("starting todo viewer");

    if let Err(err) = boot() {
        tracing::error!(?err, "todo viewer failed to start");
    }
}

fn boot() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("missing document"))?;

    let mut config = Config::default();
    if let Some(url) = document.body().and_then(|body| body.get_attribute("data-api-url")) {
        config = config.with_base_url(url);
    }
    tracing::debug!(base_url = %config.base_url, "resolved config");

    app::start(&document, config)
}
