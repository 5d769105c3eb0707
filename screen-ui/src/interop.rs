//! Thin browser glue: viewport queries, pointer capture, focus, downloads.

use dioxus::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::window;

/// Fallback used when the browser refuses to report a viewport size.
const FALLBACK_VIEWPORT: (u32, u32) = (1280, 800);

/// Get the browser viewport dimensions in CSS pixels.
pub fn get_viewport_size() -> (u32, u32) {
    let Some(window) = window() else {
        return FALLBACK_VIEWPORT;
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .map(|v| v as u32)
        .unwrap_or(FALLBACK_VIEWPORT.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .map(|v| v as u32)
        .unwrap_or(FALLBACK_VIEWPORT.1);
    (width, height)
}

/// Owns a `resize` listener on the window and removes it on drop, so a
/// component can watch the viewport without leaking the closure.
pub struct ViewportWatcher {
    closure: Closure<dyn FnMut()>,
}

impl ViewportWatcher {
    pub fn new(on_resize: Callback<(u32, u32)>) -> Option<Self> {
        let window = window()?;
        let closure = Closure::wrap(Box::new(move || {
            on_resize.call(get_viewport_size());
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { closure })
    }
}

impl Drop for ViewportWatcher {
    fn drop(&mut self) {
        if let Some(window) = window() {
            let _ = window.remove_event_listener_with_callback(
                "resize",
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Move keyboard focus to the element with the given id, if present.
pub fn focus_element(id: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(element) = document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = element.focus();
    }
}

/// Offer `content` as a file download via a transient `data:` URL anchor.
pub fn download_text(filename: &str, mime: &str, content: &str) -> bool {
    let Some(document) = window().and_then(|w| w.document()) else {
        return false;
    };
    let Ok(anchor) = document.create_element("a") else {
        return false;
    };
    let encoded = js_sys::encode_uri_component(content);
    let href = format!("data:{mime};charset=utf-8,{encoded}");
    if anchor.set_attribute("href", &href).is_err() {
        return false;
    }
    if anchor.set_attribute("download", filename).is_err() {
        return false;
    }
    let Ok(anchor) = anchor.dyn_into::<web_sys::HtmlElement>() else {
        return false;
    };
    anchor.click();
    true
}
