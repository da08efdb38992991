use serde_json::json;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::error::UiError;
use crate::telemetry::{log_event, LogLevel};

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn query_all(selector: &str) -> Result<Vec<Element>, UiError> {
    let document = window()
        .ok_or(UiError::MissingWindow)?
        .document()
        .ok_or(UiError::MissingDocument)?;
    let nodes = document.query_selector_all(selector)?;

    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), UiError> {
    element.style().set_property(property, value)?;
    Ok(())
}

pub fn log_dom_error(context: &str, error: &UiError) {
    log_event(
        LogLevel::Warn,
        "dom.error",
        json!({ "context": context, "kind": error.kind(), "error": error.to_string() }),
    );
}

/// Observes one element; the observer is disconnected when this is dropped.
pub struct IntersectionWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl IntersectionWatch {
    pub fn observe(
        target: &Element,
        threshold: f64,
        root_margin: Option<&str>,
        mut on_entry: impl FnMut(f64, bool) + 'static,
    ) -> Result<Self, UiError> {
        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_entry(entry.intersection_ratio(), entry.is_intersecting());
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for IntersectionWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
