/// Section id targeted by an in-page link: `"#about"` -> `"about"`.
pub fn section_id_from_href(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(target_arch = "wasm32")]
pub use browser::{install_global, scroll_to_section};

#[cfg(target_arch = "wasm32")]
mod browser {
    use crate::error::UiError;
    use crate::telemetry::{log_event, LogLevel};
    use js_sys::Reflect;
    use serde_json::json;
    use wasm_bindgen::{closure::Closure, JsValue};
    use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

    const GLOBAL_NAME: &str = "scrollToSection";

    /// Smooth-scrolls to the section with `section_id`; a missing section is a no-op.
    pub fn scroll_to_section(section_id: &str) {
        let Some(section) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(section_id))
        else {
            log_event(
                LogLevel::Debug,
                "dom.missing_element",
                json!({ "selector": format!("#{section_id}") }),
            );
            return;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        section.scroll_into_view_with_scroll_into_view_options(&options);
    }

    /// Exposes `window.scrollToSection(id)` for inline page markup.
    pub fn install_global() -> Result<(), UiError> {
        let win = window().ok_or(UiError::MissingWindow)?;
        let handler = Closure::<dyn Fn(String)>::new(|section_id: String| {
            scroll_to_section(&section_id);
        });

        Reflect::set(&win, &JsValue::from_str(GLOBAL_NAME), handler.as_ref())?;
        handler.forget();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_id_strips_the_hash() {
        assert_eq!(section_id_from_href("#about"), Some("about"));
        assert_eq!(section_id_from_href("#contact-form"), Some("contact-form"));
    }

    #[test]
    fn bare_hash_and_external_links_have_no_section() {
        assert_eq!(section_id_from_href("#"), None);
        assert_eq!(section_id_from_href("https://github.com"), None);
        assert_eq!(section_id_from_href(""), None);
    }
}
