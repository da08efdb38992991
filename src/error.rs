use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    #[error("window is not available")]
    MissingWindow,
    #[error("document is not available")]
    MissingDocument,
    #[error("no element matches `{selector}`")]
    MissingElement { selector: String },
    #[error("javascript error: {0}")]
    Js(String),
}

impl UiError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement {
            selector: selector.into(),
        }
    }

    /// Short machine-readable tag for log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingWindow => "missing_window",
            Self::MissingDocument => "missing_document",
            Self::MissingElement { .. } => "missing_element",
            Self::Js(_) => "js",
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for UiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_names_the_selector() {
        let error = UiError::missing("#typed-text");

        assert_eq!(error.to_string(), "no element matches `#typed-text`");
        assert_eq!(error.kind(), "missing_element");
    }
}
