#![forbid(unsafe_code)]

//! Errors raised by DOM and extension API calls.

use std::fmt;

/// Failure of a DOM or WebExtension call.
///
/// None of these reach the user: entry points log them and carry on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebError {
    /// A DOM or extension call threw; holds the stringified exception.
    Dom(String),
    /// A required global (`window`, `document`, `browser.tabs`, ...) is absent.
    MissingGlobal(&'static str),
    /// An element the popup markup must contain was not found.
    MissingElement(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dom(msg) => write!(f, "DOM call failed: {msg}"),
            Self::MissingGlobal(name) => write!(f, "missing global: {name}"),
            Self::MissingElement(id) => write!(f, "missing element: #{id}"),
        }
    }
}

impl std::error::Error for WebError {}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for WebError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<WebError> for wasm_bindgen::JsValue {
    fn from(err: WebError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failure() {
        assert_eq!(
            WebError::MissingGlobal("browser").to_string(),
            "missing global: browser"
        );
        assert_eq!(
            WebError::MissingElement("outline-depth".into()).to_string(),
            "missing element: #outline-depth"
        );
        assert_eq!(
            WebError::Dom("NotFoundError".into()).to_string(),
            "DOM call failed: NotFoundError"
        );
    }
}
