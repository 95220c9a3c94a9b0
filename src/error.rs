use std::fmt;

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetErrorCode {
    Generic,
    MissingElement,
    InvalidConfig,
    InvalidRange,
    UnknownAnimation,
    Surface,
    NotAttached,
    AlreadyAttached,
}

#[derive(Debug)]
pub struct WidgetError {
    pub code: WidgetErrorCode,
    pub message: String,
}

impl WidgetError {
    pub fn new(message: String) -> WidgetError {
        Self::new_code(WidgetErrorCode::Generic, message)
    }

    pub fn new_code(code: WidgetErrorCode, message: String) -> WidgetError {
        WidgetError { code, message }
    }
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for WidgetError {}

impl From<WidgetError> for JsValue {
    fn from(err: WidgetError) -> JsValue {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Errors thrown by the DOM/canvas bindings.
impl From<JsValue> for WidgetError {
    fn from(value: JsValue) -> WidgetError {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value));
        WidgetError::new_code(WidgetErrorCode::Surface, message)
    }
}
