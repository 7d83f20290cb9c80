//! Single-line feedback shown after an operation.

use crate::core::error::{AccessError, Outcome};

/// Transient feedback line; each operation overwrites the previous one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageState {
    /// Text to render.
    pub text: String,
    /// Render with error styling.
    pub is_error: bool,
}

impl MessageState {
    /// Success line.
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    /// Error line.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }

    /// Error line for a failed operation.
    #[must_use]
    pub fn from_error(err: &AccessError) -> Self {
        Self::error(err.to_string())
    }

    /// Success line built from the value, or the failure's text.
    pub fn from_outcome<T>(outcome: &Outcome<T>, on_success: impl FnOnce(&T) -> String) -> Self {
        match outcome {
            Ok(value) => Self::success(on_success(value)),
            Err(err) => Self::from_error(err),
        }
    }

    /// Whether there is anything to render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
