//! Tri-state view model shared by every screen controller.
//!
//! A screen is always in exactly one of three states: waiting on a call,
//! showing a payload, or showing an error message. Controllers re-enter
//! [`ViewState::Loading`] before every load or action and resolve to one of
//! the other two variants when the underlying call completes.

use crate::error::{AppError, Result};

/// Message shown when a failure carries no text of its own.
pub const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState<T> {
    #[default]
    Loading,
    Success(T),
    Error(String),
}

impl<T> ViewState<T> {
    /// Resolve a finished call into `Success` or `Error`.
    pub fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(value) => ViewState::Success(value),
            Err(e) => ViewState::Error(error_message(&e)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ViewState::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ViewState::Error(_))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            ViewState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U, F>(self, f: F) -> ViewState<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            ViewState::Loading => ViewState::Loading,
            ViewState::Success(value) => ViewState::Success(f(value)),
            ViewState::Error(message) => ViewState::Error(message),
        }
    }
}

/// The text a screen shows for a failure.
pub fn error_message(err: &AppError) -> String {
    let text = err.to_string();
    if text.trim().is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        text
    }
}
