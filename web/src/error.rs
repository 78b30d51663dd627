use std::fmt;

use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum ErrorKind {
    Validation,
    Network,
    Backend,
}

/// Error state surfaced to the view layer instead of a silent log.
#[derive(Clone, Debug, PartialEq)]
pub struct UiError {
    pub kind: ErrorKind,
    pub message: String,
}

impl UiError {
    /// Classifies a failed API call: transport failures downcast to
    /// `reqwest::Error`, everything else carries the backend message.
    pub fn from_request(err: anyhow::Error, fallback: &str) -> Self {
        if err.downcast_ref::<reqwest::Error>().is_some() {
            Self {
                kind: ErrorKind::Network,
                message: format!("Something went wrong! {err}"),
            }
        } else {
            let message = err.to_string();
            Self {
                kind: ErrorKind::Backend,
                message: if message.is_empty() {
                    fallback.to_string()
                } else {
                    message
                },
            }
        }
    }
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Validation => write!(f, "{}", self.message),
            ErrorKind::Network => write!(f, "{}", self.message),
            ErrorKind::Backend => write!(f, "Error: {}", self.message),
        }
    }
}

#[component]
pub fn ErrorNotice(error: UiError) -> Element {
    rsx! {
        div {
            style: "padding: 10px; border-radius: 4px; text-align: center; font-weight: bold; background-color: #f8d7da; color: #721c24; border: 1px solid #f5c6cb;",
            "{error}"
        }
    }
}
