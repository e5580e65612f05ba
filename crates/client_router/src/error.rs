//! Router error types.

use thiserror::Error;

use crate::view::ViewComponent;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// No declared route matches; there is no fallback view
    #[error("No route matches path: {path}")]
    NoMatch { path: String },

    #[error("Redirect loop while resolving: {path}")]
    RedirectLoop { path: String },

    #[error("Failed to load view {component}: {reason}")]
    ViewLoad {
        component: ViewComponent,
        reason: String,
    },

    #[error("History has no entry at offset {delta}")]
    HistoryOutOfRange { delta: isize },

    #[error("Route {route} needs parameter :{param}")]
    MissingParam { route: String, param: String },

    #[error("Unknown route name: {0}")]
    UnknownRoute(String),
}

impl RouterError {
    pub fn view_load(component: ViewComponent, reason: impl Into<String>) -> Self {
        Self::ViewLoad {
            component,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RouterError::NoMatch {
            path: "/nowhere".to_string(),
        };
        assert_eq!(err.to_string(), "No route matches path: /nowhere");

        let err = RouterError::view_load(ViewComponent::ChatRagView, "chunk missing");
        assert!(err.to_string().contains("ChatRAGView"));
        assert!(err.to_string().contains("chunk missing"));
    }
}
