//! Application error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ordine_sdk::ProviderError;
use thiserror::Error;

/// Errors raised while assembling a menu.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("hook '{hook}' provider from plugin '{plugin}' failed")]
    Provider {
        hook: String,
        plugin: String,
        #[source]
        source: ProviderError,
    },

    #[error("unknown menu '{0}'")]
    UnknownMenu(String),
}

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Menu(#[from] MenuError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Menu(MenuError::UnknownMenu(_)) => StatusCode::NOT_FOUND,
            AppError::Menu(MenuError::Provider { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            AppError::Menu(e) if matches!(e, MenuError::Provider { .. }) => {
                tracing::error!(error = ?e, "menu provider failed");
                "internal server error".to_string()
            }
            _ => self.to_string(),
        };

        (status, body).into_response()
    }
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;
