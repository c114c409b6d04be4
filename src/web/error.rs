//! Web error types and their HTTP responses.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use crate::infra::PasswordError;
use crate::store::StoreError;
use crate::web::templates::NOT_FOUND_PAGE;

/// Errors surfaced by request handlers.
///
/// `NotFound` covers both missing notes and notes owned by someone
/// else; the response never reveals which one it was.
#[derive(Debug, Error)]
pub enum WebError {
    /// The requested page does not exist or is not visible to the requester.
    #[error("not found")]
    NotFound,

    /// The store failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Template rendering failed.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// The session backend failed.
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Password hashing or verification failed.
    #[error("password error: {0}")]
    Password(#[from] PasswordError),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::NotFound => {
                (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE)).into_response()
            }
            other => {
                error!(error = %other, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
            }
        }
    }
}
