//! Session-backed authentication for request handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};
use tower_sessions::Session;

use crate::domain::{User, UserId};
use crate::web::AppState;
use crate::web::error::WebError;

/// Session key holding the signed-in user's id.
pub const SESSION_USER_KEY: &str = "user_id";

// ===========================================
// Login Redirect
// ===========================================

/// Rejection that sends the visitor to the login form, carrying the
/// page they asked for in `next`.
#[derive(Debug)]
pub struct AuthRedirect {
    next: String,
}

impl AuthRedirect {
    fn new(next: impl Into<String>) -> Self {
        Self { next: next.into() }
    }
}

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        Redirect::to(&format!("/auth/login?next={}", self.next)).into_response()
    }
}

/// Validates a login `next` target. Only absolute local paths are
/// accepted; anything else falls back to the notes list so the login
/// form cannot redirect off-site.
pub fn safe_next(next: &str) -> &str {
    if next.starts_with('/') && !next.starts_with("//") {
        next
    } else {
        "/notes"
    }
}

// ===========================================
// Current User
// ===========================================

/// The authenticated requester, extracted from the session.
///
/// Routes that take this extractor never run for anonymous visitors:
/// extraction fails with an [`AuthRedirect`] before the handler body.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    user: User,
}

impl CurrentUser {
    pub fn user(&self) -> &User {
        &self.user
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AuthRedirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let next = parts.uri.path().to_string();

        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|_| AuthRedirect::new(&next))?;

        match maybe_user(state, &session).await {
            Ok(Some(user)) => Ok(CurrentUser { user }),
            _ => Err(AuthRedirect::new(next)),
        }
    }
}

/// Looks up the signed-in user, if any. Public pages use this to vary
/// their navigation without requiring authentication.
pub async fn maybe_user(state: &AppState, session: &Session) -> Result<Option<User>, WebError> {
    let id: Option<UserId> = session.get(SESSION_USER_KEY).await?;
    let Some(id) = id else {
        return Ok(None);
    };
    Ok(state.store().get_user(&id)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{StatusCode, header};
    use pretty_assertions::assert_eq;

    // ===========================================
    // Redirect Target Validation
    // ===========================================

    #[test]
    fn safe_next_accepts_local_paths() {
        assert_eq!(safe_next("/notes/secret/edit"), "/notes/secret/edit");
        assert_eq!(safe_next("/"), "/");
    }

    #[test]
    fn safe_next_rejects_absolute_urls() {
        assert_eq!(safe_next("https://example.com/"), "/notes");
        assert_eq!(safe_next("example.com/notes"), "/notes");
    }

    #[test]
    fn safe_next_rejects_protocol_relative_urls() {
        assert_eq!(safe_next("//example.com/"), "/notes");
    }

    #[test]
    fn safe_next_rejects_empty_target() {
        assert_eq!(safe_next(""), "/notes");
    }

    // ===========================================
    // Redirect Response
    // ===========================================

    #[test]
    fn auth_redirect_points_at_login_with_next() {
        let response = AuthRedirect::new("/notes/add").into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert_eq!(location, "/auth/login?next=/notes/add");
    }
}
