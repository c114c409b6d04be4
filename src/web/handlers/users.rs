//! Login, logout and signup handlers.

use axum::Form;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use tower_sessions::Session;
use tracing::{info, warn};

use crate::infra::{hash_password, verify_password};
use crate::store::StoreError;
use crate::web::AppState;
use crate::web::auth::{SESSION_USER_KEY, safe_next};
use crate::web::error::WebError;
use crate::web::forms::{LoginForm, NextParam, SignupForm};

// ===========================================
// Login
// ===========================================

/// Renders the login form, keeping the `next` target from the query.
pub async fn handle_login_form(
    State(state): State<AppState>,
    Query(params): Query<NextParam>,
) -> Result<Html<String>, WebError> {
    let page = state.templates().render_login(&params.next, None, "")?;
    Ok(Html(page))
}

/// Verifies credentials and opens a session.
///
/// A failed attempt re-renders the form with HTTP 200; a successful one
/// rotates the session id and redirects to the validated `next` target.
pub async fn handle_login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, WebError> {
    let username = form.username.trim();

    let user = {
        let store = state.store();
        store.find_user(username)?
    };

    let verified = match &user {
        Some(user) => verify_password(&form.password, user.password_hash())?,
        None => false,
    };

    let Some(user) = user.filter(|_| verified) else {
        warn!(username = %username, "failed login attempt");
        let page = state.templates().render_login(
            &form.next,
            Some("Username and password did not match."),
            username,
        )?;
        return Ok(Html(page).into_response());
    };

    session.cycle_id().await?;
    session.insert(SESSION_USER_KEY, user.id()).await?;
    info!(username = %user.username(), "user logged in");

    Ok(Redirect::to(safe_next(&form.next)).into_response())
}

// ===========================================
// Logout
// ===========================================

/// Closes the session and renders a logged-out page.
pub async fn handle_logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, WebError> {
    session.flush().await?;
    let page = state.templates().render_logout()?;
    Ok(Html(page))
}

// ===========================================
// Signup
// ===========================================

/// Renders the signup form.
pub async fn handle_signup_form(State(state): State<AppState>) -> Result<Html<String>, WebError> {
    let page = state.templates().render_signup(&[], "")?;
    Ok(Html(page))
}

/// Creates an account, logs it in, and redirects to the notes list.
///
/// Validation failures and duplicate usernames re-render the form with
/// HTTP 200 and leave no record behind.
pub async fn handle_signup(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SignupForm>,
) -> Result<Response, WebError> {
    let username = form.username.trim();

    let errors = form.validate();
    if !errors.is_empty() {
        let page = state.templates().render_signup(&errors, username)?;
        return Ok(Html(page).into_response());
    }

    let password_hash = hash_password(&form.password)?;
    let created = {
        let mut store = state.store();
        store.create_user(username, &password_hash)
    };

    let user = match created {
        Ok(user) => user,
        Err(StoreError::DuplicateUsername { username: taken }) => {
            let errors = vec![format!("The username {} is already taken.", taken)];
            let page = state.templates().render_signup(&errors, username)?;
            return Ok(Html(page).into_response());
        }
        Err(e) => return Err(e.into()),
    };

    session.cycle_id().await?;
    session.insert(SESSION_USER_KEY, user.id()).await?;
    info!(username = %user.username(), "user signed up");

    Ok(Redirect::to("/notes").into_response())
}
