//! Notes list and success pages.

use axum::extract::State;
use axum::response::Html;
use tracing::debug;

use crate::web::AppState;
use crate::web::auth::CurrentUser;
use crate::web::error::WebError;

/// Renders the requester's notes, oldest first.
pub async fn handle_list(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Html<String>, WebError> {
    let notes = state.store().list_notes(current.user().id())?;
    debug!(count = notes.len(), "listing notes");
    let page = state.templates().render_list(current.user(), &notes)?;
    Ok(Html(page))
}

/// Landing page after a successful create, edit or delete.
pub async fn handle_success(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Html<String>, WebError> {
    let page = state.templates().render_success(current.user())?;
    Ok(Html(page))
}
