//! Note deletion handlers.

use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use tracing::info;

use crate::store::StoreError;
use crate::web::AppState;
use crate::web::auth::CurrentUser;
use crate::web::error::WebError;

/// Renders a confirmation page before deleting.
pub async fn handle_delete_confirm(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(slug): Path<String>,
) -> Result<Html<String>, WebError> {
    let note = state
        .store()
        .get_note(&slug, current.user().id())?
        .ok_or(WebError::NotFound)?;

    let page = state
        .templates()
        .render_delete_confirm(current.user(), &note)?;
    Ok(Html(page))
}

/// Deletes the requester's note and redirects to the success page.
///
/// Served for both POST and DELETE. A slug the requester does not own
/// is answered with 404 and nothing is removed.
pub async fn handle_delete(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(slug): Path<String>,
) -> Result<Redirect, WebError> {
    let result = {
        let mut store = state.store();
        store.delete_note(&slug, current.user().id())
    };

    match result {
        Ok(()) => {
            info!(slug = %slug, "note deleted");
            Ok(Redirect::to("/notes/done"))
        }
        Err(StoreError::NoteNotFound { .. }) => Err(WebError::NotFound),
        Err(e) => Err(e.into()),
    }
}
