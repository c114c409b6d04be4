//! Note detail page.

use axum::extract::{Path, State};
use axum::response::Html;

use crate::web::AppState;
use crate::web::auth::CurrentUser;
use crate::web::error::WebError;

/// Renders one note with its body as HTML.
///
/// Lookups are scoped to the requester, so a slug owned by someone else
/// is answered with the same 404 as a slug that does not exist.
pub async fn handle_detail(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(slug): Path<String>,
) -> Result<Html<String>, WebError> {
    let note = state
        .store()
        .get_note(&slug, current.user().id())?
        .ok_or(WebError::NotFound)?;

    let page = state.templates().render_detail(current.user(), &note)?;
    Ok(Html(page))
}
