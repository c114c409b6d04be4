//! Home page handler.

use axum::extract::State;
use axum::response::Html;
use tower_sessions::Session;

use crate::web::AppState;
use crate::web::auth::maybe_user;
use crate::web::error::WebError;

/// Renders the landing page for visitors and signed-in users alike.
pub async fn handle_home(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, WebError> {
    let user = maybe_user(&state, &session).await?;
    let page = state
        .templates()
        .render_home(user.as_ref().map(|u| u.username()))?;
    Ok(Html(page))
}
