//! Axum web application: shared state, routing, session plumbing.

pub mod auth;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod html;
pub mod templates;

pub use auth::CurrentUser;
pub use error::WebError;
pub use html::markdown_to_html;
pub use templates::Templates;

use std::sync::{Arc, Mutex, MutexGuard};

use axum::Router;
use axum::routing::get;
use time::Duration;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::store::Store;
use handlers::{
    handle_add, handle_add_form, handle_delete, handle_delete_confirm, handle_detail, handle_edit,
    handle_edit_form, handle_home, handle_list, handle_login, handle_login_form, handle_logout,
    handle_signup, handle_signup_form, handle_success,
};

/// How many days an idle session stays valid.
const SESSION_IDLE_DAYS: i64 = 14;

/// Store handle shared across request handlers.
pub type SharedStore = Arc<Mutex<dyn Store + Send>>;

// ===========================================
// Application State
// ===========================================

/// State shared by all handlers: the note store and the compiled
/// page templates.
#[derive(Clone)]
pub struct AppState {
    store: SharedStore,
    templates: Arc<Templates>,
}

impl AppState {
    /// Builds the state around an opened store, compiling the templates.
    pub fn new(store: SharedStore) -> Result<Self, minijinja::Error> {
        Ok(Self {
            store,
            templates: Arc::new(Templates::new()?),
        })
    }

    /// Locks the note store for the duration of one operation.
    ///
    /// Handlers must not hold the returned guard across an await point.
    pub fn store(&self) -> MutexGuard<'_, dyn Store + Send + 'static> {
        // A handler that panicked mid-request leaves the lock poisoned
        // but the connection still usable.
        self.store.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn templates(&self) -> &Templates {
        &self.templates
    }
}

// ===========================================
// Router
// ===========================================

/// Builds the application router with session and tracing layers.
pub fn router(state: AppState) -> Router {
    let session_store = MemoryStore::default();
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_IDLE_DAYS)));

    Router::new()
        .route("/", get(handle_home))
        .route("/auth/login", get(handle_login_form).post(handle_login))
        .route("/auth/logout", get(handle_logout))
        .route("/auth/signup", get(handle_signup_form).post(handle_signup))
        .route("/notes", get(handle_list))
        .route("/notes/add", get(handle_add_form).post(handle_add))
        .route("/notes/done", get(handle_success))
        .route("/notes/{slug}", get(handle_detail))
        .route("/notes/{slug}/edit", get(handle_edit_form).post(handle_edit))
        .route(
            "/notes/{slug}/delete",
            get(handle_delete_confirm)
                .post(handle_delete)
                .delete(handle_delete),
        )
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Convenience constructor used by the server and the test harness:
/// wraps a concrete store and builds the full router.
pub fn app(store: impl Store + Send + 'static) -> Result<Router, minijinja::Error> {
    let shared: SharedStore = Arc::new(Mutex::new(store));
    let state = AppState::new(shared)?;
    Ok(router(state))
}
