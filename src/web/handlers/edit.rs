//! Note create and edit form handlers.
//!
//! Add and edit share one form template. A validation failure or a slug
//! collision re-renders the form with the submitted values and HTTP 200;
//! only a successful write redirects to the success page.

use axum::Form;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use tracing::info;

use crate::store::StoreError;
use crate::web::AppState;
use crate::web::auth::CurrentUser;
use crate::web::error::WebError;
use crate::web::forms::NoteForm;
use crate::web::templates::NoteFormPage;

fn render_form(
    state: &AppState,
    current: &CurrentUser,
    heading: &str,
    action: &str,
    form: &NoteForm,
    errors: &[String],
) -> Result<Html<String>, WebError> {
    let page = state.templates().render_note_form(
        current.user(),
        &NoteFormPage {
            heading,
            action,
            title: &form.title,
            text: &form.text,
            slug: &form.slug,
            errors,
        },
    )?;
    Ok(Html(page))
}

fn slug_taken_message(slug: &str) -> String {
    format!("The slug {} is already in use.", slug)
}

// ===========================================
// Add
// ===========================================

/// Renders an empty note form.
pub async fn handle_add_form(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<Html<String>, WebError> {
    let form = NoteForm {
        title: String::new(),
        text: String::new(),
        slug: String::new(),
    };
    render_form(&state, &current, "Add a note", "/notes/add", &form, &[])
}

/// Creates a note owned by the requester.
pub async fn handle_add(
    State(state): State<AppState>,
    current: CurrentUser,
    Form(form): Form<NoteForm>,
) -> Result<Response, WebError> {
    let errors = form.validate();
    if !errors.is_empty() {
        let page = render_form(&state, &current, "Add a note", "/notes/add", &form, &errors)?;
        return Ok(page.into_response());
    }

    let result = {
        let mut store = state.store();
        store.create_note(current.user().id(), &form.draft())
    };

    match result {
        Ok(note) => {
            info!(slug = %note.slug(), "note created");
            Ok(Redirect::to("/notes/done").into_response())
        }
        Err(StoreError::DuplicateSlug { slug }) => {
            let errors = vec![slug_taken_message(&slug)];
            let page = render_form(&state, &current, "Add a note", "/notes/add", &form, &errors)?;
            Ok(page.into_response())
        }
        Err(StoreError::InvalidNote(e)) => {
            let errors = vec![e.to_string()];
            let page = render_form(&state, &current, "Add a note", "/notes/add", &form, &errors)?;
            Ok(page.into_response())
        }
        Err(e) => Err(e.into()),
    }
}

// ===========================================
// Edit
// ===========================================

/// Renders the form pre-filled with the note's current fields.
pub async fn handle_edit_form(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(slug): Path<String>,
) -> Result<Html<String>, WebError> {
    let note = state
        .store()
        .get_note(&slug, current.user().id())?
        .ok_or(WebError::NotFound)?;

    let form = NoteForm {
        title: note.title().to_string(),
        text: note.text().to_string(),
        slug: note.slug().to_string(),
    };
    let action = format!("/notes/{}/edit", slug);
    render_form(&state, &current, "Edit note", &action, &form, &[])
}

/// Applies an edit to the requester's note.
pub async fn handle_edit(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(slug): Path<String>,
    Form(form): Form<NoteForm>,
) -> Result<Response, WebError> {
    let action = format!("/notes/{}/edit", slug);

    let errors = form.validate();
    if !errors.is_empty() {
        let page = render_form(&state, &current, "Edit note", &action, &form, &errors)?;
        return Ok(page.into_response());
    }

    let result = {
        let mut store = state.store();
        store.update_note(&slug, current.user().id(), &form.draft())
    };

    match result {
        Ok(note) => {
            info!(slug = %note.slug(), "note edited");
            Ok(Redirect::to("/notes/done").into_response())
        }
        Err(StoreError::NoteNotFound { .. }) => Err(WebError::NotFound),
        Err(StoreError::DuplicateSlug { slug: taken }) => {
            let errors = vec![slug_taken_message(&taken)];
            let page = render_form(&state, &current, "Edit note", &action, &form, &errors)?;
            Ok(page.into_response())
        }
        Err(StoreError::InvalidNote(e)) => {
            let errors = vec![e.to_string()];
            let page = render_form(&state, &current, "Edit note", &action, &form, &errors)?;
            Ok(page.into_response())
        }
        Err(e) => Err(e.into()),
    }
}
