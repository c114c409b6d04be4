//! Form payloads and validation for the web UI.
//!
//! Validation failures are not errors: they produce a list of messages
//! that the handler renders back into the form with HTTP 200.

use serde::Deserialize;

use crate::domain::NoteDraft;
use crate::infra::is_valid_slug;

/// Longest accepted username.
const MAX_USERNAME_LENGTH: usize = 150;

/// Shortest accepted password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

// ===========================================
// Note Form
// ===========================================

/// Payload of the add and edit note forms.
#[derive(Debug, Clone, Deserialize)]
pub struct NoteForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub slug: String,
}

impl NoteForm {
    /// Checks field-level constraints, returning messages suitable for
    /// rendering back into the form. An empty result means the form may
    /// be turned into a draft.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push("Title is required.".to_string());
        }
        if self.text.trim().is_empty() {
            errors.push("Text is required.".to_string());
        }

        let slug = self.slug.trim();
        if !slug.is_empty() && !is_valid_slug(slug) {
            errors.push(
                "Slug may only contain letters, digits, hyphens and underscores, \
                 up to 50 characters."
                    .to_string(),
            );
        }

        errors
    }

    /// Converts the form into a store draft. A blank slug becomes "no
    /// slug supplied" so the store derives one from the title.
    pub fn draft(&self) -> NoteDraft {
        NoteDraft::new(self.title.trim(), self.text.trim()).with_slug(self.slug.trim())
    }
}

// ===========================================
// Auth Forms
// ===========================================

/// Payload of the login form.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub next: String,
}

/// Payload of the signup form.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl SignupForm {
    /// Checks username and password constraints.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let username = self.username.trim();
        if username.is_empty() {
            errors.push("Username is required.".to_string());
        } else if username.len() > MAX_USERNAME_LENGTH {
            errors.push(format!(
                "Username may be at most {} characters.",
                MAX_USERNAME_LENGTH
            ));
        }

        if self.password.len() < MIN_PASSWORD_LENGTH {
            errors.push(format!(
                "Password must be at least {} characters.",
                MIN_PASSWORD_LENGTH
            ));
        }

        errors
    }
}

/// Query parameter carrying the page to return to after login.
#[derive(Debug, Default, Deserialize)]
pub struct NextParam {
    #[serde(default)]
    pub next: String,
}
