//! Builder for test notes with sensible defaults.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use jot::domain::NoteDraft;

/// Builder for creating test notes with sensible defaults.
#[derive(Debug, Clone)]
pub struct TestNote {
    title: String,
    text: String,
    slug: Option<String>,
}

impl TestNote {
    /// Creates a new test note with the given title and a default body.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: "Test note body.".to_string(),
            slug: None,
        }
    }

    /// Sets the note body.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets an explicit slug.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Returns the note title.
    pub fn get_title(&self) -> &str {
        &self.title
    }

    /// Returns the note body.
    pub fn get_text(&self) -> &str {
        &self.text
    }

    /// Returns the explicit slug, if set.
    pub fn get_slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    /// Converts the builder into a store draft.
    pub fn draft(&self) -> NoteDraft {
        let draft = NoteDraft::new(&self.title, &self.text);
        match &self.slug {
            Some(slug) => draft.with_slug(slug.clone()),
            None => draft,
        }
    }

    /// Form fields for posting through the web UI.
    pub fn form(&self) -> Vec<(String, String)> {
        vec![
            ("title".to_string(), self.title.clone()),
            ("text".to_string(), self.text.clone()),
            ("slug".to_string(), self.slug.clone().unwrap_or_default()),
        ]
    }
}
