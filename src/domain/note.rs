//! Note entity owned by a single user account.

use crate::domain::{NoteId, UserId};
use chrono::{DateTime, Utc};
use std::fmt;

/// The kind of error that occurred when constructing a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseNoteErrorKind {
    EmptyTitle,
    EmptyText,
    EmptySlug,
}

/// Error returned when constructing an invalid note.
#[derive(Debug, Clone)]
pub struct ParseNoteError {
    kind: ParseNoteErrorKind,
}

impl fmt::Display for ParseNoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseNoteErrorKind::EmptyTitle => write!(f, "invalid note: title cannot be empty"),
            ParseNoteErrorKind::EmptyText => write!(f, "invalid note: text cannot be empty"),
            ParseNoteErrorKind::EmptySlug => write!(f, "invalid note: slug cannot be empty"),
        }
    }
}

impl std::error::Error for ParseNoteError {}

/// A short text note belonging to exactly one user.
///
/// # Required Fields
/// - `id`: Unique ULID identifier, assigned at creation
/// - `slug`: URL-safe lookup key, unique across all notes
/// - `title`: Human-readable title (non-empty)
/// - `text`: Note body, rendered as markdown on the detail page
/// - `author`: Owning user; never changes after creation
/// - `created` / `modified`: Timestamps
///
/// # Examples
///
/// ```
/// use jot::domain::{Note, UserId};
///
/// let author = UserId::new();
/// let note = Note::new(author, "API Design", "Some text", "api-design").unwrap();
/// assert_eq!(note.title(), "API Design");
/// assert_eq!(note.slug(), "api-design");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    id: NoteId,
    slug: String,
    title: String,
    text: String,
    author: UserId,
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
}

impl Note {
    /// Creates a new Note with a fresh id and current timestamps.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if the title, text, or slug is empty or
    /// whitespace-only.
    pub fn new(
        author: UserId,
        title: impl Into<String>,
        text: impl Into<String>,
        slug: impl Into<String>,
    ) -> Result<Self, ParseNoteError> {
        let now = Utc::now();
        Self::from_parts(NoteId::new(), slug, title, text, author, now, now)
    }

    /// Reassembles a Note from stored parts, applying the same validation
    /// as `new`. Used when rehydrating rows and when applying edits.
    pub fn from_parts(
        id: NoteId,
        slug: impl Into<String>,
        title: impl Into<String>,
        text: impl Into<String>,
        author: UserId,
        created: DateTime<Utc>,
        modified: DateTime<Utc>,
    ) -> Result<Self, ParseNoteError> {
        let title = title.into();
        let title = title.trim();
        if title.is_empty() {
            return Err(ParseNoteError {
                kind: ParseNoteErrorKind::EmptyTitle,
            });
        }

        let text = text.into();
        let text = text.trim();
        if text.is_empty() {
            return Err(ParseNoteError {
                kind: ParseNoteErrorKind::EmptyText,
            });
        }

        let slug = slug.into();
        let slug = slug.trim();
        if slug.is_empty() {
            return Err(ParseNoteError {
                kind: ParseNoteErrorKind::EmptySlug,
            });
        }

        Ok(Self {
            id,
            slug: slug.to_string(),
            title: title.to_string(),
            text: text.to_string(),
            author,
            created,
            modified,
        })
    }

    /// Returns the note's unique identifier.
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the note's slug.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's body text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the id of the user who owns this note.
    pub fn author(&self) -> &UserId {
        &self.author
    }

    /// Returns when the note was created.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Returns when the note was last modified.
    pub fn modified(&self) -> DateTime<Utc> {
        self.modified
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.slug)
    }
}

/// User-supplied content for creating or editing a note.
///
/// The slug is optional; when absent the store derives one from the
/// title. An empty or whitespace-only slug is normalized to None so a
/// blank form field behaves like an omitted one.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteDraft {
    title: String,
    text: String,
    slug: Option<String>,
}

impl NoteDraft {
    /// Creates a draft with no explicit slug.
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            slug: None,
        }
    }

    /// Sets an explicit slug. Empty or whitespace-only values are
    /// normalized to None.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        let slug = slug.into();
        let trimmed = slug.trim();
        self.slug = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    /// Returns the draft title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the draft body text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the explicit slug, if one was supplied.
    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }
}
