//! Store trait and error types for notes and users.

use crate::domain::{Note, NoteDraft, ParseNoteError, ParseUserError, User, UserId};
use std::path::PathBuf;
use thiserror::Error;

// ===========================================
// Error Types
// ===========================================

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No note with the given slug belongs to the requesting author.
    #[error("note not found: {slug}")]
    NoteNotFound { slug: String },

    /// Another note already uses the slug.
    #[error("slug already in use: {slug}")]
    DuplicateSlug { slug: String },

    /// Another user already registered the username.
    #[error("username already taken: {username}")]
    DuplicateUsername { username: String },

    /// A note row failed domain validation.
    #[error("{0}")]
    InvalidNote(#[from] ParseNoteError),

    /// A user row failed domain validation.
    #[error("{0}")]
    InvalidUser(#[from] ParseUserError),

    /// A stored row could not be decoded.
    #[error("corrupt record: {0}")]
    Corrupt(String),

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// ===========================================
// Store Trait
// ===========================================

/// Persistence operations for notes and users.
///
/// Every note operation that takes an author is scoped to that author:
/// a note owned by someone else behaves exactly like a note that does
/// not exist. Slugs are unique across all authors.
pub trait Store {
    // ===========================================
    // Note Operations
    // ===========================================

    /// Creates a note owned by `author` from the draft.
    ///
    /// When the draft carries no slug, one is derived from the title.
    /// Fails with [`StoreError::DuplicateSlug`] when the slug is already
    /// taken by any note, regardless of owner.
    fn create_note(&mut self, author: &UserId, draft: &NoteDraft) -> StoreResult<Note>;

    /// Returns all notes owned by `author`, oldest first.
    fn list_notes(&self, author: &UserId) -> StoreResult<Vec<Note>>;

    /// Looks up a note by slug, scoped to `author`.
    ///
    /// Returns `Ok(None)` when the slug does not exist or the note
    /// belongs to someone else.
    fn get_note(&self, slug: &str, author: &UserId) -> StoreResult<Option<Note>>;

    /// Replaces title, text and slug of the note currently stored under
    /// `slug`, scoped to `author`.
    ///
    /// The note id, owner and creation time are preserved; the modified
    /// time is refreshed. When the draft carries no slug, a fresh one is
    /// derived from the new title.
    fn update_note(&mut self, slug: &str, author: &UserId, draft: &NoteDraft)
    -> StoreResult<Note>;

    /// Deletes the note with the given slug, scoped to `author`.
    fn delete_note(&mut self, slug: &str, author: &UserId) -> StoreResult<()>;

    /// Returns the total number of notes across all authors.
    fn count_notes(&self) -> StoreResult<u64>;

    // ===========================================
    // User Operations
    // ===========================================

    /// Creates a user with the given username and password hash.
    ///
    /// Fails with [`StoreError::DuplicateUsername`] when the username is
    /// already registered.
    fn create_user(&mut self, username: &str, password_hash: &str) -> StoreResult<User>;

    /// Looks up a user by username.
    fn find_user(&self, username: &str) -> StoreResult<Option<User>>;

    /// Looks up a user by id.
    fn get_user(&self, id: &UserId) -> StoreResult<Option<User>>;
}
