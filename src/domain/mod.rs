//! Core types: Note, NoteDraft, User, NoteId/UserId (ULID)

mod note;
mod note_id;
mod user;
mod user_id;

pub use note::{Note, NoteDraft, ParseNoteError};
pub use note_id::{NoteId, ParseNoteIdError};
pub use user::{ParseUserError, User};
pub use user_id::{ParseUserIdError, UserId};
