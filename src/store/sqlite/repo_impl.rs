//! Store trait implementation for SqliteStore.

use super::SqliteStore;
use crate::domain::{Note, NoteDraft, NoteId, User, UserId};
use crate::infra::derive_slug;
use crate::store::{Store, StoreError, StoreResult};
use chrono::{DateTime, Utc};
use rusqlite::Connection;

// ===========================================
// Row Parsing
// ===========================================

type NoteRow = (String, String, String, String, String, String, String);
type UserRow = (String, String, String, String);

fn note_from_row(row: NoteRow) -> StoreResult<Note> {
    let (id, slug, title, body, author_id, created, modified) = row;

    let id = id
        .parse::<NoteId>()
        .map_err(|e| StoreError::Corrupt(format!("invalid note ID in database: {}", e)))?;
    let author = author_id
        .parse::<UserId>()
        .map_err(|e| StoreError::Corrupt(format!("invalid author ID in database: {}", e)))?;
    let created = DateTime::parse_from_rfc3339(&created)
        .map_err(|e| StoreError::Corrupt(format!("invalid created timestamp: {}", e)))?
        .with_timezone(&Utc);
    let modified = DateTime::parse_from_rfc3339(&modified)
        .map_err(|e| StoreError::Corrupt(format!("invalid modified timestamp: {}", e)))?
        .with_timezone(&Utc);

    Ok(Note::from_parts(
        id, slug, title, body, author, created, modified,
    )?)
}

fn user_from_row(row: UserRow) -> StoreResult<User> {
    let (id, username, password_hash, created) = row;

    let id = id
        .parse::<UserId>()
        .map_err(|e| StoreError::Corrupt(format!("invalid user ID in database: {}", e)))?;
    let created = DateTime::parse_from_rfc3339(&created)
        .map_err(|e| StoreError::Corrupt(format!("invalid created timestamp: {}", e)))?
        .with_timezone(&Utc);

    Ok(User::from_parts(id, username, password_hash, created)?)
}

// ===========================================
// Uniqueness Checks
// ===========================================

fn slug_taken(conn: &Connection, slug: &str, exclude: Option<&NoteId>) -> StoreResult<bool> {
    let found = match exclude {
        Some(id) => conn.query_row(
            "SELECT 1 FROM notes WHERE slug = ? AND id != ?",
            rusqlite::params![slug, id.to_string()],
            |_| Ok(true),
        ),
        None => conn.query_row("SELECT 1 FROM notes WHERE slug = ?", [slug], |_| Ok(true)),
    };

    match found {
        Ok(taken) => Ok(taken),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(false),
        Err(e) => Err(StoreError::Database(e)),
    }
}

fn username_taken(conn: &Connection, username: &str) -> StoreResult<bool> {
    let found = conn.query_row("SELECT 1 FROM users WHERE username = ?", [username], |_| {
        Ok(true)
    });

    match found {
        Ok(taken) => Ok(taken),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(false),
        Err(e) => Err(StoreError::Database(e)),
    }
}

// ===========================================
// Store Implementation
// ===========================================

impl Store for SqliteStore {
    fn create_note(&mut self, author: &UserId, draft: &NoteDraft) -> StoreResult<Note> {
        let slug = match draft.slug() {
            Some(slug) => slug.to_string(),
            None => derive_slug(draft.title()),
        };
        let note = Note::new(author.clone(), draft.title(), draft.text(), slug)?;

        let tx = self.transaction()?;
        if slug_taken(tx.conn(), note.slug(), None)? {
            return Err(StoreError::DuplicateSlug {
                slug: note.slug().to_string(),
            });
        }
        tx.execute(
            "INSERT INTO notes (id, slug, title, body, author_id, created, modified)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            rusqlite::params![
                note.id().to_string(),
                note.slug(),
                note.title(),
                note.text(),
                note.author().to_string(),
                note.created().to_rfc3339(),
                note.modified().to_rfc3339(),
            ],
        )?;
        tx.commit()?;

        Ok(note)
    }

    fn list_notes(&self, author: &UserId) -> StoreResult<Vec<Note>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, slug, title, body, author_id, created, modified
             FROM notes WHERE author_id = ? ORDER BY rowid",
        )?;

        let rows = stmt.query_map([author.to_string()], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
                row.get::<_, String>(6)?,
            ))
        })?;

        let mut notes = Vec::new();
        for row in rows {
            notes.push(note_from_row(row?)?);
        }
        Ok(notes)
    }

    fn get_note(&self, slug: &str, author: &UserId) -> StoreResult<Option<Note>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, slug, title, body, author_id, created, modified
             FROM notes WHERE slug = ? AND author_id = ?",
        )?;

        let row = stmt.query_row(rusqlite::params![slug, author.to_string()], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
                row.get::<_, String>(6)?,
            ))
        });

        let row = match row {
            Ok(row) => row,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(StoreError::Database(e)),
        };

        Ok(Some(note_from_row(row)?))
    }

    fn update_note(
        &mut self,
        slug: &str,
        author: &UserId,
        draft: &NoteDraft,
    ) -> StoreResult<Note> {
        let existing = self
            .get_note(slug, author)?
            .ok_or_else(|| StoreError::NoteNotFound {
                slug: slug.to_string(),
            })?;

        let new_slug = match draft.slug() {
            Some(slug) => slug.to_string(),
            None => derive_slug(draft.title()),
        };
        let updated = Note::from_parts(
            existing.id().clone(),
            new_slug,
            draft.title(),
            draft.text(),
            existing.author().clone(),
            existing.created(),
            Utc::now(),
        )?;

        let tx = self.transaction()?;
        if slug_taken(tx.conn(), updated.slug(), Some(updated.id()))? {
            return Err(StoreError::DuplicateSlug {
                slug: updated.slug().to_string(),
            });
        }
        tx.execute(
            "UPDATE notes SET slug = ?, title = ?, body = ?, modified = ? WHERE id = ?",
            rusqlite::params![
                updated.slug(),
                updated.title(),
                updated.text(),
                updated.modified().to_rfc3339(),
                updated.id().to_string(),
            ],
        )?;
        tx.commit()?;

        Ok(updated)
    }

    fn delete_note(&mut self, slug: &str, author: &UserId) -> StoreResult<()> {
        let deleted = self.conn.execute(
            "DELETE FROM notes WHERE slug = ? AND author_id = ?",
            rusqlite::params![slug, author.to_string()],
        )?;

        if deleted == 0 {
            return Err(StoreError::NoteNotFound {
                slug: slug.to_string(),
            });
        }
        Ok(())
    }

    fn count_notes(&self) -> StoreResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn create_user(&mut self, username: &str, password_hash: &str) -> StoreResult<User> {
        let user = User::new(username, password_hash)?;

        let tx = self.transaction()?;
        if username_taken(tx.conn(), user.username())? {
            return Err(StoreError::DuplicateUsername {
                username: user.username().to_string(),
            });
        }
        tx.execute(
            "INSERT INTO users (id, username, password_hash, created)
             VALUES (?, ?, ?, ?)",
            rusqlite::params![
                user.id().to_string(),
                user.username(),
                user.password_hash(),
                user.created().to_rfc3339(),
            ],
        )?;
        tx.commit()?;

        Ok(user)
    }

    fn find_user(&self, username: &str) -> StoreResult<Option<User>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, username, password_hash, created
             FROM users WHERE username = ?",
        )?;

        let row = stmt.query_row([username], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        });

        let row = match row {
            Ok(row) => row,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(StoreError::Database(e)),
        };

        Ok(Some(user_from_row(row)?))
    }

    fn get_user(&self, id: &UserId) -> StoreResult<Option<User>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, username, password_hash, created
             FROM users WHERE id = ?",
        )?;

        let row = stmt.query_row([id.to_string()], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
            ))
        });

        let row = match row {
            Ok(row) => row,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(StoreError::Database(e)),
        };

        Ok(Some(user_from_row(row)?))
    }
}
