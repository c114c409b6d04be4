//! SQLite schema creation for the notes store.

use rusqlite::Connection;

/// Creates the database schema for the notes store.
///
/// This function creates all required tables, indexes, and constraints.
/// It is idempotent - calling it multiple times is safe.
///
/// # Tables Created
/// - `users` - Registered accounts
/// - `notes` - Notes owned by users
/// - `schema_version` - Schema version tracking
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    // ===========================================
    // Foreign Key Enforcement
    // ===========================================
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;

    // ===========================================
    // Users Table
    // ===========================================
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            username TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            created TEXT NOT NULL
        );",
    )?;

    // ===========================================
    // Notes Table
    // ===========================================
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS notes (
            id TEXT PRIMARY KEY,
            slug TEXT NOT NULL UNIQUE,
            title TEXT NOT NULL,
            body TEXT NOT NULL,
            author_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            created TEXT NOT NULL,
            modified TEXT NOT NULL
        );",
    )?;

    // ===========================================
    // Indexes
    // ===========================================
    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_notes_author ON notes(author_id);")?;

    // ===========================================
    // Schema Version Table
    // ===========================================
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL
        );",
    )?;

    conn.execute_batch(
        "INSERT OR IGNORE INTO schema_version (version, applied_at)
         VALUES (1, datetime('now'));",
    )?;

    Ok(())
}

/// Returns the current schema version.
pub fn get_schema_version(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| {
        row.get(0)
    })
}
