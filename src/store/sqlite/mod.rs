//! SQLite-backed notes store implementation.

mod connection;
mod repo_impl;
mod transaction;


use rusqlite::Connection;

pub use transaction::Transaction;

// ===========================================
// SqliteStore Struct
// ===========================================

/// SQLite-backed notes store.
///
/// Manages the database connection and holds every note and user
/// the application knows about.
pub struct SqliteStore {
    pub(crate) conn: Connection,
}
