//! Connection management for SqliteStore.

use super::SqliteStore;
use super::transaction::Transaction;
use crate::store::{StoreError, StoreResult, create_schema};
use rusqlite::Connection;
use std::fs;
use std::path::Path;

impl SqliteStore {
    // ===========================================
    // Constructors
    // ===========================================

    /// Opens a store backed by an in-memory database.
    ///
    /// Nothing survives the store being dropped; tests and scratch
    /// stores use this.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::initialize(Connection::open_in_memory()?)
    }

    /// Opens the database file at `path`, creating it and any missing
    /// parent directories on first use.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        Self::initialize(Connection::open(path)?)
    }

    fn initialize(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        create_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Read access to the underlying connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    // ===========================================
    // Transactions
    // ===========================================

    /// Begins a transaction. It rolls back when dropped uncommitted.
    pub fn transaction(&mut self) -> StoreResult<Transaction<'_>> {
        self.conn.execute_batch("BEGIN")?;
        Ok(Transaction::new(&self.conn))
    }
}
