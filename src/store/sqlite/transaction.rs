//! RAII transaction over the store connection.

use crate::store::StoreResult;
use rusqlite::{Connection, Params};

/// An open transaction. Rolls back on drop unless [`commit`] is called,
/// so an early return from a store operation undoes its partial writes.
///
/// [`commit`]: Transaction::commit
pub struct Transaction<'a> {
    conn: &'a Connection,
    finished: bool,
}

impl<'a> Transaction<'a> {
    pub(crate) fn new(conn: &'a Connection) -> Self {
        Self {
            conn,
            finished: false,
        }
    }

    pub(crate) fn conn(&self) -> &Connection {
        self.conn
    }

    /// Runs one statement inside the transaction.
    pub fn execute(&self, sql: &str, params: impl Params) -> StoreResult<usize> {
        Ok(self.conn.execute(sql, params)?)
    }

    /// Makes the transaction's writes permanent.
    pub fn commit(self) -> StoreResult<()> {
        self.finish("COMMIT")
    }

    /// Discards the transaction's writes without waiting for drop.
    pub fn rollback(self) -> StoreResult<()> {
        self.finish("ROLLBACK")
    }

    fn finish(mut self, sql: &str) -> StoreResult<()> {
        self.conn.execute_batch(sql)?;
        self.finished = true;
        Ok(())
    }
}

impl Drop for Transaction<'_> {
    fn drop(&mut self) {
        if !self.finished {
            // Nowhere to report an error from drop
            let _ = self.conn.execute_batch("ROLLBACK");
        }
    }
}
