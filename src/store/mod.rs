//! SQLite-backed persistence for notes and users.

mod repository;
mod schema;
mod sqlite;

pub use repository::{Store, StoreError, StoreResult};
pub use schema::{create_schema, get_schema_version};
pub use sqlite::{SqliteStore, Transaction};
