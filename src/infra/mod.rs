//! Slug derivation, password hashing

mod password;
mod slug;

pub use password::{PasswordError, hash_password, verify_password};
pub use slug::{derive_slug, is_valid_slug};
