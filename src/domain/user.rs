//! User account entity.

use crate::domain::UserId;
use chrono::{DateTime, Utc};
use std::fmt;

/// The kind of error that occurred when constructing a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseUserErrorKind {
    EmptyUsername,
    EmptyPasswordHash,
}

/// Error returned when constructing an invalid user.
#[derive(Debug, Clone)]
pub struct ParseUserError {
    kind: ParseUserErrorKind,
}

impl fmt::Display for ParseUserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseUserErrorKind::EmptyUsername => {
                write!(f, "invalid user: username cannot be empty")
            }
            ParseUserErrorKind::EmptyPasswordHash => {
                write!(f, "invalid user: password hash cannot be empty")
            }
        }
    }
}

impl std::error::Error for ParseUserError {}

/// An account that can sign in and own notes.
///
/// The password is stored only as an argon2 PHC hash string; the
/// plaintext never reaches this type.
#[derive(Clone, PartialEq)]
pub struct User {
    id: UserId,
    username: String,
    password_hash: String,
    created: DateTime<Utc>,
}

impl User {
    /// Creates a new User with a fresh id and the current timestamp.
    ///
    /// # Errors
    ///
    /// Returns `ParseUserError` if the username or password hash is
    /// empty or whitespace-only.
    pub fn new(
        username: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Result<Self, ParseUserError> {
        Self::from_parts(UserId::new(), username, password_hash, Utc::now())
    }

    /// Reassembles a User from stored parts, applying the same
    /// validation as `new`.
    pub fn from_parts(
        id: UserId,
        username: impl Into<String>,
        password_hash: impl Into<String>,
        created: DateTime<Utc>,
    ) -> Result<Self, ParseUserError> {
        let username = username.into();
        let username = username.trim();
        if username.is_empty() {
            return Err(ParseUserError {
                kind: ParseUserErrorKind::EmptyUsername,
            });
        }

        let password_hash = password_hash.into();
        if password_hash.trim().is_empty() {
            return Err(ParseUserError {
                kind: ParseUserErrorKind::EmptyPasswordHash,
            });
        }

        Ok(Self {
            id,
            username: username.to_string(),
            password_hash,
            created,
        })
    }

    /// Returns the user's unique identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the argon2 PHC hash of the user's password.
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Returns when the account was created.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.username)
    }
}

// Hash strings stay out of debug output.
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("created", &self.created)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g";

    #[test]
    fn new_sets_all_fields() {
        let user = User::new("author", HASH).unwrap();
        assert_eq!(user.username(), "author");
        assert_eq!(user.password_hash(), HASH);
    }

    #[test]
    fn username_cannot_be_empty() {
        assert!(User::new("", HASH).is_err());
        assert!(User::new("   ", HASH).is_err());
    }

    #[test]
    fn password_hash_cannot_be_empty() {
        assert!(User::new("author", "").is_err());
    }

    #[test]
    fn username_is_trimmed() {
        let user = User::new("  author  ", HASH).unwrap();
        assert_eq!(user.username(), "author");
    }

    #[test]
    fn from_parts_preserves_all_fields() {
        let id: UserId = "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap();
        let created = DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let user = User::from_parts(id.clone(), "reader", HASH, created).unwrap();

        assert_eq!(user.id(), &id);
        assert_eq!(user.username(), "reader");
        assert_eq!(user.created(), created);
    }

    #[test]
    fn debug_omits_password_hash() {
        let user = User::new("author", HASH).unwrap();
        let debug = format!("{user:?}");
        assert!(debug.contains("author"));
        assert!(!debug.contains(HASH));
    }

    #[test]
    fn display_shows_username() {
        let user = User::new("author", HASH).unwrap();
        assert_eq!(format!("{user}"), "author");
    }
}
