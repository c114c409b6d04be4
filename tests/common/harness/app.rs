//! In-process application over an in-memory store.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use jot::domain::{Note, User, UserId};
use jot::infra::hash_password;
use jot::store::{SqliteStore, Store};
use jot::web::{AppState, SharedStore, router};

use super::{TestClient, TestNote};

/// The full application wired to an in-memory store.
///
/// Keeps a handle on the store so tests can seed users and notes
/// directly and make assertions about what the handlers persisted.
pub struct TestApp {
    router: Router,
    store: SharedStore,
}

impl TestApp {
    /// Builds a fresh application with an empty database.
    pub fn new() -> Self {
        let store = SqliteStore::open_in_memory().expect("open in-memory store");
        let shared: SharedStore = Arc::new(Mutex::new(store));
        let state = AppState::new(shared.clone()).expect("build app state");
        Self {
            router: router(state),
            store: shared,
        }
    }

    /// Runs one operation against the shared store.
    pub fn with_store<T>(&self, f: impl FnOnce(&mut (dyn Store + Send)) -> T) -> T {
        let mut guard = self.store.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut *guard)
    }

    /// Creates an account directly in the store.
    pub fn add_user(&self, username: &str, password: &str) -> User {
        let hash = hash_password(password).expect("hash password");
        self.with_store(|store| store.create_user(username, &hash))
            .expect("create user")
    }

    /// Creates a note directly in the store.
    pub fn add_note(&self, author: &UserId, note: &TestNote) -> Note {
        self.with_store(|store| store.create_note(author, &note.draft()))
            .expect("create note")
    }

    /// Total notes across all authors.
    pub fn count_notes(&self) -> u64 {
        self.with_store(|store| store.count_notes())
            .expect("count notes")
    }

    /// Fetches a note scoped to its author.
    pub fn get_note(&self, slug: &str, author: &UserId) -> Option<Note> {
        self.with_store(|store| store.get_note(slug, author))
            .expect("get note")
    }

    /// A fresh client with no session.
    pub fn client(&self) -> TestClient {
        TestClient::new(self.router.clone())
    }

    /// A client already logged in with the given credentials.
    pub async fn client_for(&self, username: &str, password: &str) -> TestClient {
        let mut client = self.client();
        let response = client.login(username, password).await;
        assert_eq!(
            response.status(),
            axum::http::StatusCode::SEE_OTHER,
            "login should succeed for {}",
            username
        );
        client
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}
