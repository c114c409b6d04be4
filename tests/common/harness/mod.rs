//! Test harness for web integration tests.
//!
//! Provides an in-process application over an in-memory store, a
//! cookie-carrying client that drives the router through
//! `tower::ServiceExt::oneshot`, and a builder for test notes.

mod app;
mod client;
mod note;

// Re-export main types for external use
#[allow(unused_imports)]
pub use app::TestApp;
#[allow(unused_imports)]
pub use client::{TestClient, TestResponse};
#[allow(unused_imports)]
pub use note::TestNote;
