//! Note lifecycle test suite.
//!
//! Drives note creation, editing and deletion through the web forms and
//! checks what actually landed in the store.

mod common;

use axum::http::StatusCode;
use common::harness::{TestApp, TestNote};
use jot::infra::derive_slug;

// ===========================================
// note creation tests
// ===========================================
mod create_tests {
    use super::*;

    #[tokio::test]
    async fn test_logged_in_user_can_create_note() {
        let app = TestApp::new();
        let author = app.add_user("alice", "correct-horse");
        let mut client = app.client_for("alice", "correct-horse").await;

        let note = TestNote::new("Новый заголовок")
            .text("Новый текст")
            .slug("new_slug");
        let response = client.post_form("/notes/add", &note.form()).await;

        response.assert_redirects_to("/notes/done");
        assert_eq!(app.count_notes(), 1);

        let saved = app
            .get_note("new_slug", author.id())
            .expect("note should be stored");
        assert_eq!(saved.title(), "Новый заголовок");
        assert_eq!(saved.text(), "Новый текст");
        assert_eq!(saved.author(), author.id());
    }

    #[tokio::test]
    async fn test_anonymous_cannot_create_note() {
        let app = TestApp::new();
        let mut client = app.client();

        let note = TestNote::new("Новый заголовок").slug("new_slug");
        let response = client.post_form("/notes/add", &note.form()).await;

        response.assert_redirects_to("/auth/login?next=/notes/add");
        assert_eq!(app.count_notes(), 0);
    }

    #[tokio::test]
    async fn test_cannot_reuse_slug() {
        let app = TestApp::new();
        let author = app.add_user("alice", "correct-horse");
        app.add_note(author.id(), &TestNote::new("First").slug("new_slug"));
        let mut client = app.client_for("alice", "correct-horse").await;

        let note = TestNote::new("Second").slug("new_slug");
        let response = client.post_form("/notes/add", &note.form()).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.body().contains("The slug new_slug is already in use."));
        assert_eq!(app.count_notes(), 1);
    }

    #[tokio::test]
    async fn test_blank_slug_is_derived_from_title() {
        let app = TestApp::new();
        let author = app.add_user("alice", "correct-horse");
        let mut client = app.client_for("alice", "correct-horse").await;

        let note = TestNote::new("Новый заголовок").text("Новый текст");
        let response = client.post_form("/notes/add", &note.form()).await;

        response.assert_redirects_to("/notes/done");
        let expected = derive_slug("Новый заголовок");
        let saved = app
            .get_note(&expected, author.id())
            .expect("note should be stored under the derived slug");
        assert_eq!(saved.slug(), expected);
    }

    #[tokio::test]
    async fn test_blank_title_rerenders_form() {
        let app = TestApp::new();
        app.add_user("alice", "correct-horse");
        let mut client = app.client_for("alice", "correct-horse").await;

        let response = client
            .post_form(
                "/notes/add",
                &[("title", ""), ("text", "Some text"), ("slug", "")],
            )
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.body().contains("Title is required."));
        assert_eq!(app.count_notes(), 0);
    }
}

// ===========================================
// note editing tests
// ===========================================
mod edit_tests {
    use super::*;

    #[tokio::test]
    async fn test_author_can_edit_note() {
        let app = TestApp::new();
        let author = app.add_user("alice", "correct-horse");
        app.add_note(
            author.id(),
            &TestNote::new("Заголовок").text("Текст").slug("note-slug"),
        );
        let mut client = app.client_for("alice", "correct-horse").await;

        let update = TestNote::new("Новый заголовок")
            .text("Новый текст")
            .slug("new-slug");
        let response = client
            .post_form("/notes/note-slug/edit", &update.form())
            .await;

        response.assert_redirects_to("/notes/done");
        let saved = app
            .get_note("new-slug", author.id())
            .expect("note should be stored under the new slug");
        assert_eq!(saved.title(), "Новый заголовок");
        assert_eq!(saved.text(), "Новый текст");
        assert!(app.get_note("note-slug", author.id()).is_none());
    }

    #[tokio::test]
    async fn test_other_user_cannot_edit_note() {
        let app = TestApp::new();
        let author = app.add_user("alice", "correct-horse");
        app.add_user("bob", "correct-horse");
        app.add_note(
            author.id(),
            &TestNote::new("Заголовок").text("Текст").slug("note-slug"),
        );
        let mut client = app.client_for("bob", "correct-horse").await;

        let update = TestNote::new("Новый заголовок").slug("new-slug");
        let response = client
            .post_form("/notes/note-slug/edit", &update.form())
            .await;

        response.assert_not_found();
        let saved = app
            .get_note("note-slug", author.id())
            .expect("note should be untouched");
        assert_eq!(saved.title(), "Заголовок");
    }

    #[tokio::test]
    async fn test_edit_may_keep_own_slug() {
        let app = TestApp::new();
        let author = app.add_user("alice", "correct-horse");
        app.add_note(
            author.id(),
            &TestNote::new("Заголовок").text("Текст").slug("note-slug"),
        );
        let mut client = app.client_for("alice", "correct-horse").await;

        let update = TestNote::new("Новый заголовок")
            .text("Текст")
            .slug("note-slug");
        let response = client
            .post_form("/notes/note-slug/edit", &update.form())
            .await;

        response.assert_redirects_to("/notes/done");
        let saved = app
            .get_note("note-slug", author.id())
            .expect("note should keep its slug");
        assert_eq!(saved.title(), "Новый заголовок");
    }

    #[tokio::test]
    async fn test_edit_cannot_take_anothers_slug() {
        let app = TestApp::new();
        let author = app.add_user("alice", "correct-horse");
        app.add_note(author.id(), &TestNote::new("First").slug("first"));
        app.add_note(author.id(), &TestNote::new("Second").slug("second"));
        let mut client = app.client_for("alice", "correct-horse").await;

        let update = TestNote::new("Second").slug("first");
        let response = client.post_form("/notes/second/edit", &update.form()).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.body().contains("The slug first is already in use."));
        assert!(app.get_note("second", author.id()).is_some());
    }
}

// ===========================================
// note deletion tests
// ===========================================
mod delete_tests {
    use super::*;

    #[tokio::test]
    async fn test_author_can_delete_note() {
        let app = TestApp::new();
        let author = app.add_user("alice", "correct-horse");
        app.add_note(author.id(), &TestNote::new("Заголовок").slug("note-slug"));
        let mut client = app.client_for("alice", "correct-horse").await;

        let response = client.post("/notes/note-slug/delete").await;

        response.assert_redirects_to("/notes/done");
        assert_eq!(app.count_notes(), 0);
    }

    #[tokio::test]
    async fn test_other_user_cannot_delete_note() {
        let app = TestApp::new();
        let author = app.add_user("alice", "correct-horse");
        app.add_user("bob", "correct-horse");
        app.add_note(author.id(), &TestNote::new("Заголовок").slug("note-slug"));
        let mut client = app.client_for("bob", "correct-horse").await;

        let response = client.post("/notes/note-slug/delete").await;

        response.assert_not_found();
        assert_eq!(app.count_notes(), 1);
    }

    #[tokio::test]
    async fn test_delete_verb_also_removes_note() {
        let app = TestApp::new();
        let author = app.add_user("alice", "correct-horse");
        app.add_note(author.id(), &TestNote::new("Заголовок").slug("note-slug"));
        let mut client = app.client_for("alice", "correct-horse").await;

        let response = client.delete("/notes/note-slug/delete").await;

        response.assert_redirects_to("/notes/done");
        assert_eq!(app.count_notes(), 0);
    }
}
