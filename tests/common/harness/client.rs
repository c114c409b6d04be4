//! Cookie-carrying client that drives the router in-process.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde::Serialize;
use tower::ServiceExt;

/// Client for making requests against the router without a socket.
///
/// Captures `Set-Cookie` headers and sends them back on subsequent
/// requests, so a login persists across calls like in a browser.
pub struct TestClient {
    router: Router,
    cookies: Vec<String>,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self {
            router,
            cookies: Vec::new(),
        }
    }

    /// Sends a GET request.
    pub async fn get(&mut self, path: &str) -> TestResponse {
        self.request(Method::GET, path, None).await
    }

    /// Sends a POST request with an empty body.
    pub async fn post(&mut self, path: &str) -> TestResponse {
        self.request(Method::POST, path, Some(String::new())).await
    }

    /// Sends a POST request with an urlencoded form body.
    pub async fn post_form<T: Serialize + ?Sized>(&mut self, path: &str, form: &T) -> TestResponse {
        let body = serde_urlencoded::to_string(form).expect("encode form");
        self.request(Method::POST, path, Some(body)).await
    }

    /// Sends a DELETE request.
    pub async fn delete(&mut self, path: &str) -> TestResponse {
        self.request(Method::DELETE, path, None).await
    }

    /// Posts the login form.
    pub async fn login(&mut self, username: &str, password: &str) -> TestResponse {
        self.post_form(
            "/auth/login",
            &[
                ("username", username),
                ("password", password),
                ("next", "/notes"),
            ],
        )
        .await
    }

    async fn request(&mut self, method: Method, path: &str, body: Option<String>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if !self.cookies.is_empty() {
            builder = builder.header(header::COOKIE, self.cookies.join("; "));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body)),
            None => builder.body(Body::empty()),
        }
        .expect("build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("infallible router call");

        for value in response.headers().get_all(header::SET_COOKIE) {
            if let Ok(set_cookie) = value.to_str() {
                self.store_cookie(set_cookie);
            }
        }

        TestResponse::read(response).await
    }

    fn store_cookie(&mut self, set_cookie: &str) {
        let pair = set_cookie.split(';').next().unwrap_or_default().trim();
        let Some((name, value)) = pair.split_once('=') else {
            return;
        };

        self.cookies
            .retain(|cookie| cookie.split('=').next() != Some(name));
        // An empty value is how the session layer clears the cookie
        if !value.is_empty() {
            self.cookies.push(pair.to_string());
        }
    }
}

/// A fully read response: status, headers, and body text.
pub struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl TestResponse {
    async fn read(response: axum::response::Response) -> Self {
        let (parts, body) = response.into_parts();
        let bytes = body.collect().await.expect("read body").to_bytes();
        Self {
            status: parts.status,
            headers: parts.headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// The `Location` header, if any.
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
    }

    /// Asserts a 200 response and returns the body for further checks.
    pub fn assert_ok(&self) -> &str {
        assert_eq!(self.status, StatusCode::OK, "body: {}", self.body);
        &self.body
    }

    /// Asserts a 303 redirect to the given target.
    pub fn assert_redirects_to(&self, target: &str) {
        assert_eq!(
            self.status,
            StatusCode::SEE_OTHER,
            "expected redirect, body: {}",
            self.body
        );
        assert_eq!(self.location(), Some(target));
    }

    /// Asserts a 404 response.
    pub fn assert_not_found(&self) {
        assert_eq!(self.status, StatusCode::NOT_FOUND, "body: {}", self.body);
    }
}
