//! Shared helpers for integration tests.
//!
//! Every test gets its own in-memory SQLite database. The pool is capped at
//! one connection so the whole test sees the same database.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use banco_proposta::api::{create_router, AppState};
use banco_proposta::infra::Database;

pub const MEMORY_DB: &str = "sqlite::memory:";

/// Fresh migrated in-memory database
pub async fn memory_db() -> Database {
    Database::connect(MEMORY_DB, 1)
        .await
        .expect("failed to open in-memory database")
}

/// Router plus the state behind it, for checking storage directly
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let state = AppState::from_database(Arc::new(memory_db().await));
        Self {
            router: create_router(state.clone()),
            state,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("request failed");

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read body");

        (status, String::from_utf8(body.to_vec()).expect("body is not utf-8"))
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        self.send(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
    }

    pub async fn get_xml(&self, uri: &str) -> (StatusCode, String) {
        self.send(
            Request::builder()
                .uri(uri)
                .header(header::ACCEPT, "application/xml")
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, String) {
        self.send(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
    }

    pub async fn post_json(&self, uri: &str, body: &str) -> (StatusCode, String) {
        self.write("POST", uri, "application/json", body).await
    }

    pub async fn put_json(&self, uri: &str, body: &str) -> (StatusCode, String) {
        self.write("PUT", uri, "application/json", body).await
    }

    pub async fn post_xml(&self, uri: &str, body: &str) -> (StatusCode, String) {
        self.write("POST", uri, "application/xml", body).await
    }

    async fn write(
        &self,
        method: &str,
        uri: &str,
        content_type: &str,
        body: &str,
    ) -> (StatusCode, String) {
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, content_type)
                .body(Body::from(body.to_string()))
                .expect("failed to build request"),
        )
        .await
    }
}
