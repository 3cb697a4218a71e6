#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test utilities for integration tests.
//!
//! Builds the REAL router over a menu set loaded from the sample manifest,
//! so requests go through the same handlers the binary serves.

#![allow(dead_code)]

use std::path::Path;

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use ordine_kernel::AppState;
use ordine_kernel::manifest::MenuManifest;
use ordine_kernel::menu::MenuSet;
use ordine_kernel::routes;
use ordine_test_utils::SAMPLE_MANIFEST;

/// Menu set built from [`SAMPLE_MANIFEST`].
pub fn sample_menus() -> MenuSet {
    MenuManifest::parse_str(SAMPLE_MANIFEST, Path::new("sample.toml"))
        .expect("sample manifest must parse")
        .build()
}

/// Test application wrapping the full router.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new(menus: MenuSet) -> Self {
        Self {
            router: routes::app(AppState::from_menus(menus)),
        }
    }

    pub fn sample() -> Self {
        Self::new(sample_menus())
    }

    /// Send a request through the router.
    pub async fn request(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request")
    }

    /// GET a path.
    pub async fn get(&self, uri: &str) -> Response {
        self.request(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }
}

pub async fn response_json(response: Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap_or_else(|_| {
        let text = String::from_utf8_lossy(&body);
        panic!("Failed to parse JSON: {text}");
    })
}

pub async fn response_text(response: Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&body).to_string()
}
