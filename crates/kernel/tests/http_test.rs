#![allow(clippy::unwrap_used, clippy::expect_used)]
//! HTTP tests for the menu endpoints.
//!
//! Requests run through the real router via `tower::ServiceExt::oneshot`;
//! no server is started.

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

use ordine_kernel::hooks::HookRegistry;
use ordine_kernel::menu::{Menu, MenuSet};
use ordine_test_utils::FailingProvider;

mod common;
use common::{TestApp, response_json, response_text};

#[tokio::test]
async fn health_reports_menu_count() {
    let app = TestApp::sample();
    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response_json(response).await,
        json!({"status": "healthy", "menus": 2})
    );
}

#[tokio::test]
async fn list_menus() {
    let app = TestApp::sample();
    let response = app.get("/api/menu").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, json!(["admin", "settings"]));
}

#[tokio::test]
async fn registered_items_in_assembly_order() {
    let app = TestApp::sample();
    let response = app.get("/api/menu/admin").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let labels: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["item1", "item2", "hook_item1", "hook_item2"]);
    assert_eq!(body[2]["url"], "/hook1");
    assert_eq!(body[2]["name"], "hook-item1");
}

#[tokio::test]
async fn user_items_filtered_with_active() {
    let app = TestApp::sample();
    let response = app
        .get("/api/menu/admin/user?permissions=view%20hook%20two&path=/hook2/edit")
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let urls: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["url"].as_str().unwrap())
        .collect();
    assert_eq!(urls, vec!["/item1", "/hook1", "/hook2"]);
    assert_eq!(body["active"], "hook-item2");
}

#[tokio::test]
async fn anonymous_user_items() {
    let app = TestApp::sample();
    let body = response_json(app.get("/api/menu/admin/user").await).await;

    assert_eq!(body["items"].as_array().unwrap().len(), 2);
    assert!(body["active"].is_null());
}

#[tokio::test]
async fn empty_permissions_render_as_anonymous() {
    let app = TestApp::sample();
    let response = app.get("/api/menu/admin/user?permissions=").await;
    let body = response_json(response).await;
    let anonymous = response_json(app.get("/api/menu/admin/user").await).await;

    assert_eq!(body, anonymous);
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unknown_menu_is_404() {
    let app = TestApp::sample();
    let response = app.get("/api/menu/footer").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response_text(response).await, "unknown menu 'footer'");
}

#[tokio::test]
async fn provider_failure_is_500_without_details() {
    let mut registry = HookRegistry::new();
    registry.register_item(
        "register_admin_menu_item",
        "broken",
        FailingProvider {
            reason: "secret backend detail".into(),
        },
    );
    let mut menus = MenuSet::new();
    menus.insert(
        "admin",
        Menu::new(Arc::new(registry))
            .with_register_hook("register_admin_menu_item"),
    );

    let app = TestApp::new(menus);
    let response = app.get("/api/menu/admin").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let text = response_text(response).await;
    assert_eq!(text, "internal server error");
}
