//! HTTP route handlers.

pub mod health;
pub mod menu;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(menu::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
