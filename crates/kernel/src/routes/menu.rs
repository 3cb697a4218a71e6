//! Menu JSON endpoints.
//!
//! - `GET /api/menu` lists menu names
//! - `GET /api/menu/{name}` returns initial plus hook-contributed items
//! - `GET /api/menu/{name}/user` returns the filtered, sorted, constructed
//!   items for the permissions given in the query string

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use ordine_sdk::{MenuItem, UserContext};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::menu::Menu;
use crate::state::AppState;

/// Query for per-user rendering.
#[derive(Debug, Default, Deserialize)]
pub struct UserMenuQuery {
    /// Comma-separated permission names.
    #[serde(default)]
    pub permissions: Option<String>,
    /// Current request path, used to mark the active item.
    #[serde(default)]
    pub path: Option<String>,
}

impl UserMenuQuery {
    /// Anonymous unless at least one non-blank permission is given.
    fn user(&self) -> UserContext {
        let permissions: Vec<String> = self
            .permissions
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if permissions.is_empty() {
            UserContext::anonymous()
        } else {
            UserContext::authenticated(permissions)
        }
    }
}

/// Per-user menu response.
#[derive(Debug, Serialize)]
pub struct UserMenuResponse {
    pub items: Vec<MenuItem>,
    /// Machine name of the active item, if any.
    pub active: Option<String>,
}

async fn list_menus(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.menus().names().map(str::to_string).collect())
}

async fn registered_items(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<MenuItem>>> {
    let items = state.menus().get(&name)?.registered_menu_items()?;
    Ok(Json(items))
}

async fn user_items(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<UserMenuQuery>,
) -> AppResult<Json<UserMenuResponse>> {
    let items = state
        .menus()
        .get(&name)?
        .menu_items_for_user(&query.user())?;

    let active = query
        .path
        .as_deref()
        .and_then(|path| Menu::active_item(&items, path))
        .map(|item| item.name.clone());

    Ok(Json(UserMenuResponse { items, active }))
}

/// Create the menu router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/menu", get(list_menus))
        .route("/api/menu/{name}", get(registered_items))
        .route("/api/menu/{name}/user", get(user_items))
}
