//! CLI command implementations.
//!
//! These commands build menus from the manifest without starting the
//! HTTP server.

use anyhow::{Context, Result};
use ordine_sdk::UserContext;
use serde_json::json;

use crate::menu::{Menu, MenuSet};

/// Options for `ordine show`.
#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    /// Skip permission filtering, sorting, and construct hooks.
    pub registered: bool,
    /// Permissions of the user to render for.
    pub permissions: Vec<String>,
    /// Request path used to pick the active item.
    pub path: Option<String>,
}

/// Render a menu as pretty JSON.
pub fn render_menu(menus: &MenuSet, name: &str, opts: &ShowOptions) -> Result<String> {
    let menu = menus.get(name)?;

    let value = if opts.registered {
        json!({ "items": menu.registered_menu_items()? })
    } else {
        let user = if opts.permissions.is_empty() {
            UserContext::anonymous()
        } else {
            UserContext::authenticated(opts.permissions.clone())
        };
        let items = menu.menu_items_for_user(&user)?;
        let active = opts
            .path
            .as_deref()
            .and_then(|path| Menu::active_item(&items, path))
            .map(|item| item.name.clone());
        json!({ "items": items, "active": active })
    };

    serde_json::to_string_pretty(&value)
        .context("failed to serialize menu")
}

/// Print a menu to stdout.
pub fn cmd_show(menus: &MenuSet, name: &str, opts: &ShowOptions) -> Result<()> {
    println!("{}", render_menu(menus, name, opts)?);
    Ok(())
}

/// Render the menu table: name, hooks, and item count before filtering.
pub fn render_list(menus: &MenuSet) -> String {
    if menus.is_empty() {
        return "No menus declared.".to_string();
    }

    let mut lines = vec![
        format!(
            "{:<16} {:<32} {:<32} {:>5}",
            "MENU", "REGISTER HOOK", "CONSTRUCT HOOK", "ITEMS"
        ),
        "-".repeat(88),
    ];

    for (name, menu) in menus.iter() {
        let count = menu.initial_items().len() + menu.contributed_count();
        let register = menu.register_hook_name().unwrap_or("-");
        let construct = menu.construct_hook_name().unwrap_or("-");
        lines.push(format!("{name:<16} {register:<32} {construct:<32} {count:>5}"));
    }

    lines.join("\n")
}

/// Print every menu name with its hooks.
pub fn cmd_list(menus: &MenuSet) -> Result<()> {
    println!("{}", render_list(menus));
    Ok(())
}
