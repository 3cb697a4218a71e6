//! Ordine test utilities.
//!
//! Fixtures shared by integration tests: menu items, providers that count
//! their calls, and a sample manifest.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ordine_sdk::{MenuItem, MenuItemProvider, ProviderError, UserContext};

/// Build plain items from `(label, url)` pairs.
pub fn menu_items(pairs: &[(&str, &str)]) -> Vec<MenuItem> {
    pairs
        .iter()
        .map(|(label, url)| MenuItem::new(*label, *url))
        .collect()
}

/// Compare items by label and URL, with a readable failure message.
pub fn assert_items(actual: &[MenuItem], expected: &[(&str, &str)]) {
    let actual: Vec<(&str, &str)> = actual
        .iter()
        .map(|i| (i.label.as_str(), i.url.as_str()))
        .collect();
    assert_eq!(actual, expected);
}

/// User holding the given permissions.
pub fn user_with(permissions: &[&str]) -> UserContext {
    UserContext::authenticated(permissions.iter().map(|p| p.to_string()).collect())
}

/// Provider that returns a fixed item and counts how often it ran.
#[derive(Debug, Clone)]
pub struct CountingProvider {
    item: MenuItem,
    calls: Arc<AtomicUsize>,
}

impl CountingProvider {
    pub fn new(label: &str, url: &str) -> Self {
        Self {
            item: MenuItem::new(label, url),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared call counter; clones of the provider share it.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl MenuItemProvider for CountingProvider {
    fn provide(&self) -> Result<MenuItem, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.item.clone())
    }
}

/// Provider that always fails.
#[derive(Debug, Clone)]
pub struct FailingProvider {
    pub reason: String,
}

impl MenuItemProvider for FailingProvider {
    fn provide(&self) -> Result<MenuItem, ProviderError> {
        Err(ProviderError::Unavailable(self.reason.clone()))
    }
}

/// A manifest with one admin menu, a settings menu, and three plugins.
pub const SAMPLE_MANIFEST: &str = r#"
[[menus]]
name = "admin"
register_hook = "register_admin_menu_item"
construct_hook = "construct_main_menu"

[[menus.items]]
label = "item1"
url = "/item1"

[[menus.items]]
label = "item2"
url = "/item2"

[[menus]]
name = "settings"
register_hook = "register_settings_menu_item"

[[plugins]]
name = "hooks_one"

[[plugins.menu_items]]
hook = "register_admin_menu_item"
label = "hook_item1"
url = "/hook1"

[[plugins]]
name = "hooks_two"

[[plugins.menu_items]]
hook = "register_admin_menu_item"
label = "hook_item2"
url = "/hook2"
permission = "view hook two"

[[plugins]]
name = "trimmer"

[[plugins.menu_alters]]
hook = "construct_main_menu"
remove = ["item2"]
"#;
