//! Menu assembly - combines initial items with hook contributions.

use std::sync::Arc;

use ordine_sdk::{MenuItem, UserContext};
use tracing::debug;

use crate::error::MenuError;
use crate::hooks::HookRegistry;

/// A menu made of fixed initial items plus items contributed through hooks.
///
/// The menu owns its initial items and a shared handle to the hook registry.
/// Nothing here mutates either; every call builds a fresh list.
#[derive(Debug, Clone)]
pub struct Menu {
    initial_items: Option<Vec<MenuItem>>,
    register_hook_name: Option<String>,
    construct_hook_name: Option<String>,
    hooks: Arc<HookRegistry>,
}

impl Menu {
    /// Create a menu with no initial items and no hooks.
    pub fn new(hooks: Arc<HookRegistry>) -> Self {
        Self {
            initial_items: None,
            register_hook_name: None,
            construct_hook_name: None,
            hooks,
        }
    }

    /// Set the items every rendering starts from.
    pub fn with_initial_items(mut self, items: Vec<MenuItem>) -> Self {
        self.initial_items = Some(items);
        self
    }

    /// Set the hook whose providers contribute items.
    pub fn with_register_hook(mut self, hook: impl Into<String>) -> Self {
        self.register_hook_name = Some(hook.into());
        self
    }

    /// Set the hook whose constructors alter the per-user list.
    pub fn with_construct_hook(mut self, hook: impl Into<String>) -> Self {
        self.construct_hook_name = Some(hook.into());
        self
    }

    pub fn initial_items(&self) -> &[MenuItem] {
        self.initial_items.as_deref().unwrap_or(&[])
    }

    pub fn register_hook_name(&self) -> Option<&str> {
        self.register_hook_name.as_deref()
    }

    pub fn construct_hook_name(&self) -> Option<&str> {
        self.construct_hook_name.as_deref()
    }

    /// Number of providers registered under this menu's register hook.
    ///
    /// Counts handlers in the registry this menu reads, without invoking them.
    pub fn contributed_count(&self) -> usize {
        self.register_hook_name
            .as_deref()
            .map_or(0, |hook| self.hooks.get_hooks(hook).len())
    }

    /// Initial items followed by one item per registered provider.
    ///
    /// Providers are invoked in registry order. The first provider error
    /// aborts assembly and is returned to the caller.
    pub fn registered_menu_items(&self) -> Result<Vec<MenuItem>, MenuError> {
        let mut items = self.initial_items().to_vec();

        if let Some(hook) = &self.register_hook_name {
            let handlers = self.hooks.get_hooks(hook);
            items.reserve(handlers.len());

            for handler in handlers {
                let item = handler
                    .handler
                    .provide()
                    .map_err(|source| MenuError::Provider {
                        hook: hook.clone(),
                        plugin: handler.plugin.clone(),
                        source,
                    })?;
                items.push(item);
            }

            debug!(
                hook = %hook,
                contributed = handlers.len(),
                total = items.len(),
                "collected hook menu items"
            );
        }

        Ok(items)
    }

    /// Items the user may see, sorted by order, after construct hooks ran.
    pub fn menu_items_for_user(&self, user: &UserContext) -> Result<Vec<MenuItem>, MenuError> {
        let mut items = self.registered_menu_items()?;
        items.retain(|item| item.is_shown(user));
        items.sort_by_key(|item| item.order);

        if let Some(hook) = &self.construct_hook_name {
            for constructor in self.hooks.get_constructors(hook) {
                constructor.handler.construct(&mut items, user);
            }
        }

        Ok(items)
    }

    /// The item whose URL is the longest prefix of `path`.
    pub fn active_item<'a>(items: &'a [MenuItem], path: &str) -> Option<&'a MenuItem> {
        items
            .iter()
            .filter(|item| item.is_active(path))
            .max_by_key(|item| item.url.len())
    }
}
