//! Hook registry - indexes which plugins contribute to which hooks.
//!
//! The registry maps hook names to an ordered list of handlers. Handlers are
//! kept sorted by weight (lower = called first); handlers with equal weight
//! stay in registration order.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use ordine_sdk::{MenuConstructor, MenuItem, MenuItemProvider, provider_fn};
use tracing::debug;

/// A registered hook handler with plugin reference and priority.
pub struct HookHandler<T: ?Sized> {
    /// Plugin that registered this handler.
    pub plugin: String,
    /// Weight for ordering (lower = higher priority).
    pub weight: i32,
    /// The registered capability.
    pub handler: Arc<T>,
}

impl<T: ?Sized> Clone for HookHandler<T> {
    fn clone(&self) -> Self {
        Self {
            plugin: self.plugin.clone(),
            weight: self.weight,
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<T: ?Sized> fmt::Debug for HookHandler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookHandler")
            .field("plugin", &self.plugin)
            .field("weight", &self.weight)
            .finish_non_exhaustive()
    }
}

/// Handler that contributes one menu item.
pub type ItemHook = HookHandler<dyn MenuItemProvider>;

/// Handler that alters a finished menu.
pub type ConstructHook = HookHandler<dyn MenuConstructor>;

/// Registry mapping hook names to ordered handlers.
///
/// Built once at startup and then shared read-only behind an `Arc`.
#[derive(Debug, Default)]
pub struct HookRegistry {
    items: HashMap<String, Vec<ItemHook>>,
    constructors: HashMap<String, Vec<ConstructHook>>,
}

impl HookRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a menu item provider with the default weight.
    pub fn register_item(
        &mut self,
        hook: &str,
        plugin: &str,
        provider: impl MenuItemProvider + 'static,
    ) {
        self.register_item_weighted(hook, plugin, 0, provider);
    }

    /// Register a menu item provider with an explicit weight.
    pub fn register_item_weighted(
        &mut self,
        hook: &str,
        plugin: &str,
        weight: i32,
        provider: impl MenuItemProvider + 'static,
    ) {
        let handler: ItemHook = HookHandler {
            plugin: plugin.to_string(),
            weight,
            handler: Arc::new(provider),
        };
        let list = self.items.entry(hook.to_string()).or_default();
        insert_ordered(list, handler);
        debug!(hook = %hook, plugin = %plugin, weight, "registered menu item provider");
    }

    /// Register a closure that builds a menu item.
    pub fn register_fn<F>(&mut self, hook: &str, plugin: &str, f: F)
    where
        F: Fn() -> MenuItem + Send + Sync + 'static,
    {
        self.register_item(hook, plugin, provider_fn(f));
    }

    /// Register a menu constructor with the default weight.
    pub fn register_constructor(
        &mut self,
        hook: &str,
        plugin: &str,
        constructor: impl MenuConstructor + 'static,
    ) {
        self.register_constructor_weighted(hook, plugin, 0, constructor);
    }

    /// Register a menu constructor with an explicit weight.
    pub fn register_constructor_weighted(
        &mut self,
        hook: &str,
        plugin: &str,
        weight: i32,
        constructor: impl MenuConstructor + 'static,
    ) {
        let handler: ConstructHook = HookHandler {
            plugin: plugin.to_string(),
            weight,
            handler: Arc::new(constructor),
        };
        let list = self.constructors.entry(hook.to_string()).or_default();
        insert_ordered(list, handler);
        debug!(hook = %hook, plugin = %plugin, weight, "registered menu constructor");
    }

    /// Get item providers for a hook, in call order.
    ///
    /// Returns an empty slice if nothing is registered under the hook.
    pub fn get_hooks(&self, hook: &str) -> &[ItemHook] {
        self.items.get(hook).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Get constructors for a hook, in call order.
    pub fn get_constructors(&self, hook: &str) -> &[ConstructHook] {
        self.constructors
            .get(hook)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Check if anything is registered under a hook.
    pub fn has_hook(&self, hook: &str) -> bool {
        self.handler_count(hook) > 0
    }

    /// Number of handlers (providers and constructors) under a hook.
    pub fn handler_count(&self, hook: &str) -> usize {
        self.get_hooks(hook).len() + self.get_constructors(hook).len()
    }

    /// All hook names with at least one handler.
    pub fn hook_names(&self) -> impl Iterator<Item = &str> {
        let constructor_only = self
            .constructors
            .keys()
            .filter(|name| !self.items.contains_key(*name));
        self.items
            .keys()
            .chain(constructor_only)
            .map(|s| s.as_str())
    }

    /// Number of distinct hooks.
    pub fn hook_count(&self) -> usize {
        self.hook_names().count()
    }
}

/// Insert after every handler with weight <= the new one.
fn insert_ordered<T: ?Sized>(list: &mut Vec<HookHandler<T>>, handler: HookHandler<T>) {
    let pos = list.partition_point(|h| h.weight <= handler.weight);
    list.insert(pos, handler);
}
