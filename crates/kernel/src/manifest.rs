//! Parser for the menu manifest (`menus.toml`).
//!
//! The manifest declares:
//! - menus: name, initial items, register hook, construct hook
//! - plugins: name, weight, items they contribute, menu alterations

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use ordine_sdk::MenuItem;
use serde::Deserialize;
use tracing::{info, warn};

use crate::hooks::{HookRegistry, RemoveItems};
use crate::menu::{Menu, MenuSet};

/// Parsed manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuManifest {
    #[serde(default)]
    pub menus: Vec<MenuDeclaration>,

    #[serde(default)]
    pub plugins: Vec<PluginDeclaration>,
}

/// A menu and the hooks it listens on.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuDeclaration {
    /// Menu machine name (e.g., "admin", "settings").
    pub name: String,

    /// Hook whose providers append items.
    #[serde(default)]
    pub register_hook: Option<String>,

    /// Hook whose constructors alter per-user output.
    #[serde(default)]
    pub construct_hook: Option<String>,

    /// Items every rendering starts from.
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// A plugin and what it registers.
#[derive(Debug, Clone, Deserialize)]
pub struct PluginDeclaration {
    pub name: String,

    /// Weight for ordering (lower = earlier, default 0).
    #[serde(default)]
    pub weight: i32,

    #[serde(default)]
    pub menu_items: Vec<HookedItem>,

    #[serde(default)]
    pub menu_alters: Vec<MenuAlter>,
}

/// An item contributed to a register hook.
#[derive(Debug, Clone, Deserialize)]
pub struct HookedItem {
    pub hook: String,

    #[serde(flatten)]
    pub item: MenuItem,
}

/// An alteration attached to a construct hook.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuAlter {
    pub hook: String,

    /// Machine names of items to drop.
    #[serde(default)]
    pub remove: Vec<String>,
}

impl MenuManifest {
    /// Parse a manifest file from the given path.
    pub fn parse(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read menu manifest: {}", path.display()))?;

        Self::parse_str(&content, path)
    }

    /// Parse a manifest from a TOML string.
    pub fn parse_str(content: &str, path: &Path) -> Result<Self> {
        let manifest: MenuManifest = toml::from_str(content)
            .with_context(|| format!("failed to parse menu manifest TOML at {}", path.display()))?;

        manifest.validate(path)?;
        Ok(manifest)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        let mut menu_names = HashSet::new();
        for menu in &self.menus {
            if menu.name.is_empty() {
                bail!("menu at {} has empty 'name' field", path.display());
            }
            if !menu_names.insert(menu.name.as_str()) {
                bail!("menu '{}' declared twice in {}", menu.name, path.display());
            }
            for hook in [&menu.register_hook, &menu.construct_hook]
                .into_iter()
                .flatten()
            {
                if hook.is_empty() {
                    bail!("menu '{}' has an empty hook name", menu.name);
                }
            }
        }

        let mut plugin_names = HashSet::new();
        for plugin in &self.plugins {
            if plugin.name.is_empty() {
                bail!("plugin at {} has empty 'name' field", path.display());
            }
            if !plugin_names.insert(plugin.name.as_str()) {
                bail!("plugin '{}' declared twice in {}", plugin.name, path.display());
            }
            let hooks = plugin
                .menu_items
                .iter()
                .map(|i| &i.hook)
                .chain(plugin.menu_alters.iter().map(|a| &a.hook));
            for hook in hooks {
                if hook.is_empty() {
                    bail!("plugin '{}' registers under an empty hook name", plugin.name);
                }
            }
        }

        Ok(())
    }

    /// Register every plugin's handlers, in manifest order.
    pub fn build_registry(&self) -> HookRegistry {
        let listened: HashSet<&str> = self
            .menus
            .iter()
            .flat_map(|m| [m.register_hook.as_deref(), m.construct_hook.as_deref()])
            .flatten()
            .collect();

        let mut registry = HookRegistry::new();

        for plugin in &self.plugins {
            for hooked in &plugin.menu_items {
                if !listened.contains(hooked.hook.as_str()) {
                    warn!(
                        plugin = %plugin.name,
                        hook = %hooked.hook,
                        "no menu listens on hook"
                    );
                }
                registry.register_item_weighted(
                    &hooked.hook,
                    &plugin.name,
                    plugin.weight,
                    hooked.item.clone().with_default_name(),
                );
            }

            for alter in &plugin.menu_alters {
                if !listened.contains(alter.hook.as_str()) {
                    warn!(
                        plugin = %plugin.name,
                        hook = %alter.hook,
                        "no menu listens on hook"
                    );
                }
                registry.register_constructor_weighted(
                    &alter.hook,
                    &plugin.name,
                    plugin.weight,
                    RemoveItems::new(alter.remove.clone()),
                );
            }
        }

        registry
    }

    /// Build all declared menus over a registry built from the plugins.
    pub fn build(&self) -> MenuSet {
        let hooks = Arc::new(self.build_registry());
        let mut set = MenuSet::new();

        for decl in &self.menus {
            let items = decl
                .items
                .iter()
                .cloned()
                .map(MenuItem::with_default_name)
                .collect();
            let mut menu = Menu::new(Arc::clone(&hooks)).with_initial_items(items);
            if let Some(hook) = &decl.register_hook {
                menu = menu.with_register_hook(hook.clone());
            }
            if let Some(hook) = &decl.construct_hook {
                menu = menu.with_construct_hook(hook.clone());
            }
            set.insert(decl.name.clone(), menu);
        }

        info!(
            menus = set.len(),
            plugins = self.plugins.len(),
            hooks = hooks.hook_count(),
            "menus built from manifest"
        );
        set
    }
}
