//! Named collection of menus.

use std::collections::BTreeMap;

use crate::error::MenuError;

use super::Menu;

/// All menus known to the kernel, keyed by name.
///
/// Each menu carries its own registry handle; menus built from one manifest
/// share the same registry.
#[derive(Debug, Clone, Default)]
pub struct MenuSet {
    menus: BTreeMap<String, Menu>,
}

impl MenuSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a menu.
    pub fn insert(&mut self, name: impl Into<String>, menu: Menu) {
        self.menus.insert(name.into(), menu);
    }

    pub fn get(&self, name: &str) -> Result<&Menu, MenuError> {
        self.menus
            .get(name)
            .ok_or_else(|| MenuError::UnknownMenu(name.to_string()))
    }

    /// Menus in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Menu)> {
        self.menus.iter().map(|(name, menu)| (name.as_str(), menu))
    }

    /// Menu names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.menus.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.menus.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }
}
