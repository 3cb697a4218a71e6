//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::manifest::MenuManifest;
use crate::menu::MenuSet;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// All menus, built once at startup.
    menus: MenuSet,
}

impl AppState {
    /// Load the manifest named by the config and build every menu.
    pub fn new(config: &Config) -> Result<Self> {
        let manifest = MenuManifest::parse(&config.menu_config)
            .context("failed to load menu manifest")?;
        info!(path = %config.menu_config.display(), "menu manifest loaded");

        Ok(Self::from_menus(manifest.build()))
    }

    /// Wrap an already built menu set.
    pub fn from_menus(menus: MenuSet) -> Self {
        Self {
            inner: Arc::new(AppStateInner { menus }),
        }
    }

    pub fn menus(&self) -> &MenuSet {
        &self.inner.menus
    }
}
