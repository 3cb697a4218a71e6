//! Capabilities a plugin implements to take part in menu building.
//!
//! A [`MenuItemProvider`] contributes one item to every menu that listens on
//! the hook it is registered under. A [`MenuConstructor`] receives the
//! finished, per-user list and may rearrange it.

use std::fmt;

use thiserror::Error;

use crate::types::{MenuItem, UserContext};

/// Failure of a provider to produce its item.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("menu item unavailable: {0}")]
    Unavailable(String),

    #[error("invalid menu item payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

/// Produces a menu item on demand.
pub trait MenuItemProvider: Send + Sync {
    fn provide(&self) -> Result<MenuItem, ProviderError>;
}

/// A fixed item is its own provider.
impl MenuItemProvider for MenuItem {
    fn provide(&self) -> Result<MenuItem, ProviderError> {
        Ok(self.clone())
    }
}

/// Alters the per-user item list after filtering and sorting.
pub trait MenuConstructor: Send + Sync {
    fn construct(&self, items: &mut Vec<MenuItem>, user: &UserContext);
}

/// Provider backed by an infallible closure. See [`provider_fn`].
#[derive(Clone)]
pub struct FnProvider<F> {
    f: F,
}

/// Provider backed by a fallible closure. See [`try_provider_fn`].
#[derive(Clone)]
pub struct TryFnProvider<F> {
    f: F,
}

/// Constructor backed by a closure. See [`constructor_fn`].
#[derive(Clone)]
pub struct FnConstructor<F> {
    f: F,
}

/// Wrap a `Fn() -> MenuItem` closure as a provider.
pub fn provider_fn<F>(f: F) -> FnProvider<F>
where
    F: Fn() -> MenuItem + Send + Sync,
{
    FnProvider { f }
}

/// Wrap a `Fn() -> Result<MenuItem, ProviderError>` closure as a provider.
pub fn try_provider_fn<F>(f: F) -> TryFnProvider<F>
where
    F: Fn() -> Result<MenuItem, ProviderError> + Send + Sync,
{
    TryFnProvider { f }
}

/// Wrap a closure as a menu constructor.
pub fn constructor_fn<F>(f: F) -> FnConstructor<F>
where
    F: Fn(&mut Vec<MenuItem>, &UserContext) + Send + Sync,
{
    FnConstructor { f }
}

impl<F> MenuItemProvider for FnProvider<F>
where
    F: Fn() -> MenuItem + Send + Sync,
{
    fn provide(&self) -> Result<MenuItem, ProviderError> {
        Ok((self.f)())
    }
}

impl<F> MenuItemProvider for TryFnProvider<F>
where
    F: Fn() -> Result<MenuItem, ProviderError> + Send + Sync,
{
    fn provide(&self) -> Result<MenuItem, ProviderError> {
        (self.f)()
    }
}

impl<F> MenuConstructor for FnConstructor<F>
where
    F: Fn(&mut Vec<MenuItem>, &UserContext) + Send + Sync,
{
    fn construct(&self, items: &mut Vec<MenuItem>, user: &UserContext) {
        (self.f)(items, user);
    }
}

impl<F> fmt::Debug for FnProvider<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnProvider").finish_non_exhaustive()
    }
}

impl<F> fmt::Debug for TryFnProvider<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryFnProvider").finish_non_exhaustive()
    }
}

impl<F> fmt::Debug for FnConstructor<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnConstructor").finish_non_exhaustive()
    }
}
