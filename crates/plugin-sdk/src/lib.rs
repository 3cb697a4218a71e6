//! Ordine Plugin SDK
//!
//! Types and traits plugins use to contribute entries to admin menus.
//! Plugins implement [`MenuItemProvider`] or [`MenuConstructor`] and the
//! kernel registers them under named hooks.

pub mod provider;
pub mod types;

pub use provider::{
    FnConstructor, FnProvider, MenuConstructor, MenuItemProvider, ProviderError, TryFnProvider,
    constructor_fn, provider_fn, try_provider_fn,
};
pub use types::{MenuItem, UserContext};
