//! Hook system for plugin menu contributions.
//!
//! Hooks are named extension points. Plugins register item providers and
//! menu constructors under a hook name; menus invoke every handler under the
//! names they listen on, in weight order.

mod alter;
mod registry;

pub use alter::RemoveItems;
pub use registry::{ConstructHook, HookHandler, HookRegistry, ItemHook};
