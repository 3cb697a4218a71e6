//! Admin menu system.
//!
//! A menu starts from a fixed list of items and collects more from plugins
//! through a register hook. Per-user rendering then:
//! - drops items the user lacks permission for
//! - sorts by item order
//! - runs the menu's construct hook

mod assembly;
mod set;

pub use assembly::Menu;
pub use set::MenuSet;
