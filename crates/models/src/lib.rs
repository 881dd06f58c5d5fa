//! Domain types for the menu catalog: the stored item, the validated
//! candidate a client submits, field violations, and the startup seed set.

pub mod errors;
pub mod menu_item;
pub mod seed;
pub mod violation;

pub use menu_item::{Category, MenuItem, MenuItemInput};
pub use violation::{Rule, Violation};
