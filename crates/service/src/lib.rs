//! Service layer for the menu catalog.
//! - `validation` is a pure function over the request body, usable without HTTP.
//! - `menu::repository` owns the collection and id assignment.
//! - `menu::service` ties both together behind the five catalog operations.

pub mod errors;
pub mod menu;
pub mod validation;
