//! Pieces shared by every crate in the workspace: tracing setup and the
//! small response types that are not tied to the menu domain.

pub mod types;
pub mod utils;
