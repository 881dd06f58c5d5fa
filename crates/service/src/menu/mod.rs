pub mod repository;
pub mod service;

pub use repository::{InMemoryMenuRepository, MenuRepository};
pub use service::MenuService;
