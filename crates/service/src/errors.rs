use models::Violation;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ServiceError {
    #[error("validation failed with {} violation(s)", .0.len())]
    Validation(Vec<Violation>),
    #[error("menu item {0} not found")]
    NotFound(u64),
}

impl ServiceError {
    pub fn not_found(id: u64) -> Self { Self::NotFound(id) }

    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Validation(v) => v,
            Self::NotFound(_) => &[],
        }
    }
}
