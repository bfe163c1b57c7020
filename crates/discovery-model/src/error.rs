use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid column id: {0:?}")]
    InvalidColumnId(String),
    #[error("invalid company id: {0:?}")]
    InvalidCompanyId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
