use crate::catalog::operation::CatalogOperation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    #[error("{0}")]
    IO(#[from] IOError),
}

/// Kind of record a lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Team,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Player => write!(f, "player"),
            EntityKind::Team => write!(f, "team"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{operation}: {entity} not found ({id})")]
    NotFound {
        operation: CatalogOperation,
        entity: EntityKind,
        id: String,
    },
    #[error("{operation}: {message}")]
    Failed {
        operation: CatalogOperation,
        message: String,
    },
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}

impl AppError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::Catalog(e) if e.is_not_found())
    }
}

#[derive(Debug, Error)]
pub enum IOError {
    #[error("IO error: {0}")]
    Error(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("{0}")]
    Msg(String),
}
