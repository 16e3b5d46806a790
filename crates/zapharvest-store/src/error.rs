use std::path::PathBuf;
use thiserror::Error;
use zapharvest_core::{ContactId, CoreError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("sqlite error: {0}")]
    Sql(#[from] rusqlite::Error),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid data path: {0}")]
    InvalidDataPath(PathBuf),
    #[error("contact not found: {0}")]
    NotFound(ContactId),
    #[error("number already stored: {0}")]
    DuplicateNumber(String),
    #[error("invalid stored row {id}: {reason}")]
    InvalidRow { id: i64, reason: String },
    #[error("migration error: {0}")]
    Migration(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Io,
    Sql,
    Core,
    MissingHomeDir,
    InvalidDataPath,
    NotFound,
    DuplicateNumber,
    InvalidRow,
    Migration,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Io(_) => StoreErrorKind::Io,
            StoreError::Sql(_) => StoreErrorKind::Sql,
            StoreError::Core(_) => StoreErrorKind::Core,
            StoreError::MissingHomeDir => StoreErrorKind::MissingHomeDir,
            StoreError::InvalidDataPath(_) => StoreErrorKind::InvalidDataPath,
            StoreError::NotFound(_) => StoreErrorKind::NotFound,
            StoreError::DuplicateNumber(_) => StoreErrorKind::DuplicateNumber,
            StoreError::InvalidRow { .. } => StoreErrorKind::InvalidRow,
            StoreError::Migration(_) => StoreErrorKind::Migration,
        }
    }
}
