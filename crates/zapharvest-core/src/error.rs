use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid whatsapp number: {0}")]
    InvalidNumber(String),
    #[error("domain is required")]
    EmptyDomain,
    #[error("invalid timestamp")]
    InvalidTimestamp,
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
