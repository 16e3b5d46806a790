use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid page source: {0}")]
    InvalidSource(String),
    #[error("page source unavailable: {0}")]
    Unavailable(String),
    #[cfg(feature = "http-fetch")]
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[cfg(feature = "http-fetch")]
    #[error("url error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, FetchError>;
