use crate::error::missing_value::MissingValueError;
use crate::error::unsupported_database::UnsupportedDatabaseError;
use crate::error::upstream::UpstreamError;
use std::error::Error;
use std::fmt::{self, Display};

pub type CDCRResult<T> = Result<T, CDCRError>;

#[derive(Debug)]
pub enum CDCRError {
    ValidationError(MissingValueError),
    UnsupportedDatabaseError(UnsupportedDatabaseError),
    ConflictError(String),
    NotFoundError(String),
    UpstreamError(UpstreamError),
    HttpClientError(reqwest::Error),
    InvalidUrlError(String),
    SerdeJsonError(serde_json::Error),
}

impl Display for CDCRError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CDCRError::ValidationError(err) => write!(f, "{}", err),
            CDCRError::UnsupportedDatabaseError(err) => write!(f, "{}", err),
            CDCRError::ConflictError(name) => write!(f, "Connector '{}' already exists", name),
            CDCRError::NotFoundError(name) => write!(f, "Connector '{}' not found", name),
            CDCRError::UpstreamError(err) => write!(f, "{}", err),
            CDCRError::HttpClientError(err) => write!(f, "HTTP client error: {}", err),
            CDCRError::InvalidUrlError(url) => write!(f, "Invalid Kafka Connect URL '{}'", url),
            CDCRError::SerdeJsonError(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl Error for CDCRError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CDCRError::ValidationError(err) => Some(err),
            CDCRError::UnsupportedDatabaseError(err) => Some(err),
            CDCRError::UpstreamError(err) => Some(err),
            CDCRError::HttpClientError(err) => Some(err),
            CDCRError::SerdeJsonError(err) => Some(err),
            CDCRError::ConflictError(_)
            | CDCRError::NotFoundError(_)
            | CDCRError::InvalidUrlError(_) => None,
        }
    }
}

impl From<MissingValueError> for CDCRError {
    fn from(error: MissingValueError) -> Self {
        CDCRError::ValidationError(error)
    }
}

impl From<UnsupportedDatabaseError> for CDCRError {
    fn from(error: UnsupportedDatabaseError) -> Self {
        CDCRError::UnsupportedDatabaseError(error)
    }
}

impl From<UpstreamError> for CDCRError {
    fn from(error: UpstreamError) -> Self {
        CDCRError::UpstreamError(error)
    }
}

impl From<reqwest::Error> for CDCRError {
    fn from(error: reqwest::Error) -> Self {
        CDCRError::HttpClientError(error)
    }
}

impl From<serde_json::Error> for CDCRError {
    fn from(error: serde_json::Error) -> Self {
        CDCRError::SerdeJsonError(error)
    }
}
