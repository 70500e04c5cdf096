use std::error::Error;
use std::fmt::{self, Display};

/// A failed exchange with the connector manager.
///
/// `status` is `None` when no response was received at all (connect error,
/// timeout) or when the response could not be decoded.
#[derive(Debug, PartialEq)]
pub struct UpstreamError {
    pub operation: &'static str,
    pub connector: Option<String>,
    pub status: Option<u16>,
    pub message: String,
}

impl UpstreamError {
    pub fn new<M>(
        operation: &'static str,
        connector: Option<&str>,
        status: Option<u16>,
        message: M,
    ) -> Self
    where
        M: Into<String>,
    {
        UpstreamError {
            operation,
            connector: connector.map(|name| name.to_string()),
            status,
            message: message.into(),
        }
    }
}

impl Error for UpstreamError {}

impl Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Kafka Connect {} failed", self.operation)?;
        if let Some(connector) = &self.connector {
            write!(f, " for connector '{}'", connector)?;
        }
        if let Some(status) = self.status {
            write!(f, " (status {})", status)?;
        }
        write!(f, ": {}", self.message)
    }
}
