//! Failures that stop a transport from serving.

use thiserror::Error;

pub type TransportResult<T> = Result<T, TransportError>;

#[derive(Debug, Error)]
pub enum TransportError {
    /// The listen address is taken or not permitted.
    #[error("cannot listen on {address}: {source}")]
    BindError {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The client never completed the MCP handshake.
    #[error("MCP handshake failed: {0}")]
    InitError(String),

    /// An established session ended abnormally.
    #[error("MCP session aborted: {0}")]
    ServiceError(String),

    #[cfg(feature = "http")]
    #[error("HTTP server stopped: {0}")]
    HttpError(String),
}

impl TransportError {
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::BindError {
            address: address.into(),
            source,
        }
    }

    pub fn init(msg: impl Into<String>) -> Self {
        Self::InitError(msg.into())
    }

    pub fn service(msg: impl Into<String>) -> Self {
        Self::ServiceError(msg.into())
    }

    #[cfg(feature = "http")]
    pub fn http(msg: impl Into<String>) -> Self {
        Self::HttpError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_keeps_source() {
        let err = TransportError::bind(
            "127.0.0.1:3000",
            std::io::Error::from(std::io::ErrorKind::AddrInUse),
        );
        assert!(err.to_string().starts_with("cannot listen on 127.0.0.1:3000"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
