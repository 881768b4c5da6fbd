//! Error types for the reverse geocode client

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReverseError {
    #[error("reverse geocode: could not build http client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("reverse geocode: could not create request: {0}")]
    RequestConstruction(String),

    #[error("reverse geocode: invalid api key source: {0}")]
    InvalidKeySource(String),

    #[error("reverse geocode: could not make a request due to this error: {0}")]
    Transport(#[from] TransportError),

    #[error("reverse geocode: non 200 status: {0}")]
    UnexpectedStatus(u16),

    #[error("reverse geocode: could not deserialize response due to: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("reverse geocode: status of request is not OK: {0}")]
    ApplicationStatus(String),
}

/// Failure of the round trip itself
#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("request canceled")]
    Canceled,
}

impl TransportError {
    pub fn is_canceled(&self) -> bool {
        matches!(self, TransportError::Canceled)
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            TransportError::Http(err) => err.is_timeout(),
            TransportError::Canceled => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReverseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_status_display() {
        let err = ReverseError::UnexpectedStatus(404);
        assert_eq!(format!("{}", err), "reverse geocode: non 200 status: 404");
    }

    #[test]
    fn test_canceled_display() {
        let err = ReverseError::from(TransportError::Canceled);
        assert_eq!(
            format!("{}", err),
            "reverse geocode: could not make a request due to this error: request canceled"
        );
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ReverseError::from(json_err);
        assert!(matches!(err, ReverseError::Decode(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
