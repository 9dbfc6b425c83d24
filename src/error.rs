use thiserror::Error;

use crate::validation::ValidationError;
use crate::wire::DecodeError;

/// Top-level error type.
///
/// Decode errors (malformed bytes) and validation errors (well-formed but
/// semantically invalid keys) stay distinguishable, so callers can tell
/// corrupt data apart from a structurally valid but unusable key.
#[derive(Debug, Error)]
pub enum Error {
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("unsupported key type {0}")]
    UnsupportedKeyType(String),

    #[error("JWK error: {0}")]
    Jwk(String),

    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::from(DecodeError::Truncated);
        assert_eq!(err.to_string(), "decode error: input truncated");

        let err = Error::from(ValidationError::CustomKidNotAllowed);
        assert_eq!(
            err.to_string(),
            "validation error: custom kid is only allowed for RAW-wrapped keys"
        );

        let err = Error::UnsupportedKeyType("type.googleapis.com/x".to_string());
        assert_eq!(err.to_string(), "unsupported key type type.googleapis.com/x");
    }

    #[test]
    fn test_error_kinds_distinguishable() {
        assert!(matches!(
            Error::from(DecodeError::Truncated),
            Error::Decode(_)
        ));
        assert!(matches!(
            Error::from(ValidationError::MissingPublicKey),
            Error::Validation(_)
        ));
    }
}
