//! Error types for gust-cookie

use thiserror::Error;

use crate::skip::SkipReason;

/// Result type alias for header-level cookie decoding
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to callers of the header decoders
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A cookie was rejected while the decoder runs in report mode
    #[error(transparent)]
    Rejected(#[from] SkipReason),

    /// Header value is not visible ASCII
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

impl Error {
    /// The rejection behind this error, if it came from the decoder
    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match self {
            Error::Rejected(reason) => Some(reason),
            Error::InvalidHeader(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_is_transparent() {
        let err = Error::from(SkipReason::MissingName);
        assert_eq!(err.to_string(), SkipReason::MissingName.to_string());
        assert_eq!(err.skip_reason(), Some(&SkipReason::MissingName));
    }

    #[test]
    fn test_invalid_header_message() {
        let err = Error::InvalidHeader("cookie".to_string());
        assert_eq!(err.to_string(), "Invalid header: cookie");
        assert!(err.skip_reason().is_none());
    }
}
