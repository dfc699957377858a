//! Error types for cadenza.

use thiserror::Error;

/// Result type alias using cadenza's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for cadenza.
///
/// Every variant is cheap to clone: a failed lazy field group stores the
/// error that sank it and replays it on every later access.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// The request failed outright or came back with a non-success status.
    #[error("request for {url} failed: {message}")]
    Transport {
        url: String,
        status: Option<u16>,
        message: String,
    },

    /// The response bytes could not be turned into a text document.
    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),

    /// The document did not have the structure the extractor expected.
    #[error("extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    /// Caller-supplied input rejected before any I/O happened.
    #[error("invalid argument: {0}")]
    Usage(String),
}

/// Failures of the decode pipeline (decrypt + inflate).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Decryption was required but the crypto-IV header was absent or not
    /// valid hex for a 16-byte vector.
    #[error("crypto IV header missing or malformed")]
    BadIv,

    #[error("AES-CBC decryption failed: {0}")]
    DecryptFailed(String),

    #[error("gzip inflate failed: {0}")]
    DecompressFailed(String),

    /// The decoded byte stream is not valid UTF-8.
    #[error("decoded document is not valid UTF-8")]
    InvalidText,
}

/// Failures while locating domain fields in a parsed document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The document is not well-formed XML at all.
    #[error("document is not well-formed XML: {0}")]
    Malformed(String),

    /// A node the page type requires was not found. `path` names the
    /// structural location that came up empty.
    #[error("expected node missing at {path}")]
    MissingNode { path: String },

    /// A text node was found but did not match the expected pattern.
    #[error("text {text:?} did not match the {what} pattern")]
    PatternMismatch { what: String, text: String },
}

impl Error {
    /// Build a transport error from a URL, optional HTTP status, and detail.
    pub fn transport(
        url: impl Into<String>,
        status: Option<u16>,
        message: impl Into<String>,
    ) -> Self {
        Self::Transport {
            url: url.into(),
            status,
            message: message.into(),
        }
    }

    /// Build a usage error.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Returns true if this error came from the transport layer.
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Returns true if this error was raised before any I/O.
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }
}

impl ExtractionError {
    /// Shorthand for a [`ExtractionError::MissingNode`] at `path`.
    pub fn missing(path: impl Into<String>) -> Self {
        Self::MissingNode { path: path.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::transport("http://example.com/a", Some(404), "not found");
        assert_eq!(
            err.to_string(),
            "request for http://example.com/a failed: not found"
        );

        let err = Error::from(DecodeError::BadIv);
        assert_eq!(
            err.to_string(),
            "decode failed: crypto IV header missing or malformed"
        );
    }

    #[test]
    fn test_error_predicates() {
        assert!(Error::transport("u", None, "m").is_transport());
        assert!(Error::usage("empty id").is_usage());
        assert!(!Error::from(DecodeError::InvalidText).is_usage());
    }

    #[test]
    fn test_failed_group_replay_is_cloneable() {
        let original = Error::from(ExtractionError::missing("Path/PathElement"));
        let replayed = original.clone();
        assert_eq!(original.to_string(), replayed.to_string());
    }
}
