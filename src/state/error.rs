//! Snapshot error types

use thiserror::Error;

use super::Algorithm;

/// Errors raised while restoring or identifying a hash state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Snapshot does not start with the tag of the expected algorithm
    #[error("{algorithm}: invalid hash state identifier")]
    InvalidIdentifier {
        /// Algorithm the snapshot was restored into
        algorithm: Algorithm,
    },

    /// Snapshot carries the right tag but has the wrong total length
    #[error("{algorithm}: invalid hash state size: expected {expected} bytes, got {got}")]
    InvalidSize {
        /// Algorithm the snapshot was restored into
        algorithm: Algorithm,
        /// Fixed marshaled size of the algorithm
        expected: usize,
        /// Length of the supplied snapshot
        got: usize,
    },

    /// Snapshot tag does not belong to any supported algorithm
    #[error("unrecognized hash state identifier: {found:02x?}")]
    UnrecognizedIdentifier {
        /// Leading bytes of the snapshot (at most the tag length)
        found: Vec<u8>,
    },

    /// Algorithm name could not be parsed
    #[error("unknown hash algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_distinguish_identifier_and_size() {
        let identifier = Error::InvalidIdentifier {
            algorithm: Algorithm::Sha1,
        };
        let size = Error::InvalidSize {
            algorithm: Algorithm::Sha1,
            expected: 96,
            got: 95,
        };

        assert_eq!(identifier.to_string(), "sha1: invalid hash state identifier");
        assert_eq!(
            size.to_string(),
            "sha1: invalid hash state size: expected 96 bytes, got 95"
        );
    }

    #[test]
    fn test_unrecognized_identifier_shows_bytes() {
        let err = Error::UnrecognizedIdentifier {
            found: b"md5\x01".to_vec(),
        };
        assert_eq!(
            err.to_string(),
            "unrecognized hash state identifier: [6d, 64, 35, 01]"
        );
    }
}
