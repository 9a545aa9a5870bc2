//! Runtime-selected hashers.

use std::fmt;

use tracing::trace;

use super::{Hasher, Sha1, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use crate::primitive::Primitive;
use crate::state::{Algorithm, Error, MAGIC_LEN, Result};

/// Object-safe incremental hash with state capture.
pub trait StreamingHash: fmt::Debug + Send + Sync {
    /// Algorithm this hash computes.
    fn algorithm(&self) -> Algorithm;

    /// Return to the initial state.
    fn reset(&mut self);

    /// Absorb `data`, returning `data.len()`.
    fn write(&mut self, data: &[u8]) -> usize;

    /// Digest of everything written so far, appended to `prefix`. Does not
    /// change the state.
    fn sum(&self, prefix: &[u8]) -> Vec<u8>;

    /// Digest length in bytes.
    fn size(&self) -> usize;

    /// Compression block length in bytes.
    fn block_size(&self) -> usize;

    /// Capture the current state.
    fn marshal_binary(&self) -> Vec<u8>;

    /// Replace the current state with a snapshot.
    fn unmarshal_binary(&mut self, state: &[u8]) -> Result<()>;

    /// Fork the computation.
    fn box_clone(&self) -> Box<dyn StreamingHash>;
}

impl<P: Primitive> StreamingHash for Hasher<P> {
    fn algorithm(&self) -> Algorithm {
        Hasher::algorithm(self)
    }

    fn reset(&mut self) {
        Hasher::reset(self);
    }

    fn write(&mut self, data: &[u8]) -> usize {
        Hasher::write(self, data)
    }

    fn sum(&self, prefix: &[u8]) -> Vec<u8> {
        Hasher::sum(self, prefix)
    }

    fn size(&self) -> usize {
        Hasher::size(self)
    }

    fn block_size(&self) -> usize {
        Hasher::block_size(self)
    }

    fn marshal_binary(&self) -> Vec<u8> {
        Hasher::marshal_binary(self)
    }

    fn unmarshal_binary(&mut self, state: &[u8]) -> Result<()> {
        Hasher::unmarshal_binary(self, state)
    }

    fn box_clone(&self) -> Box<dyn StreamingHash> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn StreamingHash> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

/// Create a hasher for `algorithm` in its initial state.
#[must_use]
pub fn new_hash(algorithm: Algorithm) -> Box<dyn StreamingHash> {
    match algorithm {
        Algorithm::Sha1 => Box::new(Sha1::new()),
        Algorithm::Sha224 => Box::new(Sha224::new()),
        Algorithm::Sha256 => Box::new(Sha256::new()),
        Algorithm::Sha384 => Box::new(Sha384::new()),
        Algorithm::Sha512 => Box::new(Sha512::new()),
        Algorithm::Sha512_224 => Box::new(Sha512_224::new()),
        Algorithm::Sha512_256 => Box::new(Sha512_256::new()),
    }
}

/// Resume a snapshot of any supported algorithm, identified by its tag.
///
/// # Errors
///
/// Returns [`Error::UnrecognizedIdentifier`] when the tag names no supported
/// algorithm, and the usual snapshot errors otherwise.
pub fn restore(state: &[u8]) -> Result<Box<dyn StreamingHash>> {
    let Some(algorithm) = Algorithm::from_magic(state) else {
        return Err(Error::UnrecognizedIdentifier {
            found: state[..state.len().min(MAGIC_LEN)].to_vec(),
        });
    };

    let mut hash = new_hash(algorithm);
    hash.unmarshal_binary(state)?;
    trace!(%algorithm, "restored hash state");
    Ok(hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_hash_matches_algorithm() {
        for algorithm in Algorithm::ALL {
            let hash = new_hash(algorithm);
            assert_eq!(hash.algorithm(), algorithm);
            assert_eq!(hash.size(), algorithm.digest_size());
            assert_eq!(hash.block_size(), algorithm.block_size());
            assert_eq!(hash.marshal_binary().len(), algorithm.marshaled_size());
        }
    }

    #[test]
    fn test_restore_identifies_algorithm() {
        for algorithm in Algorithm::ALL {
            let mut hash = new_hash(algorithm);
            hash.write(b"partial input");
            let restored = restore(&hash.marshal_binary()).unwrap();

            assert_eq!(restored.algorithm(), algorithm);
            assert_eq!(restored.sum(&[]), hash.sum(&[]));
        }
    }

    #[test]
    fn test_restore_rejects_unknown_tag() {
        let result = restore(b"md5\x01rest");
        assert_eq!(
            result.unwrap_err(),
            Error::UnrecognizedIdentifier {
                found: b"md5\x01".to_vec()
            }
        );

        let result = restore(b"sh");
        assert!(matches!(result, Err(Error::UnrecognizedIdentifier { found }) if found == b"sh"));
    }

    #[test]
    fn test_restore_rejects_truncated_snapshot() {
        let state = new_hash(Algorithm::Sha256).marshal_binary();
        let result = restore(&state[..state.len() - 1]);
        assert!(matches!(result, Err(Error::InvalidSize { .. })));
    }

    #[test]
    fn test_boxed_clone_forks_state() {
        let mut original = new_hash(Algorithm::Sha512_256);
        original.write(b"shared prefix");
        let mut fork = original.clone();

        fork.write(b" and more");
        assert_ne!(fork.sum(&[]), original.sum(&[]));

        original.write(b" and more");
        assert_eq!(fork.sum(&[]), original.sum(&[]));
    }
}
