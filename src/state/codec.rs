//! Hash state codec (marshal/unmarshal)
//!
//! This module converts an in-progress [`HashContext`] to and from its fixed
//! length, big-endian snapshot encoding.

use bytes::{Buf, BufMut};

use super::{Algorithm, Error, LENGTH_FIELD_SIZE, MAGIC_LEN, Result};
use crate::primitive::{HashContext, Word};

/// Encode a context to bytes
///
/// # Format
///
/// ```text
/// [MAGIC (4 bytes)] [CHAINING WORDS (N x 4|8 bytes)] [PENDING BLOCK (B bytes)] [LENGTH (8 bytes)]
/// ```
///
/// The pending block holds the buffered bytes followed by zero padding. The
/// length field packs the bit counter as `(nl >> 3) | (nh << (BITS - 3))`,
/// i.e. the total number of bytes absorbed.
#[must_use]
pub fn marshal<W: Word, const N: usize, const B: usize>(
    algorithm: Algorithm,
    ctx: &HashContext<W, N, B>,
) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(marshaled_size::<W, N, B>());

    bytes.put_slice(&algorithm.magic());
    for word in ctx.chaining_values() {
        word.put_be(&mut bytes);
    }

    let pending = ctx.pending();
    bytes.put_slice(pending);
    bytes.put_bytes(0, B - pending.len());

    bytes.put_u64(ctx.bytes_processed());

    debug_assert_eq!(bytes.len(), algorithm.marshaled_size());
    bytes
}

/// Decode a context from bytes
///
/// Every field of the returned context comes from the snapshot; the pending
/// byte count is derived as `length mod B`.
///
/// # Errors
///
/// Returns an error if:
/// - The buffer is shorter than the tag or carries another algorithm's tag
///   ([`Error::InvalidIdentifier`])
/// - The buffer length differs from the fixed marshaled size
///   ([`Error::InvalidSize`])
pub fn unmarshal<W: Word, const N: usize, const B: usize>(
    algorithm: Algorithm,
    bytes: &[u8],
) -> Result<HashContext<W, N, B>> {
    if !bytes.starts_with(&algorithm.magic()) {
        return Err(Error::InvalidIdentifier { algorithm });
    }

    let expected = marshaled_size::<W, N, B>();
    if bytes.len() != expected {
        return Err(Error::InvalidSize {
            algorithm,
            expected,
            got: bytes.len(),
        });
    }

    let mut buf = &bytes[MAGIC_LEN..];
    let mut ctx = HashContext::<W, N, B>::default();

    for word in &mut ctx.h {
        *word = W::get_be(&mut buf);
    }
    buf.copy_to_slice(&mut ctx.data);
    ctx.set_bytes_processed(buf.get_u64());

    debug_assert!(!buf.has_remaining());
    Ok(ctx)
}

const fn marshaled_size<W: Word, const N: usize, const B: usize>() -> usize {
    MAGIC_LEN + N * W::BYTES + B + LENGTH_FIELD_SIZE
}

/// State records that can be captured into and restored from a snapshot
pub trait Snapshot: Sized {
    /// Encode under the tag of `algorithm`
    fn marshal(&self, algorithm: Algorithm) -> Vec<u8>;

    /// Decode a snapshot tagged for `algorithm`
    fn unmarshal(algorithm: Algorithm, bytes: &[u8]) -> Result<Self>;
}

impl<W: Word, const N: usize, const B: usize> Snapshot for HashContext<W, N, B> {
    fn marshal(&self, algorithm: Algorithm) -> Vec<u8> {
        marshal(algorithm, self)
    }

    fn unmarshal(algorithm: Algorithm, bytes: &[u8]) -> Result<Self> {
        unmarshal(algorithm, bytes)
    }
}
