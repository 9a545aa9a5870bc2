//! Software hash primitives exposing the Init/Update/Final triad.
//!
//! Every algorithm family operates on an explicit [`HashContext`] record:
//! chaining words, a split bit counter, and the pending partial block. The
//! streaming adapter owns the record directly and the state codec reads and
//! writes its fields, so no layout reinterpretation is ever needed.

mod sha1;
mod sha256;
mod sha512;

use std::fmt;

use bytes::{Buf, BufMut};
use thiserror::Error;

use crate::state::Algorithm;

pub use sha1::Sha1Core;
pub use sha256::{Sha224Core, Sha256Core};
pub use sha512::{Sha384Core, Sha512_224Core, Sha512_256Core, Sha512Core};

/// Context shape shared by SHA-1 (five 32-bit words, 64-byte blocks).
pub type Sha1Context = HashContext<u32, 5, 64>;

/// Context shape shared by SHA-224 and SHA-256.
pub type Sha256Context = HashContext<u32, 8, 64>;

/// Context shape shared by SHA-384, SHA-512, SHA-512/224 and SHA-512/256.
pub type Sha512Context = HashContext<u64, 8, 128>;

/// Failure reported by a primitive.
///
/// Primitives only fail when handed a context that no sequence of valid
/// operations could have produced.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveError {
    /// Pending byte count is not below the block size.
    #[error("corrupt hash context: {num} pending bytes for a {block}-byte block")]
    CorruptContext {
        /// Pending byte count found in the context
        num: usize,
        /// Block size of the algorithm
        block: usize,
    },

    /// Digest output buffer is shorter than the digest.
    #[error("digest buffer too small: need {needed} bytes, got {got}")]
    OutputTooSmall {
        /// Digest size in bytes
        needed: usize,
        /// Size of the supplied buffer
        got: usize,
    },
}

/// Chaining word of a hash context (`u32` or `u64`).
pub trait Word: Copy + Default + Eq + fmt::Debug + fmt::LowerHex + Send + Sync + 'static {
    /// Width in bits.
    const BITS: u32;
    /// Width in bytes.
    const BYTES: usize;

    /// Append the word in big-endian order.
    fn put_be<B: BufMut>(self, buf: &mut B);

    /// Consume a big-endian word.
    fn get_be<B: Buf>(buf: &mut B) -> Self;

    /// Write the leading `out.len()` big-endian bytes of the word.
    fn write_be_prefix(self, out: &mut [u8]);

    /// Widen to `u64`.
    fn to_u64(self) -> u64;

    /// Narrow from `u64`, discarding high bits.
    fn truncate_u64(value: u64) -> Self;

    /// Add with carry out.
    fn overflowing_add(self, rhs: Self) -> (Self, bool);

    /// Add modulo the word width.
    fn wrapping_add(self, rhs: Self) -> Self;
}

macro_rules! impl_word {
    ($ty:ty, $put:ident, $get:ident) => {
        impl Word for $ty {
            const BITS: u32 = <$ty>::BITS;
            const BYTES: usize = std::mem::size_of::<$ty>();

            #[inline]
            fn put_be<B: BufMut>(self, buf: &mut B) {
                buf.$put(self);
            }

            #[inline]
            fn get_be<B: Buf>(buf: &mut B) -> Self {
                buf.$get()
            }

            #[inline]
            fn write_be_prefix(self, out: &mut [u8]) {
                let bytes = self.to_be_bytes();
                out.copy_from_slice(&bytes[..out.len()]);
            }

            #[inline]
            fn to_u64(self) -> u64 {
                u64::from(self)
            }

            #[inline]
            #[allow(clippy::cast_possible_truncation)]
            fn truncate_u64(value: u64) -> Self {
                value as $ty
            }

            #[inline]
            fn overflowing_add(self, rhs: Self) -> (Self, bool) {
                <$ty>::overflowing_add(self, rhs)
            }

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$ty>::wrapping_add(self, rhs)
            }
        }
    };
}

impl_word!(u32, put_u32, get_u32);
impl_word!(u64, put_u64, get_u64);

/// Explicit in-progress hash state.
///
/// `W` is the chaining word, `N` the number of chaining words and `B` the
/// compression block size in bytes. The bit counter is split across `nl`
/// (low word) and `nh` (high word).
#[derive(Clone)]
pub struct HashContext<W: Word, const N: usize, const B: usize> {
    pub(crate) h: [W; N],
    pub(crate) nl: W,
    pub(crate) nh: W,
    pub(crate) data: [u8; B],
    pub(crate) num: usize,
}

impl<W: Word, const N: usize, const B: usize> HashContext<W, N, B> {
    /// Block size in bytes.
    pub const BLOCK_SIZE: usize = B;

    /// Fresh context starting from the given initial chaining values.
    #[must_use]
    pub fn with_iv(iv: [W; N]) -> Self {
        Self {
            h: iv,
            ..Self::default()
        }
    }

    /// Current chaining values.
    #[must_use]
    pub const fn chaining_values(&self) -> &[W; N] {
        &self.h
    }

    /// Bytes written but not yet compressed.
    #[must_use]
    pub fn pending(&self) -> &[u8] {
        &self.data[..self.num.min(B)]
    }

    /// Total bytes absorbed, modulo 2^64.
    ///
    /// This is the packed length field of the snapshot format:
    /// `(nl >> 3) | (nh << (BITS - 3))`.
    #[must_use]
    pub fn bytes_processed(&self) -> u64 {
        (self.nl.to_u64() >> 3) | (self.nh.to_u64() << (W::BITS - 3))
    }

    /// Rebuild the bit counter and pending count from a packed byte total.
    pub(crate) fn set_bytes_processed(&mut self, n: u64) {
        self.nl = W::truncate_u64(n << 3);
        self.nh = W::truncate_u64(n >> (W::BITS - 3));
        #[allow(clippy::cast_possible_truncation)]
        let num = (n % B as u64) as usize;
        self.num = num;
    }

    fn check(&self) -> Result<(), PrimitiveError> {
        if self.num >= B {
            return Err(PrimitiveError::CorruptContext {
                num: self.num,
                block: B,
            });
        }
        Ok(())
    }

    fn add_len(&mut self, len: usize) {
        let len = len as u64;
        let (nl, carry) = self.nl.overflowing_add(W::truncate_u64(len << 3));
        self.nl = nl;
        self.nh = self
            .nh
            .wrapping_add(W::truncate_u64(len >> (W::BITS - 3)))
            .wrapping_add(W::truncate_u64(u64::from(carry)));
    }

    /// Absorb `input`, compressing every completed block.
    pub(crate) fn absorb(
        &mut self,
        mut input: &[u8],
        compress: fn(&mut [W; N], &[u8]),
    ) -> Result<(), PrimitiveError> {
        self.check()?;
        if input.is_empty() {
            return Ok(());
        }
        self.add_len(input.len());

        if self.num > 0 {
            let take = (B - self.num).min(input.len());
            self.data[self.num..self.num + take].copy_from_slice(&input[..take]);
            self.num += take;
            input = &input[take..];
            if self.num < B {
                return Ok(());
            }
            compress(&mut self.h, &self.data);
            self.num = 0;
        }

        let mut blocks = input.chunks_exact(B);
        for block in &mut blocks {
            compress(&mut self.h, block);
        }

        let rest = blocks.remainder();
        self.data[..rest.len()].copy_from_slice(rest);
        self.num = rest.len();
        Ok(())
    }

    /// Pad, compress the final block(s) and write the leading `digest_size`
    /// bytes of the chaining values into `out`.
    ///
    /// The context is consumed in the sense that it no longer represents the
    /// message; callers finalize a copy when they need to keep hashing.
    pub(crate) fn finish(
        &mut self,
        out: &mut [u8],
        digest_size: usize,
        compress: fn(&mut [W; N], &[u8]),
    ) -> Result<(), PrimitiveError> {
        self.check()?;
        if out.len() < digest_size {
            return Err(PrimitiveError::OutputTooSmall {
                needed: digest_size,
                got: out.len(),
            });
        }

        let (nl, nh) = (self.nl, self.nh);
        let len_field = 2 * W::BYTES;

        self.data[self.num] = 0x80;
        self.num += 1;

        if self.num > B - len_field {
            self.data[self.num..].fill(0);
            compress(&mut self.h, &self.data);
            self.num = 0;
        }

        self.data[self.num..B - len_field].fill(0);
        let mut tail = &mut self.data[B - len_field..];
        nh.put_be(&mut tail);
        nl.put_be(&mut tail);
        compress(&mut self.h, &self.data);
        self.num = 0;

        for (chunk, word) in out[..digest_size].chunks_mut(W::BYTES).zip(self.h.iter()) {
            word.write_be_prefix(chunk);
        }
        Ok(())
    }
}

impl<W: Word, const N: usize, const B: usize> Default for HashContext<W, N, B> {
    fn default() -> Self {
        Self {
            h: [W::default(); N],
            nl: W::default(),
            nh: W::default(),
            data: [0u8; B],
            num: 0,
        }
    }
}

/// Contexts compare by observable state: bytes past the pending count are
/// ignored.
impl<W: Word, const N: usize, const B: usize> PartialEq for HashContext<W, N, B> {
    fn eq(&self, other: &Self) -> bool {
        self.h == other.h
            && self.nl == other.nl
            && self.nh == other.nh
            && self.num == other.num
            && self.pending() == other.pending()
    }
}

impl<W: Word, const N: usize, const B: usize> Eq for HashContext<W, N, B> {}

impl<W: Word, const N: usize, const B: usize> fmt::Debug for HashContext<W, N, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashContext")
            .field("h", &format_args!("{:x?}", self.h))
            .field("bytes_processed", &self.bytes_processed())
            .field("pending", &self.pending().len())
            .finish()
    }
}

/// Init/Update/Final operations for one algorithm.
pub trait Primitive: Send + Sync + 'static {
    /// Algorithm identity, used for snapshot tags and diagnostics.
    const ALGORITHM: Algorithm;
    /// Digest length in bytes.
    const DIGEST_SIZE: usize;
    /// Compression block length in bytes.
    const BLOCK_SIZE: usize;

    /// State record manipulated by the primitive.
    type Context: Clone + Default + Eq + fmt::Debug + Send + Sync + crate::state::Snapshot;

    /// Reset `ctx` to the algorithm's initial state.
    fn init(ctx: &mut Self::Context);

    /// Absorb `data` into `ctx`.
    fn update(ctx: &mut Self::Context, data: &[u8]) -> Result<(), PrimitiveError>;

    /// Write the digest into the first [`Self::DIGEST_SIZE`] bytes of `out`.
    fn finalize(ctx: &mut Self::Context, out: &mut [u8]) -> Result<(), PrimitiveError>;
}

/// Declare a zero-sized primitive over an existing compression function.
macro_rules! define_primitive {
    (
        $(#[$meta:meta])*
        $name:ident, $algorithm:expr, $context:ty, $iv:expr, $digest:expr, $compress:path
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl $crate::primitive::Primitive for $name {
            const ALGORITHM: $crate::state::Algorithm = $algorithm;
            const DIGEST_SIZE: usize = $digest;
            const BLOCK_SIZE: usize = <$context>::BLOCK_SIZE;

            type Context = $context;

            fn init(ctx: &mut Self::Context) {
                *ctx = <$context>::with_iv($iv);
            }

            fn update(
                ctx: &mut Self::Context,
                data: &[u8],
            ) -> Result<(), $crate::primitive::PrimitiveError> {
                ctx.absorb(data, $compress)
            }

            fn finalize(
                ctx: &mut Self::Context,
                out: &mut [u8],
            ) -> Result<(), $crate::primitive::PrimitiveError> {
                ctx.finish(out, Self::DIGEST_SIZE, $compress)
            }
        }
    };
}

pub(crate) use define_primitive;
