//! Incremental hasher over a primitive context.

use std::fmt;
use std::io;
use std::marker::PhantomData;

use tracing::{debug, error, instrument, trace};

use crate::primitive::{Primitive, PrimitiveError};
use crate::state::{Algorithm, Result, Snapshot};

/// Streaming hash adapter.
///
/// Owns one primitive context and exposes write/sum/reset plus state capture
/// through [`marshal_binary`](Self::marshal_binary) and
/// [`unmarshal_binary`](Self::unmarshal_binary). A hasher is meant to be used
/// by one caller at a time; clone it to fork a computation.
pub struct Hasher<P: Primitive> {
    ctx: P::Context,
    _primitive: PhantomData<P>,
}

impl<P: Primitive> Hasher<P> {
    /// Size of the digest in bytes.
    pub const SIZE: usize = P::DIGEST_SIZE;
    /// Compression block size in bytes.
    pub const BLOCK_SIZE: usize = P::BLOCK_SIZE;

    /// Create a hasher in the algorithm's initial state.
    #[must_use]
    pub fn new() -> Self {
        let mut ctx = P::Context::default();
        P::init(&mut ctx);
        Self {
            ctx,
            _primitive: PhantomData,
        }
    }

    /// Create a hasher resuming from a snapshot produced by
    /// [`marshal_binary`](Self::marshal_binary).
    pub fn from_state(state: &[u8]) -> Result<Self> {
        let mut hasher = Self::new();
        hasher.unmarshal_binary(state)?;
        Ok(hasher)
    }

    /// Algorithm this hasher computes.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        P::ALGORITHM
    }

    /// Digest length in bytes.
    #[must_use]
    pub const fn size(&self) -> usize {
        P::DIGEST_SIZE
    }

    /// Compression block length in bytes.
    #[must_use]
    pub const fn block_size(&self) -> usize {
        P::BLOCK_SIZE
    }

    /// Borrow the underlying context.
    #[must_use]
    pub const fn context(&self) -> &P::Context {
        &self.ctx
    }

    /// Discard everything written and return to the initial state.
    pub fn reset(&mut self) {
        P::init(&mut self.ctx);
        trace!(algorithm = %P::ALGORITHM, "hash state reset");
    }

    /// Absorb `data`, returning the number of bytes consumed (always
    /// `data.len()`).
    ///
    /// # Panics
    ///
    /// Panics if the primitive rejects the context, which only happens when
    /// the context was corrupted.
    pub fn write(&mut self, data: &[u8]) -> usize {
        if !data.is_empty() {
            if let Err(err) = P::update(&mut self.ctx, data) {
                fatal(P::ALGORITHM, "update", err);
            }
        }
        data.len()
    }

    /// Absorb a single byte.
    pub fn write_byte(&mut self, byte: u8) {
        self.write(&[byte]);
    }

    /// Absorb the UTF-8 bytes of `s`.
    pub fn write_str(&mut self, s: &str) -> usize {
        self.write(s.as_bytes())
    }

    /// Digest of everything written so far, appended to `prefix`.
    ///
    /// The hasher is left untouched: finalization runs on a copy of the
    /// context, so further writes continue the same stream.
    #[must_use]
    pub fn sum(&self, prefix: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(prefix.len() + P::DIGEST_SIZE);
        out.extend_from_slice(prefix);
        self.sum_into(&mut out);
        out
    }

    /// Append the digest of everything written so far to `dst`.
    pub fn sum_into(&self, dst: &mut Vec<u8>) {
        let mut ctx = self.ctx.clone();
        let start = dst.len();
        dst.resize(start + P::DIGEST_SIZE, 0);
        if let Err(err) = P::finalize(&mut ctx, &mut dst[start..]) {
            fatal(P::ALGORITHM, "final", err);
        }
    }

    /// Consume the hasher and return the digest.
    #[must_use]
    pub fn finalize(self) -> Vec<u8> {
        self.sum(&[])
    }

    /// Capture the current state as a fixed-length snapshot.
    #[must_use]
    #[instrument(level = "trace", skip(self), fields(algorithm = %P::ALGORITHM))]
    pub fn marshal_binary(&self) -> Vec<u8> {
        self.ctx.marshal(P::ALGORITHM)
    }

    /// Replace the current state with a snapshot.
    ///
    /// On error the hasher must not be used further without a
    /// [`reset`](Self::reset) or a successful restore.
    #[instrument(level = "trace", skip(self, state), fields(algorithm = %P::ALGORITHM, len = state.len()))]
    pub fn unmarshal_binary(&mut self, state: &[u8]) -> Result<()> {
        match <P::Context as Snapshot>::unmarshal(P::ALGORITHM, state) {
            Ok(ctx) => {
                self.ctx = ctx;
                Ok(())
            }
            Err(err) => {
                debug!(error = %err, "rejected hash state snapshot");
                Err(err)
            }
        }
    }
}

/// Fatal primitive failure.
///
/// Primitives only fail on a corrupted context, which no caller can correct,
/// so this is an unrecoverable fault rather than an error value.
#[cold]
#[track_caller]
pub(crate) fn fatal(algorithm: Algorithm, op: &'static str, err: PrimitiveError) -> ! {
    error!(%algorithm, op, error = %err, "hash primitive failed");
    panic!("shastate: {algorithm} {op} failed: {err}");
}

impl<P: Primitive> Default for Hasher<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Primitive> Clone for Hasher<P> {
    fn clone(&self) -> Self {
        Self {
            ctx: self.ctx.clone(),
            _primitive: PhantomData,
        }
    }
}

impl<P: Primitive> PartialEq for Hasher<P> {
    fn eq(&self, other: &Self) -> bool {
        self.ctx == other.ctx
    }
}

impl<P: Primitive> Eq for Hasher<P> {}

impl<P: Primitive> fmt::Debug for Hasher<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hasher")
            .field("algorithm", &P::ALGORITHM)
            .field("ctx", &self.ctx)
            .finish()
    }
}

impl<P: Primitive> io::Write for Hasher<P> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(Hasher::write(self, buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
