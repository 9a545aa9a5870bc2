//! Hash state snapshot format
//!
//! This module provides the wire format, algorithm identifiers, and codec
//! for suspending and resuming an in-progress hash computation.

mod codec;
mod error;
mod types;

pub use codec::{Snapshot, marshal, unmarshal};
pub use error::{Error, Result};
pub use types::Algorithm;

/// Common prefix of every magic tag: "sha" in ASCII
pub const MAGIC_PREFIX: [u8; 3] = *b"sha";

/// Magic tag size in bytes (prefix + variant byte)
pub const MAGIC_LEN: usize = 4;

/// Packed length field size in bytes
pub const LENGTH_FIELD_SIZE: usize = 8;

/// Marshaled size of a SHA-1 state
pub const SHA1_MARSHALED_SIZE: usize = MAGIC_LEN + 5 * 4 + 64 + LENGTH_FIELD_SIZE;

/// Marshaled size of a SHA-224 or SHA-256 state
pub const SHA256_MARSHALED_SIZE: usize = MAGIC_LEN + 8 * 4 + 64 + LENGTH_FIELD_SIZE;

/// Marshaled size of any SHA-512 family state
pub const SHA512_MARSHALED_SIZE: usize = MAGIC_LEN + 8 * 8 + 128 + LENGTH_FIELD_SIZE;
