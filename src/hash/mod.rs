//! Streaming hash adapters
//!
//! [`Hasher`] wraps a primitive context and exposes the usual incremental
//! interface (write, sum, reset) together with snapshot capture and restore.
//! [`StreamingHash`] is its object-safe counterpart for algorithms chosen at
//! runtime.

mod dynamic;
mod hasher;
mod oneshot;

pub use dynamic::{StreamingHash, new_hash, restore};
pub use hasher::Hasher;
pub use oneshot::{sha1, sha224, sha256, sha384, sha512, sha512_224, sha512_256};

use crate::primitive::{
    Sha1Core, Sha224Core, Sha256Core, Sha384Core, Sha512_224Core, Sha512_256Core, Sha512Core,
};

/// Streaming SHA-1
pub type Sha1 = Hasher<Sha1Core>;
/// Streaming SHA-224
pub type Sha224 = Hasher<Sha224Core>;
/// Streaming SHA-256
pub type Sha256 = Hasher<Sha256Core>;
/// Streaming SHA-384
pub type Sha384 = Hasher<Sha384Core>;
/// Streaming SHA-512
pub type Sha512 = Hasher<Sha512Core>;
/// Streaming SHA-512/224
pub type Sha512_224 = Hasher<Sha512_224Core>;
/// Streaming SHA-512/256
pub type Sha512_256 = Hasher<Sha512_256Core>;
