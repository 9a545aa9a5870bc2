//! shastate - Resumable SHA-1/SHA-2 hashing with a stable state snapshot format
//!
//! This library provides incremental SHA-1 and SHA-2 hashers whose in-progress
//! state can be captured into a fixed-length byte snapshot, persisted, and
//! later restored to continue hashing exactly where the original stopped.
//!
//! # Quick Start
//!
//! ```rust
//! use shastate::Sha256;
//!
//! let mut hasher = Sha256::new();
//! hasher.write(b"hello ");
//!
//! // Capture the state (108 bytes for SHA-256)
//! let snapshot = hasher.marshal_binary();
//!
//! // ...later, possibly in another process
//! let mut resumed = Sha256::from_state(&snapshot)?;
//! resumed.write(b"world");
//!
//! assert_eq!(resumed.sum(&[]), shastate::sha256(b"hello world"));
//! # Ok::<(), shastate::Error>(())
//! ```
//!
//! # Features
//!
//! - **Non-destructive sums** - `sum` finalizes a copy, the stream continues
//! - **Stable snapshots** - big-endian, magic-tagged, fixed length per algorithm
//! - **Runtime selection** - [`new_hash`] and [`restore`] over [`Algorithm`]
//! - **`serde`** (optional) - `Algorithm` serializes as its canonical name
//!
//! # Snapshot Format
//!
//! ```text
//! [MAGIC "sha" + variant] [CHAINING WORDS] [PENDING BLOCK, zero padded] [BYTE COUNT (u64)]
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod hash;
pub mod primitive;
pub mod state;

pub use hash::{
    Hasher, Sha1, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256, StreamingHash, new_hash,
    restore, sha1, sha224, sha256, sha384, sha512, sha512_224, sha512_256,
};
pub use state::{Algorithm, Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
