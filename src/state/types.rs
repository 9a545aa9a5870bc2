//! Hash algorithm identifiers

use std::fmt;
use std::str::FromStr;

use super::{Error, LENGTH_FIELD_SIZE, MAGIC_LEN, MAGIC_PREFIX};

/// Supported hash algorithms
///
/// The discriminant is the final byte of the algorithm's snapshot tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
#[repr(u8)]
pub enum Algorithm {
    /// SHA-1
    Sha1 = 0x01,
    /// SHA-224
    Sha224 = 0x02,
    /// SHA-256
    Sha256 = 0x03,
    /// SHA-384
    Sha384 = 0x04,
    /// SHA-512/224
    Sha512_224 = 0x05,
    /// SHA-512/256
    Sha512_256 = 0x06,
    /// SHA-512
    Sha512 = 0x07,
}

impl Algorithm {
    /// Every supported algorithm, in tag order
    pub const ALL: [Self; 7] = [
        Self::Sha1,
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512_224,
        Self::Sha512_256,
        Self::Sha512,
    ];

    /// Convert from tag byte
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x01 => Some(Self::Sha1),
            0x02 => Some(Self::Sha224),
            0x03 => Some(Self::Sha256),
            0x04 => Some(Self::Sha384),
            0x05 => Some(Self::Sha512_224),
            0x06 => Some(Self::Sha512_256),
            0x07 => Some(Self::Sha512),
            _ => None,
        }
    }

    /// Convert to tag byte
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Four-byte snapshot tag
    #[must_use]
    pub const fn magic(self) -> [u8; MAGIC_LEN] {
        [MAGIC_PREFIX[0], MAGIC_PREFIX[1], MAGIC_PREFIX[2], self.as_u8()]
    }

    /// Identify the algorithm a snapshot belongs to from its leading bytes
    #[must_use]
    pub fn from_magic(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [b's', b'h', b'a', tag, ..] => Self::from_u8(*tag),
            _ => None,
        }
    }

    /// Digest length in bytes
    #[must_use]
    pub const fn digest_size(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha224 | Self::Sha512_224 => 28,
            Self::Sha256 | Self::Sha512_256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// Compression block length in bytes
    #[must_use]
    pub const fn block_size(self) -> usize {
        if self.is_wide() { 128 } else { 64 }
    }

    /// Number of chaining words carried between blocks
    #[must_use]
    pub const fn chaining_words(self) -> usize {
        match self {
            Self::Sha1 => 5,
            _ => 8,
        }
    }

    /// Chaining word width in bytes
    #[must_use]
    pub const fn word_size(self) -> usize {
        if self.is_wide() { 8 } else { 4 }
    }

    /// Fixed length of a marshaled state
    #[must_use]
    pub const fn marshaled_size(self) -> usize {
        MAGIC_LEN + self.chaining_words() * self.word_size() + self.block_size() + LENGTH_FIELD_SIZE
    }

    /// Check if this algorithm uses 64-bit words
    #[must_use]
    pub const fn is_wide(self) -> bool {
        matches!(
            self,
            Self::Sha384 | Self::Sha512 | Self::Sha512_224 | Self::Sha512_256
        )
    }

    /// Canonical lowercase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha224 => "sha224",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512_224 => "sha512/224",
            Self::Sha512_256 => "sha512/256",
            Self::Sha512 => "sha512",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    /// Accepts canonical names and the hyphenated/underscored spellings
    /// (`SHA-256`, `sha512_256`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-')
            .map(|c| if c == '_' { '/' } else { c.to_ascii_lowercase() })
            .collect();

        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == normalized)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_owned()))
    }
}

impl TryFrom<String> for Algorithm {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Algorithm> for String {
    fn from(value: Algorithm) -> Self {
        value.name().to_owned()
    }
}
