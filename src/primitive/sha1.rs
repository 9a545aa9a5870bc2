//! SHA-1 (FIPS 180-4).
//!
//! Provided for compatibility with existing snapshots and protocols; SHA-1 is
//! not collision resistant.

use super::{Sha1Context, define_primitive};
use crate::state::Algorithm;

const INITIAL_STATE: [u32; 5] = [
    0x6745_2301,
    0xEFCD_AB89,
    0x98BA_DCFE,
    0x1032_5476,
    0xC3D2_E1F0,
];

const ROUND_CONSTANTS: [u32; 4] = [0x5A82_7999, 0x6ED9_EBA1, 0x8F1B_BCDC, 0xCA62_C1D6];

define_primitive! {
    /// SHA-1 primitive (20-byte digest, 64-byte blocks).
    Sha1Core, Algorithm::Sha1, Sha1Context, INITIAL_STATE, 20, compress
}

fn compress(state: &mut [u32; 5], block: &[u8]) {
    debug_assert_eq!(block.len(), 64);

    let mut w = [0u32; 80];
    for (idx, chunk) in block.chunks_exact(4).enumerate() {
        w[idx] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    for t in 16..80 {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
    }

    let [mut a, mut b, mut c, mut d, mut e] = *state;

    for (t, word) in w.iter().enumerate() {
        let (f, k) = match t {
            0..=19 => ((b & c) | (!b & d), ROUND_CONSTANTS[0]),
            20..=39 => (b ^ c ^ d, ROUND_CONSTANTS[1]),
            40..=59 => ((b & c) | (b & d) | (c & d), ROUND_CONSTANTS[2]),
            _ => (b ^ c ^ d, ROUND_CONSTANTS[3]),
        };
        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(*word);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::Primitive;

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    fn digest(data: &[u8]) -> String {
        let mut ctx = Sha1Context::default();
        Sha1Core::init(&mut ctx);
        Sha1Core::update(&mut ctx, data).unwrap();
        let mut out = [0u8; 20];
        Sha1Core::finalize(&mut ctx, &mut out).unwrap();
        hex(&out)
    }

    #[test]
    fn digest_empty() {
        assert_eq!(digest(b""), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    }

    #[test]
    fn digest_abc() {
        assert_eq!(digest(b"abc"), "a9993e364706816aba3e25717850c26c9cd0d89d");
    }

    #[test]
    fn digest_two_blocks() {
        assert_eq!(
            digest(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
            "84983e441c3bd26ebaae4aa1f95129e5e54670f1"
        );
    }

    #[test]
    fn init_loads_initial_state() {
        let mut ctx = Sha1Context::default();
        Sha1Core::init(&mut ctx);
        assert_eq!(ctx.chaining_values(), &INITIAL_STATE);
        assert_eq!(ctx.bytes_processed(), 0);
    }
}
