//! SHA-224 and SHA-256 over a shared 32-bit compression function.

use super::{Sha256Context, define_primitive};
use crate::state::Algorithm;

const STATE_WORDS: usize = 8;
const WORKSPACE_WORDS: usize = 64;

const SHA256_INITIAL_STATE: [u32; STATE_WORDS] = [
    0x6A09_E667,
    0xBB67_AE85,
    0x3C6E_F372,
    0xA54F_F53A,
    0x510E_527F,
    0x9B05_688C,
    0x1F83_D9AB,
    0x5BE0_CD19,
];

const SHA224_INITIAL_STATE: [u32; STATE_WORDS] = [
    0xC105_9ED8,
    0x367C_D507,
    0x3070_DD17,
    0xF70E_5939,
    0xFFC0_0B31,
    0x6858_1511,
    0x64F9_8FA7,
    0xBEFA_4FA4,
];

const ROUND_CONSTANTS: [u32; WORKSPACE_WORDS] = [
    0x428A_2F98,
    0x7137_4491,
    0xB5C0_FBCF,
    0xE9B5_DBA5,
    0x3956_C25B,
    0x59F1_11F1,
    0x923F_82A4,
    0xAB1C_5ED5,
    0xD807_AA98,
    0x1283_5B01,
    0x2431_85BE,
    0x550C_7DC3,
    0x72BE_5D74,
    0x80DE_B1FE,
    0x9BDC_06A7,
    0xC19B_F174,
    0xE49B_69C1,
    0xEFBE_4786,
    0x0FC1_9DC6,
    0x240C_A1CC,
    0x2DE9_2C6F,
    0x4A74_84AA,
    0x5CB0_A9DC,
    0x76F9_88DA,
    0x983E_5152,
    0xA831_C66D,
    0xB003_27C8,
    0xBF59_7FC7,
    0xC6E0_0BF3,
    0xD5A7_9147,
    0x06CA_6351,
    0x1429_2967,
    0x27B7_0A85,
    0x2E1B_2138,
    0x4D2C_6DFC,
    0x5338_0D13,
    0x650A_7354,
    0x766A_0ABB,
    0x81C2_C92E,
    0x9272_2C85,
    0xA2BF_E8A1,
    0xA81A_664B,
    0xC24B_8B70,
    0xC76C_51A3,
    0xD192_E819,
    0xD699_0624,
    0xF40E_3585,
    0x106A_A070,
    0x19A4_C116,
    0x1E37_6C08,
    0x2748_774C,
    0x34B0_BCB5,
    0x391C_0CB3,
    0x4ED8_AA4A,
    0x5B9C_CA4F,
    0x682E_6FF3,
    0x748F_82EE,
    0x78A5_636F,
    0x84C8_7814,
    0x8CC7_0208,
    0x90BE_FFFA,
    0xA450_6CEB,
    0xBEF9_A3F7,
    0xC671_78F2,
];

define_primitive! {
    /// SHA-224 primitive (28-byte digest, 64-byte blocks).
    Sha224Core, Algorithm::Sha224, Sha256Context, SHA224_INITIAL_STATE, 28, process_block
}

define_primitive! {
    /// SHA-256 primitive (32-byte digest, 64-byte blocks).
    Sha256Core, Algorithm::Sha256, Sha256Context, SHA256_INITIAL_STATE, 32, process_block
}

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline(always)]
fn choice(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline(always)]
fn majority(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

fn process_block(state: &mut [u32; STATE_WORDS], block: &[u8]) {
    debug_assert_eq!(block.len(), 64);

    let mut w = [0u32; WORKSPACE_WORDS];
    for (idx, chunk) in block.chunks_exact(4).enumerate() {
        w[idx] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for t in 16..WORKSPACE_WORDS {
        let s0 = small_sigma0(w[t - 15]);
        let s1 = small_sigma1(w[t - 2]);
        w[t] = w[t - 16]
            .wrapping_add(s0)
            .wrapping_add(w[t - 7])
            .wrapping_add(s1);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for t in 0..WORKSPACE_WORDS {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(choice(e, f, g))
            .wrapping_add(ROUND_CONSTANTS[t])
            .wrapping_add(w[t]);
        let t2 = big_sigma0(a).wrapping_add(majority(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (word, value) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *word = word.wrapping_add(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{Primitive, PrimitiveError};

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    fn digest<P: Primitive<Context = Sha256Context>>(data: &[u8]) -> String {
        let mut ctx = Sha256Context::default();
        P::init(&mut ctx);
        P::update(&mut ctx, data).unwrap();
        let mut out = vec![0u8; P::DIGEST_SIZE];
        P::finalize(&mut ctx, &mut out).unwrap();
        hex(&out)
    }

    #[test]
    fn digest_empty() {
        assert_eq!(
            digest::<Sha256Core>(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            digest::<Sha224Core>(b""),
            "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"
        );
    }

    #[test]
    fn digest_abc() {
        assert_eq!(
            digest::<Sha256Core>(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(
            digest::<Sha224Core>(b"abc"),
            "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"
        );
    }

    #[test]
    fn digest_longer_message() {
        let message = b"The quick brown fox jumps over the lazy dog";
        assert_eq!(
            digest::<Sha256Core>(message),
            "d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592"
        );
    }

    #[test]
    fn digest_two_blocks() {
        assert_eq!(
            digest::<Sha256Core>(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"),
            "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
        );
    }

    #[test]
    fn incremental_vs_single_shot() {
        let mut ctx = Sha256Context::default();
        Sha256Core::init(&mut ctx);
        Sha256Core::update(&mut ctx, b"hello ").unwrap();
        Sha256Core::update(&mut ctx, b"world").unwrap();
        let mut out = [0u8; 32];
        Sha256Core::finalize(&mut ctx, &mut out).unwrap();
        assert_eq!(hex(&out), digest::<Sha256Core>(b"hello world"));
    }

    #[test]
    fn finalize_rejects_short_output() {
        let mut ctx = Sha256Context::default();
        Sha224Core::init(&mut ctx);
        let mut out = [0u8; 27];
        assert_eq!(
            Sha224Core::finalize(&mut ctx, &mut out),
            Err(PrimitiveError::OutputTooSmall { needed: 28, got: 27 })
        );
    }
}
