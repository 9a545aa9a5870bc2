//! One-shot digests.

use super::hasher::fatal;
use crate::primitive::{
    Primitive, Sha1Core, Sha224Core, Sha256Core, Sha384Core, Sha512_224Core, Sha512_256Core,
    Sha512Core,
};

fn digest<P: Primitive, const D: usize>(data: &[u8]) -> [u8; D] {
    debug_assert_eq!(D, P::DIGEST_SIZE);

    let mut ctx = P::Context::default();
    P::init(&mut ctx);
    let mut out = [0u8; D];
    if let Err(err) = P::update(&mut ctx, data).and_then(|()| P::finalize(&mut ctx, &mut out)) {
        fatal(P::ALGORITHM, "digest", err);
    }
    out
}

/// SHA-1 digest of `data`.
#[must_use]
pub fn sha1(data: &[u8]) -> [u8; 20] {
    digest::<Sha1Core, 20>(data)
}

/// SHA-224 digest of `data`.
#[must_use]
pub fn sha224(data: &[u8]) -> [u8; 28] {
    digest::<Sha224Core, 28>(data)
}

/// SHA-256 digest of `data`.
#[must_use]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    digest::<Sha256Core, 32>(data)
}

/// SHA-384 digest of `data`.
#[must_use]
pub fn sha384(data: &[u8]) -> [u8; 48] {
    digest::<Sha384Core, 48>(data)
}

/// SHA-512 digest of `data`.
#[must_use]
pub fn sha512(data: &[u8]) -> [u8; 64] {
    digest::<Sha512Core, 64>(data)
}

/// SHA-512/224 digest of `data`.
#[must_use]
pub fn sha512_224(data: &[u8]) -> [u8; 28] {
    digest::<Sha512_224Core, 28>(data)
}

/// SHA-512/256 digest of `data`.
#[must_use]
pub fn sha512_256(data: &[u8]) -> [u8; 32] {
    digest::<Sha512_256Core, 32>(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    #[test]
    fn digest_million_a() {
        let data = vec![b'a'; 1_000_000];
        assert_eq!(hex(&sha1(&data)), "34aa973cd4c4daa4f61eeb2bdbad27316534016f");
        assert_eq!(
            hex(&sha224(&data)),
            "20794655980c91d8bbb4c1ea97618a4bf03f42581948b2ee4ee7ad67"
        );
        assert_eq!(
            hex(&sha256(&data)),
            "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
        );
        assert_eq!(
            hex(&sha384(&data)),
            "9d0e1809716474cb086e834e310a4a1ced149e9c00f248527972cec5704c2a5b\
             07b8b3dc38ecc4ebae97ddd87f3d8985"
        );
        assert_eq!(
            hex(&sha512(&data)),
            "e718483d0ce769644e2e42c7bc15b4638e1f98b13b2044285632a803afa973eb\
             de0ff244877ea60a4cb0432ce577c31beb009c5c2c49aa2e4eadb217ad8cc09b"
        );
    }

    #[test]
    fn digest_empty_truncated_variants() {
        assert_eq!(
            hex(&sha512_224(b"")),
            "6ed0dd02806fa89e25de060c19d3ac86cabb87d6a0ddd05c333b84f4"
        );
        assert_eq!(
            hex(&sha512_256(b"")),
            "c672b8d1ef56ed28ab87c3622c5114069bdd3ad7b8f9737498d0c01ecef0967a"
        );
    }
}
