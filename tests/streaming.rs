use std::io::{self, Write};

use shastate::{Algorithm, Error, Sha1, Sha224, Sha512_224, new_hash, restore};

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[test]
fn io_copy_feeds_hasher() {
    let data: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
    let mut hasher = Sha224::new();
    let copied = io::copy(&mut data.as_slice(), &mut hasher).unwrap();
    hasher.flush().unwrap();

    assert_eq!(copied, 10_000);
    assert_eq!(hasher.sum(&[]), shastate::sha224(&data).to_vec());
}

#[test]
fn write_after_sum_continues_stream() {
    let mut hasher = Sha1::new();
    hasher.write_str("ab");
    let _ = hasher.sum(&[]);
    hasher.write_byte(b'c');

    assert_eq!(
        hex(&hasher.sum(b"x")[1..]),
        "a9993e364706816aba3e25717850c26c9cd0d89d"
    );
}

#[test]
fn snapshot_survives_process_boundary_simulation() {
    let mut hasher = Sha512_224::new();
    hasher.write_str("The quick brown fox ");
    let persisted = hasher.marshal_binary().into_boxed_slice();
    drop(hasher);

    let mut resumed = Sha512_224::from_state(&persisted).unwrap();
    resumed.write_str("jumps over the lazy dog");
    assert_eq!(
        hex(&resumed.finalize()),
        "944cd2847fb54558d4775db0485a50003111c8e5daa63fe722c6aa37"
    );
}

#[test]
fn algorithm_selected_by_name() {
    for (name, algorithm) in [
        ("SHA-1", Algorithm::Sha1),
        ("sha224", Algorithm::Sha224),
        ("SHA-512/256", Algorithm::Sha512_256),
        ("sha512_224", Algorithm::Sha512_224),
    ] {
        let parsed: Algorithm = name.parse().unwrap();
        assert_eq!(parsed, algorithm);
        assert_eq!(new_hash(parsed).algorithm(), algorithm);
    }

    assert_eq!(
        "md5".parse::<Algorithm>(),
        Err(Error::UnknownAlgorithm("md5".into()))
    );
}

#[test]
fn error_messages_name_the_algorithm() {
    let err = new_hash(Algorithm::Sha384)
        .unmarshal_binary(b"sha\x07")
        .unwrap_err();
    assert_eq!(err.to_string(), "sha384: invalid hash state identifier");

    let err = restore(b"sha\x03short").unwrap_err();
    assert!(err.to_string().starts_with("sha256: invalid hash state size"));
}

#[cfg(feature = "serde")]
#[test]
fn algorithm_serializes_as_name() {
    let json = serde_json::to_string(&Algorithm::Sha512_256).unwrap();
    assert_eq!(json, "\"sha512/256\"");

    let parsed: Algorithm = serde_json::from_str("\"SHA-384\"").unwrap();
    assert_eq!(parsed, Algorithm::Sha384);

    assert!(serde_json::from_str::<Algorithm>("\"whirlpool\"").is_err());
}
