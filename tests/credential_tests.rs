//! Integration tests for the credhash library API.

use credhash::crypto::params::{
    DEFAULT_ITERATION, DEFAULT_KEY_LENGTH, MAX_ITERATION, MAX_KEY_LENGTH, MIN_ITERATION,
    MIN_KEY_LENGTH,
};
use credhash::{
    decode, encode, try_encode, verify, verify_detailed, CredHashError, CredentialRecord,
    EncodeMode, HashAlgorithm, HashParameters, Pbkdf2Hasher,
};

/// `encode(b"password", "salt", 10000, 32, "sha512")`.
const KNOWN: &str =
    "pbkdf2_sha512$salt$10000$32$72629a41b076e588fba8c71ca37fadc9acdc8e7321b9cb4ea55fd0bf9fe8ed72";

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

#[test]
fn encode_is_deterministic() {
    let a = encode(b"password", "salt", 10_000, 32, "sha512");
    let b = encode(b"password", "salt", 10_000, 32, "sha512");
    assert_eq!(a, b);
    assert_eq!(a, KNOWN);
}

#[test]
fn encode_with_zero_iterations_equals_default() {
    let zero = encode(b"password", "salt", 0, 32, "sha256");
    let default = encode(b"password", "salt", DEFAULT_ITERATION, 32, "sha256");
    assert_eq!(zero, default);
}

#[test]
fn encode_with_huge_key_length_equals_default() {
    let huge = encode(b"password", "salt", 1_000, 4_096, "md5");
    let default = encode(b"password", "salt", 1_000, DEFAULT_KEY_LENGTH, "md5");
    assert_eq!(huge, default);
}

#[test]
fn encode_unknown_algorithm_tags_sha512() {
    let record = encode(b"p", "s", 10_000, 32, "unknown");
    assert!(record.starts_with("pbkdf2_sha512$s$10000$32$"));
}

#[test]
fn different_salts_give_different_digests() {
    let a = encode(b"password", "salt-a", 1_000, 32, "sha256");
    let b = encode(b"password", "salt-b", 1_000, 32, "sha256");
    assert_ne!(a.rsplit('$').next(), b.rsplit('$').next());
}

#[test]
fn strict_encoding_matches_permissive_for_valid_input() {
    let strict = try_encode(b"password", "salt", 2_000, 48, "SHA1").unwrap();
    let permissive = encode(b"password", "salt", 2_000, 48, "SHA1");
    assert_eq!(strict, permissive);
    assert!(strict.starts_with("pbkdf2_sha1$"));
}

// ---------------------------------------------------------------------------
// Round trip and mismatch
// ---------------------------------------------------------------------------

#[test]
fn round_trip_every_algorithm_and_bound() {
    let cases = [(1_000, 8), (1_000, 1_024), (2_500, 33)];
    for algo in HashAlgorithm::ALL {
        for (iterations, key_length) in cases {
            let record = encode(b"correct horse", "NaCl", iterations, key_length, algo.as_str());
            assert!(
                verify(b"correct horse", &record),
                "{algo} i={iterations} k={key_length}"
            );
            assert!(!verify(b"battery staple", &record));
        }
    }
}

#[test]
fn known_record_scenario() {
    assert!(verify(b"password", KNOWN));
    assert!(!verify(b"wrong", KNOWN));
}

#[test]
fn non_utf8_password_round_trips() {
    let password = [0xffu8, 0x00, 0xfe, 0x80];
    let record = encode(&password, "salt", 1_000, 16, "sha256");
    assert!(verify(&password, &record));
    assert!(!verify(&password[..3], &record));
}

// ---------------------------------------------------------------------------
// Rejection of malformed records
// ---------------------------------------------------------------------------

#[test]
fn malformed_records_never_verify() {
    let digest = KNOWN.rsplit('$').next().unwrap();
    let cases = [
        String::new(),
        "not_pbkdf2_format".to_string(),
        "pbkdf2_sha512$salt$10000$32$".to_string(),
        format!("pbkdf2_sha256$salt$999$32${digest}"),
        format!("pbkdf2_sha512$salt$1000001$32${digest}"),
        format!("pbkdf2_sha512$salt$10000$7${digest}"),
        format!("pbkdf2_sha512$$10000$32${digest}"),
        format!("sha512$salt$10000$32${digest}"),
        format!("pbkdf3_sha512$salt$10000$32${digest}"),
        format!("pbkdf2_unknown$salt$10000$32${digest}"),
        format!("pbkdf2_sha512$salt$10001$32${digest}"),
        format!("pbkdf2_sha512$salt$10000$32${digest}$extra"),
    ];
    for stored in &cases {
        assert!(!verify(b"password", stored), "accepted: {stored:?}");
    }
}

#[test]
fn verify_detailed_surfaces_error_kinds() {
    let digest = KNOWN.rsplit('$').next().unwrap();

    assert!(matches!(
        verify_detailed(b"password", "a$b"),
        Err(CredHashError::MalformedRecord(_))
    ));
    assert!(matches!(
        verify_detailed(b"password", &format!("pbkdf2_sha3$salt$10000$32${digest}")),
        Err(CredHashError::UnknownAlgorithm(_))
    ));
    assert!(matches!(
        verify_detailed(b"password", &format!("pbkdf2_sha512$salt$100$32${digest}")),
        Err(CredHashError::IterationOutOfRange(100))
    ));
    assert!(matches!(
        verify_detailed(b"password", &format!("pbkdf2_sha512$salt$10000$2048${digest}")),
        Err(CredHashError::KeyLengthOutOfRange(2048))
    ));
    assert!(matches!(
        verify_detailed(b"password", &format!("pbkdf2_sha512$$10000$32${digest}")),
        Err(CredHashError::EmptyField("salt"))
    ));
    assert!(matches!(
        verify_detailed(b"nope", KNOWN),
        Err(CredHashError::PasswordMismatch)
    ));
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// A syntactically valid record; the digest is all zeros, so only decode is exercised.
fn zero_digest_record(tag: &str, iterations: &str, key_length: usize) -> String {
    format!(
        "pbkdf2_{tag}$s${iterations}${key_length}${}",
        "00".repeat(key_length)
    )
}

#[test]
fn decode_accepts_inclusive_bounds() {
    for (iterations, key_length) in [
        (MIN_ITERATION, MIN_KEY_LENGTH),
        (MAX_ITERATION, MIN_KEY_LENGTH),
        (MIN_ITERATION, MAX_KEY_LENGTH),
    ] {
        let stored = zero_digest_record("md5", &iterations.to_string(), key_length);
        let decoded = decode(&stored).expect("bound values must decode");
        assert_eq!(decoded.params.iterations, iterations);
        assert_eq!(decoded.params.key_length, key_length);
    }
}

#[test]
fn decode_rejects_just_past_the_bounds() {
    assert!(matches!(
        decode(&zero_digest_record("md5", "1000001", 8)),
        Err(CredHashError::IterationOutOfRange(1_000_001))
    ));
    assert!(matches!(
        decode(&zero_digest_record("md5", "999", 8)),
        Err(CredHashError::IterationOutOfRange(999))
    ));
    assert!(matches!(
        decode(&zero_digest_record("md5", "10000", 1_025)),
        Err(CredHashError::KeyLengthOutOfRange(1_025))
    ));
}

#[test]
fn decode_rejects_overflowing_iterations_and_uppercase_tag() {
    assert!(matches!(
        decode(&zero_digest_record("md5", "4294967296", 8)),
        Err(CredHashError::MalformedRecord(_))
    ));
    assert!(matches!(
        decode(&zero_digest_record("MD5", "10000", 8)),
        Err(CredHashError::UnknownAlgorithm(_))
    ));
}

#[test]
fn decode_recovers_all_parameters() {
    let record = encode(b"pw", "pepper", 4_321, 20, "sha1");
    let decoded: CredentialRecord = decode(&record).unwrap();

    assert_eq!(decoded.algorithm, HashAlgorithm::Sha1);
    assert_eq!(decoded.salt, "pepper");
    assert_eq!(
        decoded.params,
        HashParameters {
            iterations: 4_321,
            key_length: 20
        }
    );
    assert_eq!(decoded.digest.len(), 20);
    assert_eq!(decoded.to_string(), record);
}

#[test]
fn salt_with_separator_is_rejected_in_strict_mode_only() {
    assert!(matches!(
        try_encode(b"pw", "a$b", 10_000, 32, "sha256"),
        Err(CredHashError::SaltContainsSeparator)
    ));

    // Permissive encoding still produces a string, but it can never verify.
    let record = encode(b"pw", "a$b", 10_000, 32, "sha256");
    assert!(!verify(b"pw", &record));
}

// ---------------------------------------------------------------------------
// Hasher
// ---------------------------------------------------------------------------

#[test]
fn hasher_round_trip_with_random_salt() {
    let hasher = Pbkdf2Hasher::new(
        HashAlgorithm::Sha512,
        HashParameters {
            iterations: 1_000,
            key_length: 32,
        },
    )
    .with_mode(EncodeMode::Strict);

    let stored = hasher.hash(b"hunter2").expect("hash");
    assert!(hasher.verify(b"hunter2", &stored));
    assert!(!hasher.verify(b"hunter3", &stored));

    let decoded = decode(&stored).unwrap();
    assert_eq!(decoded.salt.len(), credhash::crypto::DEFAULT_SALT_LEN);
}

#[test]
fn verification_is_safe_across_threads() {
    let stored = encode(b"shared", "salt", 1_000, 16, "sha256");
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let stored = stored.clone();
            std::thread::spawn(move || {
                let candidate: &[u8] = if i % 2 == 0 { b"shared" } else { b"other" };
                verify(candidate, &stored) == (i % 2 == 0)
            })
        })
        .collect();

    for h in handles {
        assert!(h.join().unwrap());
    }
}
