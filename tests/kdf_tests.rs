//! tests/kdf_tests.rs
//! Argon2id derivation, builder configuration and buffer wiping

mod common;

use common::TEST_PARAMS;
use vault_bridge::aliases::MasterKey32;
use vault_bridge::{derive_key, derive_secure_argon2id_key, Argon2Builder, BridgeError, KdfParams, SecureBuffer};
use zeroize::Zeroize;

#[test]
fn out_param_and_builder_agree() {
    let salt = [0x11u8; 32];

    let mut direct = MasterKey32::zeroed();
    derive_secure_argon2id_key(b"hunter2", &salt, &TEST_PARAMS, &mut direct).unwrap();

    let built = Argon2Builder::new()
        .unwrap()
        .with_params(TEST_PARAMS)
        .with_salt(salt)
        .derive_secure_new(b"hunter2")
        .unwrap();

    assert_eq!(direct.expose_secret(), built.expose_secret());
    assert!(!direct.is_wiped());
}

#[test]
fn edge_case_passwords() {
    let large_password = "a".repeat(1000);
    let cases = [
        ("", "empty password"),
        ("パスワード123!@#", "unicode password"),
        (large_password.as_str(), "large password"),
    ];

    for (password, desc) in cases {
        let mut key = MasterKey32::zeroed();
        derive_secure_argon2id_key(password.as_bytes(), &[0x42; 16], &TEST_PARAMS, &mut key)
            .unwrap_or_else(|e| panic!("{desc}: {e}"));
        assert!(!key.is_wiped(), "{desc}");
    }
}

#[test]
fn default_cost_is_deterministic() {
    let a = derive_key(b"correct horse battery staple!", &[0x42; 32]).unwrap();
    let b = derive_key(b"correct horse battery staple!", &[0x42; 32]).unwrap();
    assert_eq!(a.expose_secret(), b.expose_secret());
}

#[test]
fn builder_random_salts_separate_keys() {
    let a = Argon2Builder::new().unwrap().with_params(TEST_PARAMS);
    let b = Argon2Builder::new().unwrap().with_params(TEST_PARAMS);

    let key_a = a.derive_secure_new(b"same password").unwrap();
    let key_b = b.derive_secure_new(b"same password").unwrap();
    assert_ne!(key_a.expose_secret(), key_b.expose_secret());
}

#[test]
fn invalid_costs_are_derivation_errors() {
    let cases = [
        (KdfParams::new(0, 1, 1), "zero memory"),
        (KdfParams::new(64, 0, 1), "zero passes"),
        (KdfParams::new(64, 1, 0), "zero lanes"),
    ];
    for (params, desc) in cases {
        let mut key = MasterKey32::zeroed();
        let err = derive_secure_argon2id_key(b"pw", &[0u8; 16], &params, &mut key).unwrap_err();
        assert!(matches!(err, BridgeError::Derivation(_)), "{desc}");
    }
}

#[test]
fn derived_key_wipes_through_zeroize() {
    // `Drop` for the key buffer is this same `zeroize` call.
    let mut key = derive_key(b"pw", &[1u8; 16]).unwrap();
    assert!(!key.is_wiped());

    key.zeroize();
    assert!(key.is_wiped());
    assert!(key.expose_secret().iter().all(|&b| b == 0));
}

#[test]
fn secure_buffer_debug_never_leaks() {
    let key = SecureBuffer::new([0xEEu8; 32]);
    let printed = format!("{key:?}");
    assert!(!printed.to_lowercase().contains("ee"));
    assert!(printed.contains("REDACTED"));
}
