//! tests/totp_tests.rs
//! RFC 6238 codes (SHA-1, 6 digits, 30 s) and malformed-secret handling

mod common;

use common::{test_bridge, TEST_PASSWORD, TEST_SALT};
use vault_bridge::totp::{decode_secret, seconds_remaining_at};
use vault_bridge::{totp_code_at, BridgeError};

const RFC_SECRET: &str = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";
const DEMO_SECRET: &str = "JBSWY3DPEHPK3PXP";

#[test]
fn rfc6238_vectors() {
    let cases = [
        (59u64, "287082"),
        (1_111_111_109, "081804"),
        (1_111_111_111, "050471"),
        (1_234_567_890, "005924"),
        (2_000_000_000, "279037"),
    ];
    for (time, expected) in cases {
        assert_eq!(totp_code_at(RFC_SECRET, time).unwrap(), expected, "t={time}");
    }
}

#[test]
fn demo_secret_known_codes_and_step_stability() {
    assert_eq!(hex::encode(&*decode_secret(DEMO_SECRET).unwrap()), "48656c6c6f21deadbeef");

    let cases = [
        (59u64, "996554"),
        (1_111_111_109, "071271"),
        (1_700_000_010, "367665"),
        (1_700_000_040, "870960"),
    ];
    for (time, expected) in cases {
        assert_eq!(totp_code_at(DEMO_SECRET, time).unwrap(), expected, "t={time}");
    }

    let start = 1_700_000_010u64; // step boundary
    for offset in 0..30 {
        assert_eq!(totp_code_at(DEMO_SECRET, start + offset).unwrap(), "367665");
    }
    assert_eq!(seconds_remaining_at(start), 30);
    assert_eq!(seconds_remaining_at(start + 29), 1);
}

#[test]
fn lowercase_and_padded_secrets_agree() {
    let reference = totp_code_at(DEMO_SECRET, 59).unwrap();
    for variant in ["jbswy3dpehpk3pxp", "JBSW Y3DP EHPK 3PXP", "JBSWY3DPEHPK3PXP======"] {
        assert_eq!(totp_code_at(variant, 59).unwrap(), reference, "{variant}");
    }
}

#[test]
fn malformed_secret_is_an_error_not_a_code() {
    let bridge = test_bridge(TEST_PASSWORD, &TEST_SALT);
    for bad in ["not-base32!!", "", "0189"] {
        let err = bridge.get_totp_code(bad).unwrap_err();
        assert!(matches!(err, BridgeError::Totp(_)), "{bad:?}");
    }
}

#[test]
fn current_code_via_session() {
    let bridge = test_bridge(TEST_PASSWORD, &TEST_SALT);
    let code = bridge.get_totp_code(DEMO_SECRET).unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.bytes().all(|c| c.is_ascii_digit()));
}
