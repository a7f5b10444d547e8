#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// ============================================================================
// Parameterized error code mapping tests
// ============================================================================

#[test_case(GenError::unresolved("a", "b"), 1, false ; "malformed type")]
#[test_case(
    GenError::UnsupportedNullability { primitive: "p".into(), profile: "x".into() },
    2,
    false
    ; "unsupported nullability"
)]
#[test_case(
    GenError::UnsupportedPrimitive { primitive: "p".into(), profile: "x".into() },
    3,
    false
    ; "unsupported primitive"
)]
#[test_case(GenError::emission("s", "r"), 4, false ; "emission")]
#[test_case(GenError::UnsupportedTarget { profile: "x".into() }, 5, true ; "unsupported target")]
#[test_case(
    GenError::UnsupportedConstruct { construct: "<values>".into(), profile: "x".into() },
    6,
    false
    ; "unsupported construct"
)]
fn GenError___variant___maps_to_code_and_recoverability(
    error: GenError,
    expected_code: u32,
    recoverable: bool,
) {
    assert_eq!(error.error_code(), expected_code);
    assert_eq!(error.is_recoverable(), recoverable);
}
