//! Totality Test Suite
//!
//! Validates the public contract of the process-wide entry point: every
//! `i32` produces a non-empty string under whichever mode the build profile
//! selected, and values outside the known enumerators render as plain
//! decimal in both modes.
//!
//! Run with: cargo test --test totality

use vk_stringify::{stringify, ResolveMode, StructureType};

#[test]
fn test_stringify_is_total_at_the_extremes() {
    for value in [
        StructureType::MIN,
        -1,
        0,
        1,
        48,
        999_999,
        1_000_001_000,
        StructureType::MAX,
    ] {
        assert!(!stringify(value).is_empty(), "tag {}", value);
    }
}

#[test]
fn test_unknown_values_render_decimal_in_any_mode() {
    assert_eq!(stringify(-1), "-1");
    assert_eq!(stringify(999_999), "999999");
    assert_eq!(stringify(StructureType::MIN), StructureType::MIN.to_string());
}

#[test]
fn test_known_value_renders_per_build_profile() {
    let text = stringify(14);

    match ResolveMode::for_build() {
        ResolveMode::Diagnostic => {
            assert_eq!(text, "VK_STRUCTURE_TYPE_IMAGE_CREATE_INFO")
        },
        ResolveMode::Production => assert_eq!(text, "14"),
    }
}

#[test]
fn test_repeated_calls_agree() {
    let first = stringify(31);
    for _ in 0..5 {
        assert_eq!(stringify(31), first);
    }
}
