use adi_domain::features::{FeatureFlag, NoFeatures, is_feature_enabled};
use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Nibble: u8 {
        const A = 1 << 0;
        const B = 1 << 1;
        const C = 1 << 2;
        const D = 1 << 3;
    }
}

impl FeatureFlag for Nibble {}

#[test]
fn any_bit_match_over_every_nibble_pair() {
    for active in 0u8..16 {
        for target in 0u8..16 {
            let expected = active & target != 0;
            let actual = is_feature_enabled(
                Nibble::from_bits_retain(active),
                Nibble::from_bits_retain(target),
            );
            assert_eq!(actual, expected, "active={active:#06b} target={target:#06b}");
        }
    }
}

#[test]
fn composite_target_needs_only_one_bit() {
    let target = Nibble::A | Nibble::B;

    assert!(is_feature_enabled(Nibble::A, target));
    assert!(is_feature_enabled(Nibble::B, target));
    assert!(is_feature_enabled(Nibble::A | Nibble::B, target));
    assert!(!is_feature_enabled(Nibble::C | Nibble::D, target));
    assert!(!is_feature_enabled(Nibble::empty(), target));
}

#[test]
fn empty_target_is_disabled_for_regular_flags() {
    assert!(!is_feature_enabled(Nibble::all(), Nibble::empty()));
}

#[test]
fn sentinel_is_always_enabled() {
    for bits in [0u32, 1, 0xFF, u32::MAX] {
        assert!(is_feature_enabled(NoFeatures::from_bits_retain(bits), NoFeatures::empty()));
    }
}
