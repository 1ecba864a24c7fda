//! Property-based tests for the tinct conversion pipeline and ΔE00.
//!
//! Verifies:
//! - Hex: decode → encode reproduces 6-digit input in uppercase
//! - Hex: anything outside {3,4,6,8} digits is rejected
//! - RGBA → LAB → RGBA stays within ±1 per channel, alpha carried exactly
//! - Clamping: out-of-range channels behave like the nearest bound
//! - ΔE00: identity, symmetry, non-negativity
//! - ΔE00: hue wraparound takes the short path
//! - adjust_lightness(0) is the identity

use proptest::prelude::*;

use tinct::{
    ColourError, Converter, Lab, ReferenceWhite, Rgba, adjust_lightness, delta_e00, hex_to_rgba,
    lab_to_rgba, rgb_to_xyz, rgba_to_hex, rgba_to_lab,
};

// ────────────────────────────────────────────────────────────────────
// Strategies
// ────────────────────────────────────────────────────────────────────

fn arb_rgba() -> impl Strategy<Value = Rgba> {
    (any::<u8>(), any::<u8>(), any::<u8>(), 0.0..=1.0_f64)
        .prop_map(|(r, g, b, a)| Rgba::new(r, g, b, a))
}

fn arb_lab() -> impl Strategy<Value = Lab> {
    (0.0..=100.0_f64, -128.0..=128.0_f64, -128.0..=128.0_f64)
        .prop_map(|(l, a, b)| Lab::new(l, a, b))
}

fn arb_white() -> impl Strategy<Value = ReferenceWhite> {
    prop_oneof![Just(ReferenceWhite::D65_2), Just(ReferenceWhite::D65_10)]
}

fn channel_close(a: u8, b: u8) -> bool {
    a.abs_diff(b) <= 1
}

// ────────────────────────────────────────────────────────────────────
// Hex codec
// ────────────────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Six-digit hex survives decode → encode, uppercased.
    #[test]
    fn prop_hex_six_digit_roundtrip(hex in "#?[0-9a-fA-F]{6}") {
        let colour = hex_to_rgba(&hex).unwrap();
        let digits = hex.trim_start_matches('#').to_ascii_uppercase();
        prop_assert_eq!(rgba_to_hex(colour), format!("#{digits}"));
    }

    /// Encoding then decoding an opaque colour is lossless.
    #[test]
    fn prop_hex_encode_decode_idempotent(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let colour = Rgba::rgb(r, g, b);
        prop_assert_eq!(hex_to_rgba(&rgba_to_hex(colour)).unwrap(), colour);
    }

    /// Digit counts outside {3, 4, 6, 8} fail with InvalidFormat.
    #[test]
    fn prop_hex_bad_length_rejected(digits in "[0-9a-f]{0,12}") {
        prop_assume!(![3, 4, 6, 8].contains(&digits.len()));
        let is_invalid = matches!(
            hex_to_rgba(&digits),
            Err(ColourError::InvalidFormat { .. })
        );
        prop_assert!(is_invalid);
    }

    /// A single non-hex character anywhere is rejected.
    #[test]
    fn prop_hex_bad_digit_rejected(prefix in "[0-9a-f]{2}", bad in "[g-zG-Z]", suffix in "[0-9a-f]{3}") {
        let hex = format!("#{prefix}{bad}{suffix}");
        let is_invalid = matches!(
            hex_to_rgba(&hex),
            Err(ColourError::InvalidFormat { .. })
        );
        prop_assert!(is_invalid);
    }
}

// ────────────────────────────────────────────────────────────────────
// Conversions
// ────────────────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// RGBA → LAB → RGBA reproduces every channel within ±1.
    #[test]
    fn prop_rgba_lab_roundtrip(colour in arb_rgba(), white in arb_white()) {
        let conv = Converter::new(white);
        let back = conv.lab_to_rgba(conv.rgba_to_lab(colour)).with_alpha(colour.alpha);
        prop_assert!(
            channel_close(back.r, colour.r) && channel_close(back.g, colour.g) && channel_close(back.b, colour.b),
            "{:?} → {:?}", colour, back
        );
        prop_assert_eq!(back.alpha, colour.alpha);
    }

    /// Default free functions agree with the default converter.
    #[test]
    fn prop_free_functions_use_default_white(colour in arb_rgba()) {
        let conv = Converter::default();
        prop_assert_eq!(rgba_to_lab(colour), conv.rgba_to_lab(colour));
        let lab = rgba_to_lab(colour);
        prop_assert_eq!(lab_to_rgba(lab), conv.lab_to_rgba(lab));
    }

    /// Out-of-range channels behave as if clamped to the nearest bound.
    #[test]
    fn prop_rgb_to_xyz_clamps(r in -1000..1000_i32, g in -1000..1000_i32, b in -1000..1000_i32) {
        prop_assert_eq!(
            rgb_to_xyz(r, g, b),
            rgb_to_xyz(r.clamp(0, 255), g.clamp(0, 255), b.clamp(0, 255))
        );
    }

    /// Alpha never leaves [0, 1].
    #[test]
    fn prop_alpha_clamped(a in -10.0..10.0_f64) {
        let alpha = Rgba::new(0, 0, 0, a).alpha;
        prop_assert!((0.0..=1.0).contains(&alpha));
    }

    /// Zero lightness adjustment returns the input, alpha included.
    #[test]
    fn prop_adjust_lightness_zero_identity(colour in arb_rgba()) {
        prop_assert_eq!(adjust_lightness(colour, 0.0), colour);
    }

    /// Lightness adjustment always preserves alpha bit-for-bit.
    #[test]
    fn prop_adjust_lightness_preserves_alpha(colour in arb_rgba(), factor in -1.0..2.0_f64) {
        prop_assert_eq!(adjust_lightness(colour, factor).alpha.to_bits(), colour.alpha.to_bits());
    }
}

// ────────────────────────────────────────────────────────────────────
// ΔE00
// ────────────────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// ΔE00(c, c) == 0.
    #[test]
    fn prop_delta_e_identity(lab in arb_lab()) {
        prop_assert_eq!(delta_e00(lab, lab), 0.0);
    }

    /// ΔE00(c1, c2) == ΔE00(c2, c1).
    #[test]
    fn prop_delta_e_symmetric(lab1 in arb_lab(), lab2 in arb_lab()) {
        let forward = delta_e00(lab1, lab2);
        let backward = delta_e00(lab2, lab1);
        prop_assert!((forward - backward).abs() < 1e-9, "{} vs {}", forward, backward);
    }

    /// ΔE00 is finite and non-negative for finite input.
    #[test]
    fn prop_delta_e_non_negative(lab1 in arb_lab(), lab2 in arb_lab()) {
        let de = delta_e00(lab1, lab2);
        prop_assert!(de.is_finite() && de >= 0.0, "ΔE00 = {}", de);
    }

    /// A pair mirrored across the 0°/360° hue seam at equal L and chroma
    /// differs only in hue, so ΔE00 collapses to |ΔH'|/S_H. Both the hue step
    /// (short arc, +2x) and the mean hue (0°, not 180°) are pinned here.
    #[test]
    fn prop_delta_e_hue_seam_short_path(c in 20.0..60.0_f64, half in 1.0..15.0_f64) {
        let (a, b) = (c * half.to_radians().cos(), c * half.to_radians().sin());
        let below_seam = Lab::new(50.0, a, -b);
        let above_seam = Lab::new(50.0, a, b);

        let c7 = c.powi(7);
        let g = 0.5 * (1.0 - (c7 / (c7 + 25.0_f64.powi(7))).sqrt());
        let a_prime = a * (1.0 + g);
        let c_prime = a_prime.hypot(b);
        // h1' = 360 - x, h2' = x: short-arc step is +2x, mean hue is 0.
        let x = b.atan2(a_prime).to_degrees();
        let dh_big = 2.0 * c_prime * x.to_radians().sin();
        let t_at_zero = 1.0 - 0.17 * (-30.0_f64).to_radians().cos()
            + 0.24
            + 0.32 * 6.0_f64.to_radians().cos()
            - 0.20 * (-63.0_f64).to_radians().cos();
        let expected = dh_big / (1.0 + 0.015 * c_prime * t_at_zero);

        let actual = delta_e00(below_seam, above_seam);
        prop_assert!((actual - expected).abs() < 1e-9, "{} vs {}", actual, expected);
    }
}
