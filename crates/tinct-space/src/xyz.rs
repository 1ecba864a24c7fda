// SPDX-License-Identifier: MIT
//
// sRGB ↔ CIEXYZ.
//
// Pipeline:
//
//   sRGB (0–255) → unit (0–1) → linear light → ×100 → 3×3 matrix → XYZ
//   XYZ → inverse matrix → gamma encode → ×255, round, clamp → sRGB
//
// The matrices are the IEC 61966-2-1 sRGB primaries under D65, so white
// (255, 255, 255) lands on Y = 100.

#![allow(clippy::many_single_char_names)]

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::rgba::{Rgba, unit_to_u8};

/// A CIEXYZ tristimulus value, scaled so Y ≈ 100 for sRGB white.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Components as an `(x, y, z)` tuple.
    #[inline]
    #[must_use]
    pub const fn tuple(self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// Convert back to 8-bit sRGB (alpha 1). See [`xyz_to_rgb`].
    #[inline]
    #[must_use]
    pub fn to_rgba(self) -> Rgba {
        xyz_to_rgb(self)
    }
}

impl From<(f64, f64, f64)> for Xyz {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Xyz> for (f64, f64, f64) {
    fn from(v: Xyz) -> Self {
        v.tuple()
    }
}

impl Rgba {
    /// Convert to CIEXYZ. Alpha is ignored. See [`rgb_to_xyz`].
    #[inline]
    #[must_use]
    pub fn to_xyz(self) -> Xyz {
        rgb_to_xyz(self)
    }
}

// ─── Matrices ────────────────────────────────────────────────────────────────

const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.412_456_4, 0.357_576_1, 0.180_437_5],
    [0.212_672_9, 0.715_152_2, 0.072_175_0],
    [0.019_333_9, 0.119_192_0, 0.950_304_1],
];

const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [3.240_454_2, -1.537_138_5, -0.498_531_4],
    [-0.969_266_0, 1.876_010_8, 0.041_556_0],
    [0.055_643_4, -0.204_025_9, 1.057_225_2],
];

#[inline]
fn apply(m: &[[f64; 3]; 3], (a, b, c): (f64, f64, f64)) -> (f64, f64, f64) {
    let row = |r: &[f64; 3]| r[2].mul_add(c, r[0].mul_add(a, r[1] * b));
    (row(&m[0]), row(&m[1]), row(&m[2]))
}

// ─── Transfer Function ───────────────────────────────────────────────────────

/// Remove the sRGB gamma from a unit-range component.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c > 0.040_45 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

/// Apply the sRGB gamma to a linear-light component.
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c > 0.003_130_8 {
        1.055f64.mul_add(c.powf(1.0 / 2.4), -0.055)
    } else {
        c * 12.92
    }
}

// ─── Conversions ─────────────────────────────────────────────────────────────

/// Convert sRGB to CIEXYZ.
///
/// Alpha is accepted for symmetry with callers that track opacity, but it
/// does not take part in the arithmetic.
#[must_use]
pub fn rgb_to_xyz(colour: Rgba) -> Xyz {
    let (r, g, b) = colour.to_unit();
    let linear = (
        srgb_to_linear(r) * 100.0,
        srgb_to_linear(g) * 100.0,
        srgb_to_linear(b) * 100.0,
    );
    apply(&RGB_TO_XYZ, linear).into()
}

/// Convert CIEXYZ to 8-bit sRGB with alpha fixed at 1.
///
/// Colours outside the sRGB gamut are clamped per channel after gamma
/// encoding. That includes overflow: an infinite channel saturates to 0 or
/// 255, and a NaN channel quantizes to 0.
#[must_use]
pub fn xyz_to_rgb(xyz: Xyz) -> Rgba {
    let (r, g, b) = apply(&XYZ_TO_RGB, (xyz.x / 100.0, xyz.y / 100.0, xyz.z / 100.0));
    Rgba::rgb(
        unit_to_u8(linear_to_srgb(r)),
        unit_to_u8(linear_to_srgb(g)),
        unit_to_u8(linear_to_srgb(b)),
    )
}
