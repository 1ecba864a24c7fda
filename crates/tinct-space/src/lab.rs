// SPDX-License-Identifier: MIT
//
// CIEXYZ ↔ CIELAB.
//
// Forward:  t = X/Xr etc.,  f(t) = ∛t above ε, else κ·t + 16/116
//           L = 116·f(Y) − 16,  a = 500·(f(X) − f(Y)),  b = 200·(f(Y) − f(Z))
// Inverse:  fy = (L + 16)/116,  fx = fy + a/500,  fz = fy − b/200
//           f⁻¹(t) = t³ above ∛ε, else (t − 16/116)/κ
//
// Both directions take the reference white as an argument. There is no
// built-in white at this layer; `ReferenceWhite::default()` is the caller's
// choice to make.

#![allow(clippy::many_single_char_names)]

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::white::ReferenceWhite;
use crate::xyz::Xyz;

/// Linear-segment threshold on the normalized tristimulus value.
const EPSILON: f64 = 0.008_856;

/// Slope of the linear segment.
const KAPPA: f64 = 7.787;

/// Offset of the linear segment (16/116).
const OFFSET: f64 = 16.0 / 116.0;

/// `EPSILON` mapped through the cube root, the threshold for `f⁻¹`.
const INVERSE_THRESHOLD: f64 = 0.206_896_6;

/// A CIELAB colour.
///
/// `l` is lightness, nominally 0–100. `a` runs green (−) to red (+) and `b`
/// runs blue (−) to yellow (+); both are unbounded in theory.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    #[inline]
    #[must_use]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Components as an `(l, a, b)` tuple.
    #[inline]
    #[must_use]
    pub const fn tuple(self) -> (f64, f64, f64) {
        (self.l, self.a, self.b)
    }

    /// Return a copy with lightness replaced and clamped to `[0, 100]`.
    #[inline]
    #[must_use]
    pub fn with_lightness(self, l: f64) -> Self {
        Self {
            l: l.clamp(0.0, 100.0),
            ..self
        }
    }

    /// Convert to CIEXYZ against `white`. See [`lab_to_xyz`].
    #[inline]
    #[must_use]
    pub fn to_xyz(self, white: ReferenceWhite) -> Xyz {
        lab_to_xyz(self, white)
    }
}

impl From<(f64, f64, f64)> for Lab {
    fn from((l, a, b): (f64, f64, f64)) -> Self {
        Self::new(l, a, b)
    }
}

impl From<Lab> for (f64, f64, f64) {
    fn from(v: Lab) -> Self {
        v.tuple()
    }
}

impl Xyz {
    /// Convert to CIELAB against `white`. See [`xyz_to_lab`].
    #[inline]
    #[must_use]
    pub fn to_lab(self, white: ReferenceWhite) -> Lab {
        xyz_to_lab(self, white)
    }
}

#[inline]
fn f(t: f64) -> f64 {
    if t > EPSILON { t.cbrt() } else { KAPPA.mul_add(t, OFFSET) }
}

#[inline]
fn f_inv(t: f64) -> f64 {
    if t > INVERSE_THRESHOLD {
        t * t * t
    } else {
        (t - OFFSET) / KAPPA
    }
}

/// Convert CIEXYZ to CIELAB, normalizing against `white`.
#[must_use]
pub fn xyz_to_lab(xyz: Xyz, white: ReferenceWhite) -> Lab {
    let fx = f(xyz.x / white.x);
    let fy = f(xyz.y / white.y);
    let fz = f(xyz.z / white.z);
    Lab {
        l: 116.0f64.mul_add(fy, -16.0),
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Convert CIELAB to CIEXYZ, scaling by `white`.
///
/// Pass the same white that produced the `Lab` value; anything else skews
/// the round-trip.
#[must_use]
pub fn lab_to_xyz(lab: Lab, white: ReferenceWhite) -> Xyz {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = lab.a / 500.0 + fy;
    let fz = fy - lab.b / 200.0;
    Xyz {
        x: f_inv(fx) * white.x,
        y: f_inv(fy) * white.y,
        z: f_inv(fz) * white.z,
    }
}
