// SPDX-License-Identifier: MIT
//
// Gamma-encoded sRGB with an alpha channel.
//
// Out-of-range policy: channels outside 0–255 and alpha outside 0–1 are
// clamped to the nearest bound, never rejected. Every numeric entry point
// in the workspace funnels through `Rgba::clamped`, so the policy is
// applied in exactly one place. Each correction emits a `trace` event
// and has no other side effect.
//
// Alpha is metadata. It is carried through every conversion untouched and
// never participates in colour-space arithmetic.

use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An 8-bit sRGB colour with a real-valued alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,

    /// Opacity: 0.0 (fully transparent) to 1.0 (fully opaque).
    pub alpha: f64,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create an opaque colour.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    /// Create a colour with alpha, clamping alpha into `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn new(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self {
            r,
            g,
            b,
            alpha: clamp_alpha(alpha),
        }
    }

    /// Create a colour from unchecked integer channels.
    ///
    /// Channels are clamped to `0..=255` and alpha to `[0, 1]`, so
    /// `Rgba::clamped(300, -10, 128, 1.0)` equals `Rgba::rgb(255, 0, 128)`.
    #[must_use]
    pub fn clamped(r: i32, g: i32, b: i32, alpha: f64) -> Self {
        Self {
            r: clamp_channel("r", r),
            g: clamp_channel("g", g),
            b: clamp_channel("b", b),
            alpha: clamp_alpha(alpha),
        }
    }

    /// Return a copy with the given alpha (clamped into `[0, 1]`).
    #[inline]
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: clamp_alpha(alpha),
            ..self
        }
    }

    /// Whether this colour is fully opaque.
    #[inline]
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.alpha >= 1.0
    }

    /// Channels normalized to `[0, 1]`.
    #[must_use]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Components as an `(r, g, b, alpha)` tuple.
    #[inline]
    #[must_use]
    pub const fn tuple(self) -> (u8, u8, u8, f64) {
        (self.r, self.g, self.b, self.alpha)
    }
}

impl Default for Rgba {
    /// Default is fully opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<(u8, u8, u8)> for Rgba {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Rgba {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::new(r, g, b, f64::from(a) / 255.0)
    }
}

impl From<Rgba> for (u8, u8, u8, f64) {
    fn from(c: Rgba) -> Self {
        c.tuple()
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_channel(channel: &'static str, value: i32) -> u8 {
    let clamped = value.clamp(0, 255);
    if clamped != value {
        trace!(channel, value, clamped, "colour channel out of range, clamped");
    }
    // Safe: clamp guarantees 0 <= clamped <= 255.
    clamped as u8
}

fn clamp_alpha(alpha: f64) -> f64 {
    let clamped = alpha.clamp(0.0, 1.0);
    if clamped != alpha && !alpha.is_nan() {
        trace!(channel = "alpha", value = alpha, clamped, "alpha out of range, clamped");
    }
    clamped
}

/// Quantize a unit-range value to a byte, rounding to nearest.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn unit_to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).clamp(0.0, 255.0).round() as u8
}
