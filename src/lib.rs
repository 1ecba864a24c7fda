// SPDX-License-Identifier: MIT
//
// tinct: perceptual colour conversion and colour difference.
//
// This is the facade that wires the workspace crates together:
//
//   tinct-space → value types, hex codec, sRGB ↔ XYZ ↔ LAB transforms
//   tinct-delta → CIEDE2000, perceptual buckets, WCAG contrast
//
// A `Converter` owns the one piece of configuration in the pipeline, the
// reference white, and hands that same white to both LAB directions. The
// free functions below are the same operations on `Converter::default()`
// (D65, 2° observer):
//
//   hex_to_rgba   rgb_to_xyz   xyz_to_rgba   xyz_to_lab   lab_to_xyz
//   hex_to_lab    rgba_to_lab  lab_to_rgba   delta_e00    adjust_lightness
//
// Out-of-range integer channels and alpha are clamped, never rejected.
// Malformed hex strings are the only failure (`ColourError::InvalidFormat`).

use tracing::trace;

pub use tinct_delta as delta;
pub use tinct_space as space;

pub use tinct_delta::Perception;
pub use tinct_space::{ColourError, FormatErrorKind, Lab, ReferenceWhite, Result, Rgba, Xyz};

// ─── Converter ───────────────────────────────────────────────────────────────

/// Colour conversions bound to a single reference white.
///
/// ```
/// use tinct::{Converter, ReferenceWhite};
///
/// let d65 = Converter::default();
/// let red = d65.hex_to_lab("#FF0000").unwrap();
/// assert!((red.l - 53.24).abs() < 0.01);
///
/// let wide = Converter::new(ReferenceWhite::D65_10);
/// assert_ne!(wide.hex_to_lab("#FF0000").unwrap(), red);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Converter {
    white: ReferenceWhite,
}

impl Converter {
    #[must_use]
    pub const fn new(white: ReferenceWhite) -> Self {
        Self { white }
    }

    /// The reference white used in both LAB directions.
    #[must_use]
    pub const fn white(self) -> ReferenceWhite {
        self.white
    }

    #[must_use]
    pub fn xyz_to_lab(self, xyz: Xyz) -> Lab {
        space::xyz_to_lab(xyz, self.white)
    }

    #[must_use]
    pub fn lab_to_xyz(self, lab: Lab) -> Xyz {
        space::lab_to_xyz(lab, self.white)
    }

    /// Decode a hex string straight to CIELAB. Any alpha digits are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ColourError::InvalidFormat`] for malformed hex.
    pub fn hex_to_lab(self, hex: &str) -> Result<Lab> {
        let colour = space::hex::decode(hex)?;
        Ok(self.rgba_to_lab(colour))
    }

    /// sRGB → CIELAB. Alpha does not take part.
    #[must_use]
    pub fn rgba_to_lab(self, colour: Rgba) -> Lab {
        self.xyz_to_lab(space::rgb_to_xyz(colour))
    }

    /// CIELAB → sRGB with alpha 1. Out-of-gamut channels are clamped.
    #[must_use]
    pub fn lab_to_rgba(self, lab: Lab) -> Rgba {
        space::xyz_to_rgb(self.lab_to_xyz(lab))
    }

    /// Scale CIELAB lightness by `1 + factor` and convert back.
    ///
    /// Negative factors darken and positive ones brighten. The new
    /// lightness is clamped to `[0, 100]`; a and b are kept, and the
    /// original alpha is reattached untouched.
    #[must_use]
    pub fn adjust_lightness(self, colour: Rgba, factor: f64) -> Rgba {
        let lab = self.rgba_to_lab(colour);
        let requested = lab.l * (1.0 + factor);
        let adjusted = lab.with_lightness(requested);
        if adjusted.l != requested && !requested.is_nan() {
            trace!(requested, clamped = adjusted.l, "lightness adjustment saturated");
        }
        self.lab_to_rgba(adjusted).with_alpha(colour.alpha)
    }

    /// [`adjust_lightness`](Self::adjust_lightness) by `+amount`.
    #[must_use]
    pub fn lighten(self, colour: Rgba, amount: f64) -> Rgba {
        self.adjust_lightness(colour, amount)
    }

    /// [`adjust_lightness`](Self::adjust_lightness) by `-amount`.
    #[must_use]
    pub fn darken(self, colour: Rgba, amount: f64) -> Rgba {
        self.adjust_lightness(colour, -amount)
    }

    /// Push `fg`'s lightness until it reaches `min_ratio` WCAG contrast
    /// against `bg`. See [`delta::ensure_contrast`].
    #[must_use]
    pub fn ensure_contrast(self, fg: Rgba, bg: Rgba, min_ratio: f64) -> Rgba {
        delta::ensure_contrast(fg, bg, min_ratio, self.white)
    }
}

// ─── Free Functions ──────────────────────────────────────────────────────────

/// Decode `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
///
/// # Errors
///
/// Returns [`ColourError::InvalidFormat`] for a bad length or a non-hex
/// character.
pub fn hex_to_rgba(hex: &str) -> Result<Rgba> {
    space::hex::decode(hex)
}

/// Encode as uppercase `#RRGGBB` (or `#RRGGBBAA` when translucent).
#[must_use]
pub fn rgba_to_hex(colour: Rgba) -> String {
    space::hex::encode(colour)
}

/// sRGB → CIEXYZ from unchecked integer channels (clamped to 0–255).
#[must_use]
pub fn rgb_to_xyz(r: i32, g: i32, b: i32) -> Xyz {
    space::rgb_to_xyz(Rgba::clamped(r, g, b, 1.0))
}

/// CIEXYZ → sRGB with alpha 1.
#[must_use]
pub fn xyz_to_rgba(xyz: Xyz) -> Rgba {
    space::xyz_to_rgb(xyz)
}

/// CIEXYZ → CIELAB under D65/2°.
#[must_use]
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    Converter::default().xyz_to_lab(xyz)
}

/// CIELAB → CIEXYZ under D65/2°.
#[must_use]
pub fn lab_to_xyz(lab: Lab) -> Xyz {
    Converter::default().lab_to_xyz(lab)
}

/// Hex → CIELAB under D65/2°.
///
/// # Errors
///
/// Returns [`ColourError::InvalidFormat`] for malformed hex.
pub fn hex_to_lab(hex: &str) -> Result<Lab> {
    Converter::default().hex_to_lab(hex)
}

/// sRGB → CIELAB under D65/2°.
#[must_use]
pub fn rgba_to_lab(colour: Rgba) -> Lab {
    Converter::default().rgba_to_lab(colour)
}

/// CIELAB → sRGB under D65/2°, alpha 1.
#[must_use]
pub fn lab_to_rgba(lab: Lab) -> Rgba {
    Converter::default().lab_to_rgba(lab)
}

/// CIEDE2000 difference between two CIELAB colours.
#[must_use]
pub fn delta_e00(lab1: Lab, lab2: Lab) -> f64 {
    delta::delta_e_2000(lab1, lab2)
}

/// Scale lightness by `1 + factor` under D65/2°, keeping alpha.
#[must_use]
pub fn adjust_lightness(colour: Rgba, factor: f64) -> Rgba {
    Converter::default().adjust_lightness(colour, factor)
}
