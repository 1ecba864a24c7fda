// SPDX-License-Identifier: MIT
//
// Hex codec: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` ↔ `Rgba`.
//
// The leading `#` is optional and digits are case-insensitive. Short forms
// are nibble-doubled (`#F80` is `#FF8800`). A trailing alpha byte becomes
// `alpha / 255`. Encoding always writes uppercase and only appends the alpha
// byte when it would be something other than `FF`.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{ColourError, FormatErrorKind, Result};
use crate::rgba::{Rgba, unit_to_u8};

/// Decode a hex colour string.
///
/// # Errors
///
/// Returns [`ColourError::InvalidFormat`] if the string (after an optional
/// `#`) contains a non-hex character or does not have 3, 4, 6 or 8 digits.
#[allow(clippy::cast_possible_truncation)]
pub fn decode(hex: &str) -> Result<Rgba> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    // Only the first 8 nibbles are stored; longer input is rejected below
    // by length, after every character has been checked.
    let mut n = [0u8; 8];
    let mut len = 0usize;
    for c in digits.chars() {
        let value = c
            .to_digit(16)
            .ok_or_else(|| reject(hex, FormatErrorKind::Digit(c)))?;
        if let Some(slot) = n.get_mut(len) {
            *slot = value as u8;
        }
        len += 1;
    }

    let (r, g, b, a) = match len {
        3 => (n[0] * 17, n[1] * 17, n[2] * 17, None),
        4 => (n[0] * 17, n[1] * 17, n[2] * 17, Some(n[3] * 17)),
        6 => (byte(n[0], n[1]), byte(n[2], n[3]), byte(n[4], n[5]), None),
        8 => (
            byte(n[0], n[1]),
            byte(n[2], n[3]),
            byte(n[4], n[5]),
            Some(byte(n[6], n[7])),
        ),
        other => return Err(reject(hex, FormatErrorKind::Length(other))),
    };

    Ok(match a {
        Some(a) => Rgba::new(r, g, b, f64::from(a) / 255.0),
        None => Rgba::rgb(r, g, b),
    })
}

/// Encode as `#RRGGBB`, or `#RRGGBBAA` when alpha quantizes below `FF`.
#[must_use]
pub fn encode(colour: Rgba) -> String {
    let Rgba { r, g, b, alpha } = colour;
    match unit_to_u8(alpha) {
        255 => format!("#{r:02X}{g:02X}{b:02X}"),
        a => format!("#{r:02X}{g:02X}{b:02X}{a:02X}"),
    }
}

#[inline]
const fn byte(hi: u8, lo: u8) -> u8 {
    (hi << 4) | lo
}

fn reject(input: &str, kind: FormatErrorKind) -> ColourError {
    debug!(input, reason = %kind, "rejected hex colour");
    ColourError::invalid_format(input, kind)
}

impl FromStr for Rgba {
    type Err = ColourError;

    fn from_str(s: &str) -> Result<Self> {
        decode(s)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(*self))
    }
}
