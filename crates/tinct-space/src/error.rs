// SPDX-License-Identifier: MIT
//
// Error type shared by every tinct crate.
//
// Only malformed text is an error. Numeric inputs outside their nominal
// range are clamped (see `rgba.rs`) and never reach this type.

use thiserror::Error;

/// Why a hex colour string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatErrorKind {
    /// Digit count (after stripping `#`) is not 3, 4, 6 or 8.
    #[error("expected 3, 4, 6 or 8 hex digits, found {0}")]
    Length(usize),

    /// A character outside `[0-9a-fA-F]`.
    #[error("{0:?} is not a hexadecimal digit")]
    Digit(char),
}

/// Errors produced while decoding colours or parsing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColourError {
    /// The input is not a well-formed `#RGB`, `#RGBA`, `#RRGGBB` or
    /// `#RRGGBBAA` string.
    #[error("invalid hex colour {input:?}: {kind}")]
    InvalidFormat {
        input: String,
        kind: FormatErrorKind,
    },

    /// The name does not match any known reference white.
    #[error("unknown reference white {0:?} (expected d65/2 or d65/10)")]
    UnknownWhite(String),
}

impl ColourError {
    pub(crate) fn invalid_format(input: &str, kind: FormatErrorKind) -> Self {
        Self::InvalidFormat {
            input: input.to_owned(),
            kind,
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ColourError>;
