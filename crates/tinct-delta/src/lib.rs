//! # tinct-delta: perceptual colour difference
//!
//! Measures how different two colours look rather than how different
//! their numbers are.
//!
//! # Architecture
//!
//! ```text
//! Lab, Lab
//!     │
//!     ▼
//! ciede2000.rs:  ΔE00 (pure math, no state)
//!     │
//!     ▼
//! perception.rs: buckets, nearest match, near-duplicate removal
//!
//! Rgba, Rgba
//!     │
//!     ▼
//! contrast.rs:   WCAG luminance ratio, lightness-only correction
//! ```
//!
//! Every function here is pure and re-entrant; the degree/radian helpers
//! are plain `f64` methods, not shared state.

// Single-char math variables are standard in colour science.
#![allow(clippy::many_single_char_names)]
// Lightness/chroma/hue variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod ciede2000;
pub mod contrast;
pub mod perception;

pub use ciede2000::delta_e_2000;
pub use contrast::{contrast_ratio, ensure_contrast, relative_luminance};
pub use perception::{Perception, dedup_within, nearest};
