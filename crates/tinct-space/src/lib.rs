// SPDX-License-Identifier: MIT
//
// tinct-space: colour space engine for tinct.
//
// Value types and the layered conversion pipeline:
//
//   hex ↔ Rgba ↔ Xyz ↔ Lab
//    │      │      │     └─ lab.rs   (needs a ReferenceWhite, white.rs)
//    │      │      └─────── xyz.rs   (sRGB gamma + IEC 61966-2-1 matrix)
//    │      └────────────── rgba.rs  (clamp-on-entry policy)
//    └───────────────────── hex.rs   (3/4/6/8-digit codec)
//
// Every function is pure over small `Copy` values. There is no global
// state, so everything here is safe to call from any thread.

pub mod error;
pub mod hex;
pub mod lab;
pub mod rgba;
pub mod white;
pub mod xyz;

pub use error::{ColourError, FormatErrorKind, Result};
pub use lab::{Lab, lab_to_xyz, xyz_to_lab};
pub use rgba::Rgba;
pub use white::ReferenceWhite;
pub use xyz::{Xyz, rgb_to_xyz, xyz_to_rgb};
