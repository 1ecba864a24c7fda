//! CIEDE2000 colour difference (ΔE00).
//!
//! Follows Bruce Lindbloom's derivation with unit weighting factors
//! (`k_L = k_C = k_H = 1`). The hue terms are the fragile part:
//!
//! - `h'` is `atan2(b, a')` in degrees, in `[0, 360)`, and 0 when both `b`
//!   and `a'` are 0.
//! - `Δh'` always takes the short way round the hue circle, so 350° → 10°
//!   is +20°, never −340°.
//! - The mean hue `h̄'` gets the matching half-turn correction when the two
//!   hues are more than 180° apart, and is kept in `[0, 360)`.
//!
//! Non-finite inputs propagate as NaN rather than being masked.

use tinct_space::Lab;

/// 25⁷, the chroma pivot shared by `G` and `R_C`.
const POW25_7: f64 = 6_103_515_625.0;

/// Perceptual difference between two CIELAB colours.
///
/// Returns a non-negative value; 0 for identical inputs. The function is
/// symmetric in its arguments.
#[must_use]
pub fn delta_e_2000(lab1: Lab, lab2: Lab) -> f64 {
    let Lab { l: l1, a: a1, b: b1 } = lab1;
    let Lab { l: l2, a: a2, b: b2 } = lab2;

    // Chroma, and the a-axis stretch G that corrects near-neutral colours.
    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);
    let c_mean = (c1 + c2) / 2.0;
    let g = 0.5 * (1.0 - chroma_weight(c_mean));

    let a1p = a1 * (1.0 + g);
    let a2p = a2 * (1.0 + g);
    let c1p = a1p.hypot(b1);
    let c2p = a2p.hypot(b2);
    let h1p = hue_angle(a1p, b1);
    let h2p = hue_angle(a2p, b2);

    // Differences.
    let dl = l2 - l1;
    let dc = c2p - c1p;
    let dh = if c1p * c2p == 0.0 {
        0.0
    } else {
        hue_difference(h1p, h2p)
    };
    let dh_big = 2.0 * (c1p * c2p).sqrt() * (dh.to_radians() / 2.0).sin();

    // Means.
    let l_mean = (l1 + l2) / 2.0;
    let cp_mean = (c1p + c2p) / 2.0;
    let hp_mean = mean_hue(h1p, h2p);

    // Weighting functions.
    let t = hue_weight(hp_mean);
    let l_off = (l_mean - 50.0).powi(2);
    let sl = 1.0 + 0.015 * l_off / (20.0 + l_off).sqrt();
    let sc = 0.045f64.mul_add(cp_mean, 1.0);
    let sh = (0.015 * cp_mean).mul_add(t, 1.0);

    // Rotation term for the blue region.
    let d_theta = 30.0 * (-((hp_mean - 275.0) / 25.0).powi(2)).exp();
    let rc = 2.0 * chroma_weight(cp_mean);
    let rt = -rc * (2.0 * d_theta).to_radians().sin();

    let tl = dl / sl;
    let tc = dc / sc;
    let th = dh_big / sh;

    (rt * tc).mul_add(th, th.mul_add(th, tl.mul_add(tl, tc * tc))).sqrt()
}

/// `√(C⁷ / (C⁷ + 25⁷))`.
#[inline]
fn chroma_weight(c: f64) -> f64 {
    let c7 = c.powi(7);
    (c7 / (c7 + POW25_7)).sqrt()
}

/// Hue angle in degrees in `[0, 360)`; 0 for the achromatic origin.
#[inline]
fn hue_angle(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        0.0
    } else {
        b.atan2(a).to_degrees().rem_euclid(360.0)
    }
}

/// Signed hue step from `h1` to `h2` along the short arc, in `[-180, 180]`.
#[inline]
fn hue_difference(h1: f64, h2: f64) -> f64 {
    let d = h2 - h1;
    if d > 180.0 {
        d - 360.0
    } else if d < -180.0 {
        d + 360.0
    } else {
        d
    }
}

/// Mean of two hues on the short arc, in `[0, 360)`.
#[inline]
fn mean_hue(h1: f64, h2: f64) -> f64 {
    let mean = (h1 + h2) / 2.0;
    if (h1 - h2).abs() > 180.0 {
        (mean + 180.0).rem_euclid(360.0)
    } else {
        mean
    }
}

/// The `T` term: hue-dependent weighting of the hue difference.
#[inline]
fn hue_weight(h: f64) -> f64 {
    let cos = |deg: f64| deg.to_radians().cos();
    1.0 - 0.17 * cos(h - 30.0) + 0.24 * cos(2.0 * h) + 0.32 * cos(3.0f64.mul_add(h, 6.0))
        - 0.20 * cos(4.0f64.mul_add(h, -63.0))
}
