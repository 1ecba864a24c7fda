//! WCAG 2.1 contrast ratio and readability enforcement.
//!
//! Ratios are measured on relative luminance, which is the Y of sRGB→XYZ
//! rescaled to `[0, 1]`. Adjustments move CIELAB lightness only, so the
//! foreground keeps its a/b (and therefore its hue) while it is pushed
//! lighter or darker.

use tinct_space::{ReferenceWhite, Rgba, rgb_to_xyz};
use tracing::debug;

/// WCAG AA minimum for body text.
pub const AA_NORMAL_TEXT: f64 = 4.5;

/// WCAG AAA minimum for body text.
pub const AAA_NORMAL_TEXT: f64 = 7.0;

/// Relative luminance per WCAG 2.1, in `[0, 1]`.
///
/// Alpha is ignored.
#[must_use]
pub fn relative_luminance(colour: Rgba) -> f64 {
    rgb_to_xyz(colour).y / 100.0
}

/// WCAG 2.1 contrast ratio, in `[1, 21]` regardless of argument order.
#[must_use]
pub fn contrast_ratio(a: Rgba, b: Rgba) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Adjust `fg`'s CIELAB lightness until it reaches `min_ratio` against `bg`.
///
/// A foreground brighter than the background is lightened first; otherwise
/// it is darkened first. When that direction cannot reach the ratio even at
/// its extreme, the opposite direction is tried. Bisection keeps the result
/// as close to the original lightness as the ratio allows. If neither
/// L = 0 nor L = 100 reaches the ratio, whichever extreme comes closer is
/// returned. Alpha is carried over unchanged.
#[must_use]
pub fn ensure_contrast(fg: Rgba, bg: Rgba, min_ratio: f64, white: ReferenceWhite) -> Rgba {
    if contrast_ratio(fg, bg) >= min_ratio {
        return fg;
    }

    let lab = rgb_to_xyz(fg).to_lab(white);
    let at = |l: f64| {
        lab.with_lightness(l)
            .to_xyz(white)
            .to_rgba()
            .with_alpha(fg.alpha)
    };

    let preferred = relative_luminance(bg) < relative_luminance(fg);
    let mut fallback = None;
    for lighten in [preferred, !preferred] {
        let extreme = at(if lighten { 100.0 } else { 0.0 });
        let reached = contrast_ratio(extreme, bg);
        if reached >= min_ratio {
            return bisect(lab.l, lighten, extreme, |l| {
                let candidate = at(l);
                (contrast_ratio(candidate, bg) >= min_ratio).then_some(candidate)
            });
        }
        match fallback {
            Some((_, best)) if best >= reached => {}
            _ => fallback = Some((extreme, reached)),
        }
    }

    let (extreme, best_possible) = fallback.unwrap_or((fg, contrast_ratio(fg, bg)));
    debug!(min_ratio, best_possible, "contrast target unreachable, using extreme lightness");
    extreme
}

/// Search between `start` and the extreme in the given direction for the
/// lightness closest to `start` that `accept` takes. `extreme` must pass.
fn bisect(start: f64, lighten: bool, extreme: Rgba, accept: impl Fn(f64) -> Option<Rgba>) -> Rgba {
    let (mut lo, mut hi) = if lighten { (start, 100.0) } else { (0.0, start) };
    let mut best = extreme;
    for _ in 0..32 {
        let mid = (lo + hi) * 0.5;
        let passed = accept(mid);
        if let Some(candidate) = passed {
            best = candidate;
        }
        // Move toward `start` on success, away from it on failure.
        if passed.is_some() == lighten {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    best
}
