//! Putting ΔE00 to work: perceptual buckets, nearest match, deduplication.

use std::fmt;

use tinct_space::Lab;

use crate::ciede2000::delta_e_2000;

/// How visible a ΔE00 difference is to a typical observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Perception {
    /// ΔE00 < 1: not perceptible.
    Imperceptible,
    /// 1 ≤ ΔE00 < 2: perceptible through close observation.
    CloseObservation,
    /// 2 ≤ ΔE00 < 10: perceptible at a glance.
    AtAGlance,
    /// 10 ≤ ΔE00 < 50: clearly different colours.
    Distinct,
    /// ΔE00 ≥ 50: colours are close to opposite.
    Opposite,
}

impl Perception {
    /// Bucket a ΔE00 value. NaN classifies as [`Perception::Opposite`].
    #[must_use]
    pub fn classify(delta_e: f64) -> Self {
        if delta_e < 1.0 {
            Self::Imperceptible
        } else if delta_e < 2.0 {
            Self::CloseObservation
        } else if delta_e < 10.0 {
            Self::AtAGlance
        } else if delta_e < 50.0 {
            Self::Distinct
        } else {
            Self::Opposite
        }
    }

    /// Classify the difference between two colours directly.
    #[must_use]
    pub fn between(lab1: Lab, lab2: Lab) -> Self {
        Self::classify(delta_e_2000(lab1, lab2))
    }
}

impl fmt::Display for Perception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Imperceptible => "imperceptible",
            Self::CloseObservation => "perceptible on close observation",
            Self::AtAGlance => "perceptible at a glance",
            Self::Distinct => "distinct",
            Self::Opposite => "opposite",
        })
    }
}

/// Index and ΔE00 of the candidate closest to `target`.
///
/// Ties keep the earliest candidate. Returns `None` for an empty slice.
#[must_use]
pub fn nearest(target: Lab, candidates: &[Lab]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;

    for (idx, &candidate) in candidates.iter().enumerate() {
        let dist = delta_e_2000(target, candidate);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((idx, dist)),
        }
    }

    best
}

/// Drop colours that are within `threshold` ΔE00 of an earlier kept colour.
///
/// Order is preserved; the first colour of every near-identical group
/// survives.
#[must_use]
pub fn dedup_within(colours: &[Lab], threshold: f64) -> Vec<Lab> {
    let mut kept: Vec<Lab> = Vec::with_capacity(colours.len());
    for &colour in colours {
        if kept
            .iter()
            .all(|&k| delta_e_2000(k, colour) > threshold)
        {
            kept.push(colour);
        }
    }
    kept
}
