//! Symmetry detection against a known set.
//!
//! The matchers are stateless: they scan the known set in insertion order and
//! report the first entry within tolerance. Recording which symmetries a user
//! has already found is the caller's job (`FoundSymmetries`).
//!
//! Reference sets for a regular n-gon (vertex 0 on the positive x axis):
//! - rotations `k·360/n` for `k = 0..n` (cyclic group of order n);
//! - reflection lines at `k·180/n` for `k = 0..n` (through vertices and
//!   edge midpoints).

use std::fmt;

use crate::angle::{circular_distance_deg, normalize_deg};
use crate::line::Line2;

/// First index of `known_deg` whose angle is within `eps` degrees of
/// `candidate_deg` on the 360° circle.
pub fn find_rotation_match(candidate_deg: f64, known_deg: &[f64], eps: f64) -> Option<usize> {
    let found = known_deg
        .iter()
        .position(|&k| circular_distance_deg(candidate_deg, k) <= eps);
    tracing::debug!(candidate_deg, eps, ?found, "rotation match");
    found
}

/// First index of `known` whose line is within `eps` radians of `candidate`.
pub fn find_line_match(candidate: &Line2, known: &[Line2], eps: f64) -> Option<usize> {
    let found = known.iter().position(|l| l.angle_within_eps(candidate, eps));
    tracing::debug!(
        candidate_deg = candidate.angle_deg(),
        eps,
        ?found,
        "line match"
    );
    found
}

/// Rotation angles of the regular `n`-gon in degrees, identity first,
/// each normalized to `(-180, 180]`.
pub fn regular_polygon_rotations_deg(n: usize) -> Vec<f64> {
    let step = 360.0 / n as f64;
    (0..n).map(|k| normalize_deg(k as f64 * step)).collect()
}

/// The `n - 1` non-identity rotations, the set a user is asked to find.
pub fn regular_polygon_nontrivial_rotations_deg(n: usize) -> Vec<f64> {
    regular_polygon_rotations_deg(n).into_iter().skip(1).collect()
}

/// The `n` mirror lines of the regular `n`-gon, in order of `k·180/n`.
pub fn regular_polygon_reflection_lines(n: usize) -> Vec<Line2> {
    let step = 180.0 / n as f64;
    (0..n)
        .map(|k| Line2::from_angle_deg(k as f64 * step))
        .collect()
}

/// Point group of a plane figure about the origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymmetryGroup {
    /// Rotations only, order `n`.
    Cyclic(usize),
    /// `n` rotations and `n` reflections, order `2n`.
    Dihedral(usize),
}

impl SymmetryGroup {
    pub fn of_regular_polygon(n: usize) -> Self {
        SymmetryGroup::Dihedral(n)
    }

    pub fn order(&self) -> usize {
        match *self {
            SymmetryGroup::Cyclic(n) => n,
            SymmetryGroup::Dihedral(n) => 2 * n,
        }
    }

    /// Number of rotations in the group (the cyclic part).
    pub fn rotation_count(&self) -> usize {
        match *self {
            SymmetryGroup::Cyclic(n) | SymmetryGroup::Dihedral(n) => n,
        }
    }

    pub fn reflection_count(&self) -> usize {
        match *self {
            SymmetryGroup::Cyclic(_) => 0,
            SymmetryGroup::Dihedral(n) => n,
        }
    }
}

impl fmt::Display for SymmetryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymmetryGroup::Cyclic(n) => write!(f, "C{n}"),
            SymmetryGroup::Dihedral(n) => write!(f, "D{n}"),
        }
    }
}

/// Ordered record of the symmetries a user has discovered so far.
///
/// Owned by the caller; order of discovery is kept for display, membership is
/// decided by the `same` predicate passed to `record`.
#[derive(Clone, Debug)]
pub struct FoundSymmetries<T> {
    found: Vec<T>,
}

impl<T> Default for FoundSymmetries<T> {
    fn default() -> Self {
        Self { found: Vec::new() }
    }
}

impl<T> FoundSymmetries<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `candidate` unless an entry already matches it.
    /// Returns `true` if this is a first-time find.
    pub fn record<F>(&mut self, candidate: T, same: F) -> bool
    where
        F: Fn(&T, &T) -> bool,
    {
        if self.found.iter().any(|f| same(f, &candidate)) {
            return false;
        }
        self.found.push(candidate);
        true
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.found.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.found.iter()
    }

    /// All `total` symmetries of the reference set have been found.
    pub fn is_complete(&self, total: usize) -> bool {
        self.found.len() == total
    }

    pub fn clear(&mut self) {
        self.found.clear();
    }
}

impl FoundSymmetries<f64> {
    /// Record a rotation angle in degrees, deduplicated on the circle.
    pub fn record_rotation(&mut self, deg: f64, eps: f64) -> bool {
        self.record(deg, |a, b| circular_distance_deg(*a, *b) <= eps)
    }
}

impl FoundSymmetries<Line2> {
    /// Record a mirror line, deduplicated by canonical angle.
    pub fn record_line(&mut self, line: Line2, eps: f64) -> bool {
        self.record(line, |a, b| a.angle_within_eps(b, eps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rotation_match_picks_first_within_eps() {
        let known = [30.0, 90.0, 150.0];
        assert_eq!(find_rotation_match(90.005, &known, 0.01), Some(1));
        assert_eq!(find_rotation_match(45.0, &known, 0.01), None);
        // Same angle modulo 360.
        assert_eq!(find_rotation_match(-270.0, &known, 0.01), Some(1));
        assert_eq!(find_rotation_match(390.0, &known, 0.01), Some(0));
    }

    #[test]
    fn rotation_match_ties_go_to_earliest() {
        let known = [10.0, 10.004, 10.0];
        assert_eq!(find_rotation_match(10.003, &known, 0.01), Some(0));
    }

    #[test]
    fn rotation_match_across_zero() {
        let known = [0.0, 180.0];
        assert_eq!(find_rotation_match(359.995, &known, 0.01), Some(0));
        assert_eq!(find_rotation_match(-180.0, &known, 0.01), Some(1));
    }

    #[test]
    fn line_match_snaps_to_reference() {
        let known = regular_polygon_reflection_lines(8);
        let click = Line2::from_angle_deg(46.0);
        assert_eq!(find_line_match(&click, &known, 0.04), Some(2));
        let off = Line2::from_angle_deg(33.75);
        assert_eq!(find_line_match(&off, &known, 0.04), None);
        // -89° is close to the vertical mirror at index 4.
        assert_eq!(find_line_match(&Line2::from_angle_deg(-89.0), &known, 0.04), Some(4));
    }

    #[test]
    fn heptagon_rotation_set() {
        let rots = regular_polygon_nontrivial_rotations_deg(7);
        assert_eq!(rots.len(), 6);
        assert_relative_eq!(rots[0], 360.0 / 7.0, epsilon = 1e-12);
        // 4·360/7 ≈ 205.7 normalizes to ≈ -154.3
        assert!(rots[3] < 0.0);
    }

    #[test]
    fn group_labels() {
        assert_eq!(SymmetryGroup::Cyclic(4).to_string(), "C4");
        let d8 = SymmetryGroup::of_regular_polygon(8);
        assert_eq!(d8.to_string(), "D8");
        assert_eq!(d8.order(), 16);
        assert_eq!(d8.rotation_count(), 8);
        assert_eq!(d8.reflection_count(), 8);
    }

    #[test]
    fn found_record_deduplicates() {
        let mut found = FoundSymmetries::new();
        assert!(found.record_rotation(90.0, 0.01));
        assert!(!found.record_rotation(-270.0, 0.01));
        assert!(found.record_rotation(180.0, 0.01));
        assert_eq!(found.len(), 2);
        assert!(!found.is_complete(3));
        assert!(found.record_rotation(270.0, 0.01));
        assert!(found.is_complete(3));
        assert_eq!(found.iter().copied().collect::<Vec<_>>(), vec![90.0, 180.0, 270.0]);

        let mut lines = FoundSymmetries::new();
        assert!(lines.record_line(Line2::vertical(), 0.0));
        assert!(!lines.record_line(Line2::from_angle_deg(-90.0), 0.0));
        assert_eq!(lines.len(), 1);
    }
}
