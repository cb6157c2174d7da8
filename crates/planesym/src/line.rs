//! Undirected lines through the origin.
//!
//! Invariants of `Line2`
//! - `dir` is a unit vector `(cos θ, sin θ)` with `θ ∈ (-π/2, π/2]`, i.e.
//!   `dir.x > 0`, or `dir == (0, 1)` exactly for the vertical line.
//! - Directions with a component below `AXIS_EPS` are snapped onto the axis,
//!   so vertical and horizontal lines are exact values and slope queries
//!   never divide by a (near) zero component.
//! - `v` and `λ v` (any `λ ≠ 0`, sign included) give identical `Line2` values.

use std::f64::consts::FRAC_PI_2;
use std::fmt;

use nalgebra::{Vector2, Vector3};

use crate::angle::{line_distance_rad, normalize_line_rad};
use crate::cfg::AXIS_EPS;
use crate::error::GeomError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line2 {
    dir: Vector2<f64>,
}

/// Display form of a line: `y·Y = x·X`.
///
/// Non-vertical lines report `{x: slope, y: 1}` (read "Y = slope·X");
/// the vertical line reports `{x: 1, y: 0}` with `vertical` set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineEquation {
    pub x: f64,
    pub y: f64,
    pub vertical: bool,
}

impl fmt::Display for LineEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.vertical {
            write!(f, "x = 0")
        } else {
            write!(f, "y = {}x", self.x)
        }
    }
}

impl Line2 {
    /// Line spanned by `v`. Fails on a zero-length or non-finite vector.
    pub fn from_direction(v: Vector2<f64>) -> Result<Self, GeomError> {
        let scale = v.amax();
        if !v.x.is_finite() || !v.y.is_finite() || scale == 0.0 {
            return Err(GeomError::invalid(format!(
                "line direction must be finite and non-zero, got ({}, {})",
                v.x, v.y
            )));
        }
        // Rescale first so the norm neither underflows nor overflows.
        let u = v / scale;
        Ok(Self::canonical(u / u.norm()))
    }

    /// Line through the origin and `p`.
    #[inline]
    pub fn through_point(p: Vector2<f64>) -> Result<Self, GeomError> {
        Self::from_direction(p)
    }

    /// Line at angle `theta` (radians, any value; reduced modulo π).
    pub fn from_angle_rad(theta: f64) -> Self {
        let th = normalize_line_rad(theta);
        Self::canonical(Vector2::new(th.cos(), th.sin()))
    }

    #[inline]
    pub fn from_angle_deg(theta: f64) -> Self {
        Self::from_angle_rad(theta.to_radians())
    }

    /// `y = m x`. A non-finite slope is read as the vertical line.
    pub fn from_slope(m: f64) -> Self {
        if !m.is_finite() {
            return Self::vertical();
        }
        let v = Vector2::new(1.0, m);
        Self::canonical(v / v.norm())
    }

    #[inline]
    pub fn vertical() -> Self {
        Self {
            dir: Vector2::new(0.0, 1.0),
        }
    }

    #[inline]
    pub fn horizontal() -> Self {
        Self {
            dir: Vector2::new(1.0, 0.0),
        }
    }

    /// `u` must be a unit vector.
    fn canonical(u: Vector2<f64>) -> Self {
        if u.x.abs() <= AXIS_EPS {
            return Self::vertical();
        }
        if u.y.abs() <= AXIS_EPS {
            return Self::horizontal();
        }
        let dir = if u.x < 0.0 { -u } else { u };
        Self { dir }
    }

    /// Canonical angle in radians, `(-π/2, π/2]`.
    #[inline]
    pub fn angle(&self) -> f64 {
        if self.is_vertical() {
            FRAC_PI_2
        } else {
            self.dir.y.atan2(self.dir.x)
        }
    }

    /// Canonical angle in degrees, `(-90, 90]`.
    #[inline]
    pub fn angle_deg(&self) -> f64 {
        if self.is_vertical() {
            90.0
        } else {
            self.angle().to_degrees()
        }
    }

    /// Canonical unit direction (see module invariants for the sign choice).
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.dir
    }

    /// Direction embedded in the `z = 0` plane; the reflection axis in 3D.
    #[inline]
    pub fn direction3(&self) -> Vector3<f64> {
        Vector3::new(self.dir.x, self.dir.y, 0.0)
    }

    /// Unit normal, the direction rotated by +90°.
    #[inline]
    pub fn normal(&self) -> Vector2<f64> {
        Vector2::new(-self.dir.y, self.dir.x)
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.dir.x == 0.0
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.dir.y == 0.0
    }

    /// `None` for the vertical line.
    #[inline]
    pub fn slope(&self) -> Option<f64> {
        if self.is_vertical() {
            None
        } else {
            Some(self.dir.y / self.dir.x)
        }
    }

    pub fn equation(&self) -> LineEquation {
        match self.slope() {
            Some(m) => LineEquation {
                x: m,
                y: 1.0,
                vertical: false,
            },
            None => LineEquation {
                x: 1.0,
                y: 0.0,
                vertical: true,
            },
        }
    }

    /// True iff the canonical angles differ by at most `eps` radians, with the
    /// difference taken modulo π (so lines near ±90° compare as close).
    #[inline]
    pub fn angle_within_eps(&self, other: &Line2, eps: f64) -> bool {
        line_distance_rad(self.angle(), other.angle()) <= eps
    }

    /// Line after the user types a new slope for `y = slope·x`.
    ///
    /// A vertical line has no slope field to edit and stays vertical; slope 0
    /// is the horizontal line.
    pub fn with_slope_input(&self, slope: f64) -> Line2 {
        if self.is_vertical() {
            Line2::vertical()
        } else if slope == 0.0 {
            Line2::horizontal()
        } else {
            Line2::from_slope(slope)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::vector;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn opposite_directions_are_the_same_line() {
        let a = Line2::from_direction(vector![1.0, 1.0]).unwrap();
        let b = Line2::from_direction(vector![-1.0, -1.0]).unwrap();
        let c = Line2::from_direction(vector![3.0, 3.0]).unwrap();
        assert_eq!(a.angle(), b.angle());
        assert!(a.angle_within_eps(&b, 0.0));
        assert_relative_eq!(a.angle(), FRAC_PI_4, epsilon = 1e-15);
        assert_relative_eq!(a.direction(), c.direction(), epsilon = 1e-15);
    }

    #[test]
    fn zero_direction_is_invalid() {
        let err = Line2::from_direction(vector![0.0, 0.0]).unwrap_err();
        assert!(matches!(err, GeomError::InvalidArgument(_)));
        assert!(Line2::through_point(vector![f64::NAN, 1.0]).is_err());
    }

    #[test]
    fn vertical_line_is_exact_and_safe() {
        let l = Line2::from_direction(vector![0.0, 1.0]).unwrap();
        assert!(l.is_vertical());
        assert_eq!(l.angle_deg(), 90.0);
        let eq = l.equation();
        assert!(eq.vertical);
        assert_eq!((eq.x, eq.y), (1.0, 0.0));
        assert!(l.slope().is_none());
        assert_eq!(eq.to_string(), "x = 0");

        let down = Line2::from_direction(vector![0.0, -5.0]).unwrap();
        assert_eq!(down, l);
        // cos(π/2) is not exactly zero; snapping keeps it vertical.
        assert!(Line2::from_angle_rad(FRAC_PI_2).is_vertical());
        assert!(Line2::from_angle_deg(-90.0).is_vertical());
    }

    #[test]
    fn horizontal_line() {
        let l = Line2::through_point(vector![-2.0, 0.0]).unwrap();
        assert!(l.is_horizontal());
        assert_eq!(l.angle(), 0.0);
        assert_eq!(l.direction(), vector![1.0, 0.0]);
        assert_eq!(l.equation().x, 0.0);
    }

    #[test]
    fn direction_sign_is_canonical() {
        let l = Line2::through_point(vector![-1.0, 2.0]).unwrap();
        assert!(l.direction().x > 0.0);
        assert_relative_eq!(l.direction().norm(), 1.0, epsilon = 1e-15);
        assert_relative_eq!(l.slope().unwrap(), -2.0, epsilon = 1e-12);
        assert!(l.angle_deg() < 0.0 && l.angle_deg() > -90.0);
    }

    #[test]
    fn equation_reports_slope() {
        let l = Line2::through_point(vector![2.0, 1.0]).unwrap();
        let eq = l.equation();
        assert!(!eq.vertical);
        assert_relative_eq!(eq.x, 0.5, epsilon = 1e-12);
        assert_eq!(eq.y, 1.0);
    }

    #[test]
    fn near_vertical_lines_compare_across_wraparound() {
        let a = Line2::from_angle_deg(89.9);
        let b = Line2::from_angle_deg(-89.9);
        assert!(a.angle_within_eps(&b, 0.2_f64.to_radians() + 1e-12));
        assert!(!a.angle_within_eps(&b, 0.1_f64.to_radians()));
    }

    #[test]
    fn slope_input_special_cases() {
        let v = Line2::vertical();
        assert!(v.with_slope_input(3.0).is_vertical());
        let l = Line2::from_slope(1.0);
        assert!(l.with_slope_input(0.0).is_horizontal());
        assert_relative_eq!(l.with_slope_input(-2.0).slope().unwrap(), -2.0, epsilon = 1e-12);
        assert!(Line2::from_slope(f64::INFINITY).is_vertical());
    }

    #[test]
    fn extreme_magnitudes_keep_their_direction() {
        let tiny = Line2::from_direction(vector![1e-170, 1e-170]).unwrap();
        assert_relative_eq!(tiny.angle_deg(), 45.0, epsilon = 1e-12);
        assert_relative_eq!(tiny.direction().norm(), 1.0, epsilon = 1e-15);
        let huge = Line2::from_direction(vector![1e200, -1e200]).unwrap();
        assert_relative_eq!(huge.angle_deg(), -45.0, epsilon = 1e-12);
        let sub = Line2::from_direction(vector![0.0, -5e-324]).unwrap();
        assert!(sub.is_vertical());
        assert!(Line2::from_direction(vector![f64::MAX, f64::INFINITY]).is_err());
        assert!(Line2::from_direction(vector![f64::NAN, 1.0]).is_err());
    }
}
