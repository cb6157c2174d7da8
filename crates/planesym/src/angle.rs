//! Angle normalization.
//!
//! Two periodicities matter here:
//! - free rotations repeat every 360°, canonical range `(-180, 180]`;
//! - undirected lines repeat every 180°, canonical range `(-90, 90]`.
//!
//! All functions are total over finite input. NaN or infinite input is out of
//! contract: no panic, unspecified result.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Reduce `a` into `(-half, half]` where `period = 2 * half`.
#[inline]
fn reduce(a: f64, period: f64) -> f64 {
    let half = 0.5 * period;
    // `%` keeps the sign of `a`, so `r ∈ (-period, period)`.
    let r = a % period;
    if r > half {
        r - period
    } else if r <= -half {
        r + period
    } else {
        r
    }
}

/// Canonical rotation angle in degrees, range `(-180, 180]`.
#[inline]
pub fn normalize_deg(a: f64) -> f64 {
    reduce(a, 360.0)
}

/// Canonical rotation angle in radians, range `(-π, π]`.
#[inline]
pub fn normalize_rad(a: f64) -> f64 {
    let r = reduce(a, TAU);
    // Guard the upper end against rounding in `a % TAU`.
    if r > PI {
        PI
    } else {
        r
    }
}

/// Canonical undirected-line angle in degrees, range `(-90, 90]`.
#[inline]
pub fn normalize_line_deg(a: f64) -> f64 {
    reduce(a, 180.0)
}

/// Canonical undirected-line angle in radians, range `(-π/2, π/2]`.
#[inline]
pub fn normalize_line_rad(a: f64) -> f64 {
    let r = reduce(a, PI);
    if r > FRAC_PI_2 {
        FRAC_PI_2
    } else {
        r
    }
}

#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad.to_degrees()
}

/// Distance between two rotation angles on the 360° circle, in `[0, 180]`.
#[inline]
pub fn circular_distance_deg(a: f64, b: f64) -> f64 {
    normalize_deg(a - b).abs()
}

/// Distance between two line angles on the 180° circle, in `[0, π/2]`.
#[inline]
pub fn line_distance_rad(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % PI;
    d.min(PI - d)
}

/// Round to `digits` decimal places (display only).
pub fn round_to(x: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (x * scale).round() / scale
}
