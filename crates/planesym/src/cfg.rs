//! Tolerances.
//!
//! Policy
//! - Crate-internal constants are fixed to avoid tolerance juggling at call sites.
//! - User-facing matching tolerances live in `SymCfg` so the caller can
//!   override them (the CLI reads them from flags or a JSON file).

use serde::{Deserialize, Serialize};

/// Components of a unit direction below this are snapped to exactly zero.
pub(crate) const AXIS_EPS: f64 = 1e-12;
/// Default distance under which two points count as the same vertex.
pub const POINT_EPS: f64 = 1e-6;
/// Largest decimal precision accepted by fraction conversion (10^15 < 2^53).
pub(crate) const MAX_FRACTION_PRECISION: u32 = 15;

/// Matching tolerances and input precision.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymCfg {
    /// Line-vs-line angle tolerance, radians.
    pub eps_line_rad: f64,
    /// Rotation-vs-rotation tolerance, degrees.
    pub eps_rotation_deg: f64,
    /// Vertex coincidence tolerance for figure invariance checks.
    pub eps_point: f64,
    /// Decimal digits kept when converting a typed turn amount to a fraction.
    pub fraction_precision: u32,
}

impl Default for SymCfg {
    fn default() -> Self {
        Self {
            eps_line_rad: 0.04,
            eps_rotation_deg: 0.01,
            eps_point: POINT_EPS,
            fraction_precision: 2,
        }
    }
}
