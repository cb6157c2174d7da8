//! Finite cyclic groups generated by a rational rotation.
//!
//! A rotation by `m/n` of a full turn generates `{k·(m/n)·360° mod 360° : k =
//! 0..n}` once `m/n` is in lowest terms, so the group is `C_n`.
//!
//! Typed amounts arrive as decimals ("0.25" of a turn); `decimal_to_fraction`
//! turns them into an exact fraction at a fixed decimal precision.

use crate::cfg::MAX_FRACTION_PRECISION;
use crate::error::GeomError;
use crate::symmetry::{find_rotation_match, SymmetryGroup};
use crate::transform::Rotation;

/// Cyclic rotation group generated by `numerator/denominator` of a turn.
///
/// Invariants: `denominator >= 1`, `0 <= numerator < denominator`, and the
/// fraction is in lowest terms (`numerator == 0` only with `denominator == 1`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RationalRotationGroup {
    numerator: i64,
    denominator: i64,
}

fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

impl RationalRotationGroup {
    /// Group generated by a rotation of `m/n` turns. Fails if `n <= 0`.
    ///
    /// Whole turns are dropped (`5/4` generates the same group as `1/4`), and
    /// negative amounts are taken counterclockwise (`-1/4` becomes `3/4`).
    pub fn new(m: i64, n: i64) -> Result<Self, GeomError> {
        if n <= 0 {
            return Err(GeomError::invalid(format!(
                "rotation denominator must be positive, got {n}"
            )));
        }
        // `g` divides `n > 0`, so it fits back into i64.
        let g = gcd(m, n) as i64;
        let (num, den) = if m == 0 { (0, 1) } else { (m / g, n / g) };
        let grp = Self {
            numerator: num.rem_euclid(den),
            denominator: den,
        };
        tracing::debug!(
            m,
            n,
            numerator = grp.numerator,
            order = den,
            "rational rotation group"
        );
        Ok(grp)
    }

    /// Group for a decimal amount of turns at `precision` decimal digits.
    /// `Ok(None)` means no rotation was requested (the amount rounds to zero).
    pub fn from_turns(turns: f64, precision: u32) -> Result<Option<Self>, GeomError> {
        let (m, n) = decimal_to_fraction(turns, precision)?;
        if m == 0 {
            return Ok(None);
        }
        Self::new(m, n).map(Some)
    }

    #[inline]
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    #[inline]
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Group order, the reduced denominator.
    #[inline]
    pub fn order(&self) -> usize {
        self.denominator as usize
    }

    /// Generator angle in degrees, `[0, 360)`.
    pub fn generator_deg(&self) -> f64 {
        self.numerator as f64 * 360.0 / self.denominator as f64
    }

    /// Element angles `k·(m/n)·360 mod 360` in degrees for `k = 0..order`.
    ///
    /// The reduction mod a full turn is done on the integer numerators so
    /// e.g. quarter turns come out as exactly `0, 90, 180, 270`.
    pub fn angles_deg(&self) -> Vec<f64> {
        let (m, n) = (self.numerator as i128, self.denominator as i128);
        (0..n)
            .map(|k| ((k * m) % n) as f64 * 360.0 / n as f64)
            .collect()
    }

    /// The rotations of the group in increasing `k`, rebuilt on every call.
    pub fn element_array(&self) -> Vec<Rotation> {
        self.angles_deg()
            .into_iter()
            .map(Rotation::from_degrees)
            .collect()
    }

    /// Index `k` of the element matching `deg` within `eps` degrees.
    pub fn position_of_deg(&self, deg: f64, eps: f64) -> Option<usize> {
        find_rotation_match(deg, &self.angles_deg(), eps)
    }

    pub fn symmetry_group(&self) -> SymmetryGroup {
        SymmetryGroup::Cyclic(self.order())
    }
}

/// Exact fraction `(m, n)` for `x` rounded to `precision` decimal digits,
/// with common factors of ten stripped (`0.50 → (5, 10)`, `2.0 → (2, 1)`).
///
/// Further reduction to lowest terms happens in `RationalRotationGroup::new`.
pub fn decimal_to_fraction(x: f64, precision: u32) -> Result<(i64, i64), GeomError> {
    if !x.is_finite() {
        return Err(GeomError::invalid(format!("amount must be finite, got {x}")));
    }
    if precision > MAX_FRACTION_PRECISION {
        return Err(GeomError::invalid(format!(
            "precision {precision} exceeds {MAX_FRACTION_PRECISION} digits"
        )));
    }
    let mut den = 10i64.pow(precision);
    let scaled = (x * den as f64).round();
    // Beyond 2^53 the scaled value is no longer an exact integer.
    if scaled.abs() >= 9_007_199_254_740_992.0 {
        return Err(GeomError::invalid(format!(
            "amount {x} too large for {precision} digits"
        )));
    }
    let mut num = scaled as i64;
    while num % 10 == 0 && den >= 10 {
        num /= 10;
        den /= 10;
    }
    Ok((num, den))
}
