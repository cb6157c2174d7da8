//! 2D affine maps `x ↦ M x + t`.
//!
//! Every `Transform2` lowers to an `Affine2`, which is how transforms are
//! composed and compared (e.g. "is rotate(a)∘rotate(b) the same map as
//! rotate(a+b)?").

use nalgebra::{Matrix2, Vector2};

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Affine2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }
    #[inline]
    pub fn linear(m: Matrix2<f64>) -> Self {
        Self {
            m,
            t: Vector2::zeros(),
        }
    }
    #[inline]
    pub fn apply(&self, p: Vector2<f64>) -> Vector2<f64> {
        self.m * p + self.t
    }
    /// `self ∘ inner`: apply `inner` first, then `self`.
    #[inline]
    pub fn compose(&self, inner: &Affine2) -> Affine2 {
        Affine2 {
            m: self.m * inner.m,
            t: self.m * inner.t + self.t,
        }
    }
    /// Rotations and translations preserve orientation, reflections reverse it.
    #[inline]
    pub fn is_orientation_preserving(&self) -> bool {
        self.m.determinant() > 0.0
    }
    /// Entrywise comparison (max-abs metric on `M` and `t`).
    pub fn approx_eq(&self, other: &Affine2, eps: f64) -> bool {
        (self.m - other.m).amax() <= eps && (self.t - other.t).amax() <= eps
    }
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{matrix, vector};

    #[test]
    fn compose_applies_inner_first() {
        let shift = Affine2 {
            m: Matrix2::identity(),
            t: vector![1.0, 0.0],
        };
        let quarter = Affine2::linear(matrix![0.0, -1.0; 1.0, 0.0]);
        // shift then rotate: (0,0) -> (1,0) -> (0,1)
        let p = quarter.compose(&shift).apply(vector![0.0, 0.0]);
        assert!((p - vector![0.0, 1.0]).norm() < 1e-12);
        // rotate then shift: (0,0) -> (0,0) -> (1,0)
        let q = shift.compose(&quarter).apply(vector![0.0, 0.0]);
        assert!((q - vector![1.0, 0.0]).norm() < 1e-12);
    }

    #[test]
    fn orientation() {
        assert!(Affine2::identity().is_orientation_preserving());
        assert!(!Affine2::linear(matrix![1.0, 0.0; 0.0, -1.0]).is_orientation_preserving());
    }
}
