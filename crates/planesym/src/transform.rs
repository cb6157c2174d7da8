//! Transform factories: reflection about a line through the origin, rotation
//! about the origin, and translation.
//!
//! Each transform is a small `Copy` value fixed at construction. Mapping a
//! point or a shape never mutates the input; it returns a new value.
//!
//! Animation parameterization
//! - `motion_at(t)` gives the rigid motion of the `z = 0` plane embedded in
//!   3D after a fraction `t ∈ [0, 1]` of the transform. A reflection is
//!   animated as a half-turn about the line's axis (the figure flips out of
//!   the plane and lands mirrored), so `motion_at(1.0)` restricted to the
//!   plane equals `transform_point`.

use std::f64::consts::PI;

use nalgebra::{
    Isometry3, Matrix2, Point3, Rotation2, Translation3, Unit, UnitQuaternion, Vector2, Vector3,
};

use crate::affine::Affine2;
use crate::angle::normalize_rad;
use crate::line::Line2;
use crate::shape::Shape;

/// A pure point/shape mapping of the plane.
pub trait Transform2 {
    /// The map as `x ↦ M x + t`.
    fn as_affine(&self) -> Affine2;

    /// Rigid motion of the embedded plane after fraction `t` of the transform.
    fn motion_at(&self, t: f64) -> Isometry3<f64>;

    fn transform_point(&self, p: Vector2<f64>) -> Vector2<f64> {
        self.as_affine().apply(p)
    }

    /// Remap every vertex; connectivity is carried over unchanged.
    fn transform_shape(&self, shape: &Shape) -> Shape {
        let f = self.as_affine();
        shape.map_vertices(|p| f.apply(p))
    }

    /// Apply the full motion to a point of the 3D embedding.
    fn transform_point3(&self, p: Vector3<f64>) -> Vector3<f64> {
        self.motion_at(1.0).transform_point(&Point3::from(p)).coords
    }
}

/// Reflection about a line through the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reflection {
    line: Line2,
}

impl Reflection {
    pub fn new(line: Line2) -> Self {
        Self { line }
    }

    #[inline]
    pub fn line(&self) -> Line2 {
        self.line
    }

    /// Angle of the mirror line, radians in `(-π/2, π/2]`.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.line.angle()
    }

    /// Reflect about `self`, then about `next`: a rotation by twice the angle
    /// from `self`'s line to `next`'s line.
    pub fn then(&self, next: &Reflection) -> Rotation {
        Rotation::new(normalize_rad(2.0 * (next.angle() - self.angle())))
    }
}

impl Transform2 for Reflection {
    fn as_affine(&self) -> Affine2 {
        let d = self.line.direction();
        // 2 d dᵀ − I
        Affine2::linear(2.0 * d * d.transpose() - Matrix2::identity())
    }

    fn transform_point(&self, p: Vector2<f64>) -> Vector2<f64> {
        // Keep the component along the line, negate the perpendicular one.
        let d = self.line.direction();
        2.0 * p.dot(&d) * d - p
    }

    fn motion_at(&self, t: f64) -> Isometry3<f64> {
        let axis = Unit::new_normalize(self.line.direction3());
        Isometry3::from_parts(
            Translation3::identity(),
            UnitQuaternion::from_axis_angle(&axis, t * PI),
        )
    }
}

/// Rotation about the origin (the z axis in the 3D embedding).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    angle: f64,
}

impl Rotation {
    /// Rotation by `angle` radians, counterclockwise.
    pub fn new(angle: f64) -> Self {
        Self { angle }
    }

    pub fn from_degrees(deg: f64) -> Self {
        Self::new(deg.to_radians())
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[inline]
    pub fn angle_deg(&self) -> f64 {
        self.angle.to_degrees()
    }

    /// `self` then `next`, as one rotation with angle reduced to `(-π, π]`.
    pub fn then(&self, next: &Rotation) -> Rotation {
        Rotation::new(normalize_rad(self.angle + next.angle))
    }
}

impl Transform2 for Rotation {
    fn as_affine(&self) -> Affine2 {
        Affine2::linear(*Rotation2::new(self.angle).matrix())
    }

    fn transform_point(&self, p: Vector2<f64>) -> Vector2<f64> {
        let (s, c) = self.angle.sin_cos();
        Vector2::new(c * p.x - s * p.y, s * p.x + c * p.y)
    }

    fn motion_at(&self, t: f64) -> Isometry3<f64> {
        Isometry3::from_parts(
            Translation3::identity(),
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), t * self.angle),
        )
    }
}

/// Translation by a fixed offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Translation {
    offset: Vector2<f64>,
}

impl Translation {
    pub fn new(offset: Vector2<f64>) -> Self {
        Self { offset }
    }

    #[inline]
    pub fn offset(&self) -> Vector2<f64> {
        self.offset
    }

    /// Running total of successive translations.
    pub fn then(&self, next: &Translation) -> Translation {
        Translation::new(self.offset + next.offset)
    }
}

impl Transform2 for Translation {
    fn as_affine(&self) -> Affine2 {
        Affine2 {
            m: Matrix2::identity(),
            t: self.offset,
        }
    }

    fn transform_point(&self, p: Vector2<f64>) -> Vector2<f64> {
        p + self.offset
    }

    fn motion_at(&self, t: f64) -> Isometry3<f64> {
        Isometry3::from_parts(
            Translation3::new(t * self.offset.x, t * self.offset.y, 0.0),
            UnitQuaternion::identity(),
        )
    }
}

/// Reflection about `line`.
#[inline]
pub fn reflect(line: Line2) -> Reflection {
    Reflection::new(line)
}

/// Rotation by `angle` radians about the origin.
#[inline]
pub fn rotate(angle: f64) -> Rotation {
    Rotation::new(angle)
}

#[inline]
pub fn translate(offset: Vector2<f64>) -> Translation {
    Translation::new(offset)
}
