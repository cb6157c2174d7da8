//! Plane symmetry core: reflections and rotations about the origin.
//!
//! Layout
//! - `angle`: degree/radian normalization for free rotations and undirected lines.
//! - `line`: `Line2`, an undirected line through the origin with a canonical angle.
//! - `transform`: `Reflection`, `Rotation`, `Translation` behind the `Transform2` trait.
//! - `shape`: discretized figures that transforms remap vertex by vertex.
//! - `symmetry`: stateless matching against known symmetry sets, plus the
//!   caller-owned `FoundSymmetries` record.
//! - `group`: finite cyclic groups generated by rational rotations.
//! - `expr`: a small arithmetic evaluator for typed angle/amount input.
//!
//! Everything here is pure: constructors validate and return `Result`, queries
//! are total, and no value is mutated after construction.

pub mod affine;
pub mod angle;
pub mod cfg;
pub mod error;
pub mod expr;
pub mod group;
pub mod line;
pub mod shape;
pub mod symmetry;
pub mod transform;


/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use affine::Affine2;
pub use cfg::SymCfg;
pub use error::{ExprError, GeomError};
pub use group::RationalRotationGroup;
pub use line::{Line2, LineEquation};
pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
pub use shape::Shape;
pub use symmetry::{FoundSymmetries, SymmetryGroup};
pub use transform::{reflect, rotate, translate, Reflection, Rotation, Transform2, Translation};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::angle::{deg_to_rad, normalize_deg, normalize_line_deg, rad_to_deg};
    pub use crate::symmetry::{
        find_line_match, find_rotation_match, regular_polygon_reflection_lines,
        regular_polygon_rotations_deg,
    };
    pub use crate::{
        reflect, rotate, translate, Affine2, FoundSymmetries, GeomError, Line2,
        RationalRotationGroup, Reflection, Rotation, Shape, SymCfg, SymmetryGroup, Transform2,
        Translation,
    };
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}
