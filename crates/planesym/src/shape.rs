//! Discretized figures: vertex coordinates plus edge connectivity.
//!
//! Transforms only ever remap `vertices`; `edges` index into the vertex list
//! and are carried over unchanged, so topology is preserved by construction.

use std::f64::consts::TAU;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::GeomError;
use crate::transform::Transform2;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub vertices: Vec<Vector2<f64>>,
    #[serde(default)]
    pub edges: Vec<[usize; 2]>,
}

impl Shape {
    /// Open path through `points` in order.
    pub fn polyline(points: Vec<Vector2<f64>>) -> Self {
        let edges = (1..points.len()).map(|i| [i - 1, i]).collect();
        Self {
            vertices: points,
            edges,
        }
    }

    /// Closed loop through `points` (last vertex joined back to the first).
    pub fn closed(points: Vec<Vector2<f64>>) -> Self {
        let mut s = Self::polyline(points);
        if s.vertices.len() >= 3 {
            s.edges.push([s.vertices.len() - 1, 0]);
        }
        s
    }

    /// Regular `n`-gon of circumradius `radius` centered at the origin, with
    /// vertex 0 on the positive x axis and vertices in counterclockwise order.
    pub fn regular_ngon(n: usize, radius: f64) -> Result<Self, GeomError> {
        if n < 3 {
            return Err(GeomError::invalid(format!(
                "a polygon needs at least 3 sides, got {n}"
            )));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeomError::invalid(format!(
                "polygon radius must be positive, got {radius}"
            )));
        }
        let delta = TAU / n as f64;
        let pts = (0..n)
            .map(|k| {
                let th = k as f64 * delta;
                Vector2::new(radius * th.cos(), radius * th.sin())
            })
            .collect();
        Ok(Self::closed(pts))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Check that every vertex is finite and every edge indexes a vertex.
    pub fn validate(&self) -> Result<(), GeomError> {
        if let Some(i) = self
            .vertices
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(GeomError::invalid(format!("vertex {i} is not finite")));
        }
        let n = self.vertices.len();
        if let Some(e) = self.edges.iter().find(|e| e[0] >= n || e[1] >= n) {
            return Err(GeomError::invalid(format!(
                "edge [{}, {}] out of range for {n} vertices",
                e[0], e[1]
            )));
        }
        Ok(())
    }

    /// New shape with `f` applied to every vertex and the same edges.
    pub fn map_vertices<F>(&self, f: F) -> Shape
    where
        F: Fn(Vector2<f64>) -> Vector2<f64>,
    {
        Shape {
            vertices: self.vertices.iter().map(|&p| f(p)).collect(),
            edges: self.edges.clone(),
        }
    }

    /// Whether `t` maps the vertex set onto itself: every image lies within
    /// `eps` of some vertex, and every vertex within `eps` of some image.
    pub fn is_invariant_under<T: Transform2 + ?Sized>(&self, t: &T, eps: f64) -> bool {
        let images: Vec<Vector2<f64>> = self
            .vertices
            .iter()
            .map(|&p| t.transform_point(p))
            .collect();
        let covered = |from: &[Vector2<f64>], into: &[Vector2<f64>]| {
            from.iter().all(|p| into.iter().any(|q| (p - q).norm() <= eps))
        };
        covered(&images, &self.vertices) && covered(&self.vertices, &images)
    }
}
