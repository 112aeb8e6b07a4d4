// src/map/plane.rs

use nalgebra::Vector3;

/// A floor or ceiling surface, stored as `normal · (x, y, z) = d`.
///
/// Sectors get a whole new plane every time specials are processed; planes
/// are never edited in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub normal: Vector3<f64>,
    pub d: f64,
}

impl Plane {
    /// Horizontal plane at `height`.
    pub fn flat(height: f64) -> Self {
        Self {
            normal: Vector3::z(),
            d: height,
        }
    }

    /// The plane through three points.
    ///
    /// Collinear or coincident points give a NaN normal; callers are expected
    /// to rule those out before asking.
    pub fn from_triangle(p1: Vector3<f64>, p2: Vector3<f64>, p3: Vector3<f64>) -> Self {
        let normal = (p3 - p1).cross(&(p2 - p1)).normalize();
        Self {
            normal,
            d: normal.dot(&p1),
        }
    }

    /// The plane through `point` that contains both direction vectors.
    pub fn from_point_and_vectors(point: Vector3<f64>, u: Vector3<f64>, v: Vector3<f64>) -> Self {
        Self::from_triangle(point, point + u, point + v)
    }

    /// Height of the plane above (x, y).
    pub fn height_at(&self, x: f64, y: f64) -> f64 {
        (self.d - self.normal.x * x - self.normal.y * y) / self.normal.z
    }

    pub fn is_flat(&self) -> bool {
        self.normal.x == 0.0 && self.normal.y == 0.0
    }
}
