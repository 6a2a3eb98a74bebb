use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};

/// Entries closer than this to 0 or ±1 are snapped, so quarter turns and
/// flips stay exact.
const SNAP_EPSILON: f64 = 1e-12;

/// Linear part of an object's transform, applied about the object's center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectTransform {
    matrix: Matrix2<f64>,
}

impl ObjectTransform {
    pub fn identity() -> Self {
        Self {
            matrix: Matrix2::identity(),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.matrix == Matrix2::identity()
    }

    pub fn matrix(&self) -> &Matrix2<f64> {
        &self.matrix
    }

    /// Rotates by `theta_degs` (positive is clockwise on a y-down label).
    pub fn rotate(&mut self, theta_degs: f64) {
        let (s, c) = theta_degs.to_radians().sin_cos();
        let rotation = Matrix2::new(c, -s, s, c);
        self.matrix = rotation * self.matrix;
        self.snap();
    }

    /// Mirrors left/right in the object's own frame.
    pub fn flip_horiz(&mut self) {
        self.matrix *= Matrix2::new(-1.0, 0.0, 0.0, 1.0);
        self.snap();
    }

    /// Mirrors top/bottom in the object's own frame.
    pub fn flip_vert(&mut self) {
        self.matrix *= Matrix2::new(1.0, 0.0, 0.0, -1.0);
        self.snap();
    }

    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let v = self.matrix * Vector2::new(x, y);
        (v.x, v.y)
    }

    fn snap(&mut self) {
        for value in self.matrix.iter_mut() {
            for target in [-1.0, 0.0, 1.0] {
                if (*value - target).abs() < SNAP_EPSILON {
                    *value = target;
                }
            }
        }
    }
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self::identity()
    }
}
