use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle given by two corner points.
///
/// The corners may be given in any order (a rubber-band drag can run in any
/// direction); every query normalizes them first.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Region {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Region {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Returns the same rectangle with `(x1, y1)` as the minimum corner.
    pub fn normalized(&self) -> Self {
        Self {
            x1: self.x1.min(self.x2),
            y1: self.y1.min(self.y2),
            x2: self.x1.max(self.x2),
            y2: self.y1.max(self.y2),
        }
    }

    pub fn width(&self) -> f64 {
        (self.x2 - self.x1).abs()
    }

    pub fn height(&self) -> f64 {
        (self.y2 - self.y1).abs()
    }

    pub fn center_x(&self) -> f64 {
        (self.x1 + self.x2) / 2.0
    }

    pub fn center_y(&self) -> f64 {
        (self.y1 + self.y2) / 2.0
    }

    /// True if `other` lies entirely inside this region (edges may touch).
    pub fn contains_region(&self, other: &Region) -> bool {
        let r = self.normalized();
        let o = other.normalized();
        o.x1 >= r.x1 && o.x2 <= r.x2 && o.y1 >= r.y1 && o.y2 <= r.y2
    }

    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        let r = self.normalized();
        x >= r.x1 && x <= r.x2 && y >= r.y1 && y <= r.y2
    }

    /// Smallest region covering both.
    pub fn union(&self, other: &Region) -> Self {
        let r = self.normalized();
        let o = other.normalized();
        Self {
            x1: r.x1.min(o.x1),
            y1: r.y1.min(o.y1),
            x2: r.x2.max(o.x2),
            y2: r.y2.max(o.y2),
        }
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            x1: self.x1 + dx,
            y1: self.y1 + dy,
            x2: self.x2 + dx,
            y2: self.y2 + dy,
        }
    }
}
