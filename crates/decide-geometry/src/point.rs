// ─────────────────────────────────────────────────────────────────────
// DECIDE — Point
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

/// A trajectory point.
///
/// Equality is exact coordinate equality. It exists to detect points
/// that genuinely coincide, never as a numeric comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Plane quadrant, numbered I to IV counter-clockwise from +x/+y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Quadrant {
    I = 1,
    II = 2,
    III = 3,
    IV = 4,
}

impl Quadrant {
    /// Single-bit mask, for counting distinct quadrants.
    pub const fn bit(self) -> u8 {
        1 << (self as u8 - 1)
    }
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Quadrant containing the point.
    ///
    /// Points on an axis belong to several quadrants; the checks run in
    /// order I, II, III, IV and the first match wins, so the origin is
    /// in I, `(-1, 0)` in II and `(0, -1)` in III.
    pub fn quadrant(&self) -> Quadrant {
        let (x, y) = (self.x, self.y);
        if x >= 0.0 && y >= 0.0 {
            Quadrant::I
        } else if x <= 0.0 && y >= 0.0 {
            Quadrant::II
        } else if x <= 0.0 && y <= 0.0 {
            Quadrant::III
        } else {
            Quadrant::IV
        }
    }

    /// Bearing from `self` to `other` as `atan2(dy, dx)`.
    #[inline]
    pub fn bearing_to(&self, other: &Point) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}
