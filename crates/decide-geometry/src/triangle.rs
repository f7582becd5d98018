// ─────────────────────────────────────────────────────────────────────
// DECIDE — Triangle
// ─────────────────────────────────────────────────────────────────────
//! Triangle over three trajectory points.
//!
//! Side lengths and area are computed once at construction. Triangles
//! are built per evaluation window and dropped with it, so nothing is
//! cached across windows or threads.

use std::f64::consts::TAU;

use crate::point::Point;

/// Relative area below which vertices count as collinear: an area of at
/// most `COLLINEAR_TOLERANCE · longest_side²` is snapped to zero. Heron's
/// formula leaves up to about `1e-8 · longest_side²` on exactly
/// collinear points.
pub const COLLINEAR_TOLERANCE: f64 = 1e-7;

/// Three vertices `a`, `b`, `c` with their side lengths and area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
    ab: f64,
    ac: f64,
    bc: f64,
    area: f64,
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        let ab = a.distance(&b);
        let ac = a.distance(&c);
        let bc = b.distance(&c);
        let area = heron(ab, ac, bc);
        Self {
            a,
            b,
            c,
            ab,
            ac,
            bc,
            area,
        }
    }

    /// Side lengths `(|ab|, |ac|, |bc|)`.
    pub fn sides(&self) -> (f64, f64, f64) {
        (self.ab, self.ac, self.bc)
    }

    /// Heron area; exactly zero for collinear or coincident vertices.
    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn is_collinear(&self) -> bool {
        self.area == 0.0
    }

    pub fn longest_side(&self) -> f64 {
        self.ab.max(self.ac).max(self.bc)
    }

    /// Circumradius `|ab|·|ac|·|bc| / (4·area)`.
    ///
    /// Collinear vertices (zero area after snapping) have no
    /// circumcircle; the radius is then the longest side.
    pub fn circumradius(&self) -> f64 {
        if self.is_collinear() {
            self.longest_side()
        } else {
            self.ab * self.ac * self.bc / (4.0 * self.area)
        }
    }

    /// Directed angle at `b`, from the bearing of `a` to the bearing of
    /// `c`, in `[0, 2π)`. Depends on vertex order.
    pub fn angle_at_b(&self) -> f64 {
        let angle = self.b.bearing_to(&self.c) - self.b.bearing_to(&self.a);
        if angle < 0.0 {
            angle + TAU
        } else {
            angle
        }
    }

    /// Distance from `c` to the line through `a` and `b`, as the height
    /// `2·area / |ab|`. Falls back to `|ac|` when `a` and `b` coincide.
    pub fn height_from_c(&self) -> f64 {
        if self.a == self.b {
            self.ac
        } else {
            2.0 * self.area / self.ab
        }
    }
}

/// Heron's formula. A radicand pushed slightly negative by rounding is
/// clamped to zero, and a rounding-sized area on collinear vertices is
/// snapped to zero.
fn heron(l1: f64, l2: f64, l3: f64) -> f64 {
    let s = (l1 + l2 + l3) / 2.0;
    let radicand = s * (s - l1) * (s - l2) * (s - l3);
    let area = radicand.max(0.0).sqrt();
    let longest = l1.max(l2).max(l3);
    if area <= COLLINEAR_TOLERANCE * longest * longest {
        0.0
    } else {
        area
    }
}

pub fn triangle_area(a: Point, b: Point, c: Point) -> f64 {
    Triangle::new(a, b, c).area()
}

pub fn circumradius(a: Point, b: Point, c: Point) -> f64 {
    Triangle::new(a, b, c).circumradius()
}

/// Directed angle at `vertex`; pass points in trajectory order.
pub fn interior_angle(a: Point, vertex: Point, c: Point) -> f64 {
    Triangle::new(a, vertex, c).angle_at_b()
}
