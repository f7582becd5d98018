// ─────────────────────────────────────────────────────────────────────
// DECIDE — Planar Geometry
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Immutable 2-D points and triangles used by the launch interceptor
//! conditions: distance, quadrant, Heron area, circumradius, and the
//! directed vertex angle. All arithmetic is `f64`.

pub mod point;
pub mod tolerance;
pub mod triangle;

pub use point::{Point, Quadrant};
pub use tolerance::{almost_equal, almost_equal_within, exceeds, DEFAULT_TOLERANCE};
pub use triangle::{circumradius, interior_angle, triangle_area, Triangle, COLLINEAR_TOLERANCE};
