// ─────────────────────────────────────────────────────────────────────
// DECIDE — Condition Parameters
// ─────────────────────────────────────────────────────────────────────
//! Thresholds, window sizes, and tolerances consumed by the launch
//! interceptor conditions.
//!
//! Construction never range-checks. Each condition checks the
//! parameters it reads at evaluation time through the `check_*`
//! methods below, so a parameter that only an unused condition reads
//! cannot fail an unrelated evaluation.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{DecideError, DecideResult};

/// Parameter set for conditions 0 to 6.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicParameters {
    /// LIC 0: consecutive-pair distance threshold. Domain: `>= 0`.
    pub length1: f64,

    /// LIC 1: circumradius threshold. Domain: `>= 0`.
    pub radius1: f64,

    /// LIC 2: allowed deviation of the vertex angle from pi.
    /// Domain: `[0, pi)`.
    pub epsilon: f64,

    /// LIC 3: triangle area threshold. Domain: `>= 0`.
    pub area1: f64,

    /// LIC 4: window size in points. Domain: `2 <= q_pts <= len`.
    pub q_pts: usize,

    /// LIC 4: number of quadrants to exceed. Domain: `1..=3`.
    pub quads: usize,

    /// LIC 6: window size in points. Domain: `n_pts <= len`.
    /// Windows shorter than 3 points have no interior and are never met.
    pub n_pts: usize,

    /// LIC 6: distance threshold from the window chord. Domain: `>= 0`.
    pub dist: f64,
}

impl Default for LicParameters {
    fn default() -> Self {
        Self {
            length1: 0.0,
            radius1: 0.0,
            epsilon: 0.0,
            area1: 0.0,
            q_pts: 2,
            quads: 1,
            n_pts: 3,
            dist: 0.0,
        }
    }
}

#[allow(clippy::neg_cmp_op_on_partial_ord)]
fn non_negative(name: &'static str, value: f64) -> DecideResult<()> {
    // `!(v >= 0)` also rejects NaN.
    if !(value >= 0.0) {
        return Err(reject(name, format!("must be >= 0, got {value}")));
    }
    Ok(())
}

fn reject(name: &'static str, reason: String) -> DecideError {
    log::warn!("rejecting parameter {name}: {reason}");
    DecideError::invalid(name, reason)
}

impl LicParameters {
    pub fn check_length1(&self) -> DecideResult<()> {
        non_negative("length1", self.length1)
    }

    pub fn check_radius1(&self) -> DecideResult<()> {
        non_negative("radius1", self.radius1)
    }

    pub fn check_epsilon(&self) -> DecideResult<()> {
        if !(0.0..PI).contains(&self.epsilon) {
            return Err(reject(
                "epsilon",
                format!("must be in [0, pi), got {}", self.epsilon),
            ));
        }
        Ok(())
    }

    pub fn check_area1(&self) -> DecideResult<()> {
        non_negative("area1", self.area1)
    }

    /// `q_pts` in `[2, len]` and `quads` in `[1, 3]`.
    pub fn check_quadrant_window(&self, len: usize) -> DecideResult<()> {
        if self.q_pts < 2 || self.q_pts > len {
            return Err(reject(
                "q_pts",
                format!("must be in [2, {len}], got {}", self.q_pts),
            ));
        }
        if !(1..=3).contains(&self.quads) {
            return Err(reject(
                "quads",
                format!("must be in [1, 3], got {}", self.quads),
            ));
        }
        Ok(())
    }

    /// `n_pts <= len` and `dist >= 0`. A window below 3 points is
    /// accepted here and simply never satisfies LIC 6.
    pub fn check_chord_window(&self, len: usize) -> DecideResult<()> {
        if self.n_pts > len {
            return Err(reject(
                "n_pts",
                format!("must be <= {len}, got {}", self.n_pts),
            ));
        }
        non_negative("dist", self.dist)
    }

    /// Run every condition's domain check, in condition order, for a
    /// trajectory of `len` points. Returns the first failure.
    pub fn validate(&self, len: usize) -> DecideResult<()> {
        self.check_length1()?;
        self.check_radius1()?;
        self.check_epsilon()?;
        self.check_area1()?;
        self.check_quadrant_window(len)?;
        self.check_chord_window(len)
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> DecideResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| DecideError::Config(format!("JSON parse error: {e}")))
    }

    pub fn to_json(&self) -> DecideResult<String> {
        serde_json::to_string(self)
            .map_err(|e| DecideError::Config(format!("JSON encode error: {e}")))
    }
}
