// ─────────────────────────────────────────────────────────────────────
// DECIDE — Evaluation Façade
// ─────────────────────────────────────────────────────────────────────
//! Bundles the per-evaluation inputs (parameters, LCM, PUV) and runs
//! the two stages over a trajectory.
//!
//! The PUM is the final output here. Reducing it through the PUV into
//! a launch decision is left to the caller; the PUV is carried so that
//! reduction has everything it needs.

use serde::Serialize;

use decide_geometry::Point;
use decide_types::{
    ConditionsMetVector, DecideResult, LicParameters, LogicalConnectorMatrix,
    PreliminaryUnlockingMatrix, PreliminaryUnlockingVector,
};

use crate::cmv::build_cmv;
use crate::pum::compute_pum;

/// Output of one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub cmv: ConditionsMetVector,
    pub pum: PreliminaryUnlockingMatrix,
}

/// Evaluation inputs. Holds no state between calls, so a `Decide`
/// can be shared across threads by reference.
#[derive(Debug, Clone)]
pub struct Decide {
    parameters: LicParameters,
    lcm: LogicalConnectorMatrix,
    puv: PreliminaryUnlockingVector,
}

impl Decide {
    pub fn new(
        parameters: LicParameters,
        lcm: LogicalConnectorMatrix,
        puv: PreliminaryUnlockingVector,
    ) -> Self {
        Self {
            parameters,
            lcm,
            puv,
        }
    }

    pub fn parameters(&self) -> &LicParameters {
        &self.parameters
    }

    pub fn lcm(&self) -> &LogicalConnectorMatrix {
        &self.lcm
    }

    pub fn puv(&self) -> &PreliminaryUnlockingVector {
        &self.puv
    }

    pub fn conditions_met(&self, points: &[Point]) -> DecideResult<ConditionsMetVector> {
        build_cmv(points, &self.parameters)
    }

    pub fn preliminary_unlocking_matrix(
        &self,
        cmv: &ConditionsMetVector,
    ) -> PreliminaryUnlockingMatrix {
        compute_pum(cmv, &self.lcm)
    }

    /// CMV then PUM. A parameter failure returns before any PUM is built.
    pub fn evaluate(&self, points: &[Point]) -> DecideResult<Evaluation> {
        let cmv = self.conditions_met(points)?;
        let pum = self.preliminary_unlocking_matrix(&cmv);
        Ok(Evaluation { cmv, pum })
    }
}
