// ─────────────────────────────────────────────────────────────────────
// DECIDE — Conditions Met Vector Builder
// ─────────────────────────────────────────────────────────────────────

use decide_geometry::Point;
use decide_types::{ConditionsMetVector, DecideResult, LicParameters, NUM_LICS};

use crate::lic::Lic;

/// Evaluate every implemented condition in slot order.
///
/// Reserved slots stay `false`. The first parameter failure aborts the
/// build and is returned as-is; no partial vector is produced.
pub fn build_cmv(points: &[Point], params: &LicParameters) -> DecideResult<ConditionsMetVector> {
    let mut conditions = [false; NUM_LICS];
    for lic in Lic::ALL {
        if let Some(evaluator) = lic.evaluator() {
            conditions[lic.index()] = evaluator(points, params)?;
        }
    }
    let cmv = ConditionsMetVector::new(conditions);
    log::trace!(
        "CMV over {} points: {} of {NUM_LICS} conditions met",
        points.len(),
        cmv.count_met()
    );
    Ok(cmv)
}
