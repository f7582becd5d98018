// ─────────────────────────────────────────────────────────────────────
// DECIDE — Preliminary Unlocking Matrix
// ─────────────────────────────────────────────────────────────────────

use decide_types::{
    ConditionsMetVector, LogicalConnectorMatrix, PreliminaryUnlockingMatrix, NUM_LICS,
};

/// Combine the CMV pairwise through the LCM.
///
/// `pum[r][c] = lcm[r][c].apply(cmv[r], cmv[c])`, so every `NOT_USED`
/// cell is `true` whatever the CMV holds.
pub fn compute_pum(
    cmv: &ConditionsMetVector,
    lcm: &LogicalConnectorMatrix,
) -> PreliminaryUnlockingMatrix {
    let mut cells = [[true; NUM_LICS]; NUM_LICS];
    for (row, cells_row) in cells.iter_mut().enumerate() {
        for (column, cell) in cells_row.iter_mut().enumerate() {
            *cell = lcm.get(row, column).apply(cmv[row], cmv[column]);
        }
    }
    let pum = PreliminaryUnlockingMatrix(cells);
    log::trace!("PUM: {} of {} cells true", pum.count_true(), NUM_LICS * NUM_LICS);
    pum
}
