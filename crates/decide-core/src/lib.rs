// ─────────────────────────────────────────────────────────────────────
// DECIDE — Launch Interceptor Decision Core
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Launch interceptor condition bank, Conditions Met Vector builder,
//! and Preliminary Unlocking Matrix computer.
//!
//! Data flow: trajectory + parameters → [`build_cmv`] → CMV;
//! CMV + LCM → [`compute_pum`] → PUM.
//!
//! # Invariants
//!
//! 1. **Fixed shape**: the CMV always has 15 entries and the PUM 15×15,
//!    whatever subset of conditions is implemented. Reserved slots 7–14
//!    report unmet.
//!
//! 2. **Vacuous cells**: `PUM[r][c]` is `true` whenever `LCM[r][c]` is
//!    `NOT_USED`.
//!
//! 3. **First failure wins**: an out-of-domain parameter aborts the CMV
//!    build with `DecideError::InvalidParameter`; no partial vector or
//!    matrix is returned. Degenerate geometry is never an error.
//!
//! 4. **Pure calls**: no evaluator keeps state between calls. Triangle
//!    area is computed per window and dropped with it.

pub mod cmv;
pub mod decide;
pub mod lic;
pub mod pum;

pub use cmv::build_cmv;
pub use decide::{Decide, Evaluation};
pub use lic::{evaluate, Evaluator, Lic};
pub use pum::compute_pum;

pub use decide_geometry::{Point, Quadrant, Triangle};
pub use decide_types::{
    ConditionsMetVector, Connector, DecideError, DecideResult, LicParameters,
    LogicalConnectorMatrix, PreliminaryUnlockingMatrix, PreliminaryUnlockingVector, NUM_LICS,
};
