// ─────────────────────────────────────────────────────────────────────
// DECIDE — Launch Interceptor Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Parameter set, logical connectors, fixed-size decision vectors, and
//! the error hierarchy shared by the launch interceptor decision core.

pub mod connector;
pub mod error;
pub mod params;
pub mod vectors;

pub use connector::{Connector, LogicalConnectorMatrix};
pub use error::{DecideError, DecideResult};
pub use params::LicParameters;
pub use vectors::{
    ConditionsMetVector, PreliminaryUnlockingMatrix, PreliminaryUnlockingVector, NUM_LICS,
};
