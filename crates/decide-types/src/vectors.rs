// ─────────────────────────────────────────────────────────────────────
// DECIDE — Decision Vectors and Matrices
// ─────────────────────────────────────────────────────────────────────
//! Fixed-size value types exchanged between the stages of the decision
//! core. Their dimensions are part of the type, so a CMV is always 15
//! entries and a PUM always 15×15.

use std::ops::Index;

use serde::{Deserialize, Serialize};

/// Number of launch interceptor condition slots.
pub const NUM_LICS: usize = 15;

/// Conditions Met Vector: entry `i` is the outcome of LIC `i`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionsMetVector(pub [bool; NUM_LICS]);

impl ConditionsMetVector {
    pub fn new(conditions: [bool; NUM_LICS]) -> Self {
        Self(conditions)
    }

    pub fn as_array(&self) -> &[bool; NUM_LICS] {
        &self.0
    }

    /// Number of conditions met.
    pub fn count_met(&self) -> usize {
        self.0.iter().filter(|&&met| met).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }
}

impl Index<usize> for ConditionsMetVector {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        &self.0[index]
    }
}

/// Preliminary Unlocking Vector.
///
/// Carried alongside the connector matrix for a downstream reduction
/// into a launch decision; the core stores it without interpreting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreliminaryUnlockingVector(pub [bool; NUM_LICS]);

impl Default for PreliminaryUnlockingVector {
    fn default() -> Self {
        Self([false; NUM_LICS])
    }
}

impl Index<usize> for PreliminaryUnlockingVector {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        &self.0[index]
    }
}

/// Preliminary Unlocking Matrix, addressed as `pum[(row, column)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreliminaryUnlockingMatrix(pub [[bool; NUM_LICS]; NUM_LICS]);

impl PreliminaryUnlockingMatrix {
    pub fn rows(&self) -> &[[bool; NUM_LICS]; NUM_LICS] {
        &self.0
    }

    pub fn get(&self, row: usize, column: usize) -> bool {
        self.0[row][column]
    }

    /// Number of `true` cells.
    pub fn count_true(&self) -> usize {
        self.0.iter().flatten().filter(|&&cell| cell).count()
    }

    pub fn all_true(&self) -> bool {
        self.count_true() == NUM_LICS * NUM_LICS
    }
}

impl Index<(usize, usize)> for PreliminaryUnlockingMatrix {
    type Output = bool;

    fn index(&self, (row, column): (usize, usize)) -> &bool {
        &self.0[row][column]
    }
}
