// ─────────────────────────────────────────────────────────────────────
// DECIDE — Logical Connectors
// ─────────────────────────────────────────────────────────────────────
//! Ternary connectors and the 15×15 Logical Connector Matrix that says
//! how each pair of condition outcomes is combined.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DecideError, DecideResult};
use crate::vectors::NUM_LICS;

/// How two condition outcomes are combined into a PUM cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Connector {
    #[serde(rename = "ANDD")]
    And,
    #[serde(rename = "ORR")]
    Or,
    /// The pair is irrelevant; the cell is vacuously satisfied.
    #[serde(rename = "NOT_USED")]
    NotUsed,
}

impl Connector {
    pub const fn token(self) -> &'static str {
        match self {
            Connector::And => "ANDD",
            Connector::Or => "ORR",
            Connector::NotUsed => "NOT_USED",
        }
    }

    /// Combine two outcomes. `NotUsed` is `true` whatever the inputs.
    #[inline]
    pub const fn apply(self, lhs: bool, rhs: bool) -> bool {
        match self {
            Connector::And => lhs && rhs,
            Connector::Or => lhs || rhs,
            Connector::NotUsed => true,
        }
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Connector {
    type Err = DecideError;

    fn from_str(s: &str) -> DecideResult<Self> {
        match s {
            "ANDD" => Ok(Connector::And),
            "ORR" => Ok(Connector::Or),
            "NOT_USED" => Ok(Connector::NotUsed),
            other => Err(DecideError::UnknownConnector(other.to_string())),
        }
    }
}

/// Logical Connector Matrix, read as `lcm.get(row, column)`.
///
/// No symmetry is assumed: `(i, j)` and `(j, i)` may hold different
/// connectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicalConnectorMatrix(pub [[Connector; NUM_LICS]; NUM_LICS]);

impl Default for LogicalConnectorMatrix {
    fn default() -> Self {
        Self::all(Connector::NotUsed)
    }
}

impl LogicalConnectorMatrix {
    /// Every cell set to `connector`.
    pub fn all(connector: Connector) -> Self {
        Self([[connector; NUM_LICS]; NUM_LICS])
    }

    #[inline]
    pub fn get(&self, row: usize, column: usize) -> Connector {
        self.0[row][column]
    }

    pub fn set(&mut self, row: usize, column: usize, connector: Connector) {
        self.0[row][column] = connector;
    }

    /// Set `(row, column)` and `(column, row)` together.
    pub fn set_symmetric(&mut self, row: usize, column: usize, connector: Connector) {
        self.0[row][column] = connector;
        self.0[column][row] = connector;
    }

    /// Build from rows of connector tokens. Every row must hold 15
    /// tokens and there must be 15 rows.
    pub fn from_tokens<S: AsRef<str>>(rows: &[Vec<S>]) -> DecideResult<Self> {
        if rows.len() != NUM_LICS {
            return Err(DecideError::Shape(format!(
                "LCM must have {NUM_LICS} rows, got {}",
                rows.len()
            )));
        }
        let mut lcm = Self::default();
        for (r, row) in rows.iter().enumerate() {
            if row.len() != NUM_LICS {
                return Err(DecideError::Shape(format!(
                    "LCM row {r} must have {NUM_LICS} entries, got {}",
                    row.len()
                )));
            }
            for (c, token) in row.iter().enumerate() {
                lcm.0[r][c] = token.as_ref().parse()?;
            }
        }
        Ok(lcm)
    }

    /// Load from a JSON array of 15 arrays of 15 connector tokens.
    pub fn from_json(json: &str) -> DecideResult<Self> {
        let rows: Vec<Vec<String>> = serde_json::from_str(json)
            .map_err(|e| DecideError::Config(format!("JSON parse error: {e}")))?;
        Self::from_tokens(&rows)
    }
}
