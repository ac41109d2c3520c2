use crate::consts::PENALTY_SECS;
use crate::error::{CoreError, CoreResult};
use crate::puzzle::Puzzle;
use crate::stats::AverageKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};
use uuid::Uuid;

/// One timed solve as it lives in the store.
///
/// `time_secs` is the effective time: once a penalty is applied the two
/// seconds are baked in, and `penalty` only records that it happened.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveRecord {
    pub id: Uuid,
    pub puzzle: Puzzle,
    pub time_secs: f64,
    pub penalty: bool,
    pub dnf: bool,
    pub scramble: String,
    pub created_at: DateTime<Utc>,
}

impl SolveRecord {
    pub fn new(puzzle: Puzzle, time_secs: f64, scramble: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            puzzle,
            time_secs,
            penalty: false,
            dnf: false,
            scramble: scramble.into(),
            created_at: Utc::now(),
        }
    }

    /// Applies a post-hoc mutation to this solve. Penalties stack: a second
    /// "+2" adds another two seconds. Marking DNF keeps the recorded time.
    pub fn apply(&mut self, action: SolveAction) {
        match action {
            SolveAction::Penalty => {
                self.time_secs += PENALTY_SECS;
                self.penalty = true;
            }
            SolveAction::Dnf => {
                self.dnf = true;
            }
        }
    }
}

/// Post-hoc mutation of a recorded solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SolveAction {
    Penalty,
    Dnf,
}

impl SolveAction {
    pub fn parse(s: &str) -> CoreResult<Self> {
        Self::from_str(s).map_err(|_| CoreError::UnknownAction(s.to_string()))
    }
}

/// The best value ever achieved for one metric kind on one puzzle.
/// At most one of these exists per (puzzle, kind) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalBestRecord {
    pub id: Uuid,
    pub puzzle: Puzzle,
    pub kind: AverageKind,
    pub time_secs: f64,
    pub created_at: DateTime<Utc>,
}

impl PersonalBestRecord {
    pub fn new(puzzle: Puzzle, kind: AverageKind, time_secs: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            puzzle,
            kind,
            time_secs,
            created_at: Utc::now(),
        }
    }
}

/// Link from a personal best to one solve inside its averaging window.
/// A best for a kind with sample size N carries exactly N of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestContribution {
    pub id: Uuid,
    pub personal_best_id: Uuid,
    pub solve_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl BestContribution {
    pub fn new(personal_best_id: Uuid, solve_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            personal_best_id,
            solve_id,
            created_at: Utc::now(),
        }
    }
}
