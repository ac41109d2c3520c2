use crate::solve::PersonalBestRecord;
use crate::stats::{AverageKind, CurrentAverages};
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

/// The stored personal bests for one puzzle, at most one per metric kind.
#[derive(Debug, Clone, Default)]
pub struct CurrentBests {
    by_kind: HashMap<AverageKind, PersonalBestRecord>,
}

impl CurrentBests {
    pub fn from_records(records: Vec<PersonalBestRecord>) -> Self {
        let by_kind = records.into_iter().map(|pb| (pb.kind, pb)).collect();
        Self { by_kind }
    }

    pub fn get(&self, kind: AverageKind) -> Option<&PersonalBestRecord> {
        self.by_kind.get(&kind)
    }
}

/// One planned best-replacement write for a single metric kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestReplacement {
    pub kind: AverageKind,
    pub time_secs: f64,
    /// The full averaging window behind the new best, newest first.
    pub solve_ids: Vec<Uuid>,
    /// Id of the record being displaced; None for a first-ever best.
    pub replaces: Option<Uuid>,
}

/// Compares fresh averages against stored bests and plans the writes.
///
/// A defined average beats the incumbent only when strictly faster; ties
/// keep the incumbent. Undefined averages never displace anything. Plans
/// come out in the fixed metric order and are independent of each other.
pub fn plan_best_updates(bests: &CurrentBests, current: &CurrentAverages) -> Vec<BestReplacement> {
    let mut plans = Vec::new();

    for (kind, average) in current.entries() {
        let Some(average) = average else { continue };

        let incumbent = bests.get(kind);
        if incumbent.is_none_or(|pb| average.time_secs < pb.time_secs) {
            plans.push(BestReplacement {
                kind,
                time_secs: average.time_secs,
                solve_ids: average.solves.iter().map(|s| s.id).collect(),
                replaces: incumbent.map(|pb| pb.id),
            });
        }
    }

    plans
}
