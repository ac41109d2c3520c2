#![allow(dead_code)]

use chrono::{Duration, TimeZone, Utc};
use cubetimer_core::{AverageKind, PersonalBestRecord, Puzzle, SolveRecord};

/// A solve pinned to a fixed timestamp so orderings stay deterministic.
/// `age_secs` pushes the solve into the past; age 0 is the newest.
pub fn solve_at(puzzle: Puzzle, time_secs: f64, age_secs: i64) -> SolveRecord {
    let anchor = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let mut record = SolveRecord::new(puzzle, time_secs, "R U R' U'");
    record.created_at = anchor - Duration::seconds(age_secs);
    record
}

/// Newest-first history built from newest-first times.
pub fn history(puzzle: Puzzle, times: &[f64]) -> Vec<SolveRecord> {
    times
        .iter()
        .enumerate()
        .map(|(i, &t)| solve_at(puzzle, t, i as i64))
        .collect()
}

/// A stored personal best for the 3x3x3.
pub fn pb(kind: AverageKind, time_secs: f64) -> PersonalBestRecord {
    PersonalBestRecord::new(Puzzle::Cube3, kind, time_secs)
}
