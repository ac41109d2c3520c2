// Internal Modules
pub mod bests;
pub mod consts;
pub mod error;
pub mod puzzle;
pub mod scramble;
pub mod solve;
pub mod stats;
pub mod timefmt;

// Flat re-exports so callers can write cubetimer_core::Puzzle etc.
pub use bests::{plan_best_updates, BestReplacement, CurrentBests};
pub use error::{CoreError, CoreResult};
pub use puzzle::{Puzzle, SizeClass};
pub use scramble::{Face, Modifier, Move, Scramble};
pub use solve::{BestContribution, PersonalBestRecord, SolveAction, SolveRecord};
pub use stats::{average_of, Average, AverageKind, CurrentAverages};
