/// Seconds added to a solve when a "+2" penalty is applied.
/// WCA regulation 10E2: the penalty is a flat two seconds per incident.
pub const PENALTY_SECS: f64 = 2.0;

/// The largest rolling-average window we ever compute (mean of 100).
/// History reads never need more rows than this.
pub const MAX_AVERAGE_WINDOW: usize = 100;

/// Default page size for paginated solve listings.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Hard cap on a requested page size.
pub const MAX_PAGE_SIZE: i64 = 100;
