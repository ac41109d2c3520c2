#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use chrono::{Duration, TimeZone, Utc};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Pool, Sqlite};
use tempfile::TempDir;

use cubetimer_core::{Puzzle, SolveRecord};
use cubetimer_server::db;
use cubetimer_server::routes;
use cubetimer_server::state::AppState;

/// A fresh file-backed pool with the schema applied. The TempDir must
/// outlive the pool.
pub async fn test_pool() -> (Pool<Sqlite>, TempDir) {
    let dir = TempDir::new().unwrap();
    let opts = SqliteConnectOptions::new().filename(dir.path().join("test.db"));
    let pool = db::connect(opts).await.unwrap();
    (pool, dir)
}

/// The full router over a fresh store, for oneshot-driven API tests.
pub async fn test_app() -> (Router, TempDir) {
    let (pool, dir) = test_pool().await;
    let state = Arc::new(AppState::new(pool));
    (routes::app(state), dir)
}

/// A solve created `age_secs` before a fixed anchor instant, so ordering
/// in tests never depends on the wall clock.
pub fn solve_at(puzzle: Puzzle, time_secs: f64, age_secs: i64) -> SolveRecord {
    let anchor = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    SolveRecord {
        created_at: anchor - Duration::seconds(age_secs),
        ..SolveRecord::new(puzzle, time_secs, "R U R' U'")
    }
}
