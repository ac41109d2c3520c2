use std::sync::Arc;

use axum::Router;

use crate::state::AppState;

pub mod scramble;
pub mod solves;
pub mod system;

/// Assembles the full API surface onto shared state. Tests drive this
/// router directly with `tower::ServiceExt::oneshot`.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(system::system_routes())
        .merge(scramble::scramble_routes())
        .merge(solves::solve_routes())
        .with_state(state)
}
