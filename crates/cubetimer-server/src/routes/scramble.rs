use std::sync::Arc;

use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use cubetimer_core::scramble::{self, Scramble};
use cubetimer_core::Puzzle;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ScrambleParams {
    pub puzzle: String,
}

#[derive(Serialize)]
pub struct ScrambleResponse {
    pub puzzle: Puzzle,
    pub moves: Vec<String>,
    pub scramble: String,
}

impl ScrambleResponse {
    pub fn from_scramble(scramble: &Scramble) -> Self {
        Self {
            puzzle: scramble.puzzle,
            moves: scramble.moves.iter().map(|m| m.to_string()).collect(),
            scramble: scramble.notation(),
        }
    }
}

pub fn scramble_routes() -> Router<Arc<AppState>> {
    Router::new().route("/scramble", get(fresh))
}

async fn fresh(Query(params): Query<ScrambleParams>) -> AppResult<Json<ScrambleResponse>> {
    let puzzle = Puzzle::parse(&params.puzzle)?;

    let mut rng = fastrand::Rng::new();
    let scramble = scramble::generate(puzzle, &mut rng);

    Ok(Json(ScrambleResponse::from_scramble(&scramble)))
}
