use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use cubetimer_core::consts::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use cubetimer_core::scramble;
use cubetimer_core::timefmt::{format_time, parse_time_str};
use cubetimer_core::{
    plan_best_updates, Average, AverageKind, CoreError, CurrentAverages, CurrentBests,
    PersonalBestRecord, Puzzle, SolveAction, SolveRecord,
};

use crate::error::{AppError, AppResult};
use crate::routes::scramble::ScrambleResponse;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListParams {
    pub puzzle: String,
    pub cursor: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct PuzzleParams {
    pub puzzle: String,
}

#[derive(Deserialize)]
pub struct ActionParams {
    pub action: String,
}

#[derive(Deserialize)]
pub struct DetailsParams {
    pub id: String,
    pub puzzle: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateSolveRequest {
    pub puzzle: String,
    pub time: String,
    pub scramble: String,
}

#[derive(Serialize)]
pub struct SolveView {
    pub id: Uuid,
    pub puzzle: Puzzle,
    pub time_secs: f64,
    pub time_str: String,
    pub penalty: bool,
    pub dnf: bool,
    pub scramble: String,
    pub created_at: DateTime<Utc>,
}

impl SolveView {
    fn from_record(solve: &SolveRecord) -> Self {
        Self {
            id: solve.id,
            puzzle: solve.puzzle,
            time_secs: solve.time_secs,
            time_str: format_time(Some(solve.time_secs)),
            penalty: solve.penalty,
            dnf: solve.dnf,
            scramble: solve.scramble.clone(),
            created_at: solve.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct SolvePageResponse {
    pub solves: Vec<SolveView>,
    pub next_cursor: Option<Uuid>,
}

#[derive(Serialize)]
pub struct AverageView {
    pub time_secs: Option<f64>,
    pub time_str: String,
    pub solve_ids: Vec<Uuid>,
}

impl AverageView {
    fn from_average(average: Option<&Average>) -> Self {
        Self {
            time_secs: average.map(|a| a.time_secs),
            time_str: format_time(average.map(|a| a.time_secs)),
            solve_ids: average
                .map(|a| a.solves.iter().map(|s| s.id).collect())
                .unwrap_or_default(),
        }
    }
}

#[derive(Serialize)]
pub struct CurrentAveragesView {
    pub single: AverageView,
    pub avg_five: AverageView,
    pub avg_twelve: AverageView,
    pub mean_hundred: AverageView,
}

impl CurrentAveragesView {
    fn from_current(current: &CurrentAverages) -> Self {
        Self {
            single: AverageView::from_average(current.single.as_ref()),
            avg_five: AverageView::from_average(current.avg_five.as_ref()),
            avg_twelve: AverageView::from_average(current.avg_twelve.as_ref()),
            mean_hundred: AverageView::from_average(current.mean_hundred.as_ref()),
        }
    }
}

#[derive(Serialize)]
pub struct BestSlotView {
    pub record: Option<PersonalBestRecord>,
    pub time_str: String,
}

impl BestSlotView {
    fn from_record(record: Option<&PersonalBestRecord>) -> Self {
        Self {
            time_str: format_time(record.map(|r| r.time_secs)),
            record: record.cloned(),
        }
    }
}

#[derive(Serialize)]
pub struct CurrentBestsView {
    pub single: BestSlotView,
    pub avg_five: BestSlotView,
    pub avg_twelve: BestSlotView,
    pub mean_hundred: BestSlotView,
}

impl CurrentBestsView {
    fn from_bests(bests: &CurrentBests) -> Self {
        Self {
            single: BestSlotView::from_record(bests.get(AverageKind::Single)),
            avg_five: BestSlotView::from_record(bests.get(AverageKind::AvgFive)),
            avg_twelve: BestSlotView::from_record(bests.get(AverageKind::AvgTwelve)),
            mean_hundred: BestSlotView::from_record(bests.get(AverageKind::MeanHundred)),
        }
    }
}

#[derive(Serialize)]
pub struct CreateSolveResponse {
    pub solve: SolveView,
    pub current: CurrentAveragesView,
    pub scramble: ScrambleResponse,
    pub new_best: bool,
}

#[derive(Serialize)]
pub struct DetailEntry {
    pub scramble: String,
    pub time_str: String,
}

fn detail_entries(solves: &[SolveRecord]) -> Vec<DetailEntry> {
    solves
        .iter()
        .map(|s| DetailEntry {
            scramble: s.scramble.clone(),
            time_str: format_time(Some(s.time_secs)),
        })
        .collect()
}

pub fn solve_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/solves", get(list).post(create))
        .route("/solves/current", get(current))
        .route("/solves/best", get(best))
        .route("/solves/details", get(details))
        .route("/solves/{id}", patch(update).delete(remove))
}

async fn list(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<SolvePageResponse>> {
    let puzzle = Puzzle::parse(&params.puzzle)?;
    let limit = params.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);

    // A cursor that isn't a known solve id falls back to the first page.
    let cursor = params.cursor.as_deref().and_then(|c| Uuid::parse_str(c).ok());

    let solves = state.store.list_solves(puzzle, cursor, limit).await?;

    let next_cursor = if solves.len() == limit as usize {
        solves.last().map(|s| s.id)
    } else {
        None
    };

    Ok(Json(SolvePageResponse {
        solves: solves.iter().map(SolveView::from_record).collect(),
        next_cursor,
    }))
}

async fn create(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateSolveRequest>,
) -> AppResult<(StatusCode, Json<CreateSolveResponse>)> {
    // 1. Validate
    let puzzle = Puzzle::parse(&payload.puzzle)?;
    let time_secs = parse_time_str(&payload.time)
        .ok_or_else(|| CoreError::InvalidTime(payload.time.clone()))?;

    // 2. Persist the solve
    let solve = SolveRecord::new(puzzle, time_secs, &payload.scramble);
    state.store.insert_solve(&solve).await?;

    // 3. Recompute the rolling averages
    let history = state.store.recent_history(puzzle).await?;
    let current = CurrentAverages::compute(&history);

    // 4. Plan and apply best replacements
    let bests = CurrentBests::from_records(state.store.personal_bests(puzzle).await?);
    let plans = plan_best_updates(&bests, &current);
    let new_best = !plans.is_empty();

    for plan in &plans {
        state.store.replace_best(puzzle, plan).await?;
        info!(
            "🏆 NEW RECORD! {} {} | {}",
            puzzle,
            plan.kind,
            format_time(Some(plan.time_secs))
        );
    }

    // 5. Hand back a fresh scramble alongside the updated stats
    let mut rng = fastrand::Rng::new();
    let next = scramble::generate(puzzle, &mut rng);

    info!(
        "📥 Solve recorded: {} | {}",
        puzzle,
        format_time(Some(solve.time_secs))
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateSolveResponse {
            solve: SolveView::from_record(&solve),
            current: CurrentAveragesView::from_current(&current),
            scramble: ScrambleResponse::from_scramble(&next),
            new_best,
        }),
    ))
}

async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<ActionParams>,
) -> AppResult<Json<SolveView>> {
    // 1. Resolve the solve
    let id = Uuid::parse_str(&id)
        .map_err(|_| AppError::NotFound("Solve with this id was not found".to_string()))?;

    let mut solve = state
        .store
        .get_solve(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Solve with this id was not found".to_string()))?;

    // 2. Validate the action
    let action = SolveAction::parse(&params.action)?;

    // 3. Apply and persist
    solve.apply(action);
    state.store.update_solve(&solve).await?;

    Ok(Json(SolveView::from_record(&solve)))
}

async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| AppError::NotFound("Solve with this id wasn't found.".to_string()))?;

    if !state.store.delete_solve(id).await? {
        return Err(AppError::NotFound(
            "Solve with this id wasn't found.".to_string(),
        ));
    }

    Ok(StatusCode::NO_CONTENT)
}

async fn current(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PuzzleParams>,
) -> AppResult<Json<CurrentAveragesView>> {
    let puzzle = Puzzle::parse(&params.puzzle)?;

    let history = state.store.recent_history(puzzle).await?;
    let current = CurrentAverages::compute(&history);

    Ok(Json(CurrentAveragesView::from_current(&current)))
}

async fn best(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PuzzleParams>,
) -> AppResult<Json<CurrentBestsView>> {
    let puzzle = Puzzle::parse(&params.puzzle)?;

    let bests = CurrentBests::from_records(state.store.personal_bests(puzzle).await?);

    Ok(Json(CurrentBestsView::from_bests(&bests)))
}

async fn details(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DetailsParams>,
) -> AppResult<Json<Vec<DetailEntry>>> {
    match Uuid::parse_str(&params.id) {
        Ok(id) => {
            // A personal-best id expands to its contribution set.
            if let Some(best) = state.store.get_best(id).await? {
                let solves = state.store.best_contributions(best.id).await?;
                return Ok(Json(detail_entries(&solves)));
            }

            // A solve id is its own single entry.
            if let Some(solve) = state.store.get_solve(id).await? {
                return Ok(Json(detail_entries(std::slice::from_ref(&solve))));
            }

            Err(AppError::NotFound("That ID doesn't exist.".to_string()))
        }
        Err(_) => {
            // Anything else reads as a metric key against the live averages.
            let puzzle = params
                .puzzle
                .as_deref()
                .ok_or_else(|| AppError::NotFound("That ID doesn't exist.".to_string()))?;
            let puzzle = Puzzle::parse(puzzle)?;
            let kind = AverageKind::parse(&params.id)?;

            let history = state.store.recent_history(puzzle).await?;
            let current = CurrentAverages::compute(&history);
            let average = current.get(kind).ok_or_else(|| {
                AppError::NotFound(format!("No {} recorded yet for {}", kind, puzzle))
            })?;

            Ok(Json(detail_entries(&average.solves)))
        }
    }
}
