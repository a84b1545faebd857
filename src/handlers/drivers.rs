//! Driver lookups and surname search.

use crate::error::AppError;
use crate::model::{Driver, RaceResult};
use crate::params::parse_int;
use crate::response::{fetch_all, fetch_non_empty, fetch_single};
use crate::sql::queries;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Driver>>, AppError> {
    let drivers = fetch_all(&state, &queries::all_drivers()).await?;
    Ok(Json(drivers))
}

/// Results of one race; same payload as `/results/{raceId}`.
pub async fn by_race(
    State(state): State<AppState>,
    Path(race_id): Path<String>,
) -> Result<Json<Vec<RaceResult>>, AppError> {
    let race_id = parse_int("Race id", &race_id)?;
    let results = fetch_non_empty(&state, &queries::results_by_race(race_id), || {
        format!("No drivers found for race {}.", race_id)
    })
    .await?;
    Ok(Json(results))
}

pub async fn search(
    State(state): State<AppState>,
    Path(fragment): Path<String>,
) -> Result<Json<Vec<Driver>>, AppError> {
    let drivers = fetch_non_empty(&state, &queries::drivers_by_surname_prefix(&fragment), || {
        format!("No drivers found with surname starting with '{}'.", fragment)
    })
    .await?;
    Ok(Json(drivers))
}

pub async fn by_ref(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> Result<Json<Driver>, AppError> {
    let driver = fetch_single(&state, &queries::driver_by_ref(&reference), || {
        format!("Driver with ref '{}' was not found.", reference)
    })
    .await?;
    Ok(Json(driver))
}
