//! Race results by race and by driver.

use crate::error::AppError;
use crate::model::RaceResult;
use crate::params::{parse_int, SeasonRange};
use crate::response::fetch_non_empty;
use crate::sql::queries;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn by_driver_in_seasons(
    State(state): State<AppState>,
    Path((reference, start, end)): Path<(String, String, String)>,
) -> Result<Json<Vec<RaceResult>>, AppError> {
    let seasons = SeasonRange::parse(&start, &end)?;
    let query = queries::results_by_driver_in_seasons(&reference, seasons);
    let results = fetch_non_empty(&state, &query, || {
        format!(
            "No results found for driver '{}' between seasons {} and {}.",
            reference,
            seasons.start(),
            seasons.end()
        )
    })
    .await?;
    Ok(Json(results))
}

pub async fn by_driver(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> Result<Json<Vec<RaceResult>>, AppError> {
    let results = fetch_non_empty(&state, &queries::results_by_driver(&reference), || {
        format!("No results found for driver '{}'.", reference)
    })
    .await?;
    Ok(Json(results))
}

pub async fn by_race(
    State(state): State<AppState>,
    Path(race_id): Path<String>,
) -> Result<Json<Vec<RaceResult>>, AppError> {
    let race_id = parse_int("Race id", &race_id)?;
    let results = fetch_non_empty(&state, &queries::results_by_race(race_id), || {
        format!("No results found for race {}.", race_id)
    })
    .await?;
    Ok(Json(results))
}
