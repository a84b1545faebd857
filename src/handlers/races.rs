//! Race lookups by season or circuit.

use crate::error::AppError;
use crate::model::Race;
use crate::params::{parse_int, SeasonRange};
use crate::response::{fetch_non_empty, fetch_single};
use crate::sql::queries;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn by_season_round(
    State(state): State<AppState>,
    Path((year, round)): Path<(String, String)>,
) -> Result<Json<Race>, AppError> {
    let year = parse_int("Season year", &year)?;
    let round = parse_int("Round", &round)?;
    let race = fetch_single(&state, &queries::race_by_season_round(year, round), || {
        format!("Race round {} for season {} was not found.", round, year)
    })
    .await?;
    Ok(Json(race))
}

pub async fn by_season(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> Result<Json<Vec<Race>>, AppError> {
    let year = parse_int("Season year", &year)?;
    let races = fetch_non_empty(&state, &queries::races_by_season(year), || {
        format!("No races found for season {}.", year)
    })
    .await?;
    Ok(Json(races))
}

pub async fn by_circuit_in_seasons(
    State(state): State<AppState>,
    Path((reference, start, end)): Path<(String, String, String)>,
) -> Result<Json<Vec<Race>>, AppError> {
    let seasons = SeasonRange::parse(&start, &end)?;
    let query = queries::races_by_circuit_in_seasons(&reference, seasons);
    let races = fetch_non_empty(&state, &query, || {
        format!(
            "No races found for circuit '{}' between seasons {} and {}.",
            reference,
            seasons.start(),
            seasons.end()
        )
    })
    .await?;
    Ok(Json(races))
}

pub async fn by_circuit(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> Result<Json<Vec<Race>>, AppError> {
    let races = fetch_non_empty(&state, &queries::races_by_circuit(&reference), || {
        format!("No races found for circuit '{}'.", reference)
    })
    .await?;
    Ok(Json(races))
}

pub async fn by_id(
    State(state): State<AppState>,
    Path(race_id): Path<String>,
) -> Result<Json<Race>, AppError> {
    let id = parse_int("Race id", &race_id)?;
    let race = fetch_single(&state, &queries::race_by_id(id), || {
        format!("Race with id '{}' was not found.", id)
    })
    .await?;
    Ok(Json(race))
}
