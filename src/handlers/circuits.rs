//! Circuit lookups, optionally scoped to a season.

use crate::error::AppError;
use crate::model::Circuit;
use crate::params::parse_int;
use crate::response::{fetch_all, fetch_non_empty, fetch_single};
use crate::sql::queries;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Circuit>>, AppError> {
    let circuits = fetch_all(&state, &queries::all_circuits()).await?;
    Ok(Json(circuits))
}

pub async fn by_season(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> Result<Json<Vec<Circuit>>, AppError> {
    let year = parse_int("Season year", &year)?;
    let circuits = fetch_non_empty(&state, &queries::circuits_by_season(year), || {
        format!("No circuits found for season {}.", year)
    })
    .await?;
    Ok(Json(circuits))
}

pub async fn by_ref(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> Result<Json<Circuit>, AppError> {
    let circuit = fetch_single(&state, &queries::circuit_by_ref(&reference), || {
        format!("Circuit with ref '{}' was not found.", reference)
    })
    .await?;
    Ok(Json(circuit))
}
