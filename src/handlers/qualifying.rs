//! Qualifying sessions by race.

use crate::error::AppError;
use crate::model::QualifyingEntry;
use crate::params::parse_int;
use crate::response::fetch_non_empty;
use crate::sql::queries;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn by_race(
    State(state): State<AppState>,
    Path(race_id): Path<String>,
) -> Result<Json<Vec<QualifyingEntry>>, AppError> {
    let race_id = parse_int("Race id", &race_id)?;
    let entries = fetch_non_empty(&state, &queries::qualifying_by_race(race_id), || {
        format!("No qualifying results found for race {}.", race_id)
    })
    .await?;
    Ok(Json(entries))
}
