//! Standings are a snapshot taken after the given race.

use crate::error::AppError;
use crate::model::{ConstructorStanding, DriverStanding};
use crate::params::parse_int;
use crate::response::fetch_non_empty;
use crate::sql::queries;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn drivers(
    State(state): State<AppState>,
    Path(race_id): Path<String>,
) -> Result<Json<Vec<DriverStanding>>, AppError> {
    let race_id = parse_int("Race id", &race_id)?;
    let standings = fetch_non_empty(&state, &queries::driver_standings_by_race(race_id), || {
        format!("No driver standings found for race {}.", race_id)
    })
    .await?;
    Ok(Json(standings))
}

pub async fn constructors(
    State(state): State<AppState>,
    Path(race_id): Path<String>,
) -> Result<Json<Vec<ConstructorStanding>>, AppError> {
    let race_id = parse_int("Race id", &race_id)?;
    let query = queries::constructor_standings_by_race(race_id);
    let standings = fetch_non_empty(&state, &query, || {
        format!("No constructor standings found for race {}.", race_id)
    })
    .await?;
    Ok(Json(standings))
}
