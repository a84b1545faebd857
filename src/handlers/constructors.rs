//! Constructor listing and lookup by reference.

use crate::error::AppError;
use crate::model::Constructor;
use crate::response::{fetch_all, fetch_single};
use crate::sql::queries;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Constructor>>, AppError> {
    let constructors = fetch_all(&state, &queries::all_constructors()).await?;
    Ok(Json(constructors))
}

pub async fn by_ref(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> Result<Json<Constructor>, AppError> {
    let constructor = fetch_single(&state, &queries::constructor_by_ref(&reference), || {
        format!("Constructor with ref '{}' was not found.", reference)
    })
    .await?;
    Ok(Json(constructor))
}
