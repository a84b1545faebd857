//! Fetch-and-map helpers applying the not-found policy, plus plain message bodies.

use crate::error::AppError;
use crate::mapping::{map_rows, MapRow};
use crate::sql::QueryBuf;
use crate::state::AppState;
use serde::Serialize;

#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// All matching rows, mapped. An empty result is a valid (empty) collection.
pub async fn fetch_all<T: MapRow>(state: &AppState, query: &QueryBuf) -> Result<Vec<T>, AppError> {
    let rows = state.source.fetch_all(query).await?;
    Ok(map_rows(&rows)?)
}

/// All matching rows, mapped; no rows is a 404 carrying `not_found`.
pub async fn fetch_non_empty<T: MapRow>(
    state: &AppState,
    query: &QueryBuf,
    not_found: impl FnOnce() -> String,
) -> Result<Vec<T>, AppError> {
    let rows = state.source.fetch_all(query).await?;
    if rows.is_empty() {
        return Err(AppError::NotFound(not_found()));
    }
    Ok(map_rows(&rows)?)
}

/// The single matching row, mapped; no row is a 404 carrying `not_found`.
pub async fn fetch_single<T: MapRow>(
    state: &AppState,
    query: &QueryBuf,
    not_found: impl FnOnce() -> String,
) -> Result<T, AppError> {
    let row = state
        .source
        .fetch_one(query)
        .await?
        .ok_or_else(|| AppError::NotFound(not_found()))?;
    Ok(T::map_row(&row)?)
}
