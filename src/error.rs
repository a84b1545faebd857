//! Typed errors and HTTP mapping.

use crate::mapping::MapError;
use crate::source::DataSourceError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Message returned for any failure whose detail must stay server-side.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred.";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("API prefix must start with '/' and must not end with '/': '{0}'")]
    InvalidPrefix(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Route '{0}' was not found.")]
    RouteNotFound(String),
    #[error("data source: {0}")]
    DataSource(#[from] DataSourceError),
    #[error("row mapping: {0}")]
    Mapping(#[from] MapError),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) | AppError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            AppError::DataSource(_) | AppError::Mapping(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::DataSource(e) => {
                tracing::error!(error = ?e, "data source failure");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            AppError::Mapping(e) => {
                tracing::error!(error = ?e, "row mapping failure");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
