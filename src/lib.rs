//! Read-only JSON API over the Formula 1 championship dataset.

pub mod config;
pub mod error;
pub mod handlers;
pub mod mapping;
pub mod model;
pub mod params;
pub mod response;
pub mod routes;
pub mod source;
pub mod sql;
pub mod state;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use routes::{api_routes, build_router};
pub use source::{DataSource, DataSourceError, Row, SqliteDataSource};
pub use state::AppState;
