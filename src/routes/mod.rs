//! Route table. Static segments (`season`, `race`, `search`, ...) take
//! precedence over the `:ref` / `:race_id` captures at the same position.

mod api;
mod common;

pub use api::api_routes;
pub use common::build_router;
