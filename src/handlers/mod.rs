//! HTTP handlers: validate path parameters, run one query, map rows.

pub mod circuits;
pub mod common;
pub mod constructors;
pub mod drivers;
pub mod qualifying;
pub mod races;
pub mod results;
pub mod standings;
