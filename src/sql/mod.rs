//! Safe SQL: identifiers from projections only, values as parameters.

mod builder;
pub mod params;
pub mod projections;
pub mod queries;
pub use builder::*;
pub use params::*;
