pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod model;
pub mod normalize;
pub mod source;

pub use engine::{recompute, AggregateResult};
pub use error::{DashboardError, Result};
pub use model::*;
