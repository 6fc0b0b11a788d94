pub mod column;
pub mod dataset;
pub mod filter;
pub mod player;
pub mod table;

pub use column::{Column, ColumnKind};
pub use dataset::{Dataset, ALL_POSITIONS};
pub use filter::{FilterSpec, Scope};
pub use player::PlayerRecord;
pub use table::{Cell, Table};
