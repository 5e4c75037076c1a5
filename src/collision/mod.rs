//! Pairwise overlap testing and standalone spatial queries.

pub mod overlap;
pub mod queries;

pub use overlap::shapes_overlap;
pub use queries::{line_of_sight, point_hit};
