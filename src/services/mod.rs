//! Services - the classification engine
//!
//! This module contains the core business logic:
//! - `cost_matrix` - slot-by-observation assignment costs
//! - `assignment` - minimum-cost bipartite matching (Hungarian algorithm)
//! - `classifier` - per person-day classification pipeline
//! - `batch` - grouping and result-table assembly for a whole upload

pub mod assignment;
pub mod batch;
pub mod classifier;
pub mod cost_matrix;

// Re-export commonly used entry points
pub use batch::process_rows;
pub use classifier::classify_day;
pub use cost_matrix::CostMatrix;
