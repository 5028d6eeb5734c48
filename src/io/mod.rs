//! IO modules - external interfaces and formats
//!
//! This module contains everything that touches bytes on the wire or on
//! disk:
//! - `timestamp` - locale timestamp parsing and display formatting
//! - `xlsx` - spreadsheet import (calamine) and export (rust_xlsxwriter)
//! - `http` - hyper HTTP endpoint (upload in, attachment out)

pub mod http;
pub mod timestamp;
pub mod xlsx;

// Re-export commonly used types
pub use xlsx::{read_marks, write_results, ImportError};
