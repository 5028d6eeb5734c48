//! Domain models - core business types and the event schedule
//!
//! This module contains the canonical data types used throughout the system:
//! - `EventSlot` - the four expected daily attendance events
//! - `MarkRow` - one parsed input row (person + punch timestamp)
//! - `PersonDayGroup` - the unit of classification
//! - `DayResult` / `DayRow` - classification output
//! - `ScheduleTable` - nominal times and eligibility windows per slot

pub mod schedule;
pub mod types;

// Re-export commonly used types at module level
pub use schedule::ScheduleTable;
pub use types::{DayResult, DayRow, EventSlot, MarkRow, PersonDayGroup, SLOT_COUNT};
