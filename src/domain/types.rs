//! Shared types for the marks processor

use chrono::{NaiveDate, NaiveDateTime};

/// The four expected attendance events of a working day, in day order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventSlot {
    ClockIn,
    LunchStart,
    LunchEnd,
    ClockOut,
}

/// Number of expected event slots per day
pub const SLOT_COUNT: usize = 4;

impl EventSlot {
    /// All slots in day order. Index in this array is the slot's row in the
    /// cost matrix and its position in `DayResult::slots`.
    pub const ALL: [EventSlot; SLOT_COUNT] =
        [EventSlot::ClockIn, EventSlot::LunchStart, EventSlot::LunchEnd, EventSlot::ClockOut];

    /// Output spreadsheet column header for this slot (original report schema)
    pub fn column_name(&self) -> &'static str {
        match self {
            EventSlot::ClockIn => "Fecha Inicial",
            EventSlot::LunchStart => "Fecha Inicio Almuerzo",
            EventSlot::LunchEnd => "Fecha Fin Almuerzo",
            EventSlot::ClockOut => "Fecha Final",
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// One parsed input row: a person and their punch timestamp.
///
/// `timestamp` is `None` when the cell text (or cell type) could not be
/// parsed; such rows carry no usable time and are dropped by the batch
/// driver before grouping.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkRow {
    pub person: String,
    pub timestamp: Option<NaiveDateTime>,
}

/// All punches for one person on one calendar date, the unit of
/// classification. Observations arrive unordered; the classifier sorts them.
#[derive(Debug, Clone)]
pub struct PersonDayGroup {
    pub person: String,
    pub date: NaiveDate,
    pub observations: Vec<NaiveDateTime>,
}

/// Classification outcome for a single person-day.
///
/// Invariant: every observation of the group appears exactly once, either in
/// one slot of `slots` or once in `unclassified` (ascending order).
#[derive(Debug, Clone, PartialEq)]
pub struct DayResult {
    /// Matched timestamp per event slot, indexed by `EventSlot::index()`
    pub slots: [Option<NaiveDateTime>; SLOT_COUNT],
    /// Observations the optimal assignment could not place, ascending
    pub unclassified: Vec<NaiveDateTime>,
}

impl DayResult {
    pub fn empty() -> Self {
        Self { slots: [None; SLOT_COUNT], unclassified: Vec::new() }
    }
}

/// One row of the final output table: a person-day with its classification.
#[derive(Debug, Clone)]
pub struct DayRow {
    pub person: String,
    pub date: NaiveDate,
    pub result: DayResult,
}
