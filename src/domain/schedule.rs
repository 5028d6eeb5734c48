//! Time-window table for expected attendance events
//!
//! Each of the four event slots has a nominal time (the assignment cost is
//! seconds-from-nominal) and an inclusive eligibility window. The table is a
//! fixed business rule, built once at startup and shared read-only.

use crate::domain::types::{EventSlot, SLOT_COUNT};
use chrono::{NaiveDateTime, NaiveTime};

/// Nominal time and eligibility window for one event slot
#[derive(Debug, Clone, Copy)]
struct SlotWindow {
    nominal: NaiveTime,
    min: NaiveTime,
    max: NaiveTime,
}

/// Immutable lookup table: event slot -> (nominal time, eligibility window)
#[derive(Debug, Clone)]
pub struct ScheduleTable {
    slots: [SlotWindow; SLOT_COUNT],
}

fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
    // Valid by construction for the fixed table values below
    NaiveTime::from_hms_opt(h, m, s).unwrap_or(NaiveTime::MIN)
}

impl ScheduleTable {
    /// The standard business schedule:
    /// clock-in 08:00 (05:00-10:30), lunch-start 13:00 (10:30-14:30),
    /// lunch-end 14:00 (12:30-16:00), clock-out 18:00 (15:00-23:59:59).
    pub fn standard() -> Self {
        Self {
            slots: [
                SlotWindow { nominal: hms(8, 0, 0), min: hms(5, 0, 0), max: hms(10, 30, 0) },
                SlotWindow { nominal: hms(13, 0, 0), min: hms(10, 30, 0), max: hms(14, 30, 0) },
                SlotWindow { nominal: hms(14, 0, 0), min: hms(12, 30, 0), max: hms(16, 0, 0) },
                SlotWindow { nominal: hms(18, 0, 0), min: hms(15, 0, 0), max: hms(23, 59, 59) },
            ],
        }
    }

    /// Nominal time for a slot
    pub fn nominal_of(&self, slot: EventSlot) -> NaiveTime {
        self.slots[slot.index()].nominal
    }

    /// Eligibility window `(min, max)` for a slot, inclusive on both ends
    pub fn window_of(&self, slot: EventSlot) -> (NaiveTime, NaiveTime) {
        let w = self.slots[slot.index()];
        (w.min, w.max)
    }

    /// Whether an observation's time-of-day falls inside the slot's window
    pub fn is_eligible(&self, slot: EventSlot, observation: NaiveDateTime) -> bool {
        let t = observation.time();
        let w = self.slots[slot.index()];
        t >= w.min && t <= w.max
    }
}

impl Default for ScheduleTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 11, 25).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn standard_table_values() {
        let table = ScheduleTable::standard();
        assert_eq!(table.nominal_of(EventSlot::ClockIn), hms(8, 0, 0));
        assert_eq!(table.nominal_of(EventSlot::LunchStart), hms(13, 0, 0));
        assert_eq!(table.nominal_of(EventSlot::LunchEnd), hms(14, 0, 0));
        assert_eq!(table.nominal_of(EventSlot::ClockOut), hms(18, 0, 0));
        assert_eq!(table.window_of(EventSlot::ClockIn), (hms(5, 0, 0), hms(10, 30, 0)));
        assert_eq!(table.window_of(EventSlot::ClockOut), (hms(15, 0, 0), hms(23, 59, 59)));
    }

    #[test]
    fn window_endpoints_are_inclusive() {
        let table = ScheduleTable::standard();
        assert!(table.is_eligible(EventSlot::ClockIn, at(5, 0, 0)));
        assert!(table.is_eligible(EventSlot::ClockIn, at(10, 30, 0)));
        assert!(!table.is_eligible(EventSlot::ClockIn, at(10, 30, 1)));
        assert!(!table.is_eligible(EventSlot::ClockIn, at(4, 59, 59)));
    }

    #[test]
    fn boundary_times_can_be_eligible_for_adjacent_slots() {
        // 10:30 sits on the clock-in max and the lunch-start min
        let table = ScheduleTable::standard();
        assert!(table.is_eligible(EventSlot::ClockIn, at(10, 30, 0)));
        assert!(table.is_eligible(EventSlot::LunchStart, at(10, 30, 0)));
    }

    #[test]
    fn clock_out_window_reaches_end_of_day() {
        let table = ScheduleTable::standard();
        assert!(table.is_eligible(EventSlot::ClockOut, at(23, 59, 59)));
        assert!(!table.is_eligible(EventSlot::ClockOut, at(14, 59, 59)));
    }
}
