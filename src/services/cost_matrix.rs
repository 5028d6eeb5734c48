//! Assignment cost matrix for one person-day
//!
//! Rows are the four event slots, columns the day's observations. A cell
//! holds the absolute distance in seconds between the observation and the
//! slot's nominal time on that same date, or a sentinel for observations
//! outside the slot's eligibility window. The sentinel value never leaves
//! this module; callers test pairs through `is_real`.

use crate::domain::{EventSlot, ScheduleTable, SLOT_COUNT};
use chrono::NaiveDateTime;

/// Cost marking an ineligible (slot, observation) pair. Real costs are
/// bounded by one day (86400 s), so anything at or above this is a forced
/// dummy pairing.
const SENTINEL: f64 = 1e9;

/// Dense row-major cost matrix, `SLOT_COUNT` rows by one column per
/// observation. Built fresh per person-day and never mutated afterward.
#[derive(Debug, Clone)]
pub struct CostMatrix {
    cols: usize,
    data: Vec<f64>,
}

impl CostMatrix {
    /// Build the cost matrix for one day's observations (any order).
    pub fn build(schedule: &ScheduleTable, observations: &[NaiveDateTime]) -> Self {
        let cols = observations.len();
        let mut data = vec![SENTINEL; SLOT_COUNT * cols];

        for slot in EventSlot::ALL {
            for (j, obs) in observations.iter().enumerate() {
                if schedule.is_eligible(slot, *obs) {
                    let nominal = obs.date().and_time(schedule.nominal_of(slot));
                    let secs = (*obs - nominal).num_seconds().abs() as f64;
                    data[slot.index() * cols + j] = secs;
                }
            }
        }

        Self { cols, data }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        SLOT_COUNT
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cost at (row, col); positions beyond the real matrix (solver padding)
    /// read as the sentinel.
    #[inline]
    pub fn padded_get(&self, row: usize, col: usize) -> f64 {
        if row < SLOT_COUNT && col < self.cols {
            self.data[row * self.cols + col]
        } else {
            SENTINEL
        }
    }

    /// Whether (row, col) is a genuine eligible pairing rather than a
    /// sentinel or padding cell.
    #[inline]
    pub fn is_real(&self, row: usize, col: usize) -> bool {
        self.padded_get(row, col) < SENTINEL
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
    fn cost_is_seconds_from_nominal() {
        let schedule = ScheduleTable::standard();
        let matrix = CostMatrix::build(&schedule, &[at(8, 1, 30)]);
        // 08:01:30 is 90 s past the 08:00 clock-in nominal
        assert_eq!(matrix.padded_get(EventSlot::ClockIn.index(), 0), 90.0);
        assert!(matrix.is_real(EventSlot::ClockIn.index(), 0));
    }

    #[test]
    fn ineligible_pairs_are_not_real() {
        let schedule = ScheduleTable::standard();
        // 08:01 is outside every window except clock-in
        let matrix = CostMatrix::build(&schedule, &[at(8, 1, 0)]);
        assert!(matrix.is_real(EventSlot::ClockIn.index(), 0));
        assert!(!matrix.is_real(EventSlot::LunchStart.index(), 0));
        assert!(!matrix.is_real(EventSlot::LunchEnd.index(), 0));
        assert!(!matrix.is_real(EventSlot::ClockOut.index(), 0));
    }

    #[test]
    fn early_observation_costs_symmetrically() {
        let schedule = ScheduleTable::standard();
        let matrix = CostMatrix::build(&schedule, &[at(7, 58, 0), at(8, 2, 0)]);
        let row = EventSlot::ClockIn.index();
        assert_eq!(matrix.padded_get(row, 0), 120.0);
        assert_eq!(matrix.padded_get(row, 1), 120.0);
    }

    #[test]
    fn padding_cells_read_as_not_real() {
        let schedule = ScheduleTable::standard();
        let matrix = CostMatrix::build(&schedule, &[at(8, 0, 0)]);
        assert!(!matrix.is_real(0, 5));
        assert!(!matrix.is_real(7, 0));
    }

    #[test]
    fn midday_observation_is_real_for_both_lunch_slots() {
        let schedule = ScheduleTable::standard();
        let matrix = CostMatrix::build(&schedule, &[at(13, 30, 0)]);
        assert!(matrix.is_real(EventSlot::LunchStart.index(), 0));
        assert!(matrix.is_real(EventSlot::LunchEnd.index(), 0));
        assert_eq!(matrix.padded_get(EventSlot::LunchStart.index(), 0), 1800.0);
        assert_eq!(matrix.padded_get(EventSlot::LunchEnd.index(), 0), 1800.0);
    }
}
