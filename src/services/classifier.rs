//! Per person-day classification pipeline
//!
//! Sorts a day's punches, builds the cost matrix, runs the assignment
//! solver, projects real matches onto the four event slots and collects the
//! leftovers as unclassified.

use crate::domain::{DayResult, EventSlot, ScheduleTable};
use crate::services::assignment;
use crate::services::cost_matrix::CostMatrix;
use chrono::NaiveDateTime;
use tracing::debug;

/// Classify one person-day's observations.
///
/// Every observation ends up in exactly one place: matched into a slot, or
/// listed in `unclassified` in ascending time order. A group with no
/// observations yields the all-empty result without touching the solver.
pub fn classify_day(schedule: &ScheduleTable, mut observations: Vec<NaiveDateTime>) -> DayResult {
    if observations.is_empty() {
        return DayResult::empty();
    }
    observations.sort_unstable();

    let matrix = CostMatrix::build(schedule, &observations);
    let assignment = assignment::solve(&matrix);

    let mut result = DayResult::empty();
    let mut taken = vec![false; observations.len()];

    for slot in EventSlot::ALL {
        let col = assignment[slot.index()];
        // Padding columns and sentinel pairings are forced dummy matches
        if col < observations.len() && matrix.is_real(slot.index(), col) {
            result.slots[slot.index()] = Some(observations[col]);
            taken[col] = true;
        }
    }

    for (j, obs) in observations.iter().enumerate() {
        if !taken[j] {
            result.unclassified.push(*obs);
        }
    }

    debug!(
        observations = observations.len(),
        matched = taken.iter().filter(|t| **t).count(),
        unclassified = result.unclassified.len(),
        "day_classified"
    );

    result
}
