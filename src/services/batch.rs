//! Batch driver: rows in, classified table out
//!
//! Drops rows whose timestamp failed to parse, groups the rest by
//! (person, date) and runs the day classifier once per group.

use crate::domain::{DayRow, MarkRow, PersonDayGroup, ScheduleTable};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Group parsed rows by (person, date), in sorted key order.
///
/// Rows without a usable timestamp are dropped here; they carry neither a
/// date to group under nor a time to match. This silently loses data by
/// design (inherited behavior), so the drop is logged.
pub fn group_rows(rows: Vec<MarkRow>) -> Vec<PersonDayGroup> {
    let total = rows.len();
    let mut dropped = 0usize;
    let mut groups: BTreeMap<(String, NaiveDate), Vec<NaiveDateTime>> = BTreeMap::new();

    for row in rows {
        match row.timestamp {
            Some(ts) => {
                groups.entry((row.person, ts.date())).or_default().push(ts);
            }
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        warn!(dropped = dropped, total = total, "unparseable_rows_dropped");
    }

    groups
        .into_iter()
        .map(|((person, date), observations)| PersonDayGroup { person, date, observations })
        .collect()
}

/// Classify a whole upload: group the rows, classify each person-day, and
/// assemble the output table. Groups are independent; the schedule table is
/// the only shared state and is read-only.
pub fn process_rows(schedule: &ScheduleTable, rows: Vec<MarkRow>) -> Vec<DayRow> {
    let groups = group_rows(rows);
    let group_count = groups.len();

    let table: Vec<DayRow> = groups
        .into_iter()
        .map(|group| DayRow {
            person: group.person,
            date: group.date,
            result: super::classifier::classify_day(schedule, group.observations),
        })
        .collect();

    info!(groups = group_count, "batch_processed");
    table
}
