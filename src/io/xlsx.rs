//! Spreadsheet import and export
//!
//! Import reads the uploaded workbook with calamine (xlsx/xls autodetected),
//! validates the required columns and turns each data row into a typed
//! `MarkRow`. String timestamp cells go through the locale parser; native
//! Excel datetime cells are taken as-is. Export rebuilds the result table
//! with rust_xlsxwriter, all cells as text.

use crate::domain::{DayRow, EventSlot, MarkRow};
use crate::io::timestamp;
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use rust_xlsxwriter::Workbook;
use std::io::Cursor;
use tracing::debug;

/// Required input column: person identifier
pub const COL_PERSON: &str = "Nombre y Apellido";
/// Required input column: punch timestamp
pub const COL_TIMESTAMP: &str = "Fecha/Hora";
/// Output column for punches the assignment could not place
pub const COL_UNCLASSIFIED: &str = "Sin Clasificar";

/// Why an upload could not be imported. All variants are client errors.
#[derive(Debug, PartialEq)]
pub enum ImportError {
    /// The bytes are not a readable workbook
    Unreadable(String),
    /// The workbook has no sheets
    EmptyWorkbook,
    /// The header row lacks one or more required columns
    MissingColumns(Vec<&'static str>),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Unreadable(e) => write!(f, "error leyendo Excel: {e}"),
            ImportError::EmptyWorkbook => write!(f, "el archivo no contiene hojas"),
            ImportError::MissingColumns(cols) => {
                write!(f, "Faltan columnas: {}", cols.join(", "))
            }
        }
    }
}

impl std::error::Error for ImportError {}

/// Read the first worksheet of an uploaded workbook into typed rows.
///
/// Rows whose timestamp cell cannot be interpreted still come back (with
/// `timestamp: None`) so the batch driver can count what it drops.
pub fn read_marks(bytes: &[u8]) -> Result<Vec<MarkRow>, ImportError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| ImportError::Unreadable(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(ImportError::EmptyWorkbook)?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| ImportError::Unreadable(e.to_string()))?;

    let mut rows_iter = range.rows();
    let header = rows_iter.next().ok_or_else(|| {
        ImportError::MissingColumns(vec![COL_PERSON, COL_TIMESTAMP])
    })?;

    let find_col = |name: &str| {
        header.iter().position(|cell| match cell {
            Data::String(s) => s.trim() == name,
            _ => false,
        })
    };
    let person_col = find_col(COL_PERSON);
    let timestamp_col = find_col(COL_TIMESTAMP);

    let (person_col, timestamp_col) = match (person_col, timestamp_col) {
        (Some(p), Some(t)) => (p, t),
        (p, t) => {
            let mut missing = Vec::new();
            if p.is_none() {
                missing.push(COL_PERSON);
            }
            if t.is_none() {
                missing.push(COL_TIMESTAMP);
            }
            return Err(ImportError::MissingColumns(missing));
        }
    };

    let mut rows = Vec::new();
    for row in rows_iter {
        let person = match row.get(person_col) {
            Some(Data::Empty) | None => continue,
            Some(cell) => cell.to_string().trim().to_string(),
        };
        if person.is_empty() {
            continue;
        }

        let ts = match row.get(timestamp_col) {
            Some(Data::String(s)) => timestamp::parse_mark(s),
            Some(Data::DateTime(dt)) => dt.as_datetime(),
            _ => None,
        };
        rows.push(MarkRow { person, timestamp: ts });
    }

    debug!(sheet = %sheet_name, rows = rows.len(), "marks_imported");
    Ok(rows)
}

/// Serialize the classified table to xlsx bytes.
///
/// Schema (one row per person-day): person, the four event columns in day
/// order, then the unclassified list. Every cell is written as text; slot
/// values carry the apostrophe prefix from the display formatter.
pub fn write_results(table: &[DayRow]) -> anyhow::Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    sheet.write_string(0, 0, COL_PERSON)?;
    for slot in EventSlot::ALL {
        sheet.write_string(0, 1 + slot.index() as u16, slot.column_name())?;
    }
    sheet.write_string(0, 5, COL_UNCLASSIFIED)?;

    for (i, day) in table.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_string(row, 0, &day.person)?;
        for slot in EventSlot::ALL {
            let text = timestamp::format_slot(day.result.slots[slot.index()]);
            sheet.write_string(row, 1 + slot.index() as u16, text)?;
        }
        sheet.write_string(row, 5, timestamp::format_unclassified(&day.result.unclassified))?;
    }

    Ok(workbook.save_to_buffer()?)
}
