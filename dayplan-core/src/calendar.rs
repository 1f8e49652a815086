//! Week and month grid arithmetic for calendar navigation.
//!
//! Weeks start on Sunday. The month grid is always rectangular: leading and
//! trailing cells borrow days from the adjacent months so every row has
//! seven cells.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

/// One cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthCell {
    pub date: NaiveDate,
    pub is_current_month: bool,
}

/// The Sunday that starts the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(date.weekday().num_days_from_sunday() as u64)
}

/// The seven days of the week containing `date`, starting on Sunday.
pub fn week_days(date: NaiveDate) -> Vec<NaiveDate> {
    let start = week_start(date);
    (0..7).map(|i| start + Days::new(i)).collect()
}

/// Rectangular grid of cells for the month containing `date`.
///
/// Cells run Sunday to Saturday. Cells borrowed from the adjacent months
/// are flagged `is_current_month = false`.
pub fn month_grid(date: NaiveDate) -> Vec<MonthCell> {
    let first = date.with_day(1).unwrap();
    let mut cells = Vec::new();

    // Leading days of the previous month, back to Sunday.
    let mut cursor = week_start(first);
    while cursor < first {
        cells.push(MonthCell {
            date: cursor,
            is_current_month: false,
        });
        cursor = cursor + Days::new(1);
    }

    // Every day of the current month.
    while cursor.month() == first.month() {
        cells.push(MonthCell {
            date: cursor,
            is_current_month: true,
        });
        cursor = cursor + Days::new(1);
    }

    // Trailing days of the next month, out to a full week.
    while cells.len() % 7 != 0 {
        cells.push(MonthCell {
            date: cursor,
            is_current_month: false,
        });
        cursor = cursor + Days::new(1);
    }

    cells
}
