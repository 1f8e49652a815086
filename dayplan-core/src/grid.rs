//! Time-grid geometry for day/week calendar views.
//!
//! Maps wall-clock times to vertical pixel offsets and back for a
//! scrollable time grid. All functions are pure; the rendering layer
//! supplies the configuration (pixel scale and visible hour window) per
//! view, so the day and week views share one set of arithmetic instead of
//! each re-deriving it with their own constants.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use serde::Serialize;

use crate::error::{PlannerError, PlannerResult};

/// Minimum rendered event height in pixels, so zero- and near-zero-duration
/// events stay visible and clickable.
pub const MIN_EVENT_HEIGHT: f64 = 24.0;

/// Visible window and pixel scale for a time grid.
#[derive(Debug, Clone, Copy)]
pub struct GridConfig {
    /// Height of one hour in pixels.
    pub pixels_per_hour: f64,
    /// First visible hour (inclusive).
    pub start_hour: u32,
    /// First hour past the visible window (exclusive).
    pub end_hour: u32,
}

impl GridConfig {
    pub fn new(pixels_per_hour: f64, start_hour: u32, end_hour: u32) -> PlannerResult<GridConfig> {
        if pixels_per_hour <= 0.0 {
            return Err(PlannerError::Validation(format!(
                "Pixels per hour must be positive, got {}",
                pixels_per_hour
            )));
        }
        if start_hour >= end_hour || end_hour > 24 {
            return Err(PlannerError::Validation(format!(
                "Invalid visible hour range {}-{}",
                start_hour, end_hour
            )));
        }
        Ok(GridConfig {
            pixels_per_hour,
            start_hour,
            end_hour,
        })
    }

    /// Whether `time` falls within the visible window `[start_hour, end_hour)`.
    pub fn contains(&self, time: NaiveTime) -> bool {
        let hours = time.hour() as f64 + time.minute() as f64 / 60.0;
        hours >= self.start_hour as f64 && hours < self.end_hour as f64
    }

    /// Total height of the grid in pixels.
    pub fn grid_height(&self) -> f64 {
        (self.end_hour - self.start_hour) as f64 * self.pixels_per_hour
    }

    /// Vertical pixel offset for a wall-clock time.
    ///
    /// Unclamped: times before the window produce negative offsets and
    /// times past it offsets beyond [`grid_height`](Self::grid_height);
    /// callers clip to the visible range.
    pub fn time_to_offset(&self, time: NaiveTime) -> f64 {
        let hours_since_start =
            time.hour() as f64 + time.minute() as f64 / 60.0 - self.start_hour as f64;
        hours_since_start * self.pixels_per_hour
    }

    /// Like [`time_to_offset`](Self::time_to_offset), but `None` when `time`
    /// falls outside the visible window. Bounded indicators such as the
    /// current-time line are suppressed by the caller rather than clamped
    /// to the grid edge.
    pub fn visible_offset(&self, time: NaiveTime) -> Option<f64> {
        if self.contains(time) {
            Some(self.time_to_offset(time))
        } else {
            None
        }
    }

    /// Strict variant of [`visible_offset`](Self::visible_offset) for
    /// callers that propagate errors instead of suppressing.
    pub fn offset_in_range(&self, time: NaiveTime) -> PlannerResult<f64> {
        self.visible_offset(time)
            .ok_or_else(|| PlannerError::OutOfRange {
                time: time.format("%H:%M").to_string(),
                start_hour: self.start_hour,
                end_hour: self.end_hour,
            })
    }

    /// Rendered height for an event spanning `start..end`.
    ///
    /// Monotonic non-decreasing in the duration and floored at
    /// [`MIN_EVENT_HEIGHT`].
    pub fn duration_to_height(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
        let hours = (end - start).num_seconds() as f64 / 3600.0;
        (hours * self.pixels_per_hour).max(MIN_EVENT_HEIGHT)
    }

    /// Inverse mapping: the wall-clock time at a vertical pixel offset,
    /// snapped to the nearest multiple of `snap_minutes` (ties round up)
    /// and combined with `reference_date`'s calendar day.
    ///
    /// The result is clamped into the day (hour 0-23, minute 0-55), so an
    /// offset dragged past the bottom of the grid cannot roll into the
    /// next day.
    pub fn offset_to_time(
        &self,
        offset: f64,
        snap_minutes: u32,
        reference_date: NaiveDate,
    ) -> PlannerResult<NaiveDateTime> {
        if snap_minutes == 0 || snap_minutes > 60 {
            return Err(PlannerError::Validation(format!(
                "Invalid snap interval: {} minutes",
                snap_minutes
            )));
        }

        let raw_minutes = (self.start_hour as f64 + offset / self.pixels_per_hour) * 60.0;
        // f64::round is round-half-away-from-zero, which is round-half-up
        // for the non-negative offsets a pointer can produce.
        let snapped = (raw_minutes / snap_minutes as f64).round() as i64 * snap_minutes as i64;
        let snapped = snapped.max(0);

        let hour = ((snapped / 60) as u32).min(23);
        let minute = ((snapped % 60) as u32).min(55);
        Ok(reference_date.and_hms_opt(hour, minute, 0).unwrap())
    }
}

/// One fixed slot boundary in a time grid.
#[derive(Debug, Clone, Serialize)]
pub struct TimeSlot {
    pub time: NaiveTime,
    /// Display label, e.g. "9:00 AM".
    pub label: String,
    /// Machine value, e.g. "09:00".
    pub value: String,
}

/// Evenly spaced slot boundaries from `start_hour` to `end_hour`.
///
/// Produces exactly `(end_hour - start_hour) * 60 / interval_minutes`
/// slots, the first at `start_hour:00`. An interval that does not evenly
/// divide the range is rejected instead of silently truncating the last
/// slot.
pub fn generate_slots(
    interval_minutes: u32,
    start_hour: u32,
    end_hour: u32,
) -> PlannerResult<Vec<TimeSlot>> {
    if start_hour >= end_hour || end_hour > 24 {
        return Err(PlannerError::Validation(format!(
            "Invalid visible hour range {}-{}",
            start_hour, end_hour
        )));
    }
    let total_minutes = (end_hour - start_hour) * 60;
    if interval_minutes == 0 || total_minutes % interval_minutes != 0 {
        return Err(PlannerError::Validation(format!(
            "Slot interval of {} minutes does not evenly divide the {}:00-{}:00 range",
            interval_minutes, start_hour, end_hour
        )));
    }

    let count = total_minutes / interval_minutes;
    let mut slots = Vec::with_capacity(count as usize);
    for i in 0..count {
        let minutes = start_hour * 60 + i * interval_minutes;
        let time = NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).unwrap();
        slots.push(TimeSlot {
            time,
            label: format_time(time),
            value: time.format("%H:%M").to_string(),
        });
    }
    Ok(slots)
}

/// Format a time for display, e.g. "9:00 AM".
pub fn format_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Format a time range for display, e.g. "9:00 AM - 10:00 AM".
pub fn format_time_range(start: NaiveTime, end: NaiveTime) -> String {
    format!("{} - {}", format_time(start), format_time(end))
}
