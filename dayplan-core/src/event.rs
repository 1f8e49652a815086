//! Event entity: a scheduled occurrence on the calendar.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::category::{Category, default_color_for_category};
use crate::error::{PlannerError, PlannerResult};

/// A scheduled calendar event.
///
/// `date` is the authoritative calendar-day bucket, stored separately from
/// `start_time` so that day grouping never shifts across a timezone
/// boundary. Documents written before the field existed may lack it;
/// [`Event::day_key`] falls back to the start time's day for those.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    /// One of the fixed categories; validated on write, tolerated on read.
    pub category: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub color: String,
    #[serde(default)]
    pub is_expanded: bool,
}

/// Input for creating an event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub category: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub date: NaiveDate,
    #[serde(default)]
    pub color: Option<String>,
}

/// Partial update for an event. Missing fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    pub title: Option<String>,
    pub category: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub date: Option<NaiveDate>,
    pub color: Option<String>,
    pub is_expanded: Option<bool>,
}

impl Event {
    /// Build an event from user input, validating title, category and the
    /// time window, and defaulting the color from the category.
    pub fn from_draft(draft: EventDraft) -> PlannerResult<Event> {
        let title = draft.title.trim().to_string();
        if title.is_empty() {
            return Err(PlannerError::Validation("Event title is required".to_string()));
        }
        draft.category.parse::<Category>()?;
        if draft.end_time <= draft.start_time {
            return Err(PlannerError::Validation(
                "End time must be after start time".to_string(),
            ));
        }

        let color = draft
            .color
            .unwrap_or_else(|| default_color_for_category(&draft.category).to_string());

        Ok(Event {
            id: Uuid::new_v4().to_string(),
            title,
            category: draft.category,
            start_time: draft.start_time,
            end_time: draft.end_time,
            date: Some(draft.date),
            color,
            is_expanded: false,
        })
    }

    /// Apply a partial update in place.
    ///
    /// A category change recomputes the denormalized color unless the same
    /// patch carries an explicit one. The time-window invariant is
    /// re-checked after all fields are applied.
    pub fn apply(&mut self, patch: EventPatch) -> PlannerResult<()> {
        if let Some(title) = patch.title {
            let title = title.trim().to_string();
            if title.is_empty() {
                return Err(PlannerError::Validation("Event title is required".to_string()));
            }
            self.title = title;
        }
        if let Some(category) = patch.category {
            category.parse::<Category>()?;
            if category != self.category && patch.color.is_none() {
                self.color = default_color_for_category(&category).to_string();
            }
            self.category = category;
        }
        if let Some(start) = patch.start_time {
            self.start_time = start;
        }
        if let Some(end) = patch.end_time {
            self.end_time = end;
        }
        if let Some(date) = patch.date {
            self.date = Some(date);
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(expanded) = patch.is_expanded {
            self.is_expanded = expanded;
        }

        if self.end_time <= self.start_time {
            return Err(PlannerError::Validation(
                "End time must be after start time".to_string(),
            ));
        }
        Ok(())
    }

    /// The calendar-day bucket for this event.
    ///
    /// The stored `date` field is authoritative. Deriving the day from
    /// `start_time` is a deprecated fallback for documents that predate the
    /// field, logged as a data-quality signal.
    pub fn day_key(&self) -> NaiveDate {
        match self.date {
            Some(date) => date,
            None => {
                let derived = self.start_time.date_naive();
                tracing::warn!(
                    event_id = %self.id,
                    derived_day = %derived,
                    "event has no date field; deriving day bucket from start time"
                );
                derived
            }
        }
    }

    /// Flip the expansion flag, returning the updated copy.
    pub fn toggle_expanded(&self) -> Event {
        Event {
            is_expanded: !self.is_expanded,
            ..self.clone()
        }
    }
}

/// Events whose day bucket equals `day`, in input order.
pub fn bucket_events_by_day(events: &[Event], day: NaiveDate) -> Vec<Event> {
    events
        .iter()
        .filter(|event| event.day_key() == day)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft(title: &str, category: &str) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            category: category.to_string(),
            start_time: Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            color: None,
        }
    }

    #[test]
    fn test_from_draft_defaults_color_from_category() {
        let event = Event::from_draft(draft("Morning run", "exercise")).unwrap();
        assert_eq!(event.color, "#4CAF50");
        assert!(!event.is_expanded);
    }

    #[test]
    fn test_from_draft_keeps_explicit_color() {
        let mut d = draft("Lunch", "eating");
        d.color = Some("#123456".to_string());
        let event = Event::from_draft(d).unwrap();
        assert_eq!(event.color, "#123456");
    }

    #[test]
    fn test_from_draft_rejects_inverted_time_window() {
        let mut d = draft("Backwards", "work");
        d.end_time = d.start_time;
        assert!(Event::from_draft(d).is_err());
    }

    #[test]
    fn test_from_draft_rejects_unknown_category() {
        assert!(Event::from_draft(draft("Chores", "chores")).is_err());
    }

    #[test]
    fn test_apply_recomputes_color_on_category_change() {
        let mut event = Event::from_draft(draft("Standup", "work")).unwrap();
        assert_eq!(event.color, "#2196F3");

        event
            .apply(EventPatch {
                category: Some("relax".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(event.color, "#9C27B0");
    }

    #[test]
    fn test_apply_explicit_color_wins_over_recompute() {
        let mut event = Event::from_draft(draft("Standup", "work")).unwrap();
        event
            .apply(EventPatch {
                category: Some("relax".to_string()),
                color: Some("#111111".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(event.color, "#111111");
    }

    #[test]
    fn test_apply_rechecks_time_window() {
        let mut event = Event::from_draft(draft("Standup", "work")).unwrap();
        let err = event.apply(EventPatch {
            end_time: Some(Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap()),
            ..Default::default()
        });
        assert!(err.is_err());
    }

    #[test]
    fn test_toggle_expanded_is_symmetric() {
        let event = Event::from_draft(draft("Standup", "work")).unwrap();
        let expanded = event.toggle_expanded();
        assert!(expanded.is_expanded);
        let collapsed = expanded.toggle_expanded();
        assert!(!collapsed.is_expanded);
        assert_eq!(collapsed.id, event.id);
    }

    #[test]
    fn test_bucket_uses_date_field_not_start_time() {
        // A late-evening event whose UTC start is on the same day as the next
        // event's early-morning start: the date field keeps them apart.
        let mut late = Event::from_draft(draft("Late show", "relax")).unwrap();
        late.start_time = Utc.with_ymd_and_hms(2024, 6, 1, 23, 30, 0).unwrap();
        late.end_time = Utc.with_ymd_and_hms(2024, 6, 2, 0, 30, 0).unwrap();
        late.date = Some(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());

        let mut early = Event::from_draft(draft("Early swim", "exercise")).unwrap();
        early.start_time = Utc.with_ymd_and_hms(2024, 6, 2, 0, 15, 0).unwrap();
        early.end_time = Utc.with_ymd_and_hms(2024, 6, 2, 1, 0, 0).unwrap();
        early.date = Some(NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());

        let events = vec![late.clone(), early.clone()];

        let day1 = bucket_events_by_day(&events, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(day1.len(), 1);
        assert_eq!(day1[0].id, late.id);

        let day2 = bucket_events_by_day(&events, NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
        assert_eq!(day2.len(), 1);
        assert_eq!(day2[0].id, early.id);
    }

    #[test]
    fn test_bucket_partitions_without_loss_or_duplication() {
        let days = [
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
        ];
        let events: Vec<Event> = days
            .iter()
            .map(|&day| {
                let mut e = Event::from_draft(draft("One per day", "work")).unwrap();
                e.date = Some(day);
                e
            })
            .collect();

        let total: usize = days
            .iter()
            .map(|&day| bucket_events_by_day(&events, day).len())
            .sum();
        assert_eq!(total, events.len());
        for (&day, event) in days.iter().zip(&events) {
            let bucket = bucket_events_by_day(&events, day);
            assert_eq!(bucket.len(), 1);
            assert_eq!(bucket[0].id, event.id);
        }
    }

    #[test]
    fn test_day_key_falls_back_to_start_time_when_date_missing() {
        let mut event = Event::from_draft(draft("Legacy", "work")).unwrap();
        event.date = None;
        assert_eq!(event.day_key(), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn test_wire_format_uses_camel_case() {
        let event = Event::from_draft(draft("Standup", "work")).unwrap();
        let json = serde_json::to_value(&event).unwrap();
        assert!(json.get("startTime").is_some());
        assert!(json.get("endTime").is_some());
        assert_eq!(json["isExpanded"], false);
        assert_eq!(json["date"], "2024-06-01");
    }

    #[test]
    fn test_deserializes_legacy_document_without_date() {
        let json = r##"{
            "id": "e1",
            "title": "Old event",
            "category": "work",
            "startTime": "2024-06-01T09:00:00Z",
            "endTime": "2024-06-01T10:00:00Z",
            "color": "#2196F3"
        }"##;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.date, None);
        assert!(!event.is_expanded);
    }
}
