//! Event persistence and write-side validation.

use chrono::NaiveDate;

use super::Store;
use crate::error::{PlannerError, PlannerResult};
use crate::event::{Event, EventDraft, EventPatch, bucket_events_by_day};

const KIND: &str = "events";

impl Store {
    /// All events, sorted by start time.
    pub fn list_events(&self) -> PlannerResult<Vec<Event>> {
        let mut events: Vec<Event> = self.list_docs(KIND)?;
        events.sort_by_key(|event| event.start_time);
        Ok(events)
    }

    /// Events whose day bucket equals `day`, sorted by start time.
    pub fn events_for_day(&self, day: NaiveDate) -> PlannerResult<Vec<Event>> {
        Ok(bucket_events_by_day(&self.list_events()?, day))
    }

    pub fn get_event(&self, id: &str) -> PlannerResult<Event> {
        self.read_doc(KIND, id)?
            .ok_or_else(|| PlannerError::EventNotFound(id.to_string()))
    }

    pub fn create_event(&self, draft: EventDraft) -> PlannerResult<Event> {
        let event = Event::from_draft(draft)?;
        self.write_doc(KIND, &event.id, &event)?;
        Ok(event)
    }

    pub fn update_event(&self, id: &str, patch: EventPatch) -> PlannerResult<Event> {
        let mut event = self.get_event(id)?;
        event.apply(patch)?;
        self.write_doc(KIND, id, &event)?;
        Ok(event)
    }

    pub fn delete_event(&self, id: &str) -> PlannerResult<()> {
        if !self.delete_doc(KIND, id)? {
            return Err(PlannerError::EventNotFound(id.to_string()));
        }
        Ok(())
    }
}
