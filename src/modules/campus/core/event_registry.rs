use std::collections::BTreeMap;

use crate::modules::campus::core::errors::{CampusResult, Conflict, NotFound};
use crate::modules::campus::core::event::{Event, EventDraft, EventId, Schedule};
use crate::modules::campus::core::validation::validate_event;

/// Owns every event together with its roster. Ids are handed out as highest id + 1, so
/// iterating the map in key order is creation order.
#[derive(Debug, Clone, Default)]
pub struct EventRegistry {
    events: BTreeMap<EventId, Event>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> Vec<Event> {
        self.events.values().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: EventId) -> CampusResult<&Event> {
        self.events.get(&id).ok_or(NotFound::Event(id).into())
    }

    pub fn create(&mut self, draft: &EventDraft) -> CampusResult<Event> {
        let details = validate_event(draft)?;
        self.ensure_free(details.schedule(), None)?;
        let id = self.next_id();
        let event = Event::new(id, details);
        self.events.insert(id, event.clone());
        Ok(event)
    }

    pub fn update(&mut self, id: EventId, draft: &EventDraft) -> CampusResult<Event> {
        self.get(id)?;
        let details = validate_event(draft)?;
        self.ensure_free(details.schedule(), Some(id))?;
        let event = self
            .events
            .get_mut(&id)
            .ok_or(NotFound::Event(id))?;
        event.apply(details);
        Ok(event.clone())
    }

    pub fn delete(&mut self, id: EventId) -> CampusResult<Event> {
        self.events
            .remove(&id)
            .ok_or(NotFound::Event(id).into())
    }

    pub(crate) fn get_mut(&mut self, id: EventId) -> CampusResult<&mut Event> {
        self.events
            .get_mut(&id)
            .ok_or(NotFound::Event(id).into())
    }

    pub(crate) fn events_mut(&mut self) -> impl Iterator<Item = &mut Event> {
        self.events.values_mut()
    }

    /// Fails when another event already holds `schedule`. An event keeping its own
    /// schedule, as `owner`, never conflicts with itself.
    fn ensure_free(&self, schedule: Schedule<'_>, owner: Option<EventId>) -> CampusResult<()> {
        let taken = self
            .events
            .values()
            .any(|event| Some(event.id) != owner && event.schedule() == schedule);
        if taken {
            return Err(Conflict::ScheduleConflict {
                date: schedule.date.to_string(),
                time: schedule.time.to_string(),
                place: schedule.place.to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn next_id(&self) -> EventId {
        self.events.last_key_value().map_or(1, |(id, _)| id + 1)
    }
}
