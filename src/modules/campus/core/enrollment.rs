// Enrollment manager: the many-to-many relation between students and events.
//
// Responsibilities
// - Keep every roster entry pointing at an existing student.
// - Be the only code able to add or remove roster entries. `Roster` exposes reads publicly
//   and keeps its mutators private to this module.
//
// Boundaries
// - Holds no storage of its own. Rosters live inside events owned by the event registry,
//   and students are only observed through `StudentLookup`.

use serde::Serialize;

use crate::modules::campus::core::errors::{CampusResult, Conflict, NotFound};
use crate::modules::campus::core::event::EventId;
use crate::modules::campus::core::event_registry::EventRegistry;
use crate::modules::campus::core::student::StudentId;

/// Ids of the students enrolled in one event, in enrollment order, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Roster(Vec<StudentId>);

impl Roster {
    pub fn ids(&self) -> &[StudentId] {
        &self.0
    }

    pub fn contains(&self, student_id: StudentId) -> bool {
        self.0.contains(&student_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn add(&mut self, student_id: StudentId) -> bool {
        if self.contains(student_id) {
            return false;
        }
        self.0.push(student_id);
        true
    }

    fn remove(&mut self, student_id: StudentId) -> bool {
        let before = self.0.len();
        self.0.retain(|id| *id != student_id);
        self.0.len() != before
    }
}

/// Read-only view on the student collection.
pub trait StudentLookup {
    fn contains_student(&self, student_id: StudentId) -> bool;
}

pub struct EnrollmentManager;

impl EnrollmentManager {
    pub fn list_enrolled(
        events: &EventRegistry,
        event_id: EventId,
    ) -> CampusResult<Vec<StudentId>> {
        if events.is_empty() {
            return Err(NotFound::NoEvents.into());
        }
        let event = events.get(event_id)?;
        Ok(event.enrolled_student_ids.ids().to_vec())
    }

    pub fn enroll(
        events: &mut EventRegistry,
        students: &impl StudentLookup,
        event_id: EventId,
        student_id: StudentId,
    ) -> CampusResult<Vec<StudentId>> {
        let roster = Self::resolve(events, students, event_id, student_id)?;
        if !roster.add(student_id) {
            return Err(Conflict::AlreadyEnrolled {
                event_id,
                student_id,
            }
            .into());
        }
        Ok(roster.ids().to_vec())
    }

    pub fn unenroll(
        events: &mut EventRegistry,
        students: &impl StudentLookup,
        event_id: EventId,
        student_id: StudentId,
    ) -> CampusResult<Vec<StudentId>> {
        let roster = Self::resolve(events, students, event_id, student_id)?;
        if !roster.remove(student_id) {
            return Err(Conflict::NotEnrolled {
                event_id,
                student_id,
            }
            .into());
        }
        Ok(roster.ids().to_vec())
    }

    /// Drops `student_id` from every roster. Returns how many rosters changed.
    pub fn purge_student(events: &mut EventRegistry, student_id: StudentId) -> usize {
        events
            .events_mut()
            .map(|event| event.enrolled_student_ids.remove(student_id))
            .filter(|removed| *removed)
            .count()
    }

    fn resolve<'a>(
        events: &'a mut EventRegistry,
        students: &impl StudentLookup,
        event_id: EventId,
        student_id: StudentId,
    ) -> CampusResult<&'a mut Roster> {
        let event = events.get_mut(event_id)?;
        if !students.contains_student(student_id) {
            return Err(NotFound::Student(student_id).into());
        }
        Ok(&mut event.enrolled_student_ids)
    }
}
