// In memory campus store.
//
// Purpose
// - Single coordinator for students, events and rosters for the lifetime of the process.
//
// Responsibilities
// - Guard both registries with one lock. Reads share it, every mutation holds the write
//   guard from its first check to its last write, including the roster purge of a student
//   delete.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::modules::campus::core::enrollment::EnrollmentManager;
use crate::modules::campus::core::errors::CampusResult;
use crate::modules::campus::core::event::{Event, EventDraft, EventId};
use crate::modules::campus::core::ports::{
    EnrollmentRepository, EventRepository, EventRoster, StudentRepository,
};
use crate::modules::campus::core::state::CampusState;
use crate::modules::campus::core::student::{Student, StudentDraft, StudentId};

#[derive(Default)]
pub struct InMemoryCampus {
    state: RwLock<CampusState>,
}

impl InMemoryCampus {
    pub fn new() -> Self {
        Self::default()
    }
}

fn log_rejection<T>(result: CampusResult<T>, operation: &'static str) -> CampusResult<T> {
    if let Err(err) = &result {
        debug!(operation, error = %err, "campus operation rejected");
    }
    result
}

#[async_trait]
impl StudentRepository for InMemoryCampus {
    async fn list_students(&self) -> Vec<Student> {
        self.state.read().await.students.list()
    }

    async fn get_student(&self, id: StudentId) -> CampusResult<Student> {
        let guard = self.state.read().await;
        log_rejection(guard.students.get(id).cloned(), "get_student")
    }

    async fn create_student(&self, draft: StudentDraft) -> CampusResult<Student> {
        let mut guard = self.state.write().await;
        let student = log_rejection(guard.students.create(&draft), "create_student")?;
        info!(student_id = student.id, "student created");
        Ok(student)
    }

    async fn update_student(&self, id: StudentId, draft: StudentDraft) -> CampusResult<Student> {
        let mut guard = self.state.write().await;
        let student = log_rejection(guard.students.update(id, &draft), "update_student")?;
        info!(student_id = id, "student updated");
        Ok(student)
    }

    async fn delete_student(&self, id: StudentId) -> CampusResult<Student> {
        let mut guard = self.state.write().await;
        let CampusState { students, events } = &mut *guard;
        let student = log_rejection(students.delete(id, events), "delete_student")?;
        info!(student_id = id, "student deleted and purged from rosters");
        Ok(student)
    }
}

#[async_trait]
impl EventRepository for InMemoryCampus {
    async fn list_events(&self) -> Vec<Event> {
        self.state.read().await.events.list()
    }

    async fn get_event(&self, id: EventId) -> CampusResult<Event> {
        let guard = self.state.read().await;
        log_rejection(guard.events.get(id).cloned(), "get_event")
    }

    async fn create_event(&self, draft: EventDraft) -> CampusResult<Event> {
        let mut guard = self.state.write().await;
        let event = log_rejection(guard.events.create(&draft), "create_event")?;
        info!(event_id = event.id, "event created");
        Ok(event)
    }

    async fn update_event(&self, id: EventId, draft: EventDraft) -> CampusResult<Event> {
        let mut guard = self.state.write().await;
        let event = log_rejection(guard.events.update(id, &draft), "update_event")?;
        info!(event_id = id, "event updated");
        Ok(event)
    }

    async fn delete_event(&self, id: EventId) -> CampusResult<Event> {
        let mut guard = self.state.write().await;
        let event = log_rejection(guard.events.delete(id), "delete_event")?;
        info!(
            event_id = id,
            enrolled = event.enrolled_student_ids.len(),
            "event deleted"
        );
        Ok(event)
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryCampus {
    async fn list_enrolled(&self, event_id: EventId) -> CampusResult<EventRoster> {
        let guard = self.state.read().await;
        let enrolled_student_ids = log_rejection(
            EnrollmentManager::list_enrolled(&guard.events, event_id),
            "list_enrolled",
        )?;
        Ok(EventRoster {
            event_id,
            enrolled_student_ids,
        })
    }

    async fn enroll(&self, event_id: EventId, student_id: StudentId) -> CampusResult<EventRoster> {
        let mut guard = self.state.write().await;
        let CampusState { students, events } = &mut *guard;
        let enrolled_student_ids = log_rejection(
            EnrollmentManager::enroll(events, &*students, event_id, student_id),
            "enroll",
        )?;
        info!(event_id, student_id, "student enrolled");
        Ok(EventRoster {
            event_id,
            enrolled_student_ids,
        })
    }

    async fn unenroll(
        &self,
        event_id: EventId,
        student_id: StudentId,
    ) -> CampusResult<EventRoster> {
        let mut guard = self.state.write().await;
        let CampusState { students, events } = &mut *guard;
        let enrolled_student_ids = log_rejection(
            EnrollmentManager::unenroll(events, &*students, event_id, student_id),
            "unenroll",
        )?;
        info!(event_id, student_id, "student unenrolled");
        Ok(EventRoster {
            event_id,
            enrolled_student_ids,
        })
    }
}
