// Ports describe what the HTTP layer needs from the campus store, without implementing it.
//
// Boundaries
// - Implementations decide how mutual exclusion is achieved. Each call must behave as one
//   atomic step: a check and the write that depends on it cannot interleave with another call.

use async_trait::async_trait;
use serde::Serialize;

use crate::modules::campus::core::errors::CampusResult;
use crate::modules::campus::core::event::{Event, EventDraft, EventId};
use crate::modules::campus::core::student::{Student, StudentDraft, StudentId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRoster {
    pub event_id: EventId,
    pub enrolled_student_ids: Vec<StudentId>,
}

#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn list_students(&self) -> Vec<Student>;
    async fn get_student(&self, id: StudentId) -> CampusResult<Student>;
    async fn create_student(&self, draft: StudentDraft) -> CampusResult<Student>;
    async fn update_student(&self, id: StudentId, draft: StudentDraft) -> CampusResult<Student>;
    async fn delete_student(&self, id: StudentId) -> CampusResult<Student>;
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn list_events(&self) -> Vec<Event>;
    async fn get_event(&self, id: EventId) -> CampusResult<Event>;
    async fn create_event(&self, draft: EventDraft) -> CampusResult<Event>;
    async fn update_event(&self, id: EventId, draft: EventDraft) -> CampusResult<Event>;
    async fn delete_event(&self, id: EventId) -> CampusResult<Event>;
}

#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    async fn list_enrolled(&self, event_id: EventId) -> CampusResult<EventRoster>;
    async fn enroll(&self, event_id: EventId, student_id: StudentId) -> CampusResult<EventRoster>;
    async fn unenroll(&self, event_id: EventId, student_id: StudentId)
    -> CampusResult<EventRoster>;
}
