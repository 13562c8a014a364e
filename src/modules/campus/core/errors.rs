use thiserror::Error;

use crate::modules::campus::core::event::EventId;
use crate::modules::campus::core::student::StudentId;
use crate::modules::campus::core::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFound {
    #[error("student {0} not found")]
    Student(StudentId),

    #[error("event {0} not found")]
    Event(EventId),

    #[error("no events have been created yet")]
    NoEvents,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Conflict {
    #[error("email {0} is already in use")]
    DuplicateEmail(String),

    #[error("an event is already scheduled on {date} at {time} in {place}")]
    ScheduleConflict {
        date: String,
        time: String,
        place: String,
    },

    #[error("student {student_id} is already enrolled in event {event_id}")]
    AlreadyEnrolled {
        event_id: EventId,
        student_id: StudentId,
    },

    #[error("student {student_id} is not enrolled in event {event_id}")]
    NotEnrolled {
        event_id: EventId,
        student_id: StudentId,
    },
}

/// Every rejection the registries and the enrollment manager can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CampusError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFound),

    #[error(transparent)]
    Conflict(#[from] Conflict),
}

pub type CampusResult<T> = Result<T, CampusError>;
