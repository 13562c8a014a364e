use crate::modules::campus::core::event_registry::EventRegistry;
use crate::modules::campus::core::student_registry::StudentRegistry;

/// Both collections, so a single critical section can cover a student delete and the
/// roster purge it triggers.
#[derive(Debug, Clone, Default)]
pub struct CampusState {
    pub students: StudentRegistry,
    pub events: EventRegistry,
}
