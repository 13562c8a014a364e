use crate::modules::campus::adapters::outbound::in_memory_campus::InMemoryCampus;
use crate::modules::campus::core::ports::{EnrollmentRepository, EventRepository, StudentRepository};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub students: Arc<dyn StudentRepository>,
    pub events: Arc<dyn EventRepository>,
    pub enrollments: Arc<dyn EnrollmentRepository>,
}

impl AppState {
    /// Every port backed by the same in memory store, so all three share one lock.
    pub fn in_memory() -> Self {
        let campus = Arc::new(InMemoryCampus::new());
        Self {
            students: campus.clone(),
            events: campus.clone(),
            enrollments: campus,
        }
    }
}
