use std::collections::BTreeMap;

use crate::modules::campus::core::enrollment::{EnrollmentManager, StudentLookup};
use crate::modules::campus::core::errors::{CampusResult, Conflict, NotFound};
use crate::modules::campus::core::event_registry::EventRegistry;
use crate::modules::campus::core::student::{Student, StudentDraft, StudentId};
use crate::modules::campus::core::validation::validate_student;

/// Owns every student. Ids are handed out as highest id + 1, so iterating the map in key
/// order is creation order.
#[derive(Debug, Clone, Default)]
pub struct StudentRegistry {
    students: BTreeMap<StudentId, Student>,
}

impl StudentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> Vec<Student> {
        self.students.values().cloned().collect()
    }

    pub fn get(&self, id: StudentId) -> CampusResult<&Student> {
        self.students.get(&id).ok_or(NotFound::Student(id).into())
    }

    pub fn create(&mut self, draft: &StudentDraft) -> CampusResult<Student> {
        let profile = validate_student(draft)?;
        self.ensure_email_free(&profile.email, None)?;
        let id = self.next_id();
        let student = Student::new(id, profile);
        self.students.insert(id, student.clone());
        Ok(student)
    }

    pub fn update(&mut self, id: StudentId, draft: &StudentDraft) -> CampusResult<Student> {
        self.get(id)?;
        let profile = validate_student(draft)?;
        self.ensure_email_free(&profile.email, Some(id))?;
        let student = self
            .students
            .get_mut(&id)
            .ok_or(NotFound::Student(id))?;
        student.apply(profile);
        Ok(student.clone())
    }

    /// Removes the student after purging it from every roster in `events`.
    pub fn delete(&mut self, id: StudentId, events: &mut EventRegistry) -> CampusResult<Student> {
        self.get(id)?;
        EnrollmentManager::purge_student(events, id);
        self.students
            .remove(&id)
            .ok_or(NotFound::Student(id).into())
    }

    fn ensure_email_free(&self, email: &str, owner: Option<StudentId>) -> CampusResult<()> {
        let taken = self
            .students
            .values()
            .any(|student| Some(student.id) != owner && student.email == email);
        if taken {
            return Err(Conflict::DuplicateEmail(email.to_string()).into());
        }
        Ok(())
    }

    fn next_id(&self) -> StudentId {
        self.students.last_key_value().map_or(1, |(id, _)| id + 1)
    }
}

impl StudentLookup for StudentRegistry {
    fn contains_student(&self, student_id: StudentId) -> bool {
        self.students.contains_key(&student_id)
    }
}
