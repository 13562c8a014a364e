use serde::{Deserialize, Serialize};

pub type StudentId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub major: String,
}

/// Candidate student as received from a caller. Every field is optional so that a
/// missing field surfaces as a validation failure instead of a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StudentDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub major: Option<String>,
}

/// The mutable part of a student once it passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentProfile {
    pub name: String,
    pub email: String,
    pub major: String,
}

impl Student {
    pub fn new(id: StudentId, profile: StudentProfile) -> Self {
        Self {
            id,
            name: profile.name,
            email: profile.email,
            major: profile.major,
        }
    }

    pub fn apply(&mut self, profile: StudentProfile) {
        self.name = profile.name;
        self.email = profile.email;
        self.major = profile.major;
    }
}
