use serde::{Deserialize, Serialize};

use crate::modules::campus::core::enrollment::Roster;

pub type EventId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub date: String,
    pub time: String,
    pub place: String,
    pub speaker: String,
    pub enrolled_student_ids: Roster,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EventDraft {
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub place: Option<String>,
    pub speaker: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetails {
    pub title: String,
    pub date: String,
    pub time: String,
    pub place: String,
    pub speaker: String,
}

/// The (date, time, place) triple no two events may share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule<'a> {
    pub date: &'a str,
    pub time: &'a str,
    pub place: &'a str,
}

impl Event {
    pub fn new(id: EventId, details: EventDetails) -> Self {
        Self {
            id,
            title: details.title,
            date: details.date,
            time: details.time,
            place: details.place,
            speaker: details.speaker,
            enrolled_student_ids: Roster::default(),
        }
    }

    pub fn schedule(&self) -> Schedule<'_> {
        Schedule {
            date: &self.date,
            time: &self.time,
            place: &self.place,
        }
    }

    /// Overwrites the descriptive fields. The id and the roster are left untouched.
    pub fn apply(&mut self, details: EventDetails) {
        self.title = details.title;
        self.date = details.date;
        self.time = details.time;
        self.place = details.place;
        self.speaker = details.speaker;
    }
}

impl EventDetails {
    pub fn schedule(&self) -> Schedule<'_> {
        Schedule {
            date: &self.date,
            time: &self.time,
            place: &self.place,
        }
    }
}
