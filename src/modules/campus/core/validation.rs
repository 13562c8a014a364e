// Shape checks for incoming student and event records.
//
// Responsibilities
// - Report the first failing field, checked in declaration order.
// - Never touch any collection. Uniqueness rules live in the registries.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::modules::campus::core::event::{EventDetails, EventDraft};
use crate::modules::campus::core::student::{StudentDraft, StudentProfile};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*"#,
        r"@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+",
        r"[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?$",
    ))
    .expect("valid email regex")
});
static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[1-2]\d|3[0-1])$").expect("valid date regex")
});
static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").expect("valid time regex"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationReason {
    #[error("is required")]
    Required,

    #[error("must be at least {min} characters long")]
    TooShort { min: usize },

    #[error("must be at most {max} characters long")]
    TooLong { max: usize },

    #[error("must be a valid email")]
    InvalidEmail,

    #[error("must match the format {format}")]
    InvalidFormat { format: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\"{field}\" {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: ValidationReason,
}

impl ValidationError {
    fn new(field: &'static str, reason: ValidationReason) -> Self {
        Self { field, reason }
    }
}

pub fn validate_student(draft: &StudentDraft) -> Result<StudentProfile, ValidationError> {
    let name = min_chars("name", &draft.name, 3)?;
    let email = email("email", &draft.email)?;
    let major = min_chars("major", &draft.major, 3)?;
    Ok(StudentProfile {
        name: name.to_string(),
        email: email.to_string(),
        major: major.to_string(),
    })
}

pub fn validate_event(draft: &EventDraft) -> Result<EventDetails, ValidationError> {
    let title = min_chars("title", &draft.title, 7)?;
    let date = pattern("date", &draft.date, &DATE_RE, "yyyy-mm-dd")?;
    let time = pattern("time", &draft.time, &TIME_RE, "HH:MM")?;
    let place = chars_between("place", &draft.place, 5, 60)?;
    let speaker = chars_between("speaker", &draft.speaker, 8, 60)?;
    Ok(EventDetails {
        title: title.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        place: place.to_string(),
        speaker: speaker.to_string(),
    })
}

fn required<'a>(
    field: &'static str,
    value: &'a Option<String>,
) -> Result<&'a str, ValidationError> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::new(field, ValidationReason::Required)),
    }
}

fn min_chars<'a>(
    field: &'static str,
    value: &'a Option<String>,
    min: usize,
) -> Result<&'a str, ValidationError> {
    let v = required(field, value)?;
    if v.chars().count() < min {
        return Err(ValidationError::new(field, ValidationReason::TooShort { min }));
    }
    Ok(v)
}

fn chars_between<'a>(
    field: &'static str,
    value: &'a Option<String>,
    min: usize,
    max: usize,
) -> Result<&'a str, ValidationError> {
    let v = min_chars(field, value, min)?;
    if v.chars().count() > max {
        return Err(ValidationError::new(field, ValidationReason::TooLong { max }));
    }
    Ok(v)
}

fn email<'a>(field: &'static str, value: &'a Option<String>) -> Result<&'a str, ValidationError> {
    let v = required(field, value)?;
    if !EMAIL_RE.is_match(v) {
        return Err(ValidationError::new(field, ValidationReason::InvalidEmail));
    }
    Ok(v)
}

fn pattern<'a>(
    field: &'static str,
    value: &'a Option<String>,
    re: &Regex,
    format: &'static str,
) -> Result<&'a str, ValidationError> {
    let v = required(field, value)?;
    if !re.is_match(v) {
        return Err(ValidationError::new(
            field,
            ValidationReason::InvalidFormat { format },
        ));
    }
    Ok(v)
}
