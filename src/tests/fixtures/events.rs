use crate::modules::campus::core::event::EventDraft;

pub struct EventDraftBuilder {
    inner: EventDraft,
}

impl Default for EventDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EventDraftBuilder {
    pub fn new() -> Self {
        Self {
            inner: EventDraft {
                title: Some("Rust Workshop".to_string()),
                date: Some("2024-05-01".to_string()),
                time: Some("09:00".to_string()),
                place: Some("Main Hall".to_string()),
                speaker: Some("Ferris Crab".to_string()),
            },
        }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = Some(v.into());
        self
    }

    pub fn date(mut self, v: impl Into<String>) -> Self {
        self.inner.date = Some(v.into());
        self
    }

    pub fn time(mut self, v: impl Into<String>) -> Self {
        self.inner.time = Some(v.into());
        self
    }

    pub fn place(mut self, v: impl Into<String>) -> Self {
        self.inner.place = Some(v.into());
        self
    }

    pub fn speaker(mut self, v: impl Into<String>) -> Self {
        self.inner.speaker = Some(v.into());
        self
    }

    pub fn build(self) -> EventDraft {
        self.inner
    }

    pub fn to_json(&self) -> String {
        serde_json::json!({
            "title": self.inner.title,
            "date": self.inner.date,
            "time": self.inner.time,
            "place": self.inner.place,
            "speaker": self.inner.speaker,
        })
        .to_string()
    }
}
