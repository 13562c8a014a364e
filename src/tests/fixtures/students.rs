use crate::modules::campus::core::student::StudentDraft;

pub struct StudentDraftBuilder {
    inner: StudentDraft,
}

impl Default for StudentDraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl StudentDraftBuilder {
    pub fn new() -> Self {
        Self {
            inner: StudentDraft {
                name: Some("Ada Lovelace".to_string()),
                email: Some("ada@campus.edu".to_string()),
                major: Some("Mathematics".to_string()),
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = Some(v.into());
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = Some(v.into());
        self
    }

    pub fn major(mut self, v: impl Into<String>) -> Self {
        self.inner.major = Some(v.into());
        self
    }

    pub fn build(self) -> StudentDraft {
        self.inner
    }

    pub fn to_json(&self) -> String {
        serde_json::json!({
            "name": self.inner.name,
            "email": self.inner.email,
            "major": self.inner.major,
        })
        .to_string()
    }
}
