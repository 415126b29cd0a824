use serde::Serialize;

/// A timestamped marker beginning a new tracked interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityEvent {
    pub timestamp: i64, // epoch seconds
    pub label: String,
}

impl ActivityEvent {
    pub fn new(timestamp: i64, label: impl Into<String>) -> Self {
        Self {
            timestamp,
            label: label.into(),
        }
    }
}

/// An `activities` row as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRecord {
    pub id: i64,      // ⇔ activities.activity_id
    pub user_id: i64, // ⇔ activities.user_id
    pub timestamp: i64,
    pub label: String,
    pub source: String, // "api" | "cli"
}

impl ActivityRecord {
    pub fn event(&self) -> ActivityEvent {
        ActivityEvent::new(self.timestamp, self.label.clone())
    }
}

/// One line of the raw listing: the stored row without its owner,
/// timestamp rendered as local `HH:MM`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawActivity {
    pub activity_id: i64,
    pub date: String,
    pub activity: String,
    #[serde(skip_serializing)]
    pub source: String,
}
