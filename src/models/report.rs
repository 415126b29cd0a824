use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityTime {
    pub activity: String,
    pub time: String, // HH:MM
}

/// Computed view of one day, as served by `/getComputedActivities`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyReport {
    pub body: Vec<ActivityTime>,
    pub total: String,
    pub delta: String,
}
