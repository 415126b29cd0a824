use serde::Serialize;

/// Reserved labels: state markers rather than trackable activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Marker {
    Break,
    DayEnd,
}

/// Which label strings map to which marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedLabels {
    pub break_labels: Vec<String>,
    pub day_end_labels: Vec<String>,
}

pub fn default_break_labels() -> Vec<String> {
    vec![
        "BREAK".to_string(),
        "LAUNCH_BREAK".to_string(),
        "--%break%--".to_string(),
    ]
}

pub fn default_day_end_labels() -> Vec<String> {
    vec!["DAY_END".to_string(), "--%day-end%--".to_string()]
}

impl Default for ReservedLabels {
    fn default() -> Self {
        Self {
            break_labels: default_break_labels(),
            day_end_labels: default_day_end_labels(),
        }
    }
}

impl ReservedLabels {
    /// Exact string match, no case folding.
    pub fn classify(&self, label: &str) -> Option<Marker> {
        if self.break_labels.iter().any(|l| l == label) {
            Some(Marker::Break)
        } else if self.day_end_labels.iter().any(|l| l == label) {
            Some(Marker::DayEnd)
        } else {
            None
        }
    }

    pub fn is_reserved(&self, label: &str) -> bool {
        self.classify(label).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_both_naming_schemes() {
        let r = ReservedLabels::default();
        assert_eq!(r.classify("BREAK"), Some(Marker::Break));
        assert_eq!(r.classify("LAUNCH_BREAK"), Some(Marker::Break));
        assert_eq!(r.classify("--%break%--"), Some(Marker::Break));
        assert_eq!(r.classify("DAY_END"), Some(Marker::DayEnd));
        assert_eq!(r.classify("--%day-end%--"), Some(Marker::DayEnd));
    }

    #[test]
    fn matching_is_exact() {
        let r = ReservedLabels::default();
        assert!(!r.is_reserved("break"));
        assert!(!r.is_reserved("BREAK "));
        assert!(!r.is_reserved("work"));
    }
}
