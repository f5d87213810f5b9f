use serde::Serialize;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The source was exhausted exactly on a record boundary.
    Clean,
    /// The stream ended after a committed prefix but before the full
    /// body. Records already transferred are kept; nothing is rolled
    /// back or retried.
    Truncated { declared: u32 },
    /// A length prefix decoded below the minimum. Fatal: no further
    /// record boundary can be derived.
    InvalidLength { length: u32 },
}

impl Outcome {
    /// Whether the session ended without any anomaly.
    pub fn is_clean(&self) -> bool {
        matches!(self, Outcome::Clean)
    }
}

/// Result of one completed session: the terminal condition plus the
/// number of records transferred before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    /// Records fully transferred, in order, before the session ended.
    pub records: u64,
    /// The terminal condition.
    pub outcome: Outcome,
}

impl SessionReport {
    pub fn new(records: u64, outcome: Outcome) -> Self {
        Self { records, outcome }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_outcome() {
        assert!(Outcome::Clean.is_clean());
        assert!(!Outcome::Truncated { declared: 16 }.is_clean());
        assert!(!Outcome::InvalidLength { length: 3 }.is_clean());
    }

    #[test]
    fn report_serializes() {
        let report = SessionReport::new(2, Outcome::Clean);
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"records":2,"outcome":"clean"}"#);

        let report = SessionReport::new(5, Outcome::InvalidLength { length: 3 });
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"records":5,"outcome":{"invalid_length":{"length":3}}}"#
        );
    }
}
