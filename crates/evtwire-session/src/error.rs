/// A transport or file fault that terminated a session.
///
/// Every variant carries the number of records already transferred, so
/// partial progress stays observable on fault paths too. Protocol-level
/// terminal conditions (orderly end, truncation, invalid length) are not
/// errors — they are [`crate::Outcome`] values in the session report.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The source side of the session raised an I/O-level fault.
    #[error("source fault after {records} records: {source}")]
    Source {
        records: u64,
        #[source]
        source: evtwire_frame::RecordError,
    },

    /// The sink side of the session raised an I/O-level fault.
    #[error("sink fault after {records} records: {source}")]
    Sink {
        records: u64,
        #[source]
        source: evtwire_frame::RecordError,
    },
}

impl SessionError {
    /// Records successfully transferred before the fault.
    pub fn records(&self) -> u64 {
        match self {
            SessionError::Source { records, .. } | SessionError::Sink { records, .. } => *records,
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
