use std::io::{Read, Write};

use tracing::{debug, info, warn};

use evtwire_frame::{RecordError, RecordReader, RecordWriter};

use crate::error::{Result, SessionError};
use crate::report::{Outcome, SessionReport};

/// One receiving session: records in from a connection, out to a file.
///
/// Owns both endpoints for its lifetime; both are released on every exit
/// path when the session drops. Records are appended to the sink in
/// receipt order, and nothing already written is rolled back on an
/// anomalous end.
pub struct ReceiverSession<R, W> {
    source: RecordReader<R>,
    sink: RecordWriter<W>,
}

impl<R: Read, W: Write> ReceiverSession<R, W> {
    /// Create a session over an accepted connection and an output sink.
    pub fn new(source: R, sink: W) -> Self {
        Self {
            source: RecordReader::new(source),
            sink: RecordWriter::new(sink),
        }
    }

    /// Run the session to completion.
    ///
    /// Protocol-level terminal conditions (orderly end, truncated record,
    /// invalid length) end the session with a [`SessionReport`]; I/O
    /// faults surface as [`SessionError`] carrying the count.
    pub fn run(mut self) -> Result<SessionReport> {
        let mut records = 0u64;
        loop {
            let record = match self.source.read_record() {
                Ok(Some(record)) => record,
                Ok(None) => {
                    info!(records, "stream ended cleanly");
                    return Ok(SessionReport::new(records, Outcome::Clean));
                }
                Err(RecordError::InvalidLength { length }) => {
                    warn!(records, length, "invalid record length, stopping");
                    return Ok(SessionReport::new(records, Outcome::InvalidLength { length }));
                }
                Err(RecordError::Truncated { declared }) => {
                    warn!(records, declared, "truncated record, stopping");
                    return Ok(SessionReport::new(records, Outcome::Truncated { declared }));
                }
                Err(source) => return Err(SessionError::Source { records, source }),
            };

            debug!(size = record.total_len(), n = records + 1, "record received");
            self.sink
                .write_record(&record)
                .map_err(|source| SessionError::Sink { records, source })?;
            records += 1;
        }
    }
}
