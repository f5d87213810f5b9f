use std::io::{Read, Write};
use std::time::Duration;

use tracing::{debug, info, warn};

use evtwire_frame::{RecordError, RecordReader, RecordWriter};

use crate::error::{Result, SessionError};
use crate::report::{Outcome, SessionReport};

/// One sending session: records in from a stored stream, out to a
/// connection.
///
/// The input is read with the same framing loop the receiver uses — a
/// stored record stream is byte-identical to the wire stream. Each record
/// goes out as one logical write; an optional fixed delay paces the link
/// between records.
pub struct SenderSession<R, W> {
    source: RecordReader<R>,
    sink: RecordWriter<W>,
    delay: Option<Duration>,
}

impl<R: Read, W: Write> SenderSession<R, W> {
    /// Create a session over an input source and an established
    /// connection, with optional inter-record pacing.
    pub fn new(source: R, sink: W, delay: Option<Duration>) -> Self {
        Self {
            source: RecordReader::new(source),
            sink: RecordWriter::new(sink),
            delay: delay.filter(|d| !d.is_zero()),
        }
    }

    /// Run the session to completion.
    ///
    /// A truncated trailing record is a warning-level anomaly — all prior
    /// records were already sent successfully — while an invalid length
    /// prefix stops the session the same way it does on the receiving
    /// side. Sink faults surface as [`SessionError`] with the count.
    pub fn run(mut self) -> Result<SessionReport> {
        let mut records = 0u64;
        loop {
            let record = match self.source.read_record() {
                Ok(Some(record)) => record,
                Ok(None) => {
                    info!(records, "input exhausted, all records sent");
                    return Ok(SessionReport::new(records, Outcome::Clean));
                }
                Err(RecordError::Truncated { declared }) => {
                    warn!(records, declared, "incomplete record at end of input");
                    return Ok(SessionReport::new(records, Outcome::Truncated { declared }));
                }
                Err(RecordError::InvalidLength { length }) => {
                    warn!(records, length, "invalid record length in input, stopping");
                    return Ok(SessionReport::new(records, Outcome::InvalidLength { length }));
                }
                Err(source) => return Err(SessionError::Source { records, source }),
            };

            self.sink
                .write_record(&record)
                .map_err(|source| SessionError::Sink { records, source })?;
            records += 1;
            debug!(size = record.total_len(), n = records, "record sent");

            if let Some(delay) = self.delay {
                std::thread::sleep(delay);
            }
        }
    }
}
