use std::io::{ErrorKind, Write};

use tracing::trace;

use crate::error::{RecordError, Result};
use crate::record::Record;

/// Writes complete records to any `Write` sink.
///
/// A record goes out as one logical write: either the sink accepts every
/// byte (possibly across retried short writes) or the write fails. A
/// partial write is never left on the wire as if it were a record.
pub struct RecordWriter<T> {
    inner: T,
    records_written: u64,
}

impl<T: Write> RecordWriter<T> {
    /// Create a record writer over a byte-stream sink.
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            records_written: 0,
        }
    }

    /// Write a complete record (blocking), then flush.
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        let bytes = record.as_bytes();
        let mut offset = 0usize;
        while offset < bytes.len() {
            match self.inner.write(&bytes[offset..]) {
                Ok(0) => return Err(RecordError::ConnectionClosed),
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(RecordError::Io(err)),
            }
        }

        self.flush()?;
        self.records_written += 1;
        trace!(
            length = record.total_len(),
            records = self.records_written,
            "record written"
        );
        Ok(())
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(RecordError::Io(err)),
            }
        }
    }

    /// Records successfully written so far.
    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    /// Borrow the underlying sink.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying sink.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the writer and return the inner sink.
    pub fn into_inner(self) -> T {
        self.inner
    }
}
