use std::io::Read;

use tracing::trace;

use crate::error::{RecordError, Result};
use crate::exact::{read_exact_or_end, ReadExact};
use crate::record::{check_length, decode_length, Record, PREFIX_LEN};

/// Reads complete records from any `Read` stream.
///
/// Handles partial reads internally — callers always get complete records
/// or a definite terminal condition, never a fragment. The loop is the
/// same whether the source is a file or a socket; only the owning driver
/// decides how urgent each terminal condition is.
pub struct RecordReader<T> {
    inner: T,
    records_read: u64,
}

impl<T: Read> RecordReader<T> {
    /// Create a record reader over a byte-stream source.
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            records_read: 0,
        }
    }

    /// Read the next complete record (blocking).
    ///
    /// Returns `Ok(None)` on orderly end of stream: the source was
    /// exhausted before a complete prefix was available. A well-formed
    /// stream ends exactly on a record boundary, so this is the expected
    /// end-of-session condition for sockets and the end-of-input
    /// condition for files alike.
    ///
    /// Returns `Err(RecordError::InvalidLength)` for a prefix under 4 and
    /// `Err(RecordError::Truncated)` when the stream ends after a
    /// committed prefix but before the promised body.
    pub fn read_record(&mut self) -> Result<Option<Record>> {
        let mut prefix = [0u8; PREFIX_LEN];
        if read_exact_or_end(&mut self.inner, &mut prefix)? == ReadExact::Ended {
            return Ok(None);
        }

        let length = decode_length(prefix);
        check_length(length)?;

        let body_len = (length as usize) - PREFIX_LEN;
        let mut body = vec![0u8; body_len];
        if read_exact_or_end(&mut self.inner, &mut body)? == ReadExact::Ended {
            return Err(RecordError::Truncated { declared: length });
        }

        self.records_read += 1;
        trace!(length, records = self.records_read, "record read");
        Ok(Some(Record::from_parts(prefix, &body)))
    }

    /// Records successfully read so far.
    pub fn records_read(&self) -> u64 {
        self.records_read
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }
}
