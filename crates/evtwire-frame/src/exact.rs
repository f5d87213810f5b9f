use std::io::{ErrorKind, Read};

/// Outcome of an exact-length read attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadExact {
    /// The buffer was filled completely.
    Filled,
    /// The source returned zero bytes before the buffer was full.
    ///
    /// Orderly end of stream. Callers never see how many bytes had
    /// already accumulated — either the buffer is full or it is void.
    Ended,
}

/// Read exactly `buf.len()` bytes from `src`, or report end of stream.
///
/// Short reads are expected and looped over; `Interrupted` is retried.
/// The contract is all-or-nothing: on [`ReadExact::Ended`] the contents of
/// `buf` are unspecified and must not be used. Issues no reads beyond what
/// the buffer needs, so trailing stream data is left untouched.
pub fn read_exact_or_end<T: Read>(src: &mut T, buf: &mut [u8]) -> std::io::Result<ReadExact> {
    let mut filled = 0usize;
    while filled < buf.len() {
        let read = match src.read(&mut buf[filled..]) {
            Ok(n) => n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        if read == 0 {
            return Ok(ReadExact::Ended);
        }
        filled += read;
    }
    Ok(ReadExact::Filled)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn fills_from_single_read() {
        let mut src = Cursor::new(vec![1, 2, 3, 4]);
        let mut buf = [0u8; 4];
        assert_eq!(read_exact_or_end(&mut src, &mut buf).unwrap(), ReadExact::Filled);
        assert_eq!(buf, [1, 2, 3, 4]);
    }

    #[test]
    fn fills_across_short_reads() {
        let mut src = ByteByByteReader {
            bytes: vec![9, 8, 7, 6, 5],
            pos: 0,
        };
        let mut buf = [0u8; 5];
        assert_eq!(read_exact_or_end(&mut src, &mut buf).unwrap(), ReadExact::Filled);
        assert_eq!(buf, [9, 8, 7, 6, 5]);
    }

    #[test]
    fn empty_source_ends() {
        let mut src = Cursor::new(Vec::<u8>::new());
        let mut buf = [0u8; 4];
        assert_eq!(read_exact_or_end(&mut src, &mut buf).unwrap(), ReadExact::Ended);
    }

    #[test]
    fn partial_source_ends() {
        let mut src = Cursor::new(vec![1, 2]);
        let mut buf = [0u8; 4];
        assert_eq!(read_exact_or_end(&mut src, &mut buf).unwrap(), ReadExact::Ended);
    }

    #[test]
    fn zero_length_request_fills_trivially() {
        let mut src = Cursor::new(Vec::<u8>::new());
        let mut buf = [0u8; 0];
        assert_eq!(read_exact_or_end(&mut src, &mut buf).unwrap(), ReadExact::Filled);
    }

    #[test]
    fn does_not_read_past_requested_length() {
        let mut src = Cursor::new(vec![1, 2, 3, 4, 5, 6]);
        let mut buf = [0u8; 4];
        read_exact_or_end(&mut src, &mut buf).unwrap();
        assert_eq!(src.position(), 4);
    }

    #[test]
    fn interrupted_read_retries() {
        let mut src = InterruptedThenData {
            interrupted: false,
            bytes: vec![0xAA, 0xBB],
            pos: 0,
        };
        let mut buf = [0u8; 2];
        assert_eq!(read_exact_or_end(&mut src, &mut buf).unwrap(), ReadExact::Filled);
        assert_eq!(buf, [0xAA, 0xBB]);
    }

    #[test]
    fn io_error_propagates() {
        struct FailingReader;
        impl Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::from(ErrorKind::ConnectionReset))
            }
        }

        let mut buf = [0u8; 4];
        let err = read_exact_or_end(&mut FailingReader, &mut buf).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConnectionReset);
    }

    struct ByteByByteReader {
        bytes: Vec<u8>,
        pos: usize,
    }

    impl Read for ByteByByteReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.pos >= self.bytes.len() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.bytes[self.pos];
            self.pos += 1;
            Ok(1)
        }
    }

    struct InterruptedThenData {
        interrupted: bool,
        bytes: Vec<u8>,
        pos: usize,
    }

    impl Read for InterruptedThenData {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(std::io::Error::from(ErrorKind::Interrupted));
            }
            if self.pos >= self.bytes.len() {
                return Ok(0);
            }
            let n = (self.bytes.len() - self.pos).min(buf.len());
            buf[..n].copy_from_slice(&self.bytes[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }
}
