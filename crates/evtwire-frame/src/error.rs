/// Errors that can occur while reading or writing records.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// A length prefix decoded to a value smaller than the prefix itself.
    ///
    /// No valid record boundary can be derived past this point, so the
    /// stream is unrecoverable.
    #[error("invalid record length {length} (minimum is 4)")]
    InvalidLength { length: u32 },

    /// The stream ended after a complete prefix but before the body it
    /// promised was fully available.
    #[error("truncated record (declared {declared} bytes, body incomplete)")]
    Truncated { declared: u32 },

    /// A body too large for the 32-bit length field to describe.
    #[error("record body too large ({size} bytes)")]
    BodyTooLarge { size: usize },

    /// An I/O error occurred while reading or writing, outside normal
    /// short-read semantics.
    #[error("record I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The sink stopped accepting bytes before a complete record was
    /// written.
    #[error("connection closed (incomplete record write)")]
    ConnectionClosed,
}

pub type Result<T> = std::result::Result<T, RecordError>;
