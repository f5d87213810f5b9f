//! Length-prefixed event record framing over arbitrary byte streams.
//!
//! This is the core of evtwire. Every record on the wire (and in the
//! stored file format, which is byte-identical) is:
//! - A 4-byte little-endian unsigned length, counting the whole record
//!   including the length field itself
//! - `length − 4` bytes of raw body, no escaping, no padding
//!
//! Record boundaries are determined entirely by the prefixes; there is no
//! resynchronization once a prefix is misread. The same decode loop serves
//! files and sockets, since both are just `Read` sources that may
//! short-read. Callers only ever see complete records.

pub mod error;
pub mod exact;
pub mod reader;
pub mod record;
pub mod writer;

pub use error::{RecordError, Result};
pub use exact::{read_exact_or_end, ReadExact};
pub use reader::RecordReader;
pub use record::{Record, MIN_RECORD_LEN, PREFIX_LEN};
pub use writer::RecordWriter;
