//! Transfer sessions: the role drivers that compose record framing with
//! concrete endpoints.
//!
//! A session is one bounded execution over one source and one sink: the
//! receiver drives a [`evtwire_frame::RecordReader`] over an accepted
//! connection and appends records to a file; the sender drives the same
//! reader over an input file and transmits records over a connection,
//! optionally pacing between records. Sessions share nothing — one
//! independent session per connection is the scaling path.

pub mod error;
pub mod receiver;
pub mod report;
pub mod sender;

pub use error::{Result, SessionError};
pub use receiver::ReceiverSession;
pub use report::{Outcome, SessionReport};
pub use sender::SenderSession;
