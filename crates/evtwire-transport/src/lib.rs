//! TCP connection establishment for evtwire.
//!
//! The framing and session layers only require an established
//! bidirectional byte stream. This crate supplies it: [`Listener`] for the
//! receiving side (bind/accept), [`connect`] for the sending side, both
//! yielding a [`Connection`] that implements `Read + Write`.

pub mod conn;
pub mod error;
pub mod tcp;

pub use conn::Connection;
pub use error::{Result, TransportError};
pub use tcp::{connect, Listener};
