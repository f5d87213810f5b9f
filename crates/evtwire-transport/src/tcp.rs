use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};

use tracing::{debug, info};

use crate::conn::Connection;
use crate::error::{Result, TransportError};

/// TCP listening socket for the receiving side.
///
/// Binds eagerly; each `accept` yields one [`Connection`] that a session
/// then owns exclusively. Serving connections one at a time or spawning a
/// session per connection is the caller's choice.
pub struct Listener {
    listener: TcpListener,
    addr: SocketAddr,
}

impl Listener {
    /// Bind and listen on the given address.
    pub fn bind(addr: SocketAddr) -> Result<Self> {
        let listener = TcpListener::bind(addr).map_err(|e| TransportError::Bind {
            addr,
            source: e,
        })?;
        // With port 0 the OS picks; report the address actually bound.
        let addr = listener.local_addr().map_err(|e| TransportError::Bind {
            addr,
            source: e,
        })?;
        info!(%addr, "listening");
        Ok(Self { listener, addr })
    }

    /// Accept an incoming connection (blocking).
    pub fn accept(&self) -> Result<Connection> {
        let (stream, peer) = self.listener.accept().map_err(TransportError::Accept)?;
        debug!(%peer, "accepted connection");
        Ok(Connection::from_tcp(stream))
    }

    /// The address this listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }
}

/// Connect to a listening peer (blocking).
///
/// `addr` may be a hostname:port pair; the first resolved address is used.
pub fn connect(addr: impl ToSocketAddrs + std::fmt::Display) -> Result<Connection> {
    let display_addr = addr.to_string();
    let resolved = addr
        .to_socket_addrs()
        .map_err(|e| TransportError::Connect {
            addr: display_addr.clone(),
            source: e,
        })?
        .next()
        .ok_or_else(|| TransportError::Unresolved {
            addr: display_addr.clone(),
        })?;

    let stream = TcpStream::connect(resolved).map_err(|e| TransportError::Connect {
        addr: display_addr.clone(),
        source: e,
    })?;
    debug!(addr = %display_addr, %resolved, "connected");
    Ok(Connection::from_tcp(stream))
}
