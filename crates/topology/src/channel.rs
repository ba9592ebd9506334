//! Lazily-established connection handle owned by a single node

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tracing::debug;

use crate::{Endpoint, TopologyError};

#[derive(Debug)]
enum ChannelState {
    Idle,
    Open(TcpStream),
    Closed,
}

/// A lazily-established, closable connection to one endpoint.
///
/// The handle is exclusively owned by its node and is never shared across
/// nodes. `Closed` is terminal: a channel is never reopened after
/// [`close`](Self::close); when an endpoint re-enters the topology a fresh
/// node (and with it a fresh channel) is built.
#[derive(Debug)]
pub struct LazyChannel {
    endpoint: Endpoint,
    state: Mutex<ChannelState>,
    transport_security: bool,
}

impl LazyChannel {
    /// Create an unopened channel for `endpoint`. Performs no I/O.
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            state: Mutex::new(ChannelState::Idle),
            transport_security: false,
        }
    }

    /// Require transport security on this channel.
    ///
    /// The channel records the requirement for the transport layer above
    /// it, which performs the actual handshake over the established
    /// stream; the wire protocol itself is outside this crate.
    pub fn with_transport_security(mut self) -> Self {
        self.transport_security = true;
        self
    }

    /// Whether transport security is required on this channel.
    pub fn transport_security(&self) -> bool {
        self.transport_security
    }

    /// The endpoint this channel connects to.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Establish the connection on first use.
    ///
    /// Callers invoke this outside the topology manager's lock, so
    /// connecting never stalls concurrent topology reads.
    pub async fn ensure_open(&self) -> Result<(), TopologyError> {
        let mut state = self.state.lock().await;
        match *state {
            ChannelState::Open(_) => Ok(()),
            ChannelState::Closed => Err(TopologyError::ChannelClosed(self.endpoint.to_string())),
            ChannelState::Idle => {
                let stream = TcpStream::connect((self.endpoint.host(), self.endpoint.port()))
                    .await
                    .map_err(|error| TopologyError::Connection {
                        endpoint: self.endpoint.to_string(),
                        reason: error.to_string(),
                    })?;
                debug!(
                    endpoint = %self.endpoint,
                    transport_security = self.transport_security,
                    "channel opened"
                );
                *state = ChannelState::Open(stream);
                Ok(())
            }
        }
    }

    /// Close the channel gracefully.
    ///
    /// Idempotent, and safe to call on a channel that was never opened.
    pub async fn close(&self) {
        let mut state = self.state.lock().await;
        if let ChannelState::Open(mut stream) = std::mem::replace(&mut *state, ChannelState::Closed)
        {
            // Orderly shutdown lets the peer finish in-flight work before
            // the handle drops.
            let _ = stream.shutdown().await;
            debug!(endpoint = %self.endpoint, "channel closed");
        }
    }

    /// Whether `close` has been called.
    pub async fn is_closed(&self) -> bool {
        matches!(*self.state.lock().await, ChannelState::Closed)
    }
}
