//! Simple error types for topology operations

use std::time::Duration;

use thiserror::Error;

/// Topology-related errors
#[derive(Clone, Debug, Error)]
pub enum TopologyError {
    /// Endpoint text could not be parsed
    #[error("malformed address '{address}': {reason}")]
    MalformedAddress {
        /// The text that failed to parse
        address: String,
        /// Why it was rejected
        reason: String,
    },

    /// Reconfiguration could not drain retiring nodes within its budget
    #[error("reconfiguration timed out after {0:?} waiting for node shutdown")]
    Timeout(Duration),

    /// Reconfiguration's wait was cancelled externally
    #[error("reconfiguration interrupted while waiting for node shutdown")]
    Interrupted,

    /// Selection was attempted against an empty topology
    #[error("no nodes available in the topology")]
    NoAvailableNodes,

    /// A connection attempt failed
    #[error("connection to {endpoint} failed: {reason}")]
    Connection {
        /// The endpoint that refused us
        endpoint: String,
        /// The underlying I/O error text
        reason: String,
    },

    /// A closed channel was asked to reopen
    #[error("channel to {0} is closed")]
    ChannelClosed(String),
}
