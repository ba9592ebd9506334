//! Node capability traits and the per-flavor factory seam

use async_trait::async_trait;

use crate::{Endpoint, HealthRecord};

/// A client-side handle to one remote service endpoint.
///
/// Concrete variants differ per network flavor (read/write consensus nodes
/// vs. read-only mirror nodes); a [`NodeFactory`] picks the variant at
/// construction time so the topology manager never needs to know the
/// difference.
#[async_trait]
pub trait TopologyNode: Send + Sync + 'static {
    /// The endpoint this node routes requests to.
    fn endpoint(&self) -> &Endpoint;

    /// The outcome record feeding health-ranked selection.
    fn health(&self) -> &HealthRecord;

    /// Release the underlying connection.
    ///
    /// Idempotent, and safe to call on a node whose connection was never
    /// established. A closed node is never reused; if its endpoint
    /// re-enters the topology a fresh node is built.
    async fn close(&self);
}

/// Constructs the concrete node variant for one network flavor.
pub trait NodeFactory: Send + Sync + 'static {
    /// The node variant this factory produces.
    type Node: TopologyNode;

    /// Build a fresh node for `endpoint`.
    ///
    /// Pure construction: no I/O is required to succeed, connections are
    /// established lazily on first use.
    fn create(&self, endpoint: Endpoint) -> Self::Node;
}
