//! Read-only mirror node flavor

use async_trait::async_trait;
use meridian_topology::{Endpoint, HealthRecord, LazyChannel, NodeFactory, TopologyNode};

/// A client-side handle to one read-only mirror endpoint.
///
/// Mirror nodes serve historical queries only; they never accept
/// state-changing requests. The connection is established lazily on first
/// use and owned exclusively by this node.
#[derive(Debug)]
pub struct MirrorNode {
    endpoint: Endpoint,
    channel: LazyChannel,
    health: HealthRecord,
}

impl MirrorNode {
    fn new(endpoint: Endpoint) -> Self {
        Self {
            // Mirror connections always require transport security.
            channel: LazyChannel::new(endpoint.clone()).with_transport_security(),
            endpoint,
            health: HealthRecord::new(),
        }
    }

    /// The lazily-established channel callers route query bytes through.
    pub fn channel(&self) -> &LazyChannel {
        &self.channel
    }
}

#[async_trait]
impl TopologyNode for MirrorNode {
    fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    fn health(&self) -> &HealthRecord {
        &self.health
    }

    async fn close(&self) {
        self.channel.close().await;
    }
}

/// Factory producing read-only mirror nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MirrorNodeFactory;

impl NodeFactory for MirrorNodeFactory {
    type Node = MirrorNode;

    fn create(&self, endpoint: Endpoint) -> MirrorNode {
        MirrorNode::new(endpoint)
    }
}
