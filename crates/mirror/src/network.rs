//! Mirror network presets and construction

use std::sync::Arc;
use std::time::Duration;

use meridian_topology::{TopologyError, TopologyManager};
use tracing::warn;

use crate::node::{MirrorNode, MirrorNodeFactory};

/// Mirror endpoint for the production mainnet deployment.
pub const MAINNET_MIRROR: &str = "mainnet-public.mirror.meridian.network:443";

/// Mirror endpoint for the testnet deployment.
pub const TESTNET_MIRROR: &str = "testnet.mirror.meridian.network:443";

/// Mirror endpoint for the previewnet deployment.
pub const PREVIEWNET_MIRROR: &str = "previewnet.mirror.meridian.network:443";

/// Budget for the construction-time `set_network`. Nothing retires when the
/// topology starts empty, so this never actually elapses.
const CONSTRUCTION_TIMEOUT: Duration = Duration::from_secs(30);

/// A topology manager preconfigured for read-only history-query nodes.
///
/// Transport security is always required on mirror connections.
#[derive(Debug)]
pub struct MirrorNetwork {
    manager: TopologyManager<MirrorNodeFactory>,
}

impl MirrorNetwork {
    /// Create a mirror network from an arbitrary address list.
    ///
    /// Construction never fails: a malformed address leaves the network
    /// with an effectively empty topology rather than raising, and callers
    /// discover the degradation when they attempt selection. This is a
    /// documented weak guarantee.
    pub async fn for_network<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let network = Self {
            manager: TopologyManager::new(MirrorNodeFactory).with_transport_security(),
        };
        if let Err(error) = network
            .manager
            .set_network(addresses, CONSTRUCTION_TIMEOUT)
            .await
        {
            warn!(%error, "mirror network constructed with a degraded topology");
        }
        network
    }

    /// Mirror network for mainnet.
    pub async fn for_mainnet() -> Self {
        Self::for_network([MAINNET_MIRROR]).await
    }

    /// Mirror network for testnet.
    pub async fn for_testnet() -> Self {
        Self::for_network([TESTNET_MIRROR]).await
    }

    /// Mirror network for previewnet.
    pub async fn for_previewnet() -> Self {
        Self::for_network([PREVIEWNET_MIRROR]).await
    }

    /// Replace the mirror address set. See
    /// [`TopologyManager::set_network`] for the full contract.
    pub async fn set_network<I, S>(
        &self,
        addresses: I,
        timeout: Duration,
    ) -> Result<(), TopologyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.manager.set_network(addresses, timeout).await
    }

    /// Snapshot of the current mirror addresses.
    pub fn get_network(&self) -> Vec<String> {
        self.manager.get_network()
    }

    /// The next healthy mirror node to route a history query to.
    pub fn next_mirror_node(&self) -> Result<Arc<MirrorNode>, TopologyError> {
        self.manager.next_healthy_node()
    }

    /// The `min(k, node count)` healthiest mirror nodes, healthiest first.
    pub fn healthiest_nodes(&self, k: usize) -> Result<Vec<Arc<MirrorNode>>, TopologyError> {
        self.manager.healthiest_nodes(k)
    }

    /// Close every mirror node and empty the topology.
    pub async fn shutdown(&self, timeout: Duration) -> Result<(), TopologyError> {
        self.manager.shutdown(timeout).await
    }

    /// The underlying topology manager.
    pub fn manager(&self) -> &TopologyManager<MirrorNodeFactory> {
        &self.manager
    }
}
