//! Health-ranked node selection and atomic whole-set reconfiguration

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use arc_swap::ArcSwap;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::health::HealthRank;
use crate::{Endpoint, NodeFactory, TopologyError, TopologyNode};

type Topology<N> = HashMap<Endpoint, Arc<N>>;

/// Single source of truth for which nodes exist right now and which are
/// healthiest right now.
///
/// Reconfiguration is serialized through one mutation lock. Readers load an
/// atomically published snapshot instead of taking the lock, so selection
/// and `get_network` never block on network I/O, even while a concurrent
/// [`set_network`](Self::set_network) is draining retired connections. Every
/// read observes the pre- or post-reconfiguration mapping in full, never a
/// mix.
pub struct TopologyManager<F: NodeFactory> {
    factory: F,
    /// Serializes `set_network` and `shutdown`. Never taken by readers.
    reconfigure: Mutex<()>,
    /// Published snapshot; swapped whole, never mutated in place.
    topology: ArcSwap<Topology<F::Node>>,
    /// Monotone counter stamping hand-outs for fairness tie-breaking.
    selection_seq: AtomicU64,
    transport_security: bool,
}

impl<F: NodeFactory> TopologyManager<F> {
    /// Create an empty manager around `factory`.
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            reconfigure: Mutex::new(()),
            topology: ArcSwap::from_pointee(HashMap::new()),
            selection_seq: AtomicU64::new(0),
            transport_security: false,
        }
    }

    /// Force transport security on for every node in this topology.
    ///
    /// The manager records the policy; factories thread it onto the
    /// connections they build (see [`crate::LazyChannel::with_transport_security`]),
    /// and the transport layer above the channel performs the handshake.
    pub fn with_transport_security(mut self) -> Self {
        self.transport_security = true;
        self
    }

    /// Whether transport security is required for this topology.
    pub fn transport_security(&self) -> bool {
        self.transport_security
    }

    /// Replace the entire node set with `addresses`.
    ///
    /// Computes the symmetric difference against the current set: endpoints
    /// present in both keep their node untouched (health history and
    /// connection included), new endpoints get a node from the factory, and
    /// retiring endpoints have their nodes closed gracefully. The post-state
    /// mapping is published in a single atomic step *before* the closes
    /// begin, so no reader can select a node whose connection is draining.
    ///
    /// The call then waits up to `timeout` for every retiring node to finish
    /// closing. On expiry it fails with [`TopologyError::Timeout`]; the new
    /// topology stays published and the pending closes keep draining on the
    /// runtime. If the wait is cancelled it fails with
    /// [`TopologyError::Interrupted`] with the same no-rollback caveat.
    ///
    /// Safe to call while other tasks are concurrently reading the topology;
    /// concurrent `set_network` calls serialize through the mutation lock.
    pub async fn set_network<I, S>(
        &self,
        addresses: I,
        timeout: Duration,
    ) -> Result<(), TopologyError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // Parse everything up front so a malformed address fails the call
        // before any node is created or retired.
        let mut requested = Vec::new();
        for address in addresses {
            requested.push(Endpoint::parse(address.as_ref())?);
        }

        let _guard = self.reconfigure.lock().await;

        let current = self.topology.load_full();
        let mut next: Topology<F::Node> = HashMap::with_capacity(requested.len());
        let mut added = 0usize;
        for endpoint in requested {
            if next.contains_key(&endpoint) {
                continue;
            }
            let node = match current.get(&endpoint) {
                // Endpoint survives the swap: same node instance, same
                // health history, same connection.
                Some(node) => Arc::clone(node),
                None => {
                    added += 1;
                    Arc::new(self.factory.create(endpoint.clone()))
                }
            };
            next.insert(endpoint, node);
        }

        let retiring: Vec<Arc<F::Node>> = current
            .iter()
            .filter(|(endpoint, _)| !next.contains_key(*endpoint))
            .map(|(_, node)| Arc::clone(node))
            .collect();

        info!(
            kept = next.len() - added,
            added,
            retiring = retiring.len(),
            "reconfiguring topology"
        );

        self.topology.store(Arc::new(next));

        self.drain(retiring, timeout).await
    }

    /// Close every node and leave the topology empty.
    ///
    /// Same timeout semantics as [`set_network`](Self::set_network).
    pub async fn shutdown(&self, timeout: Duration) -> Result<(), TopologyError> {
        let _guard = self.reconfigure.lock().await;

        let current = self.topology.load_full();
        let retiring: Vec<Arc<F::Node>> = current.values().map(Arc::clone).collect();

        info!(nodes = retiring.len(), "shutting down topology manager");
        self.topology.store(Arc::new(HashMap::new()));

        self.drain(retiring, timeout).await
    }

    /// Wait up to `timeout` for the retiring nodes to close, scheduling
    /// each close on the task executor so a slow node cannot wedge the rest.
    async fn drain(
        &self,
        retiring: Vec<Arc<F::Node>>,
        timeout: Duration,
    ) -> Result<(), TopologyError> {
        if retiring.is_empty() {
            return Ok(());
        }

        let handles: Vec<JoinHandle<()>> = retiring
            .into_iter()
            .map(|node| {
                tokio::spawn(async move {
                    node.close().await;
                })
            })
            .collect();

        let wait = async {
            for handle in handles {
                handle.await.map_err(|error| {
                    warn!(%error, "graceful close did not run to completion");
                    TopologyError::Interrupted
                })?;
            }
            Ok(())
        };

        match tokio::time::timeout(timeout, wait).await {
            Ok(result) => result,
            Err(_) => {
                // The spawned closes keep draining on the runtime; the
                // topology already shows the requested set.
                warn!(?timeout, "timed out waiting for retiring nodes to close");
                Err(TopologyError::Timeout(timeout))
            }
        }
    }

    /// Snapshot of the current endpoint strings, sorted for stable display.
    ///
    /// Order carries no meaning; the topology is a set.
    pub fn get_network(&self) -> Vec<String> {
        let topology = self.topology.load();
        let mut addresses: Vec<String> = topology.keys().map(ToString::to_string).collect();
        addresses.sort();
        addresses
    }

    /// Number of nodes currently in the topology.
    pub fn node_count(&self) -> usize {
        self.topology.load().len()
    }

    /// Look up the node for `endpoint`, if present.
    pub fn get_node(&self, endpoint: &Endpoint) -> Option<Arc<F::Node>> {
        self.topology.load().get(endpoint).map(Arc::clone)
    }

    /// The `min(k, node count)` healthiest nodes, healthiest first.
    ///
    /// Ranks are taken from a single consistent snapshot of the topology;
    /// a reconfiguration landing mid-call cannot produce a mixed view. Ties
    /// go to the node selected longest ago, and every returned node is
    /// stamped as selected. Selection is permissive: the best available
    /// nodes are returned no matter how poor their absolute scores are. An
    /// empty topology is the only failure
    /// ([`TopologyError::NoAvailableNodes`]).
    pub fn healthiest_nodes(&self, k: usize) -> Result<Vec<Arc<F::Node>>, TopologyError> {
        let topology = self.topology.load();
        if topology.is_empty() {
            return Err(TopologyError::NoAvailableNodes);
        }

        let mut candidates: Vec<(HealthRank, Arc<F::Node>)> = topology
            .values()
            .map(|node| (node.health().rank(), Arc::clone(node)))
            .collect();
        candidates.sort_by(|a, b| a.0.selection_order(&b.0));
        candidates.truncate(k);

        let selected: Vec<Arc<F::Node>> =
            candidates.into_iter().map(|(_, node)| node).collect();
        for node in &selected {
            let seq = self.selection_seq.fetch_add(1, Ordering::Relaxed) + 1;
            node.health().mark_selected(seq);
        }

        debug!(requested = k, returned = selected.len(), "selected nodes");
        Ok(selected)
    }

    /// The single healthiest node.
    pub fn next_healthy_node(&self) -> Result<Arc<F::Node>, TopologyError> {
        let mut nodes = self.healthiest_nodes(1)?;
        // `healthiest_nodes` only succeeds on a non-empty topology.
        Ok(nodes.remove(0))
    }
}

impl<F: NodeFactory> Debug for TopologyManager<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TopologyManager")
            .field("nodes", &self.node_count())
            .field("transport_security", &self.transport_security)
            .finish_non_exhaustive()
    }
}
