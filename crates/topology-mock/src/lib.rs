//! Mock node flavor for exercising the topology manager in tests.
//!
//! `MockNode` carries a tag id so tests can assert node identity across
//! reconfigurations, and its close behavior is configurable so tests can
//! drive the manager's timeout and interruption paths.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use meridian_topology::{Endpoint, HealthRecord, NodeFactory, TopologyNode};

/// How a [`MockNode`] behaves when the manager closes it.
#[derive(Debug, Clone, Copy, Default)]
pub enum CloseBehavior {
    /// Close completes immediately.
    #[default]
    Immediate,
    /// Close sleeps for the given duration before completing.
    Delay(Duration),
    /// Close panics, aborting the spawned close task.
    Panic,
}

/// Lifecycle counters shared between a factory and its nodes.
#[derive(Debug, Default)]
pub struct MockStats {
    created: AtomicUsize,
    closed: AtomicUsize,
}

impl MockStats {
    /// Nodes the factory has built so far.
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    /// Nodes whose close ran to completion.
    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }
}

/// Test node with an identity tag and scripted close behavior.
#[derive(Debug)]
pub struct MockNode {
    id: u64,
    endpoint: Endpoint,
    health: HealthRecord,
    close_behavior: CloseBehavior,
    close_calls: AtomicUsize,
    stats: Arc<MockStats>,
}

impl MockNode {
    /// Identity tag, unique per factory.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// How many times `close` has been invoked on this node.
    pub fn close_calls(&self) -> usize {
        self.close_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TopologyNode for MockNode {
    fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    fn health(&self) -> &HealthRecord {
        &self.health
    }

    async fn close(&self) {
        // Idempotent: only the first call performs the scripted work.
        if self.close_calls.fetch_add(1, Ordering::SeqCst) > 0 {
            return;
        }
        match self.close_behavior {
            CloseBehavior::Immediate => {}
            CloseBehavior::Delay(delay) => tokio::time::sleep(delay).await,
            CloseBehavior::Panic => panic!("scripted close failure"),
        }
        self.stats.closed.fetch_add(1, Ordering::SeqCst);
    }
}

/// Factory producing [`MockNode`]s with a shared close script.
#[derive(Debug, Default)]
pub struct MockNodeFactory {
    next_id: AtomicU64,
    close_behavior: CloseBehavior,
    stats: Arc<MockStats>,
}

impl MockNodeFactory {
    /// Factory whose nodes close immediately.
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory whose nodes take `delay` to close.
    pub fn with_close_delay(delay: Duration) -> Self {
        Self {
            close_behavior: CloseBehavior::Delay(delay),
            ..Self::default()
        }
    }

    /// Factory whose nodes panic on close.
    pub fn with_panicking_close() -> Self {
        Self {
            close_behavior: CloseBehavior::Panic,
            ..Self::default()
        }
    }

    /// Shared lifecycle counters for assertions.
    pub fn stats(&self) -> Arc<MockStats> {
        Arc::clone(&self.stats)
    }
}

impl NodeFactory for MockNodeFactory {
    type Node = MockNode;

    fn create(&self, endpoint: Endpoint) -> MockNode {
        self.stats.created.fetch_add(1, Ordering::SeqCst);
        MockNode {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            endpoint,
            health: HealthRecord::new(),
            close_behavior: self.close_behavior,
            close_calls: AtomicUsize::new(0),
            stats: Arc::clone(&self.stats),
        }
    }
}
