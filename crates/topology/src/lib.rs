//! Network topology management for the Meridian SDK
//!
//! This crate provides:
//! - Endpoint parsing and formatting (`Endpoint`)
//! - Node capability traits (`TopologyNode`, `NodeFactory`)
//! - Per-node health tracking (`HealthRecord`)
//! - Health-ranked selection and atomic reconfiguration (`TopologyManager`)

pub mod channel;
pub mod endpoint;
pub mod error;
pub mod health;
pub mod manager;
pub mod node;

pub use channel::LazyChannel;
pub use endpoint::Endpoint;
pub use error::TopologyError;
pub use health::{HealthRank, HealthRecord};
pub use manager::TopologyManager;
pub use node::{NodeFactory, TopologyNode};
