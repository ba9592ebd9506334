//! Read-only mirror network for the Meridian SDK
//!
//! A [`MirrorNetwork`] is a topology manager preconfigured for read-only
//! history-query nodes: its factory always produces [`MirrorNode`]s and
//! transport security is forced on. Named constructors cover the three
//! production deployments.

pub mod network;
pub mod node;

pub use network::{
    MAINNET_MIRROR, MirrorNetwork, PREVIEWNET_MIRROR, TESTNET_MIRROR,
};
pub use node::{MirrorNode, MirrorNodeFactory};
