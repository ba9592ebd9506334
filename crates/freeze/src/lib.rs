//! Freeze maintenance-transaction wire body for the Meridian SDK
//!
//! Sets the freezing period in which the network stops creating events and
//! accepting transactions, used before safely shutting the platform down
//! for maintenance. This is pure data mapping: the body carries no state,
//! concurrency, or retry logic, and the node-network manager only routes
//! its encoded bytes.

pub mod error;
pub mod file_id;
pub mod freeze_type;
pub mod timestamp;
pub mod transaction;

pub use error::FreezeError;
pub use file_id::FileId;
pub use freeze_type::FreezeType;
pub use timestamp::Timestamp;
pub use transaction::FreezeTransaction;
