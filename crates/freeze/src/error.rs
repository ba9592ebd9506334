//! Error types for freeze body encoding

use thiserror::Error;

/// Errors produced while mapping a freeze body to or from its wire form.
#[derive(Debug, Error)]
pub enum FreezeError {
    /// The body could not be encoded
    #[error("failed to encode freeze body: {0}")]
    Encode(String),

    /// The bytes did not decode to a valid freeze body
    #[error("failed to decode freeze body: {0}")]
    Decode(String),
}
