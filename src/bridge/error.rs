//! Error types for the host-facing bridge surface.
//!
//! Malformed message shape is deliberately NOT represented here: the
//! cleaning contract absorbs it silently. Only invocation-level failures
//! exist — a bridge call that cannot run at all runs not at all.

use thiserror::Error;

/// Errors surfaced to the embedding layer.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Seed text was present but is not valid JSON.
    #[error("invalid seed state: {source}")]
    InvalidSeed {
        #[source]
        source: serde_json::Error,
    },

    /// Seed parsed, but the root is not a JSON object.
    #[error("seed state is not a JSON object")]
    SeedNotObject,

    /// A host call arrived before a bridge was installed.
    #[error("bridge not initialized")]
    NotInitialized,

    /// A second bridge was installed into the same binding.
    #[error("a bridge is already installed")]
    AlreadyInstalled,
}
