//! Host-facing call surface.
//!
//! The native host can only reach a fixed, self-contained binding — it
//! holds no references into the UI runtime. [`HostBinding`] is that binding
//! as an explicit value: the embedding layer creates one, installs the
//! bridge into it, and exposes it under whatever name its runtime requires.
//! The core keeps no global state.

use crate::bridge::{Bridge, BridgeError};
use serde_json::Value;
use std::sync::OnceLock;

/// Set-once cell carrying the installed [`Bridge`].
///
/// Calls that arrive before `install` fail whole with
/// [`BridgeError::NotInitialized`]; nothing is partially applied.
#[derive(Default)]
pub struct HostBinding {
    bridge: OnceLock<Bridge>,
}

impl HostBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the bridge. A second install fails and drops the new bridge
    /// (unmounting its view).
    pub fn install(&self, bridge: Bridge) -> Result<(), BridgeError> {
        self.bridge
            .set(bridge)
            .map_err(|_| BridgeError::AlreadyInstalled)
    }

    /// The installed bridge, if any.
    pub fn bridge(&self) -> Result<&Bridge, BridgeError> {
        self.bridge.get().ok_or(BridgeError::NotInitialized)
    }

    /// Host entry point: append one message.
    pub fn add_message(&self, message: Value) -> Result<(), BridgeError> {
        self.bridge()?.add_message(message);
        Ok(())
    }

    /// Host entry point: clear all messages.
    pub fn clear_messages(&self) -> Result<(), BridgeError> {
        self.bridge()?.clear_messages();
        Ok(())
    }
}
