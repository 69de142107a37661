//! Host bridge API.
//!
//! The only surface the native host mutates state through. Raw payloads are
//! normalized once at this edge, then applied to the store through the
//! `messages` lens as whole-root replaces.
//!
//! ```text
//! host call ──→ clean ──→ lens write ──→ store emits ──→ view re-renders
//! ```

mod error;

pub use error::BridgeError;

use crate::lens::Lens;
use crate::message::{self, MESSAGES_FIELD};
use crate::seed;
use crate::store::Store;
use crate::view::{ViewHost, ViewTree};
use serde::Serialize;
use serde_json::Value;

/// Version of the host/bridge contract.
pub const PROTOCOL_VERSION: &str = "0.1";

/// Bridge metadata, serialized when the embedding layer introspects the
/// surface it exposes to the host.
#[derive(Debug, Clone, Serialize)]
pub struct Meta {
    pub version: &'static str,
}

/// Metadata plus the store handle, created once at initialization and
/// shared read-only by every bridge call.
#[derive(Clone)]
pub struct Context {
    pub meta: Meta,
    pub store: Store,
}

/// Handle returned by [`Bridge::initialize`]. Owns the store and keeps the
/// view host alive; dropping it unmounts the view.
pub struct Bridge {
    context: Context,
    messages: Lens,
    _view: ViewHost,
}

impl Bridge {
    /// Build the store from the host-embedded seed, mount the view tree on
    /// the `messages` lens, and return the operations handle.
    ///
    /// Calling this twice creates two independent bridges sharing no state;
    /// the host is expected to call it exactly once.
    pub fn initialize(seed_text: Option<&str>, view: Box<dyn ViewTree>) -> Result<Self, BridgeError> {
        let root = seed::decode_seed(seed_text)?;
        let store = Store::new(root);
        let context = Context {
            meta: Meta {
                version: PROTOCOL_VERSION,
            },
            store,
        };
        let messages = Lens::new(context.store.clone(), MESSAGES_FIELD);
        let view = ViewHost::mount(messages.clone(), view);
        tracing::debug!(version = PROTOCOL_VERSION, "bridge initialized");
        Ok(Self {
            context,
            messages,
            _view: view,
        })
    }

    /// Append one message to the end of the sequence.
    ///
    /// The payload is cleaned here, once; downstream code never re-applies
    /// normalization. Append-only: a payload matching an existing message
    /// produces a second entry, not an upsert.
    pub fn add_message(&self, message: Value) {
        tracing::debug!("add_message received");
        let cleaned = message::clean(message);
        self.messages.modify(|sequence| append(sequence, cleaned));
    }

    /// Reset the sequence to empty, regardless of prior contents.
    pub fn clear_messages(&self) {
        tracing::debug!("clear_messages");
        self.messages.set(Value::Array(Vec::new()));
    }

    pub fn meta(&self) -> &Meta {
        &self.context.meta
    }

    /// Store handle, for the embedding layer's own derivations.
    pub fn store(&self) -> &Store {
        &self.context.store
    }
}

/// Append into a sequence value; anything that is not an array (the seed
/// decoder rules this out for `messages`, but lens writes are total) is
/// treated as empty.
fn append(sequence: Value, item: Value) -> Value {
    let mut items = match sequence {
        Value::Array(items) => items,
        _ => Vec::new(),
    };
    items.push(item);
    Value::Array(items)
}
