//! Reactive state bridge between a native mail client and its embedded
//! thread view.
//!
//! The native host pushes raw message payloads through a narrow surface;
//! the bridge normalizes them, applies them to a single observable root
//! value, and an external view tree re-renders on every change.
//!
//! ```text
//! host ──→ HostBinding ──→ Bridge ──→ clean ──→ Lens ──→ Store
//!                                                          │ emits
//!                                            ViewTree ←────┘
//! ```
//!
//! The store is the only owner of mutable state; every mutation is a
//! whole-root replace, and views pull derived state through lenses.

pub mod bridge;
pub mod host;
pub mod lens;
pub mod message;
pub mod seed;
pub mod store;
pub mod trace;
pub mod view;

pub use bridge::{Bridge, BridgeError, Context, Meta, PROTOCOL_VERSION};
pub use host::HostBinding;
pub use lens::{Lens, Path};
pub use message::clean;
pub use store::{Snapshots, Store};
pub use view::{ViewHost, ViewTree};
