//! Observable root-state container.
//!
//! The store owns exactly one root value. Readers get a clone of the most
//! recently committed root; writers replace the whole root atomically; the
//! store never hands out a second mutable copy. Subscribers receive a
//! snapshot stream: the current root immediately, then one snapshot per
//! replace, in commit order.

use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use std::sync::mpsc::{self, Receiver, RecvError, RecvTimeoutError, Sender, TryRecvError};
use std::sync::Arc;
use std::time::Duration;

struct Shared {
    root: RwLock<Value>,
    subscribers: Mutex<Vec<Sender<Value>>>,
}

/// Cheaply cloneable handle to the single root value.
///
/// All clones observe the same root. Replace is a synchronous, exclusive
/// operation: the write lock is held across the swap and the subscriber
/// notification, so every subscriber sees replaces in commit order and a
/// read always returns the last committed root.
#[derive(Clone)]
pub struct Store {
    shared: Arc<Shared>,
}

impl Store {
    pub fn new(root: Value) -> Self {
        Self {
            shared: Arc::new(Shared {
                root: RwLock::new(root),
                subscribers: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Clone of the most recently committed root.
    pub fn read(&self) -> Value {
        self.shared.root.read().clone()
    }

    /// Atomically replace the whole root and notify subscribers.
    pub fn replace(&self, next: Value) {
        self.update(|_| next);
    }

    /// Exclusive read-transform-replace: `f` sees the committed root and its
    /// result becomes the next root, with no interleaved replace in between.
    pub(crate) fn update(&self, f: impl FnOnce(Value) -> Value) {
        // Lock order is root then subscribers, everywhere.
        let mut root = self.shared.root.write();
        *root = f(root.clone());
        let snapshot = root.clone();
        let mut subscribers = self.shared.subscribers.lock();
        subscribers.retain(|feed| feed.send(snapshot.clone()).is_ok());
        tracing::trace!(subscribers = subscribers.len(), "root replaced");
    }

    /// Subscribe to root snapshots.
    ///
    /// The current root is delivered immediately, then every replace
    /// delivers one snapshot. Snapshots are not deduplicated. A dropped
    /// `Snapshots` is pruned from the registry on the next replace.
    pub fn subscribe(&self) -> Snapshots {
        let (feed, stream) = mpsc::channel();
        let root = self.shared.root.read();
        let mut subscribers = self.shared.subscribers.lock();
        let _ = feed.send(root.clone());
        subscribers.push(feed);
        Snapshots { stream }
    }

    /// Number of live subscriber feeds, as of the last replace.
    pub fn subscriber_count(&self) -> usize {
        self.shared.subscribers.lock().len()
    }
}

/// Receiver side of a subscription: a strictly ordered stream of root
/// snapshots.
pub struct Snapshots {
    stream: Receiver<Value>,
}

impl Snapshots {
    /// Block until the next snapshot, or until the store is gone.
    pub fn recv(&self) -> Result<Value, RecvError> {
        self.stream.recv()
    }

    /// Block up to `timeout` for the next snapshot.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Value, RecvTimeoutError> {
        self.stream.recv_timeout(timeout)
    }

    /// Take the next snapshot if one is already queued.
    pub fn try_recv(&self) -> Result<Value, TryRecvError> {
        self.stream.try_recv()
    }
}
