//! View-tree mounting and the render loop.
//!
//! The view tree itself is an external collaborator; this module only owns
//! the seam: a [`ViewTree`] gets the `messages` lens and pulls whatever it
//! needs through it, and a [`ViewHost`] re-invokes it once per store
//! emission on a dedicated render thread. Mutating bridge calls never wait
//! on a render pass.

use crate::lens::Lens;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

const RENDER_POLL: Duration = Duration::from_millis(50);

/// The external rendering collaborator.
///
/// `render` is called once when the host mounts and then after every store
/// emission. Derivation is lazy: the tree reads through the lens at render
/// time instead of receiving precomputed state.
pub trait ViewTree: Send {
    fn render(&mut self, messages: &Lens);
}

/// Drives a [`ViewTree`] from a store subscription.
///
/// The subscription's first snapshot is the current root, so the mount
/// itself produces exactly one initial render, on the render thread.
/// Dropping the host stops the loop and joins the thread.
pub struct ViewHost {
    running: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl ViewHost {
    pub fn mount(messages: Lens, mut view: Box<dyn ViewTree>) -> Self {
        let snapshots = messages.store().subscribe();
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);
        let thread = thread::spawn(move || {
            tracing::trace!(path = %messages.path(), "view mounted");
            while flag.load(Ordering::SeqCst) {
                match snapshots.recv_timeout(RENDER_POLL) {
                    Ok(_) => view.render(&messages),
                    Err(RecvTimeoutError::Timeout) => continue,
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }
            tracing::trace!("view unmounted");
        });
        Self {
            running,
            thread: Some(thread),
        }
    }
}

impl Drop for ViewHost {
    fn drop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
