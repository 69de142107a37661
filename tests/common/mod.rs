//! Shared test fixtures.

#![allow(dead_code)]

use parking_lot::Mutex;
use serde_json::Value;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;
use threadview::{Lens, ViewTree};

const RENDER_WAIT: Duration = Duration::from_secs(2);

/// View tree that records what it pulled through the lens on every render
/// and signals a channel so tests can wait for render passes.
pub struct RecordingView {
    renders: Arc<Mutex<Vec<Value>>>,
    ticks: Sender<()>,
}

impl ViewTree for RecordingView {
    fn render(&mut self, messages: &Lens) {
        // Record before signaling so a waiter always sees this pass.
        self.renders.lock().push(messages.read());
        let _ = self.ticks.send(());
    }
}

/// Test-side handle onto a [`RecordingView`].
pub struct ViewProbe {
    renders: Arc<Mutex<Vec<Value>>>,
    ticks: Receiver<()>,
}

impl ViewProbe {
    /// Block until the next render pass completes.
    pub fn wait_for_render(&self) {
        self.ticks
            .recv_timeout(RENDER_WAIT)
            .expect("view did not render in time");
    }

    /// True if a render pass completes before the timeout.
    pub fn saw_render(&self, timeout: Duration) -> bool {
        self.ticks.recv_timeout(timeout).is_ok()
    }

    pub fn render_count(&self) -> usize {
        self.renders.lock().len()
    }

    pub fn last_render(&self) -> Value {
        self.renders.lock().last().cloned().expect("no renders yet")
    }
}

pub fn recording_view() -> (Box<dyn ViewTree>, ViewProbe) {
    let renders = Arc::new(Mutex::new(Vec::new()));
    let (ticks, tick_stream) = mpsc::channel();
    (
        Box::new(RecordingView {
            renders: Arc::clone(&renders),
            ticks,
        }),
        ViewProbe {
            renders,
            ticks: tick_stream,
        },
    )
}

/// View tree that ignores every render; for tests that only exercise the
/// state side.
pub struct NullView;

impl ViewTree for NullView {
    fn render(&mut self, _messages: &Lens) {}
}

pub fn null_view() -> Box<dyn ViewTree> {
    Box::new(NullView)
}
