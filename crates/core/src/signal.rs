//! One-shot completion notification.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionEvent {
    /// Sequence number of the `analyze` call that completed
    pub run: u64,
    pub root: PathBuf,
    pub bundle_count: usize,
    pub asset_count: usize,
}

pub type CompletionListener = Box<dyn Fn(&CompletionEvent) + Send + Sync>;

/// Notifies listeners at most once per analysis run.
#[derive(Default)]
pub struct CompletionSignal {
    listeners: Vec<CompletionListener>,
    fired_run: Option<u64>,
}

impl CompletionSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: CompletionListener) {
        self.listeners.push(listener);
    }

    /// Returns false without notifying if this run already fired.
    pub fn fire(&mut self, event: &CompletionEvent) -> bool {
        if self.fired_run == Some(event.run) {
            return false;
        }
        self.fired_run = Some(event.run);
        for listener in &self.listeners {
            listener(event);
        }
        true
    }

    pub fn has_fired(&self, run: u64) -> bool {
        self.fired_run == Some(run)
    }
}
