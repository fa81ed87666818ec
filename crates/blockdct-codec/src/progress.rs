//! Block-level progress reporting
//!
//! Observers are called from rayon worker threads, once per channel of every
//! block, in no particular order. The `completed` count is shared across
//! threads so the last notification always carries `completed == total`.

use blockdct_core::Channel;
use blockdct_transform::BlockOrigin;
use std::sync::atomic::{AtomicUsize, Ordering};

/// One finished (channel, block) unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockProgress {
    pub channel: Channel,
    pub origin: BlockOrigin,
    pub completed: usize,
    pub total: usize,
}

/// Receives progress notifications during a transform
pub trait ProgressObserver: Send + Sync {
    fn on_block(&self, progress: &BlockProgress);
}

impl<F> ProgressObserver for F
where
    F: Fn(&BlockProgress) + Send + Sync,
{
    fn on_block(&self, progress: &BlockProgress) {
        self(progress)
    }
}

/// Per-call counter shared by all jobs of one transform
pub(crate) struct ProgressTracker<'a> {
    completed: AtomicUsize,
    total: usize,
    observer: Option<&'a dyn ProgressObserver>,
}

impl<'a> ProgressTracker<'a> {
    pub(crate) fn new(total: usize, observer: Option<&'a dyn ProgressObserver>) -> Self {
        Self {
            completed: AtomicUsize::new(0),
            total,
            observer,
        }
    }

    pub(crate) fn record(&self, channel: Channel, origin: BlockOrigin) {
        let completed = self.completed.fetch_add(1, Ordering::Relaxed) + 1;
        log::trace!(
            "block ({}, {}) {:?} done [{}/{}]",
            origin.row,
            origin.col,
            channel,
            completed,
            self.total
        );

        if let Some(observer) = self.observer {
            observer.on_block(&BlockProgress {
                channel,
                origin,
                completed,
                total: self.total,
            });
        }
    }

    pub(crate) fn completed(&self) -> usize {
        self.completed.load(Ordering::Relaxed)
    }
}
