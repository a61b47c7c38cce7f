//! Animation-frame scheduler
//!
//! Models the host's "run this on the next display refresh" primitive.
//! Callers request a frame and get a handle back; the host drains all due
//! handles once per refresh tick. Each caller keeps at most one handle alive
//! and cancels it before requesting a new one, which gives the
//! single-slot, cancel-and-replace coalescing the resize gesture relies on.

use std::collections::BTreeMap;

use crate::card::CardId;

/// Handle to a requested animation frame
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(u64);

/// Pending frame requests, fired in request order
#[derive(Debug)]
pub struct FrameScheduler {
    pending: BTreeMap<FrameHandle, CardId>,
    next_handle: u64,
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler {
    /// Create an empty scheduler
    pub fn new() -> Self {
        Self {
            pending: BTreeMap::new(),
            next_handle: 1,
        }
    }

    /// Request a frame on behalf of `owner`
    pub fn request(&mut self, owner: CardId) -> FrameHandle {
        let handle = FrameHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.insert(handle, owner);
        handle
    }

    /// Cancel a frame request
    ///
    /// Cancelling a handle that already fired or was already cancelled is a
    /// no-op. Returns whether a pending request was removed.
    pub fn cancel(&mut self, handle: FrameHandle) -> bool {
        self.pending.remove(&handle).is_some()
    }

    /// Check if a handle is still waiting for its frame
    #[inline]
    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.pending.contains_key(&handle)
    }

    /// Number of requests waiting for the next frame
    #[inline]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Take every request due on this refresh tick
    pub fn drain(&mut self) -> Vec<(FrameHandle, CardId)> {
        std::mem::take(&mut self.pending).into_iter().collect()
    }
}
