//! Window- and document-level input resources
//!
//! A card that starts a gesture takes the window pointer-move and
//! pointer-up listeners so it keeps receiving events after the pointer
//! leaves its bounds. A resize additionally overrides the body cursor and
//! schedules animation frames. All three live here so that gesture end and
//! card teardown can release them together.

use std::collections::BTreeMap;

use tracing::trace;

use super::FrameScheduler;
use crate::card::CardId;

/// Which gesture holds a capture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureKind {
    Drag,
    Resize,
}

/// Proof that a card holds the window listeners
///
/// Returned by [`InputSurface::acquire`] and consumed by
/// [`InputSurface::release`], so each acquisition is released at most once.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a dropped lease leaves the window listeners attached"]
pub struct CaptureLease {
    owner: CardId,
    kind: CaptureKind,
}

/// Listener registry, cursor override and frame scheduler shared by all cards
#[derive(Debug, Default)]
pub struct InputSurface {
    /// Cards holding the move/up listener pair
    captures: BTreeMap<CardId, CaptureKind>,
    /// Body cursor overrides by holder, most recent last
    cursors: Vec<(CardId, &'static str)>,
    /// Animation-frame requests
    frames: FrameScheduler,
}

impl InputSurface {
    /// Listeners registered per capturing card (move + up)
    pub const LISTENERS_PER_CAPTURE: usize = 2;

    /// Create an idle surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the window move/up listener pair for `owner`
    pub fn acquire(&mut self, owner: CardId, kind: CaptureKind) -> CaptureLease {
        trace!(card = owner, ?kind, "window listeners attached");
        self.captures.insert(owner, kind);
        CaptureLease { owner, kind }
    }

    /// Remove both listeners of a lease in one step
    ///
    /// A lease superseded by a newer acquisition of the same card leaves the
    /// newer registration in place.
    pub fn release(&mut self, lease: CaptureLease) {
        if self.captures.get(&lease.owner) == Some(&lease.kind) {
            self.captures.remove(&lease.owner);
            trace!(card = lease.owner, kind = ?lease.kind, "window listeners detached");
        }
    }

    /// Check if `owner` currently holds the window listeners
    #[inline]
    pub fn is_capturing(&self, owner: CardId) -> bool {
        self.captures.contains_key(&owner)
    }

    /// Cards holding window listeners, in id order
    pub fn capturing_cards(&self) -> Vec<CardId> {
        self.captures.keys().copied().collect()
    }

    /// Number of live window listeners
    #[inline]
    pub fn listener_count(&self) -> usize {
        self.captures.len() * Self::LISTENERS_PER_CAPTURE
    }

    /// Current body cursor override
    ///
    /// The most recent holder wins; when it clears, the override of the
    /// next most recent holder shows again.
    #[inline]
    pub fn cursor(&self) -> Option<&'static str> {
        self.cursors.last().map(|&(_, cursor)| cursor)
    }

    /// Override the body cursor on behalf of `owner`
    pub fn set_cursor(&mut self, owner: CardId, cursor: &'static str) {
        self.cursors.retain(|&(holder, _)| holder != owner);
        self.cursors.push((owner, cursor));
    }

    /// Drop the override `owner` set, if any
    pub fn clear_cursor(&mut self, owner: CardId) {
        self.cursors.retain(|&(holder, _)| holder != owner);
    }

    /// Frame scheduler
    #[inline]
    pub fn frames(&self) -> &FrameScheduler {
        &self.frames
    }

    /// Mutable frame scheduler
    #[inline]
    pub fn frames_mut(&mut self) -> &mut FrameScheduler {
        &mut self.frames
    }
}
