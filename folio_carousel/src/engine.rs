// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The carousel engine: input handling over the looping timeline.
//!
//! [`CarouselEngine`] owns the single `position`/`iteration` pair that every
//! input source mutates: the scroll surface, drags on panels, keyboard
//! steps, and panel clicks. The engine performs no I/O. Scroll re-anchoring
//! comes back to the host as a [`ScrollCommand`] to apply to its real
//! scroll surface, and the debounced active-index notification is delivered
//! through [`CarouselEngine::poll`], fed by the host clock.
//!
//! ## Scroll wrapping
//!
//! The host binds a finite virtual scroll range (2000 units by default).
//! Each time the range is exhausted the engine bumps `iteration` and
//! commands a re-anchor one unit inside the opposite boundary, so a bounded
//! scrollbar drives an unbounded timeline: `position = iteration +
//! offset / end`, and the phase function never sees a boundary.
//!
//! ## Resting on a slot
//!
//! Every discrete move and every gesture end passes through the snapping
//! path, so the strip always settles centered on exactly one panel.

use kurbo::Point;

use folio_event_state::drag::DragState;

use crate::deck::PanelDeck;
use crate::wrap::{active_index, floor, shortest_bump, snap_to_slot, wrap};

/// Default virtual scroll range bound by the host.
pub const DEFAULT_SCROLL_END: f64 = 2000.0;
/// Re-anchor this far inside the range boundary, in scroll units.
const ANCHOR_MARGIN: f64 = 1.0;
/// Loop units per pixel of horizontal drag.
const DRAG_SENSITIVITY: f64 = 0.001;
/// Quiet period before an active-index change is reported.
const NOTIFY_QUIET_MS: u64 = 150;

/// Which way the scroll surface moved since its last report.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Scrolling toward the end of the range.
    Forward,
    /// Scrolling back toward the start.
    Backward,
}

/// A discrete one-panel move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepDirection {
    /// Advance the strip one panel (the left arrow / "next" control).
    Next,
    /// Back the strip up one panel.
    Prev,
}

/// Keyboard keys the carousel responds to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NavKey {
    /// Left arrow.
    ArrowLeft,
    /// The `A` key.
    KeyA,
    /// Right arrow.
    ArrowRight,
    /// The `D` key.
    KeyD,
}

impl NavKey {
    /// The step this key triggers.
    #[must_use]
    pub fn step_direction(self) -> StepDirection {
        match self {
            Self::ArrowLeft | Self::KeyA => StepDirection::Next,
            Self::ArrowRight | Self::KeyD => StepDirection::Prev,
        }
    }
}

/// An instruction for the host to move its scroll surface.
///
/// The engine has already updated its own state; the host applies the
/// offset and reports the resulting scroll back via
/// [`CarouselEngine::on_scroll`], which converges to the same position.
#[derive(Copy, Clone, Debug, PartialEq)]
#[must_use = "the host must apply the offset to its scroll surface"]
pub struct ScrollCommand {
    /// Absolute offset to set on the scroll surface, in scroll units.
    pub offset: f64,
}

#[derive(Copy, Clone, Debug)]
struct PendingNotify {
    at_ms: u64,
    index: usize,
}

/// The looping carousel's input-state machine.
///
/// See the crate docs for the full contract and an end-to-end example.
#[derive(Debug, Clone)]
pub struct CarouselEngine {
    len: usize,
    position: f64,
    iteration: i64,
    scroll_end: Option<f64>,
    drag: DragState,
    drag_origin_position: f64,
    active: usize,
    last_notified: usize,
    pending: Option<PendingNotify>,
    disposed: bool,
}

impl CarouselEngine {
    /// Creates an engine over `panel_count` panels, resting on panel 0.
    ///
    /// The engine stays inert until a scroll surface is bound. A panel
    /// count of zero yields a permanently inert engine.
    #[must_use]
    pub fn new(panel_count: usize) -> Self {
        Self {
            len: panel_count,
            position: 0.0,
            iteration: 0,
            scroll_end: None,
            drag: DragState::default(),
            drag_origin_position: 0.0,
            active: 0,
            last_notified: 0,
            pending: None,
            disposed: false,
        }
    }

    /// Creates an engine sized to the given deck.
    #[must_use]
    pub fn for_deck(deck: &PanelDeck) -> Self {
        Self::new(deck.len())
    }

    /// Attaches the finite virtual scroll range `0..end`.
    ///
    /// Until this is called every input operation is silently skipped;
    /// nothing to scroll, nothing to do. `end` must leave room for the
    /// re-anchor margin on both sides ([`DEFAULT_SCROLL_END`] does).
    pub fn bind_scroll_surface(&mut self, end: f64) {
        if self.disposed {
            return;
        }
        self.scroll_end = Some(end);
    }

    /// Handles a scroll-surface update.
    ///
    /// Crossing within one margin of either boundary wraps: `iteration`
    /// moves by one and the returned command re-anchors the surface just
    /// inside the opposite end. Otherwise the offset becomes the
    /// fractional part of the timeline position.
    pub fn on_scroll(
        &mut self,
        offset: f64,
        direction: ScrollDirection,
        now_ms: u64,
    ) -> Option<ScrollCommand> {
        let end = self.ready()?;
        if offset > end - ANCHOR_MARGIN {
            self.iteration += 1;
            return Some(ScrollCommand {
                offset: ANCHOR_MARGIN,
            });
        }
        if offset < ANCHOR_MARGIN && direction == ScrollDirection::Backward {
            self.iteration -= 1;
            return Some(ScrollCommand {
                offset: end - ANCHOR_MARGIN,
            });
        }
        self.set_position(self.iteration as f64 + offset / end, now_ms);
        None
    }

    /// Begins a drag at the given pointer position.
    pub fn drag_press(&mut self, pointer: Point) {
        if self.ready().is_none() {
            return;
        }
        self.drag.start(pointer);
        self.drag_origin_position = self.position;
    }

    /// Feeds a drag move; position tracks horizontal displacement.
    ///
    /// Dragging leftward advances the strip, matching the scroll direction.
    pub fn drag_move(&mut self, pointer: Point, now_ms: u64) {
        if self.ready().is_none() || !self.drag.is_dragging() {
            return;
        }
        if let Some(total) = self.drag.total_offset(pointer) {
            let dragged = self.drag_origin_position - total.x * DRAG_SENSITIVITY;
            self.set_position(dragged, now_ms);
        }
    }

    /// Ends the drag and snaps to the nearest panel slot.
    pub fn drag_release(&mut self, now_ms: u64) -> Option<ScrollCommand> {
        self.ready()?;
        if !self.drag.is_dragging() {
            return None;
        }
        self.drag.end();
        self.scroll_to_position(self.position, now_ms)
    }

    /// Moves exactly one panel slot and snaps.
    pub fn step(&mut self, direction: StepDirection, now_ms: u64) -> Option<ScrollCommand> {
        self.ready()?;
        let slot = 1.0 / self.len as f64;
        let delta = match direction {
            StepDirection::Next => -slot,
            StepDirection::Prev => slot,
        };
        self.scroll_to_position(self.position + delta, now_ms)
    }

    /// Handles a keyboard key, if it is one the carousel responds to.
    pub fn on_key(&mut self, key: NavKey, now_ms: u64) -> Option<ScrollCommand> {
        self.step(key.step_direction(), now_ms)
    }

    /// Centers the clicked panel, rotating the short way around.
    ///
    /// Out-of-range indices are ignored.
    pub fn select_panel(&mut self, target: usize, now_ms: u64) -> Option<ScrollCommand> {
        self.ready()?;
        if target >= self.len {
            return None;
        }
        let current = self.centered_panel();
        let bump = shortest_bump(current, target, self.len);
        let delta = bump as f64 / self.len as f64;
        self.scroll_to_position(self.position + delta, now_ms)
    }

    /// Fires the debounced active-index notification once its quiet period
    /// has passed. Call from the host frame loop.
    ///
    /// Returns at most one changed index per quiet period; a burst of
    /// updates that ends back on the already-reported panel fires nothing.
    pub fn poll(&mut self, now_ms: u64) -> Option<usize> {
        if self.disposed {
            return None;
        }
        let pending = self.pending?;
        if pending.at_ms > now_ms {
            return None;
        }
        self.pending = None;
        if pending.index == self.last_notified {
            return None;
        }
        self.last_notified = pending.index;
        Some(pending.index)
    }

    /// Releases the scroll binding and cancels any pending notification.
    ///
    /// Every later operation is a no-op and [`poll`](Self::poll) never
    /// fires again. Idempotent.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.scroll_end = None;
        self.pending = None;
        self.drag.end();
    }

    /// Current timeline position; one unit is one full loop.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// How many times the finite scroll range has wrapped, signed.
    #[must_use]
    pub fn iteration(&self) -> i64 {
        self.iteration
    }

    /// The currently centered panel index, in `[0, len)`.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Number of panels the engine was built over.
    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.len
    }

    /// Returns `true` while a scroll surface is bound.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.scroll_end.is_some()
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Returns `true` once [`dispose`](Self::dispose) has been called.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Snapshot of the engine state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CarouselDebugInfo {
        CarouselDebugInfo {
            position: self.position,
            iteration: self.iteration,
            active_index: self.active,
            scroll_end: self.scroll_end,
            dragging: self.drag.is_dragging(),
            pending_notify_at: self.pending.map(|pending| pending.at_ms),
        }
    }

    /// Guard shared by every input operation: `Some(end)` when the engine
    /// is live, bound, and non-empty.
    fn ready(&self) -> Option<f64> {
        if self.disposed || self.len == 0 {
            return None;
        }
        self.scroll_end
    }

    /// Snaps `target` to a slot, realigns `iteration`, and commands the
    /// matching scroll offset.
    fn scroll_to_position(&mut self, target: f64, now_ms: u64) -> Option<ScrollCommand> {
        let end = self.ready()?;
        let snapped = snap_to_slot(target, self.len);
        let progress = snapped - self.iteration as f64;
        let offset = (wrap(progress, 0.0, 1.0) * end).clamp(ANCHOR_MARGIN, end - ANCHOR_MARGIN);
        if !(0.0..1.0).contains(&progress) {
            self.iteration += floor(progress) as i64;
        }
        self.set_position(snapped, now_ms);
        Some(ScrollCommand { offset })
    }

    fn set_position(&mut self, position: f64, now_ms: u64) {
        self.position = position;
        let index = active_index(position, self.len);
        if index != self.active {
            self.active = index;
            self.pending = Some(PendingNotify {
                at_ms: now_ms + NOTIFY_QUIET_MS,
                index,
            });
        }
    }

    /// The panel the position currently sits on, by the click rule's
    /// flooring convention.
    fn centered_panel(&self) -> usize {
        let raw = floor(self.len as f64 * self.position) as i64;
        let len = self.len as i64;
        (((raw % len) + len) % len) as usize
    }
}

/// Debug snapshot of a [`CarouselEngine`] state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CarouselDebugInfo {
    /// Current timeline position.
    pub position: f64,
    /// Signed wrap count of the finite scroll range.
    pub iteration: i64,
    /// Currently centered panel.
    pub active_index: usize,
    /// Bound scroll range end, if any.
    pub scroll_end: Option<f64>,
    /// Whether a drag is in progress.
    pub dragging: bool,
    /// Deadline of the pending active-index notification, if armed.
    pub pending_notify_at: Option<u64>,
}
