// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking: press origin, movement deltas, and total offsets.
//!
//! The carousel drags horizontally: the host reports a press, a stream of
//! moves, and a release, and the engine converts the total horizontal offset
//! from the press origin into timeline position. [`DragState`] does the
//! bookkeeping for that conversion.
//!
//! ## Usage
//!
//! 1) Call [`DragState::start`] with the press position.
//! 2) On each move, call [`DragState::update`] for the delta since the last
//!    move, or [`DragState::total_offset`] for the offset since the press.
//! 3) Call [`DragState::end`] on release to reset.

use kurbo::{Point, Vec2};

/// Tracks one pointer drag from press to release.
///
/// All queries return `None` while no drag is active, so a stray move or
/// release arriving without a press degrades to a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    origin: Option<Point>,
    last: Option<Point>,
}

impl DragState {
    /// Begins a drag at the given press position.
    ///
    /// Starting while a drag is already active abandons the old one.
    pub fn start(&mut self, pos: Point) {
        self.origin = Some(pos);
        self.last = Some(pos);
    }

    /// Feeds a move event, returning the delta since the previous move.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.origin?;
        let delta = self.last.map(|last| pos - last);
        self.last = Some(pos);
        delta
    }

    /// Total offset of `pos` from the press origin.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Option<Vec2> {
        self.origin.map(|origin| pos - origin)
    }

    /// Ends the drag and resets all state.
    pub fn end(&mut self) {
        self.origin = None;
        self.last = None;
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    /// The press origin of the active drag, if any.
    #[must_use]
    pub fn origin(&self) -> Option<Point> {
        self.origin
    }
}
