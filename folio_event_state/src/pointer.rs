// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer position tracking and the cursor-trail chain.
//!
//! [`PointerState`] remembers the last pointer position reported by the host.
//! [`TrailChain`] is the chain of circles that chases that position: the host
//! calls [`TrailChain::advance`] once per animation frame with the current
//! pointer position, and reads back one point per node for rendering.
//!
//! Both types are passive. The host owns the pointer-move subscription and
//! the frame loop; on unmount it either drops the chain or calls
//! [`TrailChain::dispose`], after which further advances are no-ops.

use alloc::vec::Vec;

use kurbo::Point;

/// Per-node chase factor: each node moves this fraction of the way toward
/// its successor's previous position every frame.
const CHASE: f64 = 0.3;

/// Default number of nodes in the trail.
pub const DEFAULT_TRAIL_LEN: usize = 21;

/// Last-known pointer position.
///
/// Starts empty; the position becomes available after the first
/// [`on_move`](Self::on_move) and stays at the most recent value thereafter.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    pos: Option<Point>,
}

impl PointerState {
    /// Creates a tracker with no known position.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pointer-move event.
    pub fn on_move(&mut self, pos: Point) {
        self.pos = Some(pos);
    }

    /// Returns the last-known position, if any pointer event has arrived.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        self.pos
    }

    /// Forgets the tracked position.
    pub fn clear(&mut self) {
        self.pos = None;
    }
}

/// A fixed-length chain of trail nodes chasing the pointer.
///
/// Node 0 snaps to the pointer every frame. Each following node is placed at
/// a running point that then eases toward the next node's previous position,
/// so the tail lags and compresses behind fast movement. Node `k` renders at
/// scale `(len - k) / len`, shrinking toward the tail.
///
/// All nodes start at the origin and converge onto the pointer over the
/// first few frames after load.
#[derive(Debug, Clone)]
pub struct TrailChain {
    nodes: Vec<Point>,
    disposed: bool,
}

impl TrailChain {
    /// Creates a chain of `len` nodes, all at the origin.
    ///
    /// A `len` of zero yields an inert chain: advancing it does nothing.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            nodes: alloc::vec![Point::ZERO; len],
            disposed: false,
        }
    }

    /// Number of nodes in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the chain has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Current position of node `index`, if in range.
    #[must_use]
    pub fn node(&self, index: usize) -> Option<Point> {
        self.nodes.get(index).copied()
    }

    /// All node positions, head first.
    #[must_use]
    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    /// Render scale for node `index`: `(len - index) / len`.
    ///
    /// Out-of-range indices return `0.0`.
    #[must_use]
    pub fn scale(&self, index: usize) -> f64 {
        let len = self.nodes.len();
        if index >= len {
            return 0.0;
        }
        (len - index) as f64 / len as f64
    }

    /// Advances the chain one frame toward `head`.
    ///
    /// The running point starts at `head`; each node is moved to it, and the
    /// point then chases that node's successor (the last node chases node 0,
    /// closing the loop on the freshly placed head). Disposed chains ignore
    /// the call.
    pub fn advance(&mut self, head: Point) {
        if self.disposed || self.nodes.is_empty() {
            return;
        }
        let len = self.nodes.len();
        let mut p = head;
        for i in 0..len {
            self.nodes[i] = p;
            let next = self.nodes[(i + 1) % len];
            p += (next - p) * CHASE;
        }
    }

    /// Stops the chain: every later [`advance`](Self::advance) is a no-op.
    ///
    /// Disposal is idempotent. Node positions remain readable afterwards.
    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    /// Returns `true` once [`dispose`](Self::dispose) has been called.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl Default for TrailChain {
    fn default() -> Self {
        Self::new(DEFAULT_TRAIL_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_state_starts_unknown() {
        let pointer = PointerState::new();
        assert_eq!(pointer.position(), None);
    }

    #[test]
    fn pointer_state_tracks_latest_move() {
        let mut pointer = PointerState::new();
        pointer.on_move(Point::new(3.0, 4.0));
        pointer.on_move(Point::new(7.0, 1.0));
        assert_eq!(pointer.position(), Some(Point::new(7.0, 1.0)));
    }

    #[test]
    fn pointer_state_clear_forgets() {
        let mut pointer = PointerState::new();
        pointer.on_move(Point::new(3.0, 4.0));
        pointer.clear();
        assert_eq!(pointer.position(), None);
    }

    #[test]
    fn head_node_snaps_to_pointer() {
        let mut trail = TrailChain::new(5);
        let head = Point::new(100.0, 50.0);
        trail.advance(head);
        assert_eq!(trail.node(0), Some(head));
    }

    #[test]
    fn tail_lags_behind_head() {
        let mut trail = TrailChain::new(5);
        trail.advance(Point::new(100.0, 0.0));
        // Nodes were all at the origin, so each step eases back toward it.
        let head = trail.node(0).unwrap();
        let second = trail.node(1).unwrap();
        assert!(second.x < head.x, "tail should trail the head");
    }

    #[test]
    fn stationary_pointer_converges() {
        let mut trail = TrailChain::new(8);
        let target = Point::new(40.0, 40.0);
        for _ in 0..200 {
            trail.advance(target);
        }
        for (i, node) in trail.nodes().iter().enumerate() {
            assert!(
                (*node - target).hypot() < 1e-6,
                "node {i} should have converged onto the pointer"
            );
        }
    }

    #[test]
    fn scales_decrease_linearly() {
        let trail = TrailChain::new(4);
        assert_eq!(trail.scale(0), 1.0);
        assert_eq!(trail.scale(1), 0.75);
        assert_eq!(trail.scale(2), 0.5);
        assert_eq!(trail.scale(3), 0.25);
        assert_eq!(trail.scale(4), 0.0);
    }

    #[test]
    fn disposed_chain_ignores_advance() {
        let mut trail = TrailChain::new(3);
        trail.advance(Point::new(10.0, 10.0));
        let frozen = trail.nodes().to_vec();
        trail.dispose();
        trail.advance(Point::new(500.0, 500.0));
        assert_eq!(trail.nodes(), frozen.as_slice());
        // Idempotent.
        trail.dispose();
        assert!(trail.is_disposed());
    }

    #[test]
    fn empty_chain_is_inert() {
        let mut trail = TrailChain::new(0);
        trail.advance(Point::new(1.0, 2.0));
        assert!(trail.is_empty());
        assert_eq!(trail.node(0), None);
    }
}
