// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Event State: pointer, drag, and hover state managers.
//!
//! This crate provides small, focused state managers for the interactions the
//! Folio pages track across multiple events. Each module handles one pattern:
//!
//! - [`pointer`]: Track the raw pointer position and drive the cursor-trail
//!   chain that chases it frame by frame
//! - [`drag`]: Track an active drag with movement deltas and total offsets
//! - [`hover`]: Track which labeled element the pointer currently rests on,
//!   with a generation counter that distinguishes repeated visits
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: one interaction pattern per type
//! - **Stateful but simple**: just enough state to compute transitions
//! - **Host-agnostic**: no event loop, no listeners, no clock — the host
//!   feeds events in and reads state or transitions out
//!
//! Nothing here registers itself anywhere. A page that mounts one of these
//! managers owns it, feeds it pointer events and animation frames while
//! mounted, and drops or disposes it on unmount; there is no ambient global
//! state to leak across pages.
//!
//! ## Usage Patterns
//!
//! ### Pointer and trail
//!
//! Use [`pointer::PointerState`] for the last-known cursor position and
//! [`pointer::TrailChain`] for the chain of circles that chases it:
//!
//! ```rust
//! use kurbo::Point;
//! use folio_event_state::pointer::{PointerState, TrailChain};
//!
//! let mut pointer = PointerState::new();
//! let mut trail = TrailChain::new(21);
//!
//! pointer.on_move(Point::new(120.0, 80.0));
//!
//! // Once per animation frame:
//! if let Some(head) = pointer.position() {
//!     trail.advance(head);
//! }
//! assert_eq!(trail.node(0), Some(Point::new(120.0, 80.0)));
//! ```
//!
//! ### Drag tracking
//!
//! Use [`drag::DragState`] to turn a press/move/release sequence into offsets:
//!
//! ```rust
//! use kurbo::Point;
//! use folio_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 10.0));
//! let total = drag.total_offset(Point::new(25.0, 12.0)).unwrap();
//! assert_eq!(total.x, 15.0);
//! drag.end();
//! ```
//!
//! ### Hover intent
//!
//! Use [`hover::HoverIntent`] for the single "which nav label is hovered"
//! slot that drives the ghost-text overlay:
//!
//! ```rust
//! use folio_event_state::hover::HoverIntent;
//!
//! let mut hover = HoverIntent::new();
//! hover.enter("Work");
//! assert_eq!(hover.current(), Some(&"Work"));
//! hover.leave(&"Work");
//! assert_eq!(hover.current(), None);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

pub mod drag;
pub mod hover;
pub mod pointer;
