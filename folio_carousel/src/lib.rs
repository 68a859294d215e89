// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Carousel: the looping, scroll-driven panel strip.
//!
//! This crate maps continuous scroll and drag input onto a repeating,
//! wrapped sequence of panels. The timeline is a single unbounded scalar —
//! `position`, where one unit is one full loop — and everything else is
//! derived from it:
//!
//! - [`CarouselEngine`] owns `position` plus the `iteration` counter that
//!   lets a finite scroll range drive the unbounded timeline, folds every
//!   input source (scroll, drag, keyboard, panel click) into it, and
//!   reports the centered panel through a debounced notification.
//! - [`panel_transform`] is the pure phase function: given `position`, a
//!   panel index, and the deck size, it yields that panel's full visual
//!   state. No animation runtime is involved; any renderer can evaluate it
//!   per frame.
//! - [`Scrub`] smooths the rendered position toward the commanded one, so
//!   discrete jumps glide.
//! - [`PanelDeck`] carries the fixed panel content the strip is built over.
//!
//! ## Host contract
//!
//! The engine is a passive state machine: the host feeds input events and
//! its clock in, applies returned [`ScrollCommand`]s to its real scroll
//! surface, and polls for the debounced active-index notification.
//!
//! ```rust
//! use folio_carousel::{
//!     CarouselEngine, DEFAULT_SCROLL_END, ScrollDirection, panel_transform,
//! };
//!
//! let mut engine = CarouselEngine::new(10);
//! engine.bind_scroll_surface(DEFAULT_SCROLL_END);
//!
//! // A scroll to 10% of the range centers panel 1 ...
//! engine.on_scroll(200.0, ScrollDirection::Forward, 0);
//! assert_eq!(engine.active_index(), 1);
//!
//! // ... and after the quiet period the host is told exactly once.
//! assert_eq!(engine.poll(150), Some(1));
//! assert_eq!(engine.poll(300), None);
//!
//! // Rendering is a pure read per panel.
//! let centered = panel_transform(engine.position(), 1, 10);
//! assert_eq!(centered.opacity, 1.0);
//! ```
//!
//! On unmount the host calls [`CarouselEngine::dispose`]: the scroll
//! binding is released, a pending notification is cancelled rather than
//! fired, and all further input is ignored.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod deck;
pub mod ease;
mod engine;
mod scrub;
mod transform;
mod wrap;

pub use deck::{Panel, PanelDeck};
pub use engine::{
    CarouselDebugInfo, CarouselEngine, DEFAULT_SCROLL_END, NavKey, ScrollCommand, ScrollDirection,
    StepDirection,
};
pub use scrub::{SCRUB_DURATION_MS, Scrub};
pub use transform::{PanelTransform, panel_progress, panel_transform};
pub use wrap::{active_index, shortest_bump, snap_to_slot, wrap};
