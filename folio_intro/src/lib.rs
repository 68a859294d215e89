// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Intro: the curtain-reveal sequencer every page runs once on mount.
//!
//! Each page opens behind a curtain that plays a fixed four-stage sequence —
//! a thin strip, a full-height expansion, a break apart, done — while a
//! "Loading.." label rides the cursor. [`IntroSequencer`] owns that
//! sequence as an explicit state machine:
//!
//! - The stage schedule is fixed and page-independent: `Strip` at mount,
//!   `Expand` at +400 ms, `Break` at +2400 ms, `Done` at +3400 ms.
//! - A separate deadline at +1100 ms flips `content_visible` from `false`
//!   to `true`. Main content intentionally appears while the curtain is
//!   still animating; the two schedules are independent and must not be
//!   collapsed into one.
//!
//! ## Host contract
//!
//! The sequencer never touches a clock or a timer API. The host captures a
//! mount timestamp, then polls with its own notion of now:
//!
//! ```rust
//! use folio_intro::{IntroEvent, IntroSequencer, IntroStage};
//!
//! let mut intro = IntroSequencer::start(0);
//! assert_eq!(intro.stage(), IntroStage::Strip);
//!
//! // Poll from the host frame loop; transitions fire in schedule order.
//! let events = intro.poll(450);
//! assert_eq!(events, [IntroEvent::StageChanged(IntroStage::Expand)]);
//!
//! let events = intro.poll(3500);
//! assert_eq!(
//!     events,
//!     [
//!         IntroEvent::ContentVisible,
//!         IntroEvent::StageChanged(IntroStage::Break),
//!         IntroEvent::StageChanged(IntroStage::Done),
//!     ]
//! );
//! assert!(intro.is_done());
//! ```
//!
//! On unmount the host calls [`IntroSequencer::dispose`]; every pending
//! deadline is cancelled at once and the sequencer never emits again. While
//! the sequence runs (and only then), [`IntroSequencer::wants_pointer_events`]
//! is `true` and the host forwards pointer moves so the loading label can be
//! anchored near the cursor via [`IntroSequencer::label_anchor`].
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod sequencer;
mod stage;

pub use sequencer::{IntroEvent, IntroSequencer};
pub use stage::{IntroStage, LabelInk};
