// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover intent: the single "which label is under the pointer" slot.
//!
//! The nav bar shows a large ghost label for whichever link the pointer
//! rests on. That is one `Option<Label>` of state, declared here instead of
//! being smeared across imperative style mutations: the rendering layer
//! reads [`HoverIntent::current`] and draws accordingly.
//!
//! Every fresh [`enter`](HoverIntent::enter) bumps a generation counter,
//! even when re-entering the same label. Renderers key their entrance
//! animation off the generation so hovering the same link twice replays the
//! animation rather than appearing inert.

/// Tracks the hovered label, if any, plus an enter generation.
///
/// `L` is the application's label type; anything comparable works.
#[derive(Debug, Clone)]
pub struct HoverIntent<L> {
    current: Option<L>,
    generation: u64,
}

impl<L> HoverIntent<L> {
    /// Creates an empty tracker: nothing hovered, generation zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: None,
            generation: 0,
        }
    }

    /// The pointer entered `label`. Returns the new generation.
    pub fn enter(&mut self, label: L) -> u64 {
        self.current = Some(label);
        self.generation += 1;
        self.generation
    }

    /// Clears the slot unconditionally (the pointer left the whole bar).
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// The currently hovered label, if any.
    #[must_use]
    pub fn current(&self) -> Option<&L> {
        self.current.as_ref()
    }

    /// Generation of the most recent enter.
    ///
    /// Monotonically increasing; unchanged by leaves.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl<L: PartialEq> HoverIntent<L> {
    /// The pointer left `label`.
    ///
    /// Clears the slot only if it still holds that label; a stale leave
    /// (after the pointer already entered a sibling) is ignored.
    pub fn leave(&mut self, label: &L) {
        if self.current.as_ref() == Some(label) {
            self.current = None;
        }
    }
}

impl<L> Default for HoverIntent<L> {
    fn default() -> Self {
        Self::new()
    }
}
