// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panel content: the fixed, ordered deck the carousel is built over.
//!
//! The deck is supplied once at mount and never changes size afterwards;
//! the engine reads its length at construction and everything downstream
//! (slot spacing, stacking range, active-index range) follows from it.

use alloc::string::String;
use alloc::vec::Vec;

/// One panel's content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Panel {
    /// Title shown for the panel while it is centered.
    pub title: String,
    /// Secondary line under the title.
    pub subtitle: String,
    /// Opaque reference to the panel image; the host resolves it.
    pub image_ref: String,
}

impl Panel {
    /// Creates a panel from its three content fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            image_ref: image_ref.into(),
        }
    }
}

/// The ordered, fixed-length list of panels.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PanelDeck {
    panels: Vec<Panel>,
}

impl PanelDeck {
    /// Creates a deck from an ordered list of panels.
    #[must_use]
    pub fn new(panels: Vec<Panel>) -> Self {
        Self { panels }
    }

    /// Number of panels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// Returns `true` if the deck holds no panels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// The panel at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Panel> {
        self.panels.get(index)
    }

    /// All panels in order.
    #[must_use]
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Phase offset of panel `index` on the unit loop: `index / len`.
    ///
    /// `None` for out-of-range indices or an empty deck.
    #[must_use]
    pub fn phase(&self, index: usize) -> Option<f64> {
        (index < self.panels.len()).then(|| index as f64 / self.panels.len() as f64)
    }
}

impl FromIterator<Panel> for PanelDeck {
    fn from_iter<I: IntoIterator<Item = Panel>>(iter: I) -> Self {
        Self {
            panels: iter.into_iter().collect(),
        }
    }
}
