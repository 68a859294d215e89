// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The intro stage enumeration and the loading-label ink.

/// Stage of the curtain-reveal sequence.
///
/// Stages only ever advance in declaration order within one mount; the
/// derived `Ord` reflects that progression.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntroStage {
    /// Thin horizontal strip across the middle of the viewport.
    Strip,
    /// The strip has expanded to cover the full viewport.
    Expand,
    /// The curtain halves are sliding apart.
    Break,
    /// The sequence is finished; the curtain is gone.
    Done,
}

impl IntroStage {
    /// Returns `true` once the sequence has finished.
    #[must_use]
    pub fn is_done(self) -> bool {
        self == Self::Done
    }

    /// Ink the loading label should use over the current backdrop.
    ///
    /// During `Strip` the backdrop is still the light page, so the label
    /// uses dark ink; from `Expand` on it sits on the dark curtain and
    /// flips to paper. `Done` has no label at all, the value is moot.
    #[must_use]
    pub fn label_ink(self) -> LabelInk {
        match self {
            Self::Strip => LabelInk::Ink,
            _ => LabelInk::Paper,
        }
    }
}

/// Which of the two page colors the loading label is drawn in.
///
/// The actual color values live with the theme; this is only the choice.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LabelInk {
    /// The dark text ink.
    Ink,
    /// The light paper color.
    Paper,
}
