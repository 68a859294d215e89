// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ambient-light signal adapter.
//!
//! The sensor collaborator (typically a camera feed) reduces each frame to
//! one average luminance value in `0..=255`. This adapter
//! turns that stream into the boolean dark/light signal the theme
//! consumes, with a hysteresis band so readings hovering around a single
//! threshold cannot strobe the theme: the room must drop below the dark
//! threshold to switch dark, and climb above the separate light threshold
//! to switch back.
//!
//! The adapter is pull-free and tolerant of absence. A denied or missing
//! sensor simply never calls [`AmbientLight::sample`], and the theme stays
//! wherever the user put it.

use crate::tone::Tone;

/// Average luminance below which the room counts as dark.
pub const DEFAULT_DARK_BELOW: f64 = 60.0;
/// Average luminance above which the room counts as bright.
pub const DEFAULT_LIGHT_ABOVE: f64 = 80.0;

/// Hysteresis classifier from luminance samples to tone switches.
#[derive(Copy, Clone, Debug)]
pub struct AmbientLight {
    dark_below: f64,
    light_above: f64,
    is_dark: bool,
}

impl AmbientLight {
    /// Creates a classifier with the default thresholds, assuming a bright
    /// room to start (the site mounts in light mode).
    #[must_use]
    pub fn new() -> Self {
        Self::with_thresholds(DEFAULT_DARK_BELOW, DEFAULT_LIGHT_ABOVE)
    }

    /// Creates a classifier with custom thresholds.
    ///
    /// The pair is normalized so `dark_below <= light_above`; the gap
    /// between them is the hysteresis band.
    #[must_use]
    pub fn with_thresholds(dark_below: f64, light_above: f64) -> Self {
        let (dark_below, light_above) = if dark_below <= light_above {
            (dark_below, light_above)
        } else {
            (light_above, dark_below)
        };
        Self {
            dark_below,
            light_above,
            is_dark: false,
        }
    }

    /// Feeds one luminance sample; returns a tone only on a switch.
    ///
    /// Samples inside the hysteresis band, and samples that agree with the
    /// current classification, return `None`.
    pub fn sample(&mut self, luminance: f64) -> Option<Tone> {
        if luminance < self.dark_below && !self.is_dark {
            self.is_dark = true;
            return Some(Tone::Dark);
        }
        if luminance > self.light_above && self.is_dark {
            self.is_dark = false;
            return Some(Tone::Light);
        }
        None
    }

    /// Current classification.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.is_dark
    }
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self::new()
    }
}
