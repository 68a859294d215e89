// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Theme: tone state, palette resources, and the ambient-light adapter.
//!
//! The site has exactly two tones, light and dark, and a small palette of
//! colors per tone. This crate keeps the three pieces separate:
//!
//! - [`ThemeStore`] holds the current [`Tone`] with a toggle, a direct
//!   setter for the ambient dark/light signal, and a revision counter the
//!   rendering layer can watch.
//! - [`Theme`] is the immutable per-tone resource collection, looked up by
//!   [`ResourceKey`]; [`palette`] builds the site palette for a tone.
//! - [`AmbientLight`] adapts a raw brightness sample stream into the
//!   boolean dark/light signal with hysteresis, so a flickering camera
//!   feed does not strobe the theme. If the sensor never delivers (denied,
//!   absent), nothing is emitted and the theme simply never auto-switches.
//!
//! The interaction engines never read any of this; theme is surface
//! styling only.
//!
//! ```rust
//! use folio_theme::{AmbientLight, ThemeStore, Tone, keys, palette};
//!
//! let mut store = ThemeStore::new(Tone::Light);
//! let mut sensor = AmbientLight::new();
//!
//! // A dark room pushes the sample below the threshold once.
//! for sample in [120.0, 90.0, 55.0, 52.0] {
//!     if let Some(tone) = sensor.sample(sample) {
//!         store.set_tone(tone);
//!     }
//! }
//! assert_eq!(store.tone(), Tone::Dark);
//!
//! let theme = palette(store.tone());
//! assert!(theme.get(keys::PAPER).is_some());
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod ambient;
mod palette;
mod tone;

pub use ambient::{AmbientLight, DEFAULT_DARK_BELOW, DEFAULT_LIGHT_ABOVE};
pub use palette::{Rgb, ResourceKey, Theme, ThemeBuilder, keys, palette};
pub use tone::{ThemeStore, Tone};
