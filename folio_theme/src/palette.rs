// Copyright 2025 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Themed color resources.
//!
//! A [`Theme`] is an immutable collection of colors looked up by
//! [`ResourceKey`]. The site's own palette lives in [`palette`]; hosts that
//! add surfaces can extend the key space from [`keys::FIRST_CUSTOM`] up
//! without touching this crate.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use crate::tone::Tone;

/// An sRGB color packed as `0xRRGGBB`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rgb(u32);

impl Rgb {
    /// Creates a color from a packed `0xRRGGBB` value.
    #[must_use]
    #[inline]
    pub const fn new(packed: u32) -> Self {
        Self(packed & 0x00FF_FFFF)
    }

    /// The packed `0xRRGGBB` value.
    #[must_use]
    #[inline]
    pub const fn packed(self) -> u32 {
        self.0
    }

    /// Red component.
    #[must_use]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green component.
    #[must_use]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue component.
    #[must_use]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }
}

impl fmt::Debug for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb(#{:06x})", self.0)
    }
}

/// A key for looking up colors in a [`Theme`].
///
/// Keys are simple `u16` identifiers, defined as constants; the site's own
/// keys live in [`keys`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceKey(u16);

impl ResourceKey {
    /// Creates a new resource key with the given index.
    #[must_use]
    #[inline]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Returns the underlying index of this resource key.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u16 {
        self.0
    }
}

impl fmt::Debug for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ResourceKey").field(&self.0).finish()
    }
}

/// The site's palette keys.
pub mod keys {
    use super::ResourceKey;

    /// The page background.
    pub const PAPER: ResourceKey = ResourceKey::new(0);
    /// Body text and controls.
    pub const INK: ResourceKey = ResourceKey::new(1);
    /// The intro curtain strips.
    pub const CURTAIN: ResourceKey = ResourceKey::new(2);
    /// The loading label during the strip stage.
    pub const LABEL_INK: ResourceKey = ResourceKey::new(3);

    /// First index free for host-defined keys.
    pub const FIRST_CUSTOM: ResourceKey = ResourceKey::new(16);
}

/// An immutable collection of themed colors.
///
/// Internally wraps an `Rc`, so cloning is cheap and a theme handed to a
/// renderer stays valid however long it keeps it. Resources are stored
/// sorted for binary-search lookup. Use [`ThemeBuilder`] to construct one,
/// or [`palette`] for the site's own.
#[derive(Clone, Debug)]
pub struct Theme {
    inner: Rc<Vec<(ResourceKey, Rgb)>>,
}

impl Theme {
    /// Gets the color for a key, if present.
    #[must_use]
    pub fn get(&self, key: ResourceKey) -> Option<Rgb> {
        self.inner
            .binary_search_by_key(&key, |&(key, _)| key)
            .ok()
            .map(|found| self.inner[found].1)
    }

    /// Number of resources in this theme.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if this theme has no resources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Builder for [`Theme`].
#[derive(Debug, Default)]
pub struct ThemeBuilder {
    resources: Vec<(ResourceKey, Rgb)>,
}

impl ThemeBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the color for a key. Later sets of the same key win.
    #[must_use]
    pub fn set(mut self, key: ResourceKey, color: Rgb) -> Self {
        self.resources.push((key, color));
        self
    }

    /// Builds the immutable theme.
    #[must_use]
    pub fn build(mut self) -> Theme {
        // Stable sort keeps insertion order within a key; dedup keeps the
        // last insertion.
        self.resources.sort_by_key(|&(key, _)| key);
        self.resources.reverse();
        let mut seen = Vec::new();
        self.resources.retain(|&(key, _)| {
            if seen.contains(&key) {
                false
            } else {
                seen.push(key);
                true
            }
        });
        self.resources.reverse();
        Theme {
            inner: Rc::new(self.resources),
        }
    }
}

/// The site palette for the given tone.
#[must_use]
pub fn palette(tone: Tone) -> Theme {
    match tone {
        Tone::Light => ThemeBuilder::new()
            .set(keys::PAPER, Rgb::new(0xEBEBEB))
            .set(keys::INK, Rgb::new(0x1C1C1C))
            .set(keys::CURTAIN, Rgb::new(0x090909))
            .set(keys::LABEL_INK, Rgb::new(0x262626))
            .build(),
        Tone::Dark => ThemeBuilder::new()
            .set(keys::PAPER, Rgb::new(0x1C1C1C))
            .set(keys::INK, Rgb::new(0xEBEBEB))
            .set(keys::CURTAIN, Rgb::new(0x090909))
            .set(keys::LABEL_INK, Rgb::new(0xD4D4D4))
            .build(),
    }
}
