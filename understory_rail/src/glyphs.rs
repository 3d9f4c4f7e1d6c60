// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Table of measured glyph bounds, keyed by letter index.
//!
//! Glyphs report their layout asynchronously and in no particular order, so
//! the table is an idempotent upsert map. It knows nothing about the letters
//! themselves; [`AlphabetSlider`](crate::slider::AlphabetSlider) keeps it in
//! sync with its letter sequence.

use alloc::collections::BTreeMap;

use crate::types::GlyphBounds;

/// Measured bounds for each laid-out glyph.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlyphTable {
    bounds: BTreeMap<usize, GlyphBounds>,
}

impl GlyphTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the bounds for `bounds.index`.
    ///
    /// Returns true if the stored value changed.
    pub fn upsert(&mut self, bounds: GlyphBounds) -> bool {
        match self.bounds.insert(bounds.index, bounds) {
            Some(prev) => prev != bounds,
            None => true,
        }
    }

    /// Bounds for `index`, if that glyph has been measured.
    pub fn get(&self, index: usize) -> Option<&GlyphBounds> {
        self.bounds.get(&index)
    }

    /// Forget every measurement.
    pub fn clear(&mut self) {
        self.bounds.clear();
    }

    /// Number of measured glyphs.
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    /// True if nothing has been measured.
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Iterate measured bounds in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = &GlyphBounds> + '_ {
        self.bounds.values()
    }
}

impl FromIterator<GlyphBounds> for GlyphTable {
    fn from_iter<I: IntoIterator<Item = GlyphBounds>>(iter: I) -> Self {
        let mut table = Self::new();
        for b in iter {
            table.upsert(b);
        }
        table
    }
}
