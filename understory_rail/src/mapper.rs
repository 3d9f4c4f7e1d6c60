// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch → letter mapping.
//!
//! ## Rule
//!
//! A glyph is a candidate when its effective top (`top + rail_offset`) is at or
//! above the touch (`<= touch_y`). The winner is the candidate with the largest
//! effective top, i.e. the closest glyph whose top the finger has crossed.
//! Equal tops resolve to the higher index.
//!
//! ## Fallback
//!
//! With no candidate (nothing measured yet, or the finger is above every
//! glyph) [`letter_at`] returns the first letter, conventionally the favorites
//! marker. This is a silent-degrade policy: while layout is still settling the
//! rail always has *some* active letter instead of none.
//!
//! Both functions are pure.
//!
//! ```
//! use understory_rail::glyphs::GlyphTable;
//! use understory_rail::mapper::letter_at;
//! use understory_rail::types::GlyphBounds;
//!
//! let letters = ["★", "A", "B", "C"];
//! let table: GlyphTable = [
//!     GlyphBounds::new(1, 0.0, 20.0),
//!     GlyphBounds::new(2, 20.0, 40.0),
//!     GlyphBounds::new(3, 40.0, 60.0),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(letter_at(25.0, &table, 0.0, &letters), Some(&"B"));
//! // The rail was dragged down by 10: B's top is now at 30.
//! assert_eq!(letter_at(25.0, &table, 10.0, &letters), Some(&"A"));
//! // Above everything: fall back to the first letter.
//! assert_eq!(letter_at(-5.0, &table, 0.0, &letters), Some(&"★"));
//! ```

use crate::glyphs::GlyphTable;

/// Index of the glyph under `touch_y`, without any fallback.
///
/// Only indices below `letter_count` are considered. Returns `None` when no
/// glyph top has been crossed. A NaN `touch_y` crosses nothing.
pub fn letter_index_at(
    touch_y: f64,
    bounds: &GlyphTable,
    rail_offset: f64,
    letter_count: usize,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for b in bounds.iter().filter(|b| b.index < letter_count) {
        let top = b.top + rail_offset;
        // Ascending index iteration: `>=` lets the higher index win ties.
        if top <= touch_y && best.is_none_or(|(_, t)| top >= t) {
            best = Some((b.index, top));
        }
    }
    best.map(|(i, _)| i)
}

/// Letter under `touch_y`, falling back to `letters[0]`.
///
/// Returns `None` only when `letters` is empty.
pub fn letter_at<'a, L>(
    touch_y: f64,
    bounds: &GlyphTable,
    rail_offset: f64,
    letters: &'a [L],
) -> Option<&'a L> {
    let index = letter_index_at(touch_y, bounds, rail_offset, letters.len()).unwrap_or(0);
    letters.get(index)
}
