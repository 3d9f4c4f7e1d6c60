// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinned (favorites) list: fixed slots, then favorites, then suggestions.
//!
//! The favorites view is not grouped. It is a fixed prefix of home-screen
//! slots followed by a flat tail, so it has no headers and shares nothing with
//! [`build_sections`](crate::sections::build_sections).
//!
//! ```
//! use understory_sections::pinned::{PinnedEntry, PinnedSlot, build_pinned};
//!
//! let list = build_pinned(
//!     [PinnedSlot::Clock, PinnedSlot::Widget(7)],
//!     ["Phone", "Camera"],
//!     ["Camera", "Maps", "Mail"],
//!     1,
//! );
//! assert_eq!(
//!     list,
//!     [
//!         PinnedEntry::Slot(PinnedSlot::Clock),
//!         PinnedEntry::Slot(PinnedSlot::Widget(7)),
//!         PinnedEntry::Favorite("Phone"),
//!         PinnedEntry::Favorite("Camera"),
//!         PinnedEntry::Suggestion("Maps"),
//!     ]
//! );
//! ```

use alloc::vec::Vec;

/// A fixed slot at the top of the pinned view.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PinnedSlot {
    /// Clock and date.
    Clock,
    /// Weather summary.
    Weather,
    /// Media controls for the active session.
    Media,
    /// A hosted app widget, by host-assigned widget id.
    Widget(i32),
}

/// One row of the pinned view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PinnedEntry<P> {
    /// A fixed slot.
    Slot(PinnedSlot),
    /// A user favorite.
    Favorite(P),
    /// A suggested item that is not already a favorite.
    Suggestion(P),
}

/// Build the pinned view.
///
/// Suggestions equal to any favorite are skipped, and at most
/// `max_suggestions` of the remaining ones are kept, in order.
pub fn build_pinned<P, S, F, G>(
    slots: S,
    favorites: F,
    suggestions: G,
    max_suggestions: usize,
) -> Vec<PinnedEntry<P>>
where
    P: PartialEq,
    S: IntoIterator<Item = PinnedSlot>,
    F: IntoIterator<Item = P>,
    G: IntoIterator<Item = P>,
{
    let mut out: Vec<PinnedEntry<P>> = slots.into_iter().map(PinnedEntry::Slot).collect();
    let fav_start = out.len();
    out.extend(favorites.into_iter().map(PinnedEntry::Favorite));
    let fav_end = out.len();

    let mut taken = 0;
    for s in suggestions {
        if taken == max_suggestions {
            break;
        }
        let dup = out[fav_start..fav_end]
            .iter()
            .any(|e| matches!(e, PinnedEntry::Favorite(f) if *f == s));
        if !dup {
            out.push(PinnedEntry::Suggestion(s));
            taken += 1;
        }
    }
    out
}
