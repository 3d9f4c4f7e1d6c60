// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sectioned list: interleave section headers with already-sorted items.
//!
//! ## Overview
//!
//! [`build_sections`] walks a sorted item sequence and emits a
//! [`Entry::Header`] each time the group key changes. Every header records its
//! own index in the output (headers included), so "scroll to letter" is a
//! lookup in [`Sectioned::position_of`] rather than a scan.
//!
//! This stage never sorts. Sort with [`sort_by_label`](crate::filter::sort_by_label)
//! (or an equivalent using the same key) first; unsorted input still produces a
//! well-formed list, just with repeated headers.
//!
//! ## Example
//!
//! ```
//! use understory_sections::locale::RootLocale;
//! use understory_sections::sections::{Entry, sections_by_label};
//!
//! let list = sections_by_label(["Calendar", "Camera", "Maps"], &RootLocale);
//! assert_eq!(list.len(), 5);
//! assert_eq!(list.position_of("C"), Some(0));
//! assert_eq!(list.position_of("M"), Some(3));
//! assert_eq!(list.section_at(2), Some("C"));
//! assert!(matches!(list.entries()[4], Entry::Item("Maps")));
//! ```

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::letters::{Labeled, SectionKey, bucket_key};
use crate::locale::LabelLocale;

/// One row of a sectioned list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry<P> {
    /// Start of a group of items sharing `letter`.
    Header {
        /// Group key of the items that follow.
        letter: String,
        /// Index of this header within the output sequence.
        position: usize,
    },
    /// A list item.
    Item(P),
}

impl<P> Entry<P> {
    /// True for [`Entry::Header`].
    pub fn is_header(&self) -> bool {
        matches!(self, Self::Header { .. })
    }

    /// The payload of an [`Entry::Item`].
    pub fn item(&self) -> Option<&P> {
        match self {
            Self::Item(p) => Some(p),
            Self::Header { .. } => None,
        }
    }
}

/// Output of [`build_sections`]: entries plus a letter → position map.
#[derive(Clone, Debug)]
pub struct Sectioned<P> {
    entries: Vec<Entry<P>>,
    // First header position per letter.
    positions: BTreeMap<String, usize>,
    // Header positions in ascending order, for `section_at`.
    headers: Vec<usize>,
}

impl<P> Default for Sectioned<P> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            positions: BTreeMap::new(),
            headers: Vec::new(),
        }
    }
}

impl<P> Sectioned<P> {
    /// All entries in display order.
    pub fn entries(&self) -> &[Entry<P>] {
        &self.entries
    }

    /// Consume the list, returning its entries.
    pub fn into_entries(self) -> Vec<Entry<P>> {
        self.entries
    }

    /// Number of entries, headers included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of headers.
    pub fn header_count(&self) -> usize {
        self.headers.len()
    }

    /// Output position of the first header for `letter`.
    pub fn position_of(&self, letter: &str) -> Option<usize> {
        self.positions.get(letter).copied()
    }

    /// Output position for a rail key.
    ///
    /// Returns `None` for [`SectionKey::Favorites`]: the marker targets the
    /// pinned view, not a position in this list.
    pub fn position_of_key(&self, key: &SectionKey) -> Option<usize> {
        self.position_of(key.as_letter()?)
    }

    /// Letter of the nearest header at or before `position`.
    ///
    /// Returns `None` before the first header or on an empty list. Positions
    /// past the end resolve to the last section.
    pub fn section_at(&self, position: usize) -> Option<&str> {
        let n = self.headers.partition_point(|&h| h <= position);
        let header = *self.headers.get(n.checked_sub(1)?)?;
        match &self.entries[header] {
            Entry::Header { letter, .. } => Some(letter),
            Entry::Item(_) => None,
        }
    }

    /// Iterate `(letter, position)` for every header in order.
    pub fn headers(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.headers.iter().filter_map(|&h| match &self.entries[h] {
            Entry::Header { letter, position } => Some((letter.as_str(), *position)),
            Entry::Item(_) => None,
        })
    }

    /// Iterate item payloads in order, skipping headers.
    pub fn items(&self) -> impl Iterator<Item = &P> + '_ {
        self.entries.iter().filter_map(Entry::item)
    }
}

/// Interleave headers with `items`, grouping by `group_key`.
///
/// `items` must already be sorted by the same key. A header is emitted
/// whenever the key differs from the previous item's key.
pub fn build_sections<P, I, F>(items: I, mut group_key: F) -> Sectioned<P>
where
    I: IntoIterator<Item = P>,
    F: FnMut(&P) -> String,
{
    let items = items.into_iter();
    let mut out = Sectioned {
        entries: Vec::with_capacity(items.size_hint().0),
        ..Sectioned::default()
    };
    let mut current: Option<String> = None;

    for item in items {
        let key = group_key(&item);
        if current.as_deref() != Some(key.as_str()) {
            let position = out.entries.len();
            out.positions.entry(key.clone()).or_insert(position);
            out.headers.push(position);
            out.entries.push(Entry::Header {
                letter: key.clone(),
                position,
            });
            current = Some(key);
        }
        out.entries.push(Entry::Item(item));
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        entries = out.entries.len(),
        headers = out.headers.len(),
        "built sectioned list"
    );

    out
}

/// [`build_sections`] grouped by the same bucket key as the letter index.
pub fn sections_by_label<P, I, L>(items: I, locale: &L) -> Sectioned<P>
where
    I: IntoIterator<Item = P>,
    P: Labeled,
    L: LabelLocale + ?Sized,
{
    build_sections(items, |item| bucket_key(locale, item.display_label()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::RootLocale;
    use alloc::vec;

    #[test]
    fn empty_input_has_no_entries() {
        let list = build_sections(Vec::<&str>::new(), |s| String::from(*s));
        assert!(list.is_empty());
        assert_eq!(list.header_count(), 0);
        assert_eq!(list.section_at(0), None);
        assert_eq!(list.position_of("A"), None);
    }

    #[test]
    fn header_positions_count_headers() {
        let list = sections_by_label(["Adobe", "Amazon", "Bank", "Chrome", "Clock"], &RootLocale);
        let headers: Vec<_> = list.headers().collect();
        assert_eq!(headers, vec![("A", 0), ("B", 3), ("C", 5)]);
        assert_eq!(list.len(), 8);
        assert_eq!(
            list.items().copied().collect::<Vec<_>>(),
            vec!["Adobe", "Amazon", "Bank", "Chrome", "Clock"]
        );
    }

    #[test]
    fn section_at_tracks_nearest_header_above() {
        let list = sections_by_label(["Adobe", "Amazon", "Bank", "Chrome"], &RootLocale);
        // A@0 Adobe Amazon B@3 Bank C@5 Chrome
        assert_eq!(list.section_at(0), Some("A"));
        assert_eq!(list.section_at(2), Some("A"));
        assert_eq!(list.section_at(3), Some("B"));
        assert_eq!(list.section_at(4), Some("B"));
        assert_eq!(list.section_at(6), Some("C"));
        assert_eq!(list.section_at(100), Some("C"));
    }

    #[test]
    fn unsorted_input_repeats_headers_first_wins() {
        let list = sections_by_label(["apple", "banana", "avocado"], &RootLocale);
        let headers: Vec<_> = list.headers().collect();
        assert_eq!(headers, vec![("A", 0), ("B", 2), ("A", 4)]);
        assert_eq!(list.position_of("A"), Some(0));
    }

    #[test]
    fn favorites_key_has_no_list_position() {
        let list = sections_by_label(["apple"], &RootLocale);
        assert_eq!(list.position_of_key(&SectionKey::Favorites), None);
        assert_eq!(list.position_of_key(&SectionKey::letter("A")), Some(0));
    }

    #[test]
    fn custom_group_key() {
        let list = build_sections([1_u32, 3, 12, 15, 27], |n| alloc::format!("{}", n / 10));
        let headers: Vec<_> = list.headers().collect();
        assert_eq!(headers, vec![("0", 0), ("1", 3), ("2", 6)]);
    }
}
