// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Letter index: the ordered, deduplicated rail letters for a list of labels.
//!
//! ## Overview
//!
//! Each label is bucketed under the uppercase form of its first character,
//! or under [`OTHER_BUCKET`] (`"#"`) when that character has no case. The
//! index is the [`SectionKey::Favorites`] marker followed by every distinct
//! bucket in ascending locale order.
//!
//! Sorting happens on the deduplicated bucket set, so the index is the same
//! no matter what order the labels arrive in.
//!
//! ## Example
//!
//! ```
//! use understory_sections::letters::{LetterIndexBuilder, SectionKey};
//!
//! let index = LetterIndexBuilder::new().build(["maps", "Camera", "calendar", "2048"]);
//! assert_eq!(
//!     index.keys(),
//!     &[
//!         SectionKey::Favorites,
//!         SectionKey::letter("#"),
//!         SectionKey::letter("C"),
//!         SectionKey::letter("M"),
//!     ]
//! );
//! assert!(!index.is_inert());
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::locale::{LabelLocale, RootLocale};

/// Bucket used for labels that do not start with a cased letter.
pub const OTHER_BUCKET: &str = "#";

/// Display form of [`SectionKey::Favorites`].
pub const FAVORITES_MARKER: &str = "★";

/// One entry on the letter rail.
///
/// The favorites marker is its own variant, so it can never collide with a
/// bucket letter regardless of locale.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SectionKey {
    /// The home/favorites view rather than an alphabetic section.
    Favorites,
    /// An alphabetic (or [`OTHER_BUCKET`]) section.
    Letter(String),
}

impl SectionKey {
    /// Convenience constructor for [`SectionKey::Letter`].
    pub fn letter(s: &str) -> Self {
        Self::Letter(String::from(s))
    }

    /// Returns the bucket letter, or `None` for the favorites marker.
    pub fn as_letter(&self) -> Option<&str> {
        match self {
            Self::Favorites => None,
            Self::Letter(s) => Some(s),
        }
    }

    /// Returns the text shown on the rail for this key.
    pub fn label(&self) -> &str {
        match self {
            Self::Favorites => FAVORITES_MARKER,
            Self::Letter(s) => s,
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Items that carry a display label.
pub trait Labeled {
    /// The label shown to users, used for bucketing, sorting and filtering.
    fn display_label(&self) -> &str;
}

impl Labeled for str {
    fn display_label(&self) -> &str {
        self
    }
}

impl Labeled for String {
    fn display_label(&self) -> &str {
        self
    }
}

impl<T: Labeled + ?Sized> Labeled for &T {
    fn display_label(&self) -> &str {
        (**self).display_label()
    }
}

/// Computes the bucket key of a single label.
///
/// ```
/// use understory_sections::letters::bucket_key;
/// use understory_sections::locale::RootLocale;
///
/// assert_eq!(bucket_key(&RootLocale, "weather"), "W");
/// assert_eq!(bucket_key(&RootLocale, ""), "#");
/// ```
pub fn bucket_key<L: LabelLocale + ?Sized>(locale: &L, label: &str) -> String {
    locale
        .initial_bucket(label)
        .unwrap_or_else(|| String::from(OTHER_BUCKET))
}

/// Ordered rail letters: the favorites marker followed by sorted buckets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LetterIndex {
    keys: Vec<SectionKey>,
}

impl LetterIndex {
    /// All rail keys, favorites marker first.
    pub fn keys(&self) -> &[SectionKey] {
        &self.keys
    }

    /// Consume the index, returning its keys.
    pub fn into_keys(self) -> Vec<SectionKey> {
        self.keys
    }

    /// Number of keys, including the favorites marker.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false: the favorites marker is always present.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// True when there is no letter besides the favorites marker.
    ///
    /// Hosts hide the rail in this case.
    pub fn is_inert(&self) -> bool {
        self.keys.len() <= 1
    }

    /// Bucket letters only, without the favorites marker.
    pub fn letters(&self) -> impl Iterator<Item = &str> + '_ {
        self.keys.iter().filter_map(SectionKey::as_letter)
    }

    /// Rail index of `key`, if present.
    pub fn index_of(&self, key: &SectionKey) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }
}

/// Builds a [`LetterIndex`] from labeled items.
#[derive(Clone, Debug, Default)]
pub struct LetterIndexBuilder<L = RootLocale> {
    locale: L,
}

impl LetterIndexBuilder<RootLocale> {
    /// Create a builder using [`RootLocale`].
    pub fn new() -> Self {
        Self { locale: RootLocale }
    }
}

impl<L: LabelLocale> LetterIndexBuilder<L> {
    /// Create a builder using an explicit locale.
    pub fn with_locale(locale: L) -> Self {
        Self { locale }
    }

    /// The locale used for bucketing and ordering.
    pub fn locale(&self) -> &L {
        &self.locale
    }

    /// Build the letter index for `items`.
    ///
    /// Never fails. Empty input yields an index holding only the favorites
    /// marker.
    pub fn build<I>(&self, items: I) -> LetterIndex
    where
        I: IntoIterator,
        I::Item: Labeled,
    {
        let mut buckets: Vec<String> = items
            .into_iter()
            .map(|item| bucket_key(&self.locale, item.display_label()))
            .collect();
        // Dedup by exact content first so the collation sort sees a set.
        buckets.sort_unstable();
        buckets.dedup();
        buckets.sort_by(|a, b| self.locale.compare(a, b));

        let mut keys = Vec::with_capacity(buckets.len() + 1);
        keys.push(SectionKey::Favorites);
        keys.extend(buckets.into_iter().map(SectionKey::Letter));

        #[cfg(feature = "tracing")]
        tracing::debug!(letters = keys.len() - 1, "built letter index");

        LetterIndex { keys }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn letters(index: &LetterIndex) -> Vec<&str> {
        index.keys().iter().map(SectionKey::label).collect()
    }

    #[test]
    fn empty_input_is_favorites_only() {
        let index = LetterIndexBuilder::new().build(Vec::<String>::new());
        assert_eq!(index.keys(), &[SectionKey::Favorites]);
        assert!(index.is_inert());
        assert_eq!(index.letters().count(), 0);
    }

    #[test]
    fn dedups_case_insensitively() {
        let index = LetterIndexBuilder::new().build(["clock", "Camera", "CONTACTS", "chrome"]);
        assert_eq!(letters(&index), vec!["★", "C"]);
    }

    #[test]
    fn order_is_independent_of_input_order() {
        let a = LetterIndexBuilder::new().build(["zebra", "apple", "Maps", "#tag"]);
        let b = LetterIndexBuilder::new().build(["Maps", "#tag", "apple", "zebra"]);
        assert_eq!(a, b);
        assert_eq!(letters(&a), vec!["★", "#", "A", "M", "Z"]);
    }

    #[test]
    fn non_letters_share_other_bucket() {
        let index = LetterIndexBuilder::new().build(["", "9gag", "@work", "微信"]);
        assert_eq!(letters(&index), vec!["★", "#"]);
        assert!(!index.is_inert());
    }

    #[test]
    fn index_of_finds_keys() {
        let index = LetterIndexBuilder::new().build(["beta", "alpha"]);
        assert_eq!(index.index_of(&SectionKey::Favorites), Some(0));
        assert_eq!(index.index_of(&SectionKey::letter("A")), Some(1));
        assert_eq!(index.index_of(&SectionKey::letter("B")), Some(2));
        assert_eq!(index.index_of(&SectionKey::letter("C")), None);
    }

    #[test]
    fn favorites_marker_never_equals_a_letter() {
        assert_ne!(SectionKey::Favorites, SectionKey::letter(FAVORITES_MARKER));
        assert_eq!(SectionKey::Favorites.as_letter(), None);
        assert_eq!(alloc::format!("{}", SectionKey::letter("Q")), "Q");
    }
}
