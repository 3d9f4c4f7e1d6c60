// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label ordering and exact-prefix filtering.
//!
//! These run before the letter index and the sectioned list are built: an
//! item provider sorts its labels with [`sort_by_label`] and narrows them with
//! [`filter_prefix`] while the user types. Matching is exact prefix on the
//! case-folded label; there is no fuzzy matching.

use alloc::vec::Vec;

use crate::letters::{Labeled, bucket_key};
use crate::locale::LabelLocale;

/// Stable sort of `items` by rail bucket, then by locale collation of their
/// display labels.
///
/// Buckets come in the same order as the letters of a
/// [`LetterIndex`](crate::letters::LetterIndex), so every bucket is one
/// contiguous run, including `"#"` labels whose first character collates
/// after the letters (`~Term`, CJK names, emoji).
pub fn sort_by_label<P, L>(items: &mut [P], locale: &L)
where
    P: Labeled,
    L: LabelLocale + ?Sized,
{
    items.sort_by(|a, b| {
        let (a, b) = (a.display_label(), b.display_label());
        locale
            .compare(&bucket_key(locale, a), &bucket_key(locale, b))
            .then_with(|| locale.compare(a, b))
    });
}

/// Keep the items whose folded label starts with the folded, trimmed `query`.
///
/// An empty (or whitespace-only) query keeps everything. Relative order is
/// preserved.
///
/// ```
/// use understory_sections::filter::filter_prefix;
/// use understory_sections::locale::RootLocale;
///
/// let apps = ["Camera", "Calculator", "Maps", "calendar"];
/// let hits = filter_prefix(apps, " CAL", &RootLocale);
/// assert_eq!(hits, ["Calculator", "calendar"]);
/// ```
pub fn filter_prefix<P, I, L>(items: I, query: &str, locale: &L) -> Vec<P>
where
    I: IntoIterator<Item = P>,
    P: Labeled,
    L: LabelLocale + ?Sized,
{
    let needle = locale.sort_key(query.trim());
    if needle.is_empty() {
        return items.into_iter().collect();
    }
    items
        .into_iter()
        .filter(|item| locale.sort_key(item.display_label()).starts_with(&needle))
        .collect()
}
