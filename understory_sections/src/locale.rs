// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Locale seam: case folding and collation for labels.
//!
//! ## Overview
//!
//! Every stage in this crate that looks at label text (bucketing, sorting,
//! prefix filtering) goes through a [`LabelLocale`]. The crate ships
//! [`RootLocale`], which uses the Unicode default case mappings and orders
//! folded keys by code point. Toolkits with access to real locale data can
//! implement the trait themselves.
//!
//! ## Example
//!
//! ```
//! use understory_sections::locale::{LabelLocale, RootLocale};
//!
//! let loc = RootLocale;
//! assert_eq!(loc.initial_bucket("maps").as_deref(), Some("M"));
//! assert_eq!(loc.initial_bucket("2048"), None);
//! assert!(loc.compare("apple", "Banana").is_lt());
//! ```

use alloc::string::String;
use core::cmp::Ordering;

/// Locale-sensitive label operations.
///
/// Implementations must be deterministic: the same inputs always produce the
/// same outputs, and [`compare`](LabelLocale::compare) must be a total order.
pub trait LabelLocale {
    /// Returns the uppercase form of the first character of `label` when that
    /// character is an uppercase-mappable letter.
    ///
    /// Returns `None` for empty labels, digits, symbols, and caseless scripts.
    fn initial_bucket(&self, label: &str) -> Option<String> {
        let c = label.chars().next()?;
        if !is_cased_letter(c) {
            return None;
        }
        Some(c.to_uppercase().collect())
    }

    /// Case-folded form of `label`, used for sorting and prefix matching.
    fn sort_key(&self, label: &str) -> String {
        label.to_lowercase()
    }

    /// Collation order of two strings.
    ///
    /// The default compares [`sort_key`](LabelLocale::sort_key)s by code point
    /// and breaks ties on the raw strings so the order stays total.
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self.sort_key(a)
            .cmp(&self.sort_key(b))
            .then_with(|| a.cmp(b))
    }
}

/// Locale-neutral defaults: Unicode case mappings and code point order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RootLocale;

impl LabelLocale for RootLocale {}

impl<T: LabelLocale + ?Sized> LabelLocale for &T {
    #[inline]
    fn initial_bucket(&self, label: &str) -> Option<String> {
        (**self).initial_bucket(label)
    }

    #[inline]
    fn sort_key(&self, label: &str) -> String {
        (**self).sort_key(label)
    }

    #[inline]
    fn compare(&self, a: &str, b: &str) -> Ordering {
        (**self).compare(a, b)
    }
}

/// True when `c` is a letter that participates in case mapping.
///
/// Caseless letters (CJK ideographs, most Indic scripts) are excluded: they
/// have no uppercase form to bucket under.
pub fn is_cased_letter(c: char) -> bool {
    c.is_alphabetic() && (c.is_uppercase() || c.is_lowercase())
}
