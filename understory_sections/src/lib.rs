// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_sections --heading-base-level=0

//! Understory Sections: letter indexes and sectioned lists for alphabetically grouped UIs.
//!
//! ## Overview
//!
//! An app drawer or contact list usually shows its items grouped under
//! letter headers, with a fast-scroll rail of those letters along one edge.
//! This crate computes the data behind both:
//!
//! - [`LetterIndexBuilder`](crate::letters::LetterIndexBuilder) derives the
//!   rail letters: a favorites marker, then every distinct first-letter bucket
//!   in locale order.
//! - [`build_sections`](crate::sections::build_sections) interleaves headers
//!   with sorted items and records each header's position for scroll-to-letter.
//! - [`build_pinned`](crate::pinned::build_pinned) builds the ungrouped
//!   favorites view.
//! - [`sort_by_label`](crate::filter::sort_by_label) and
//!   [`filter_prefix`](crate::filter::filter_prefix) prepare the input.
//!
//! Locale behavior (case folding, collation) is pluggable through
//! [`LabelLocale`](crate::locale::LabelLocale).
//!
//! It does not render, scroll, or hit test. Pair it with `understory_rail`
//! for the touch side of the rail.
//!
//! ## Workflow
//!
//! ```
//! use understory_sections::filter::{filter_prefix, sort_by_label};
//! use understory_sections::letters::{LetterIndexBuilder, SectionKey};
//! use understory_sections::locale::RootLocale;
//! use understory_sections::sections::sections_by_label;
//!
//! let mut apps = vec!["maps", "Camera", "Clock", "Browser", "2FA"];
//! sort_by_label(&mut apps, &RootLocale);
//! let visible = filter_prefix(apps, "", &RootLocale);
//!
//! let index = LetterIndexBuilder::new().build(&visible);
//! assert_eq!(index.keys()[0], SectionKey::Favorites);
//!
//! let list = sections_by_label(visible, &RootLocale);
//! // Tapping "C" on the rail scrolls the list here.
//! let pos = list.position_of_key(&SectionKey::letter("C")).unwrap();
//! assert!(list.entries()[pos].is_header());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod filter;
pub mod letters;
pub mod locale;
pub mod pinned;
pub mod sections;

pub use letters::{FAVORITES_MARKER, LetterIndex, LetterIndexBuilder, OTHER_BUCKET, SectionKey};
pub use locale::{LabelLocale, RootLocale};
pub use sections::{Entry, Sectioned, build_sections};
