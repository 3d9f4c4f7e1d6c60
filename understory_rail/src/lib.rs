// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_rail --heading-base-level=0

//! Understory Rail: a touch-driven alphabet fast-scroll rail.
//!
//! ## Overview
//!
//! A letter rail sits along the edge of a long, alphabetically sectioned list.
//! Dragging a finger along it jumps the list to the letter under the finger,
//! while the glyphs near the finger bulge outward as visual feedback.
//!
//! This crate is the interaction core of such a rail, independent of any UI
//! toolkit. It does not render, lay out, or recognize gestures. The host
//! reports glyph layout and serialized touch samples, and reads back letter
//! notifications plus the transforms to apply.
//!
//! - [`AlphabetSlider`](crate::slider::AlphabetSlider): the stateful controller
//!   (touch lifecycle, active letter, rail offset, notifications).
//! - [`mapper`]: pure touch → letter mapping over measured glyph bounds.
//! - [`wave`]: pure Gaussian displacement of glyphs around the finger.
//! - [`glyphs`]: the idempotent table of measured glyph bounds.
//!
//! ## Inputs
//!
//! - Letters: any `Clone + PartialEq` type. `understory_sections` builds a
//!   rail of `SectionKey`s with a favorites marker in front.
//! - Layout: `(index, top, bottom)` per glyph, in any order, after every
//!   layout pass.
//! - Touch: [`TouchSample`](crate::types::TouchSample)s in the order
//!   `Down (Move)* (Up | Cancel)`.
//!
//! ## Outputs
//!
//! - [`SliderEvent::Selected`](crate::types::SliderEvent::Selected) /
//!   [`SliderEvent::Cleared`](crate::types::SliderEvent::Cleared), once per
//!   change of the active letter. Scroll the list on `Selected`.
//! - The rail offset (or [`rail_transform`](crate::slider::AlphabetSlider::rail_transform))
//!   to translate the whole rail.
//! - Per-glyph [`glyph_translation`](crate::slider::AlphabetSlider::glyph_translation)
//!   for the wave.
//!
//! ## Degenerate input
//!
//! Every operation is total. Touches before any layout resolve to the first
//! letter; an empty letter sequence never produces an active letter; bounds
//! for indices outside the letter sequence are rejected.
//!
//! ## Example
//!
//! ```
//! use understory_rail::slider::{AlphabetSlider, SliderConfig};
//! use understory_rail::types::{SliderEvent, TouchSample};
//!
//! let mut rail = AlphabetSlider::new(SliderConfig::default().with_screen_width(400.0));
//! rail.set_letters(&['★', 'A', 'B']);
//! rail.update_letter_bounds(2, 40.0, 60.0);
//! rail.update_letter_bounds(0, 0.0, 20.0);
//! rail.update_letter_bounds(1, 20.0, 40.0);
//!
//! assert_eq!(rail.on_touch(TouchSample::down(50.0)), Some(SliderEvent::Selected('B')));
//! // The glyph under the finger is pushed out the furthest.
//! let push: Vec<f64> = rail.displacements().collect();
//! assert!(push[2] < push[1] && push[1] < push[0]);
//! assert_eq!(rail.on_touch(TouchSample::up(50.0)), Some(SliderEvent::Cleared));
//! ```
//!
//! ## Features
//!
//! - `std` (default): use the standard library for floating point math.
//! - `libm`: `no_std` floating point math through `libm`.
//! - `tracing`: emit `tracing` events on letter transitions and resets.
//!
//! Without `std` this crate is `no_std` and uses `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod glyphs;
pub mod mapper;
pub mod slider;
pub mod types;
pub mod wave;

pub use glyphs::GlyphTable;
pub use slider::{AlphabetSlider, SliderConfig};
pub use types::{GlyphBounds, SliderEvent, SliderFlags, TouchPhase, TouchSample, WaveAxis};
pub use wave::WaveParams;
