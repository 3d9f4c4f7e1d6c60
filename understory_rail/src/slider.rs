// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Alphabet slider: the stateful rail controller.
//!
//! ## Overview
//!
//! [`AlphabetSlider`] owns everything the rail needs between events: the
//! letter sequence, the measured glyph bounds, the active letter, the rail
//! offset, and the horizontal drag baseline. Hosts feed it three kinds of
//! input and read back three kinds of output:
//!
//! - [`set_letters`](AlphabetSlider::set_letters) when the list content changes,
//!   [`update_letter_bounds`](AlphabetSlider::update_letter_bounds) after layout,
//!   and [`on_touch`](AlphabetSlider::on_touch) for every touch sample.
//! - [`SliderEvent`]s (returned), [`rail_offset`](AlphabetSlider::rail_offset) /
//!   [`rail_transform`](AlphabetSlider::rail_transform), and per-glyph
//!   [`glyph_translation`](AlphabetSlider::glyph_translation).
//!
//! ## States
//!
//! The controller is either idle (no touch) or tracking (between a down and
//! the matching up/cancel). While tracking, the active letter is always
//! `Some` unless the letter sequence is empty; while idle it is always `None`
//! and the rail offset is zero.
//!
//! ## Notifications
//!
//! Each call returns at most one [`SliderEvent`], and only when the active
//! letter actually changes. A run of move samples within one glyph yields a
//! single `Selected`, so hosts can scroll on every event without filtering.
//!
//! ## Rail offset
//!
//! When the finger leaves the rail past its first or last glyph, the whole
//! rail is translated so that edge glyph stays under the finger. Inside the
//! rail's current (translated) span the offset is left alone; it never snaps
//! back while the finger is still down, which avoids oscillation when the
//! finger re-enters the rail.
//!
//! ## Example
//!
//! ```
//! use understory_rail::slider::{AlphabetSlider, SliderConfig};
//! use understory_rail::types::{SliderEvent, TouchSample};
//!
//! let mut rail = AlphabetSlider::new(SliderConfig::default());
//! rail.set_letters(&["★", "A", "B", "C"]);
//! for (i, top) in [(1, 0.0), (2, 20.0), (3, 40.0)] {
//!     rail.update_letter_bounds(i, top, top + 20.0);
//! }
//!
//! assert_eq!(rail.on_touch(TouchSample::down(25.0)), Some(SliderEvent::Selected("B")));
//! assert_eq!(rail.on_touch(TouchSample::moved(30.0)), None);
//! assert_eq!(rail.on_touch(TouchSample::moved(5.0)), Some(SliderEvent::Selected("A")));
//! assert_eq!(rail.on_touch(TouchSample::up(5.0)), Some(SliderEvent::Cleared));
//! assert_eq!(rail.active_letter(), None);
//! ```

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::{Affine, Rect, Vec2};

use crate::glyphs::GlyphTable;
use crate::mapper;
use crate::types::{GlyphBounds, SliderEvent, SliderFlags, TouchPhase, TouchSample, WaveAxis};
use crate::wave::{self, WaveParams};

/// Configuration for [`AlphabetSlider`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SliderConfig {
    /// Behavior switches.
    pub flags: SliderFlags,
    /// Wave tuning.
    pub wave: WaveParams,
    /// Direction glyphs are pushed by the wave.
    pub axis: WaveAxis,
    /// Screen width measure used to cap the wave amplitude.
    ///
    /// Zero until the host reports one; the cap then falls back to the base
    /// amplitude.
    pub screen_width: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            flags: SliderFlags::default(),
            wave: WaveParams::default(),
            axis: WaveAxis::default(),
            screen_width: 0.0,
        }
    }
}

impl SliderConfig {
    /// The plain variant: horizontal drag tracking only, no wave, and a rail
    /// that stays put.
    pub fn simple() -> Self {
        Self {
            flags: SliderFlags::TRACK_HORIZONTAL,
            ..Self::default()
        }
    }

    /// Replace the flags.
    #[must_use]
    pub fn with_flags(mut self, flags: SliderFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Replace the wave parameters.
    #[must_use]
    pub fn with_wave(mut self, wave: WaveParams) -> Self {
        self.wave = wave;
        self
    }

    /// Replace the wave axis.
    #[must_use]
    pub fn with_axis(mut self, axis: WaveAxis) -> Self {
        self.axis = axis;
        self
    }

    /// Replace the screen width measure.
    #[must_use]
    pub fn with_screen_width(mut self, screen_width: f64) -> Self {
        self.screen_width = screen_width;
        self
    }
}

/// Touch-driven letter rail controller.
///
/// `L` is the letter type, for example `understory_sections::SectionKey` or
/// `&'static str`. Letters are compared by value: replacing the sequence with
/// an equal one is a no-op.
#[derive(Clone, Debug)]
pub struct AlphabetSlider<L> {
    config: SliderConfig,
    letters: Vec<L>,
    glyphs: GlyphTable,
    active: Option<L>,
    rail_offset: f64,
    touch_y: Option<f64>,
    touch_x_start: Option<f64>,
    horizontal_delta: f64,
}

impl<L> Default for AlphabetSlider<L> {
    fn default() -> Self {
        Self::new(SliderConfig::default())
    }
}

impl<L> AlphabetSlider<L> {
    /// Create an idle slider with no letters.
    pub fn new(config: SliderConfig) -> Self {
        Self {
            config,
            letters: Vec::new(),
            glyphs: GlyphTable::new(),
            active: None,
            rail_offset: 0.0,
            touch_y: None,
            touch_x_start: None,
            horizontal_delta: 0.0,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Replace the flags. Takes effect from the next touch sample.
    pub fn set_flags(&mut self, flags: SliderFlags) {
        self.config.flags = flags;
    }

    /// Update the screen width measure used to cap the wave.
    pub fn set_screen_width(&mut self, screen_width: f64) {
        self.config.screen_width = screen_width;
    }

    /// The current letter sequence.
    pub fn letters(&self) -> &[L] {
        &self.letters
    }

    /// The active letter, `Some` only while a touch is tracked.
    pub fn active_letter(&self) -> Option<&L> {
        self.active.as_ref()
    }

    /// Vertical translation of the whole rail. Zero while idle.
    pub fn rail_offset(&self) -> f64 {
        self.rail_offset
    }

    /// The rail offset as a transform for the rail's render node.
    pub fn rail_transform(&self) -> Affine {
        Affine::translate((0.0, self.rail_offset))
    }

    /// Vertical position of the tracked touch.
    pub fn touch_y(&self) -> Option<f64> {
        self.touch_y
    }

    /// Horizontal distance dragged away from the rail since the baseline.
    pub fn horizontal_delta(&self) -> f64 {
        self.horizontal_delta
    }

    /// True between a down sample and the matching up/cancel.
    pub fn is_tracking(&self) -> bool {
        self.touch_y.is_some()
    }

    /// True when there is nothing to scroll to besides the leading marker.
    ///
    /// Hosts hide the rail in this case.
    pub fn is_inert(&self) -> bool {
        self.letters.len() <= 1
    }

    /// Measured glyph bounds.
    pub fn glyphs(&self) -> &GlyphTable {
        &self.glyphs
    }

    /// Record the layout of glyph `index`.
    ///
    /// Idempotent and order independent. Returns false (and stores nothing)
    /// when `index` is outside the current letter sequence.
    pub fn update_letter_bounds(&mut self, index: usize, top: f64, bottom: f64) -> bool {
        if index >= self.letters.len() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                index,
                letters = self.letters.len(),
                "ignoring bounds for a letter outside the rail"
            );
            return false;
        }
        self.glyphs.upsert(GlyphBounds::new(index, top, bottom));
        true
    }

    /// [`update_letter_bounds`](Self::update_letter_bounds) from a laid-out rectangle.
    pub fn update_letter_rect(&mut self, index: usize, rect: Rect) -> bool {
        self.update_letter_bounds(index, rect.y0, rect.y1)
    }

    /// Wave displacement of glyph `index` along the configured axis.
    ///
    /// Zero when the wave is disabled, the glyph is not measured yet, or no
    /// touch is active.
    pub fn glyph_displacement(&self, index: usize) -> f64 {
        if !self.config.flags.contains(SliderFlags::WAVE) {
            return 0.0;
        }
        let Some(b) = self.glyphs.get(index) else {
            return 0.0;
        };
        wave::displacement(
            b.center() + self.rail_offset,
            self.touch_y,
            self.horizontal_delta,
            self.config.screen_width,
            &self.config.wave,
        )
    }

    /// [`glyph_displacement`](Self::glyph_displacement) as a translation vector.
    pub fn glyph_translation(&self, index: usize) -> Vec2 {
        let d = self.glyph_displacement(index);
        match self.config.axis {
            WaveAxis::Horizontal => Vec2::new(d, 0.0),
            WaveAxis::Vertical => Vec2::new(0.0, d),
        }
    }

    /// Displacement of every letter, in letter order.
    pub fn displacements(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.letters.len()).map(|i| self.glyph_displacement(i))
    }

    // Offset for a touch at `y`, per the follow-finger policy. Uses the
    // unmodified bounds of the first and last letters; a side whose glyph is
    // not measured yet is left alone.
    fn follow_offset(&self, y: f64) -> f64 {
        let offset = self.rail_offset;
        if let Some(first) = self.glyphs.get(0)
            && y < first.top + offset
        {
            return y - first.top;
        }
        if let Some(last) = self
            .letters
            .len()
            .checked_sub(1)
            .and_then(|i| self.glyphs.get(i))
            && y > last.bottom + offset
        {
            return y - last.bottom;
        }
        offset
    }
}

impl<L: Clone + PartialEq + Debug> AlphabetSlider<L> {
    /// Create a slider with an initial letter sequence.
    pub fn with_letters(config: SliderConfig, letters: &[L]) -> Self {
        let mut slider = Self::new(config);
        slider.letters = letters.to_vec();
        slider
    }

    /// Replace the letter sequence.
    ///
    /// A content-equal sequence is a no-op, so re-renders with the same
    /// letters keep their layout and touch state. Otherwise all glyph bounds
    /// are dropped and any active touch ends; the returned event is `Cleared`
    /// if a letter was active.
    pub fn set_letters(&mut self, letters: &[L]) -> Option<SliderEvent<L>> {
        if self.letters.as_slice() == letters {
            return None;
        }
        self.letters.clear();
        self.letters.extend_from_slice(letters);
        self.glyphs.clear();

        #[cfg(feature = "tracing")]
        tracing::debug!(letters = self.letters.len(), "rail letters replaced");

        self.end_touch()
    }

    /// Letter under `y` for the current layout and rail offset, with the
    /// first-letter fallback of [`mapper::letter_at`].
    pub fn letter_at(&self, y: f64) -> Option<&L> {
        mapper::letter_at(y, &self.glyphs, self.rail_offset, &self.letters)
    }

    /// Feed one touch sample.
    ///
    /// Returns the notification for this sample, if the active letter changed.
    ///
    /// Down and move samples resolve the letter against the rail offset as it
    /// was *before* this sample, then move the rail. Up and cancel end the
    /// touch and reset the offset.
    ///
    /// Out-of-protocol input is tolerated: a move while idle starts tracking
    /// as a down would, a down while tracking re-baselines the drag, and an
    /// up or cancel while idle does nothing.
    pub fn on_touch(&mut self, sample: TouchSample) -> Option<SliderEvent<L>> {
        match sample.phase {
            TouchPhase::Up | TouchPhase::Cancel => self.end_touch(),
            TouchPhase::Down | TouchPhase::Move => self.track(sample),
        }
    }

    fn track(&mut self, sample: TouchSample) -> Option<SliderEvent<L>> {
        let fresh = sample.phase == TouchPhase::Down
            || sample.is_initial_touch
            || self.touch_y.is_none();
        if fresh {
            self.touch_x_start = sample.x;
            self.horizontal_delta = 0.0;
        } else if self.config.flags.contains(SliderFlags::TRACK_HORIZONTAL) {
            match (self.touch_x_start, sample.x) {
                (Some(start), Some(x)) => self.horizontal_delta = (start - x).max(0.0),
                // The gesture layer started reporting x after the baseline.
                (None, Some(_)) => self.touch_x_start = sample.x,
                (_, None) => {}
            }
        }

        let letter = mapper::letter_at(sample.y, &self.glyphs, self.rail_offset, &self.letters)
            .cloned();
        if self.config.flags.contains(SliderFlags::FOLLOW_FINGER) {
            self.rail_offset = self.follow_offset(sample.y);
        }
        self.touch_y = Some(sample.y);
        self.transition(letter)
    }

    fn end_touch(&mut self) -> Option<SliderEvent<L>> {
        self.touch_y = None;
        self.touch_x_start = None;
        self.horizontal_delta = 0.0;
        self.rail_offset = 0.0;
        self.transition(None)
    }

    fn transition(&mut self, next: Option<L>) -> Option<SliderEvent<L>> {
        if self.active == next {
            return None;
        }
        self.active.clone_from(&next);
        match next {
            Some(letter) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(letter = ?letter, offset = self.rail_offset, "rail letter selected");
                Some(SliderEvent::Selected(letter))
            }
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!("rail letter cleared");
                Some(SliderEvent::Cleared)
            }
        }
    }
}
