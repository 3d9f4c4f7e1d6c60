// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the rail: glyph bounds, touch samples, events and flags.

use kurbo::{Point, Rect};

/// Measured vertical extent of one rendered letter glyph.
///
/// `top`/`bottom` are in the rail's own, untranslated coordinate space; the
/// current rail offset is applied on top when mapping touches.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GlyphBounds {
    /// Index of the letter in the rail's letter sequence.
    pub index: usize,
    /// Top edge.
    pub top: f64,
    /// Bottom edge.
    pub bottom: f64,
}

impl GlyphBounds {
    /// Create bounds, swapping `top` and `bottom` if they arrive inverted.
    pub fn new(index: usize, top: f64, bottom: f64) -> Self {
        if bottom < top {
            Self {
                index,
                top: bottom,
                bottom: top,
            }
        } else {
            Self { index, top, bottom }
        }
    }

    /// Bounds from a laid-out glyph rectangle. Only the vertical extent is kept.
    pub fn from_rect(index: usize, rect: Rect) -> Self {
        Self::new(index, rect.y0, rect.y1)
    }

    /// Vertical center of the glyph.
    pub fn center(&self) -> f64 {
        0.5 * (self.top + self.bottom)
    }
}

/// Phase of a touch sample.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// Finger went down.
    Down,
    /// Finger moved while down.
    Move,
    /// Finger lifted.
    Up,
    /// The gesture was taken away (e.g. by a parent scroll).
    Cancel,
}

impl TouchPhase {
    /// True for [`Up`](Self::Up) and [`Cancel`](Self::Cancel).
    pub fn ends_touch(self) -> bool {
        matches!(self, Self::Up | Self::Cancel)
    }
}

/// One serialized touch event delivered to the rail.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchSample {
    /// Vertical position, in the same space as [`GlyphBounds`].
    pub y: f64,
    /// Horizontal position, when the gesture layer reports one.
    pub x: Option<f64>,
    /// Event phase.
    pub phase: TouchPhase,
    /// Marks the first sample of a gesture and resets the horizontal drag
    /// baseline.
    ///
    /// [`TouchSample::down`] sets it on the down sample itself. Gesture layers
    /// that only learn the start position on the first move may set it there
    /// instead.
    pub is_initial_touch: bool,
}

impl TouchSample {
    /// A [`TouchPhase::Down`] sample at `y`.
    pub fn down(y: f64) -> Self {
        Self {
            y,
            x: None,
            phase: TouchPhase::Down,
            is_initial_touch: true,
        }
    }

    /// A [`TouchPhase::Move`] sample at `y`.
    pub fn moved(y: f64) -> Self {
        Self {
            y,
            x: None,
            phase: TouchPhase::Move,
            is_initial_touch: false,
        }
    }

    /// A [`TouchPhase::Up`] sample at `y`.
    pub fn up(y: f64) -> Self {
        Self {
            y,
            x: None,
            phase: TouchPhase::Up,
            is_initial_touch: false,
        }
    }

    /// A [`TouchPhase::Cancel`] sample.
    pub fn cancel() -> Self {
        Self {
            y: 0.0,
            x: None,
            phase: TouchPhase::Cancel,
            is_initial_touch: false,
        }
    }

    /// A sample at a point, with both coordinates set.
    pub fn at_point(pt: Point, phase: TouchPhase, is_initial_touch: bool) -> Self {
        Self {
            y: pt.y,
            x: Some(pt.x),
            phase,
            is_initial_touch,
        }
    }

    /// Set the horizontal position.
    #[must_use]
    pub fn with_x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    /// Set the initial-touch marker.
    #[must_use]
    pub fn initial(mut self, is_initial_touch: bool) -> Self {
        self.is_initial_touch = is_initial_touch;
        self
    }
}

/// A change of the active letter, reported once per transition.
///
/// Returned by [`AlphabetSlider::on_touch`](crate::slider::AlphabetSlider::on_touch)
/// and [`AlphabetSlider::set_letters`](crate::slider::AlphabetSlider::set_letters).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SliderEvent<L> {
    /// A letter became active, or the active letter changed.
    Selected(L),
    /// There is no longer an active letter.
    Cleared,
}

/// Axis along which glyphs are displaced by the wave.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WaveAxis {
    /// Push glyphs sideways (vertical rail along a screen edge).
    #[default]
    Horizontal,
    /// Push glyphs up/down (horizontal rail).
    Vertical,
}

bitflags::bitflags! {
    /// Behavior switches for [`AlphabetSlider`](crate::slider::AlphabetSlider).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SliderFlags: u8 {
        /// Track horizontal drag distance to grow the wave.
        const TRACK_HORIZONTAL = 0b0000_0001;
        /// Compute wave displacement for glyphs.
        const WAVE             = 0b0000_0010;
        /// Translate the rail so it follows a finger past either end.
        const FOLLOW_FINGER    = 0b0000_0100;
    }
}

impl Default for SliderFlags {
    fn default() -> Self {
        Self::all()
    }
}
