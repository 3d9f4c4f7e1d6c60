// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wave displacement: a Gaussian bulge of the rail around the finger.
//!
//! ## Model
//!
//! For a glyph at `letter_y` and a touch at `touch_y`:
//!
//! ```text
//! distance  = |letter_y - touch_y|
//! amplitude = min(drag + base_amplitude, max(screen_width * max_width_fraction, base_amplitude))
//! width     = wave_width + drag * width_gain
//! result    = -amplitude * exp(-distance² / width²)
//! ```
//!
//! `drag` is how far the finger has been dragged away from the rail, which
//! both deepens and widens the bulge. The result is negative: glyphs move
//! toward the content, away from the screen edge. With no touch the result is
//! exactly zero.
//!
//! The magnitude strictly decreases with distance until `exp` underflows to
//! zero far from the finger.
//!
//! ```
//! use understory_rail::wave::{WaveParams, displacement};
//!
//! let p = WaveParams::default();
//! assert_eq!(displacement(100.0, None, 0.0, 400.0, &p), 0.0);
//! // Right under the finger the glyph moves by the full base amplitude.
//! assert_eq!(displacement(100.0, Some(100.0), 0.0, 400.0, &p), -75.0);
//! let near = displacement(110.0, Some(100.0), 0.0, 400.0, &p);
//! let far = displacement(200.0, Some(100.0), 0.0, 400.0, &p);
//! assert!(near.abs() > far.abs());
//! ```

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("understory_rail requires either the `std` or `libm` feature");

/// Tuning constants for the wave.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WaveParams {
    /// Displacement at the touch point before any horizontal drag.
    pub base_amplitude: f64,
    /// Gaussian width before any horizontal drag.
    pub wave_width: f64,
    /// Cap on amplitude as a fraction of the screen width measure.
    pub max_width_fraction: f64,
    /// Extra width per unit of horizontal drag.
    pub width_gain: f64,
}

impl WaveParams {
    /// Default `base_amplitude`.
    pub const BASE_AMPLITUDE: f64 = 75.0;
    /// Default `wave_width`.
    pub const WAVE_WIDTH: f64 = 100.0;
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            base_amplitude: Self::BASE_AMPLITUDE,
            wave_width: Self::WAVE_WIDTH,
            max_width_fraction: 0.9,
            width_gain: 0.3,
        }
    }
}

/// Signed displacement of a glyph at `letter_y`.
///
/// Returns `0.0` when `touch_y` is `None` or not finite.
pub fn displacement(
    letter_y: f64,
    touch_y: Option<f64>,
    horizontal_drag: f64,
    screen_width: f64,
    params: &WaveParams,
) -> f64 {
    let Some(touch_y) = touch_y.filter(|y| y.is_finite()) else {
        return 0.0;
    };
    // Only the square of the distance is needed, so the sign drops out.
    let distance = letter_y - touch_y;
    let cap = (screen_width * params.max_width_fraction).max(params.base_amplitude);
    let amplitude = (horizontal_drag + params.base_amplitude).min(cap);
    let width = params.wave_width + horizontal_drag * params.width_gain;
    -amplitude * exp(-(distance * distance) / (width * width))
}

#[cfg(feature = "std")]
#[inline]
fn exp(v: f64) -> f64 {
    v.exp()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
fn exp(v: f64) -> f64 {
    libm::exp(v)
}
