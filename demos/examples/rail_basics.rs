// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Letter rail basics: layout, a drag, and the notifications it produces.
//!
//! The rail holds `★ A B C`, with glyphs 20 units tall. The finger goes down on
//! B, slides up into A and past the top of the rail, then lifts.
//!
//! Run:
//! - `cargo run -p understory_demos --example rail_basics`

use understory_rail::slider::{AlphabetSlider, SliderConfig};
use understory_rail::types::{SliderEvent, TouchSample};

fn main() {
    let mut rail = AlphabetSlider::new(SliderConfig::default());
    rail.set_letters(&["★", "A", "B", "C"]);

    // Layout callbacks arrive in any order.
    for i in [3, 0, 2, 1] {
        let top = i as f64 * 20.0;
        rail.update_letter_bounds(i, top, top + 20.0);
    }

    let samples = [
        TouchSample::down(45.0),
        TouchSample::moved(48.0),
        TouchSample::moved(25.0),
        TouchSample::moved(-30.0),
        TouchSample::moved(-20.0),
        TouchSample::up(-20.0),
    ];

    let mut events = Vec::new();
    for s in samples {
        let ev = rail.on_touch(s);
        println!(
            "{:?} y={:>6.1} -> active={:?} offset={:>6.1} event={:?}",
            s.phase,
            s.y,
            rail.active_letter(),
            rail.rail_offset(),
            ev
        );
        events.extend(ev);
    }

    assert_eq!(
        events,
        vec![
            SliderEvent::Selected("B"),
            SliderEvent::Selected("A"),
            SliderEvent::Selected("★"),
            SliderEvent::Cleared,
        ]
    );
}
