// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An app drawer wired end to end: filter, sort, section, rail, wave.
//!
//! Builds a letter index and a sectioned list from a handful of app labels,
//! drives the rail with a drag that also pulls away from the screen edge, and
//! prints the list position each selection scrolls to along with the wave
//! displacement of every glyph. Set `RUST_LOG=trace` to see the rail's own
//! events.
//!
//! Run:
//! - `cargo run -p understory_demos --example rail_app_drawer`

use kurbo::Rect;
use tracing_subscriber::EnvFilter;
use understory_rail::slider::{AlphabetSlider, SliderConfig};
use understory_rail::types::{SliderEvent, TouchPhase, TouchSample};
use understory_sections::filter::{filter_prefix, sort_by_label};
use understory_sections::letters::{LetterIndexBuilder, SectionKey};
use understory_sections::locale::RootLocale;
use understory_sections::pinned::{PinnedSlot, build_pinned};
use understory_sections::sections::sections_by_label;

const APPS: [&str; 12] = [
    "Maps", "Camera", "calendar", "Browser", "2FA", "Clock", "mail", "Zoom", "Weather", "Phone",
    "Photos", "Files",
];

const GLYPH_HEIGHT: f64 = 24.0;
const SCREEN_WIDTH: f64 = 420.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut apps = filter_prefix(APPS, "", &RootLocale);
    sort_by_label(&mut apps, &RootLocale);

    tracing::info!(apps = apps.len(), "app drawer ready");

    let index = LetterIndexBuilder::new().build(&apps);
    let list = sections_by_label(apps.clone(), &RootLocale);
    let home = build_pinned(
        [PinnedSlot::Clock, PinnedSlot::Weather, PinnedSlot::Media],
        ["Phone", "Camera"],
        apps.iter().copied(),
        3,
    );
    println!("== Home ==\n  {:?}", home);
    println!(
        "== Rail ==\n  {}",
        index.keys().iter().map(SectionKey::label).collect::<Vec<_>>().join(" ")
    );

    let mut rail = AlphabetSlider::new(SliderConfig::default().with_screen_width(SCREEN_WIDTH));
    rail.set_letters(index.keys());
    for i in 0..index.len() {
        let y = i as f64 * GLYPH_HEIGHT;
        rail.update_letter_rect(i, Rect::new(SCREEN_WIDTH - 24.0, y, SCREEN_WIDTH, y + GLYPH_HEIGHT));
    }

    // Slide down the rail while pulling left, away from the edge.
    let steps = 12;
    let bottom = index.len() as f64 * GLYPH_HEIGHT;
    println!("== Drag ==");
    for step in 0..=steps {
        let t = step as f64 / steps as f64;
        let phase = if step == 0 { TouchPhase::Down } else { TouchPhase::Move };
        let sample = TouchSample {
            y: t * bottom,
            x: Some(SCREEN_WIDTH - 10.0 - t * 60.0),
            phase,
            is_initial_touch: step == 1,
        };
        match rail.on_touch(sample) {
            Some(SliderEvent::Selected(key)) => match list.position_of_key(&key) {
                Some(pos) => println!("  y={:>5.1} select {} -> scroll list to {}", sample.y, key, pos),
                None => println!("  y={:>5.1} select {} -> show home", sample.y, key),
            },
            Some(SliderEvent::Cleared) => println!("  y={:>5.1} cleared", sample.y),
            None => {}
        }
        let wave: Vec<String> = rail.displacements().map(|d| format!("{:>4.0}", d)).collect();
        println!("      wave [{}]", wave.join(""));
    }

    if let Some(SliderEvent::Cleared) = rail.on_touch(TouchSample::up(bottom)) {
        println!("  lifted");
    }
    assert!(rail.active_letter().is_none());
    assert_eq!(rail.rail_offset(), 0.0);
}
