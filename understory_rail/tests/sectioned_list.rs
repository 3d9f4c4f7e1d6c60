// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rail driven by a letter index from `understory_sections`.

use understory_rail::slider::{AlphabetSlider, SliderConfig};
use understory_rail::types::{SliderEvent, TouchSample};
use understory_sections::filter::{filter_prefix, sort_by_label};
use understory_sections::letters::{LetterIndexBuilder, SectionKey};
use understory_sections::locale::RootLocale;
use understory_sections::sections::sections_by_label;

const APPS: [&str; 8] = [
    "Maps", "Camera", "calendar", "Browser", "2FA", "Clock", "mail", "Zoom",
];

fn lay_out(rail: &mut AlphabetSlider<SectionKey>) {
    for i in 0..rail.letters().len() {
        let top = i as f64 * 24.0;
        assert!(rail.update_letter_bounds(i, top, top + 24.0), "index {i} in range");
    }
}

#[test]
fn selected_letter_scrolls_to_its_header() {
    let mut apps = APPS.to_vec();
    sort_by_label(&mut apps, &RootLocale);
    let index = LetterIndexBuilder::new().build(&apps);
    let list = sections_by_label(apps, &RootLocale);

    let mut rail = AlphabetSlider::new(SliderConfig::default());
    rail.set_letters(index.keys());
    lay_out(&mut rail);

    // Rail: ★ # B C M Z, 24 units each. 3 * 24 + 4 lands on C.
    let Some(SliderEvent::Selected(key)) = rail.on_touch(TouchSample::down(76.0)) else {
        panic!("expected a selection");
    };
    assert_eq!(key, SectionKey::letter("C"));
    let pos = list.position_of_key(&key).expect("C has a header");
    assert_eq!(list.section_at(pos), Some("C"));
    // # (2FA), B (Browser), then the C header.
    assert_eq!(pos, 4);

    // The favorites marker has no list position; hosts show the pinned view.
    let Some(SliderEvent::Selected(key)) = rail.on_touch(TouchSample::moved(1.0)) else {
        panic!("expected a selection");
    };
    assert_eq!(key, SectionKey::Favorites);
    assert_eq!(list.position_of_key(&key), None);
}

#[test]
fn filtering_resets_the_rail_only_when_letters_change() {
    let mut apps = APPS.to_vec();
    sort_by_label(&mut apps, &RootLocale);

    let mut rail = AlphabetSlider::new(SliderConfig::default());
    rail.set_letters(LetterIndexBuilder::new().build(&apps).keys());
    lay_out(&mut rail);
    rail.on_touch(TouchSample::down(50.0));
    assert!(rail.active_letter().is_some());

    // Re-render with the same content: no reset.
    let same = LetterIndexBuilder::new().build(&apps);
    assert_eq!(rail.set_letters(same.keys()), None);
    assert!(rail.active_letter().is_some());

    // Narrow to "c": the letter set changes and the touch ends.
    let narrowed = filter_prefix(apps.iter().copied(), "c", &RootLocale);
    let index = LetterIndexBuilder::new().build(&narrowed);
    assert_eq!(index.keys(), &[SectionKey::Favorites, SectionKey::letter("C")]);
    assert_eq!(rail.set_letters(index.keys()), Some(SliderEvent::Cleared));
    assert!(rail.glyphs().is_empty());

    // Nothing matches: the rail becomes inert.
    let none = filter_prefix(apps.iter().copied(), "qq", &RootLocale);
    rail.set_letters(LetterIndexBuilder::new().build(&none).keys());
    assert!(rail.is_inert());
}
