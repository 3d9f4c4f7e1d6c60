// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for the letter index and sectioned list.

use proptest::prelude::*;
use understory_sections::filter::sort_by_label;
use understory_sections::letters::{LetterIndexBuilder, SectionKey};
use understory_sections::locale::{LabelLocale, RootLocale};
use understory_sections::sections::{Entry, sections_by_label};

fn labels() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z0-9#éÉ微 ]{0,8}", 0..40)
}

proptest! {
    #[test]
    fn index_starts_with_favorites_then_sorted_distinct(items in labels()) {
        let index = LetterIndexBuilder::new().build(&items);
        let keys = index.keys();
        prop_assert_eq!(&keys[0], &SectionKey::Favorites);

        let rest: Vec<&str> = index.letters().collect();
        prop_assert_eq!(rest.len(), keys.len() - 1);
        for pair in rest.windows(2) {
            prop_assert!(RootLocale.compare(pair[0], pair[1]).is_lt(), "{:?}", pair);
        }
    }

    #[test]
    fn index_ignores_input_order(mut items in labels()) {
        let forward = LetterIndexBuilder::new().build(&items);
        items.reverse();
        let backward = LetterIndexBuilder::new().build(&items);
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn header_positions_round_trip(mut items in labels()) {
        sort_by_label(&mut items, &RootLocale);
        let list = sections_by_label(items.clone(), &RootLocale);

        prop_assert_eq!(list.items().count(), items.len());
        for (letter, position) in list.headers() {
            match &list.entries()[position] {
                Entry::Header { letter: l, position: p } => {
                    prop_assert_eq!(l.as_str(), letter);
                    prop_assert_eq!(*p, position);
                }
                Entry::Item(_) => prop_assert!(false, "position {} is not a header", position),
            }
            prop_assert_eq!(list.position_of(letter), Some(position));
            prop_assert_eq!(list.section_at(position), Some(letter));
        }
    }

    #[test]
    fn sorted_input_yields_one_header_per_letter(mut items in labels()) {
        sort_by_label(&mut items, &RootLocale);
        let list = sections_by_label(items.clone(), &RootLocale);
        let index = LetterIndexBuilder::new().build(&items);
        prop_assert_eq!(list.header_count(), index.len() - 1);
        let headers: Vec<&str> = list.headers().map(|(letter, _)| letter).collect();
        let letters: Vec<&str> = index.letters().collect();
        prop_assert_eq!(headers, letters);
    }
}
