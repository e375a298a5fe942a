//! Property tests for the membership and size guarantees of [`Set`].

use std::collections::HashSet;

use getset::Set;
use proptest::prelude::*;

proptest! {
    /// Building a Set stores each distinct value exactly once.
    #[test]
    fn prop_size_counts_distinct_items(items in prop::collection::vec(any::<i16>(), 0..200)) {
        let distinct: HashSet<i16> = items.iter().copied().collect();
        let set = Set::from_items(items.iter().copied());

        prop_assert_eq!(set.size(), distinct.len());
        for item in &items {
            prop_assert!(set.has(item), "Initial item {} should be present", item);
        }
    }

    /// After an insertion the item is present, and the size grows only if it was new.
    #[test]
    fn prop_insert_makes_present(
        items in prop::collection::vec(any::<i16>(), 0..100),
        item: i16
    ) {
        let mut set = Set::from_items(items);
        let was_present = set.has(&item);
        let before = set.size();

        let added = set.insert(item);

        prop_assert!(set.has(&item));
        prop_assert_eq!(added, !was_present);
        prop_assert_eq!(set.size(), before + usize::from(!was_present));
    }

    /// After a removal the item is absent, and the size shrinks only if it was present.
    #[test]
    fn prop_remove_makes_absent(
        items in prop::collection::vec(any::<i16>(), 0..100),
        item: i16
    ) {
        let mut set = Set::from_items(items);
        let was_present = set.has(&item);
        let before = set.size();

        let removed = set.remove(&item);

        prop_assert!(!set.has(&item));
        prop_assert_eq!(removed, was_present);
        prop_assert_eq!(set.size(), before - usize::from(was_present));
    }

    /// Inserting the same item twice is observably the same as inserting it once.
    #[test]
    fn prop_insert_is_idempotent(
        items in prop::collection::vec(".{0,4}", 0..50),
        item in ".{0,4}"
    ) {
        let mut once = Set::from_items(items.clone());
        once.insert(item.clone());

        let mut twice = Set::from_items(items);
        twice.insert(item.clone());
        twice.insert(item);

        prop_assert_eq!(once, twice);
    }

    /// The exported array holds every stored item once and nothing else.
    #[test]
    fn prop_to_array_matches_contents(
        items in prop::collection::vec(any::<u8>(), 0..300),
        removals in prop::collection::vec(any::<u8>(), 0..50)
    ) {
        let mut set = Set::from_items(items);
        for item in &removals {
            set.remove(item);
        }

        let arr = set.to_array();
        let distinct: HashSet<u8> = arr.iter().copied().collect();

        prop_assert_eq!(arr.len(), set.size());
        prop_assert_eq!(distinct.len(), arr.len(), "Exported items should be unique");
        for item in arr.iter() {
            prop_assert!(set.has(item));
        }
    }
}
