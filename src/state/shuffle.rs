//! Fisher–Yates shuffle.

use rand::Rng;

/// Returns a uniformly shuffled copy of `items`; the input is left untouched.
///
/// Walks from the last index down to 1, swapping each element with one drawn
/// uniformly from `0..=i`.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    #[test]
    fn empty_and_single_are_unchanged() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(shuffled::<u8, _>(&[], &mut rng).is_empty());
        assert_eq!(shuffled(&["only"], &mut rng), vec!["only"]);
    }

    #[test]
    fn same_seed_same_order() {
        let items: Vec<u32> = (0..20).collect();
        let a = shuffled(&items, &mut StdRng::seed_from_u64(42));
        let b = shuffled(&items, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn every_ordering_of_three_shows_up() {
        let items = ["a", "b", "c"];
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen: HashMap<Vec<&str>, usize> = HashMap::new();
        for _ in 0..6000 {
            *seen.entry(shuffled(&items, &mut rng)).or_default() += 1;
        }
        assert_eq!(seen.len(), 6);
        // Each of the 6 orderings should land near 1000; the bound is loose.
        for count in seen.values() {
            assert!((800..1200).contains(count), "skewed count {count}");
        }
    }

    proptest! {
        #[test]
        fn result_is_a_permutation(items in proptest::collection::vec(any::<u16>(), 0..64), seed: u64) {
            let original = items.clone();
            let mut rng = StdRng::seed_from_u64(seed);
            let out = shuffled(&items, &mut rng);

            prop_assert_eq!(&items, &original);
            prop_assert_eq!(out.len(), items.len());

            let mut sorted_out = out;
            sorted_out.sort_unstable();
            let mut sorted_in = items;
            sorted_in.sort_unstable();
            prop_assert_eq!(sorted_out, sorted_in);
        }
    }
}
