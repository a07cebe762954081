use std::collections::HashSet;

use itertools::iproduct;
use num_bigint::BigUint;
use num_traits::One;
use parigen::{all_even, all_odd, pattern_count, Parity, ParityPatterns};
use proptest::prelude::*;

#[test]
fn even_and_odd_partition_every_small_width() {
    for width in 0..=12usize {
        let even: Vec<BigUint> = all_even(width).collect();
        let odd: Vec<BigUint> = all_odd(width).collect();
        let ceiling = BigUint::one() << width;

        assert_eq!(even.len() + odd.len(), 1usize << width, "width {width}");

        let mut seen = HashSet::new();
        for value in &even {
            assert!(Parity::Even.matches(value), "{value} in the even sequence");
            assert!(*value < ceiling, "{value} out of range at width {width}");
            assert!(seen.insert(value.clone()), "{value} repeated at width {width}");
        }
        for value in &odd {
            assert!(Parity::Odd.matches(value), "{value} in the odd sequence");
            assert!(*value < ceiling, "{value} out of range at width {width}");
            assert!(seen.insert(value.clone()), "{value} repeated at width {width}");
        }
        assert_eq!(seen.len(), 1usize << width, "width {width} not fully covered");
    }
}

#[test]
fn lazy_count_agrees_with_the_closed_form() {
    for (width, parity) in iproduct!(0..=14usize, Parity::all()) {
        let counted = BigUint::from(ParityPatterns::new(width, parity).count());
        assert_eq!(counted, pattern_count(width, parity), "width {width}, {parity}");
    }
}

#[test]
fn traversal_is_deterministic() {
    let first: Vec<BigUint> = all_odd(11).collect();
    let second: Vec<BigUint> = all_odd(11).collect();
    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn sequences_follow_the_doubling_recurrence(width in 3..=12usize) {
        let leading_one = BigUint::one() << (width - 1);

        let expected_even: Vec<BigUint> = all_even(width - 1)
            .chain(all_odd(width - 1).map(|pattern| pattern + &leading_one))
            .collect();
        prop_assert_eq!(all_even(width).collect::<Vec<_>>(), expected_even);

        let expected_odd: Vec<BigUint> = all_odd(width - 1)
            .chain(all_even(width - 1).map(|pattern| pattern + &leading_one))
            .collect();
        prop_assert_eq!(all_odd(width).collect::<Vec<_>>(), expected_odd);
    }

    #[test]
    fn every_yielded_pattern_has_the_requested_parity(width in 0..=14usize, prefix in 1..64usize) {
        for parity in Parity::all() {
            for pattern in ParityPatterns::new(width, parity).take(prefix) {
                prop_assert_eq!(Parity::of(&pattern), parity);
            }
        }
    }
}
