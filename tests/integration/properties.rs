use pbsearch::{
    SortedView, adaptive_search, linear_search, min_max, multi_target_search, narrowing_search,
    prefix_sum, segmented_search, sequential_search,
};
use proptest::prelude::*;

fn sorted_values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-500i32..500, 0..400).prop_map(|mut values| {
        values.sort_unstable();
        values
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_strategies_agree_on_presence(
        values in sorted_values(),
        target in -520i32..520,
        workers in 1usize..12,
    ) {
        let view = SortedView::new(values).unwrap();
        let expected = sequential_search(&view, &target);

        for found in [
            segmented_search(&view, &target, workers).unwrap(),
            adaptive_search(&view, &target, workers).unwrap(),
            narrowing_search(&view, &target, workers).unwrap(),
        ] {
            prop_assert_eq!(found.is_some(), expected.is_some());
            if let Some(index) = found {
                prop_assert_eq!(view[index], target);
            }
        }
    }

    #[test]
    fn prop_sequential_index_holds_target(
        values in sorted_values(),
        target in -520i32..520,
    ) {
        let present = values.contains(&target);
        let view = SortedView::new(values).unwrap();

        match sequential_search(&view, &target) {
            Some(index) => prop_assert_eq!(view[index], target),
            None => prop_assert!(!present),
        }
    }

    #[test]
    fn prop_multi_target_covers_every_target(
        values in sorted_values(),
        targets in prop::collection::vec(-520i32..520, 0..40),
        workers in 1usize..8,
    ) {
        let view = SortedView::new(values).unwrap();
        let found = multi_target_search(&view, &targets, workers).unwrap();

        for target in &targets {
            let index = found.get(target).copied();
            prop_assert!(index.is_some());
            prop_assert_eq!(
                index.flatten().is_some(),
                sequential_search(&view, target).is_some()
            );
        }
    }

    #[test]
    fn prop_unsorted_input_rejected(
        mut values in prop::collection::vec(-500i32..500, 2..100),
    ) {
        values.sort_unstable();
        values.dedup();
        prop_assume!(values.len() >= 2);
        values.reverse();

        prop_assert!(SortedView::new(values).is_err());
    }

    #[test]
    fn prop_linear_search_finds_present_targets(
        values in prop::collection::vec(-50i32..50, 0..400),
        target in -55i32..55,
        workers in 1usize..12,
    ) {
        match linear_search(&values, &target, workers).unwrap() {
            Some(index) => prop_assert_eq!(values[index], target),
            None => prop_assert!(!values.contains(&target)),
        }
    }

    #[test]
    fn prop_min_max_matches_iterators(
        values in prop::collection::vec(any::<i64>(), 0..300),
        workers in 1usize..12,
    ) {
        let expected = values.iter().min().zip(values.iter().max());
        prop_assert_eq!(min_max(&values, workers).unwrap(), expected);
    }

    #[test]
    fn prop_prefix_sum_is_exclusive_scan(
        values in prop::collection::vec(-1000i64..1000, 0..300),
        workers in 1usize..12,
    ) {
        let sums = prefix_sum(&values, workers).unwrap();
        prop_assert_eq!(sums.len(), values.len());

        let mut running = 0;
        for (sum, value) in sums.iter().zip(&values) {
            prop_assert_eq!(*sum, running);
            running += value;
        }
    }
}
