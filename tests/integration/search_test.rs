use pbsearch::search::parallel::run_multi_target_search;
use pbsearch::{
    Error, ParallelConfig, SearchConfig, SortedView, Strategy, adaptive_search,
    multi_target_search, narrowing_search, run_search, segmented_search, sequential_search,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_sorted(rng: &mut ChaCha8Rng, size: usize) -> Vec<i64> {
    let mut values: Vec<i64> = (0..size).map(|_| rng.random_range(-1000..1000)).collect();
    values.sort_unstable();
    values
}

fn reference_view() -> SortedView<i32> {
    SortedView::new(vec![1, 3, 5, 7, 9, 11, 13, 15, 17, 19]).unwrap()
}

#[test]
fn test_reference_example_all_entry_points() {
    let view = reference_view();
    assert_eq!(sequential_search(&view, &13), Some(6));
    assert_eq!(segmented_search(&view, &13, 4).unwrap(), Some(6));
    assert_eq!(adaptive_search(&view, &13, 4).unwrap(), Some(6));
    assert_eq!(narrowing_search(&view, &13, 4).unwrap(), Some(6));
}

#[test]
fn test_absent_targets_everywhere() {
    let view = reference_view();
    for target in [0, 2, 10, 20, i32::MIN, i32::MAX] {
        assert_eq!(sequential_search(&view, &target), None);
        assert_eq!(segmented_search(&view, &target, 3).unwrap(), None);
        assert_eq!(adaptive_search(&view, &target, 3).unwrap(), None);
        assert_eq!(narrowing_search(&view, &target, 3).unwrap(), None);
    }
}

#[test]
fn test_unsorted_input_rejected_before_search() {
    let err = SortedView::new(vec![1, 2, 5, 4, 6]).unwrap_err();
    assert_eq!(err, Error::InvalidInput { position: 3 });
}

#[test]
fn test_empty_view() {
    let view = SortedView::<i64>::new(Vec::new()).unwrap();
    assert_eq!(sequential_search(&view, &1), None);
    assert_eq!(segmented_search(&view, &1, 8).unwrap(), None);
    assert_eq!(adaptive_search(&view, &1, 8).unwrap(), None);
    assert_eq!(narrowing_search(&view, &1, 8).unwrap(), None);
    assert!(multi_target_search(&view, &[1, 2], 8).unwrap().values().all(Option::is_none));
}

#[test]
fn test_segment_count_boundaries() {
    let view = SortedView::new((0..37).map(|v| v * 3).collect::<Vec<i64>>()).unwrap();
    for segments in [0, 1, 2, 36, 37, 38, 100] {
        for target in -3..115 {
            let expected = sequential_search(&view, &target);
            assert_eq!(
                segmented_search(&view, &target, segments).unwrap(),
                expected,
                "target {} with {} segments",
                target,
                segments
            );
        }
    }
}

#[test]
fn test_single_element_view() {
    let view = SortedView::new(vec![42]).unwrap();
    for workers in 1..5 {
        assert_eq!(segmented_search(&view, &42, workers).unwrap(), Some(0));
        assert_eq!(narrowing_search(&view, &42, workers).unwrap(), Some(0));
        assert_eq!(segmented_search(&view, &41, workers).unwrap(), None);
    }
}

#[test]
fn test_found_index_holds_target() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let view = SortedView::new(random_sorted(&mut rng, 5000)).unwrap();

    for _ in 0..200 {
        let target = rng.random_range(-1100..1100);
        for strategy in [
            Strategy::Sequential,
            Strategy::Segmented,
            Strategy::Adaptive,
            Strategy::Narrowing,
        ] {
            let config = SearchConfig::default()
                .with_strategy(strategy)
                .with_workers(6);
            let result = run_search(&view, &target, &config).unwrap();
            match result.index {
                Some(index) => assert_eq!(view[index], target),
                None => assert!(!view.contains(&target)),
            }
        }
    }
}

#[test]
fn test_repeated_segmented_runs_agree_with_sequential() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let view = SortedView::new(random_sorted(&mut rng, 1000)).unwrap();

    for _ in 0..1000 {
        let target = rng.random_range(-1000..1000);
        let expected = sequential_search(&view, &target);
        let found = segmented_search(&view, &target, 8).unwrap();

        assert_eq!(found.is_some(), expected.is_some(), "target {}", target);
        if let Some(index) = found {
            assert_eq!(view[index], target);
        }
    }
}

#[test]
fn test_multi_target_reference() {
    let view = SortedView::new((0..20).step_by(2).collect::<Vec<i32>>()).unwrap();
    let found = multi_target_search(&view, &[0, 10, 18, 25], 4).unwrap();

    assert_eq!(found.len(), 4);
    assert_eq!(found[&0], Some(0));
    assert_eq!(found[&10], Some(5));
    assert_eq!(found[&18], Some(9));
    assert_eq!(found[&25], None);
}

#[test]
fn test_multi_target_matches_individual_searches() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let view = SortedView::new(random_sorted(&mut rng, 2000)).unwrap();
    let targets: Vec<i64> = (0..300).map(|_| rng.random_range(-1000..1000)).collect();

    let config = ParallelConfig::default().with_workers(5);
    let result = run_multi_target_search(&view, &targets, &config).unwrap();

    assert!(result.statistics.workers_spawned <= 5);
    assert_eq!(
        result.statistics.jobs_scheduled + result.statistics.duplicate_targets,
        targets.len() as u64
    );
    for target in &targets {
        let index = result.results[target];
        assert_eq!(index.is_some(), sequential_search(&view, target).is_some());
        if let Some(index) = index {
            assert_eq!(view[index], *target);
        }
    }
}

#[test]
fn test_multi_target_empty_targets() {
    let view = reference_view();
    let result = run_multi_target_search(&view, &[], &ParallelConfig::default()).unwrap();
    assert!(result.results.is_empty());
    assert_eq!(result.statistics.workers_spawned, 0);
}

#[test]
fn test_strings_are_searchable() {
    let view = SortedView::new(vec!["apple", "banana", "cherry", "date", "fig"]).unwrap();
    assert_eq!(segmented_search(&view, &"date", 2).unwrap(), Some(3));
    assert_eq!(narrowing_search(&view, &"cherry", 3).unwrap(), Some(2));
    assert_eq!(adaptive_search(&view, &"grape", 3).unwrap(), None);
}

#[test]
fn test_same_target_stress_with_duplicates() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let mut values = random_sorted(&mut rng, 50_000);
    // Long run of one value so matches span several segments
    values.extend(std::iter::repeat_n(1000, 20_000));
    values.extend(1001..1500);
    let view = SortedView::new(values).unwrap();

    for target in [1000, 1200, 2000] {
        let expected = sequential_search(&view, &target).is_some();
        for _ in 0..1000 {
            let found = segmented_search(&view, &target, 8).unwrap();
            assert_eq!(found.is_some(), expected);
            if let Some(index) = found {
                assert_eq!(view[index], target);
            }
        }
    }
}
