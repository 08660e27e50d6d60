//! End-to-end properties every generated history must satisfy, independent of
//! which algorithm produced it:
//!
//! - the first step is the untouched input with no highlights,
//! - the final step is the sorted input with every index marked sorted,
//! - highlight indices are always in bounds,
//! - the sorted set never shrinks between consecutive steps.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sort_it_out::{Algorithm, History};

/// Check every structural invariant a playback UI relies on.
#[track_caller]
fn assert_valid_history(input: &[u32], history: &History) {
    assert!(
        history.len() >= 2,
        "history needs at least the initial and final step"
    );

    let first = &history[0];
    assert_eq!(first.array, input, "first step must be the untouched input");
    assert!(first.comparing.is_empty());
    assert!(first.swapping.is_empty());
    assert!(first.sorted.is_empty());
    assert!(first.shifting.is_none());

    let mut expected = input.to_vec();
    expected.sort_unstable();
    let last = history.last().unwrap();
    assert_eq!(last.array, expected, "final step must be sorted ascending");
    let mut final_sorted = last.sorted.clone();
    final_sorted.sort_unstable();
    assert_eq!(
        final_sorted,
        (0..input.len()).collect::<Vec<_>>(),
        "final step must mark every index sorted"
    );

    let mut prev_sorted_len = 0;
    for (k, step) in history.iter().enumerate() {
        assert_eq!(step.array.len(), input.len(), "step {k} changed the length");
        for &idx in step
            .comparing
            .iter()
            .chain(&step.swapping)
            .chain(&step.sorted)
        {
            assert!(
                idx < step.array.len(),
                "step {k} highlights out-of-bounds index {idx}"
            );
        }
        assert!(
            step.sorted.len() >= prev_sorted_len,
            "step {k} shrank the sorted set"
        );
        prev_sorted_len = step.sorted.len();
    }
}

#[test]
fn bubble_sort_concrete_case() {
    let history = Algorithm::Bubble.generate(&[3, 1, 2]);
    assert_eq!(history[1].comparing, vec![0, 1]);
    let last = history.last().unwrap();
    assert_eq!(last.array, vec![1, 2, 3]);
    let mut sorted = last.sorted.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![0, 1, 2]);
}

#[test]
fn single_element_input_emits_no_comparisons() {
    for alg in Algorithm::ALL {
        let history = alg.generate(&[1]);
        assert!(history.len() >= 2, "{alg} produced too short a history");
        assert!(
            history.iter().all(|s| s.comparing.is_empty()),
            "{alg} compared a single element"
        );
        assert_valid_history(&[1], &history);
    }
}

#[test]
fn empty_input_yields_the_minimal_history() {
    for alg in Algorithm::ALL {
        let history = alg.generate(&[]);
        assert_eq!(history.len(), 2, "{alg} should emit initial + final only");
        for step in &history {
            assert!(step.array.is_empty());
            assert!(step.comparing.is_empty());
            assert!(step.swapping.is_empty());
            assert!(step.sorted.is_empty());
        }
    }
}

#[test]
fn deterministic_algorithms_repeat_exactly() {
    let input = [9, 4, 7, 1, 8, 2, 6];
    for alg in [Algorithm::Bubble, Algorithm::Selection, Algorithm::Insertion] {
        assert_eq!(
            alg.generate(&input),
            alg.generate(&input),
            "{alg} is not deterministic"
        );
    }
    // Merge sort takes no randomness either.
    assert_eq!(
        Algorithm::Merge.generate(&input),
        Algorithm::Merge.generate(&input)
    );
}

#[test]
fn quick_sort_runs_agree_on_the_outcome() {
    let input = [12, 3, 9, 14, 1, 7, 5, 11];
    let mut expected = input.to_vec();
    expected.sort_unstable();
    for seed in 0..10u64 {
        let history =
            Algorithm::Quick.generate_with_rng(&input, &mut StdRng::seed_from_u64(seed));
        assert_valid_history(&input, &history);
        assert_eq!(history.last().unwrap().array, expected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    #[test]
    fn all_histories_are_valid(
        values in prop::collection::vec(1u32..=100, 0..=25),
        seed in any::<u64>(),
    ) {
        for alg in Algorithm::ALL {
            let mut rng = StdRng::seed_from_u64(seed);
            let history = alg.generate_with_rng(&values, &mut rng);
            assert_valid_history(&values, &history);
        }
    }

    #[test]
    fn histories_preserve_the_input_multiset(
        values in prop::collection::vec(1u32..=100, 1..=25),
    ) {
        let mut expected = values.clone();
        expected.sort_unstable();
        for alg in Algorithm::ALL {
            let mut rng = StdRng::seed_from_u64(0);
            let history = alg.generate_with_rng(&values, &mut rng);
            assert_eq!(history.last().unwrap().array, expected, "{alg}");
        }
    }
}
