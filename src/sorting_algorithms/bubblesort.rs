use crate::step::{History, Step};

/// Generate the full animation history for bubble sort, with early exit on a
/// swap-free pass.
pub fn generate_history(values: &[u32]) -> History {
    let mut arr = values.to_vec();
    let n = arr.len();
    let mut history = vec![Step::snapshot(&arr, "Initial array.")];
    let mut sorted: Vec<usize> = Vec::new();

    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            history.push(
                Step::snapshot(
                    &arr,
                    format!(
                        "Comparing elements at index {j} ({}) and {} ({}).",
                        arr[j],
                        j + 1,
                        arr[j + 1]
                    ),
                )
                .comparing(vec![j, j + 1])
                .sorted(sorted.clone()),
            );

            if arr[j] > arr[j + 1] {
                swapped = true;
                let desc = format!("Swapping {} and {}.", arr[j], arr[j + 1]);
                history.push(
                    Step::snapshot(&arr, desc.clone())
                        .sorted(sorted.clone())
                        .shifting(j, j + 1),
                );
                history.push(
                    Step::snapshot(&arr, desc)
                        .sorted(sorted.clone())
                        .shifting(j + 1, j),
                );
                arr.swap(j, j + 1);
                history.push(
                    Step::snapshot(
                        &arr,
                        format!("Elements {} and {} have been swapped.", arr[j + 1], arr[j]),
                    )
                    .comparing(vec![j, j + 1])
                    .swapping(vec![j, j + 1])
                    .sorted(sorted.clone()),
                );
            }
        }

        let done = n - 1 - i;
        sorted.push(done);
        history.push(
            Step::snapshot(
                &arr,
                format!(
                    "Pass {} complete. {} is in its final sorted position.",
                    i + 1,
                    arr[done]
                ),
            )
            .sorted(sorted.clone()),
        );

        if !swapped {
            // Nothing moved this pass, so everything below is already in place.
            for k in (0..n - i - 1).rev() {
                if !sorted.contains(&k) {
                    sorted.push(k);
                }
            }
            history.push(
                Step::snapshot(&arr, "No swaps in the last pass. Array is sorted.")
                    .sorted(sorted.clone()),
            );
            break;
        }
    }

    history.push(Step::snapshot(&arr, "Array is fully sorted.").sorted((0..n).collect()));
    history
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_comparison_is_adjacent_pair() {
        let history = generate_history(&[3, 1, 2]);
        assert_eq!(history[1].comparing, vec![0, 1]);
        let last = history.last().unwrap();
        assert_eq!(last.array, vec![1, 2, 3]);
        let mut sorted = last.sorted.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2]);
    }

    #[test]
    fn sorted_input_exits_after_one_pass() {
        let history = generate_history(&[1, 2, 3, 4, 5]);
        // One comparison pass, a pass-complete step, the early-exit step, and
        // the bookend steps. No shifting or swapping frames at all.
        assert!(history.iter().all(|s| s.swapping.is_empty()));
        assert!(history.iter().all(|s| s.shifting.is_none()));
        let early_exit = &history[history.len() - 2];
        assert_eq!(
            early_exit.description,
            "No swaps in the last pass. Array is sorted."
        );
        assert_eq!(early_exit.sorted.len(), 5);
    }

    #[test]
    fn swap_emits_two_shift_frames_then_the_exchange() {
        let history = generate_history(&[2, 1]);
        // initial, compare, shift out, shift back, swapped, pass complete, final
        assert_eq!(history[2].shifting.map(|s| (s.from, s.to)), Some((0, 1)));
        assert_eq!(history[3].shifting.map(|s| (s.from, s.to)), Some((1, 0)));
        assert_eq!(history[2].array, vec![2, 1]);
        assert_eq!(history[4].array, vec![1, 2]);
        assert_eq!(history[4].swapping, vec![0, 1]);
    }
}
