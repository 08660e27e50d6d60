use crate::step::{History, Step};

/// Generate the full animation history for selection sort. The running
/// minimum is carried through the inner scan as an auxiliary tag so the
/// renderer can keep it highlighted.
pub fn generate_history(values: &[u32]) -> History {
    let mut arr = values.to_vec();
    let n = arr.len();
    let mut history = vec![Step::snapshot(&arr, "Initial array.")];
    let mut sorted: Vec<usize> = Vec::new();

    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        history.push(
            Step::snapshot(
                &arr,
                format!(
                    "Finding minimum in unsorted part (from index {i}). Current minimum is {}.",
                    arr[min_idx]
                ),
            )
            .sorted(sorted.clone())
            .tag(min_idx, arr[min_idx]),
        );

        for j in i + 1..n {
            history.push(
                Step::snapshot(
                    &arr,
                    format!(
                        "Comparing current minimum ({}) with element at index {j} ({}).",
                        arr[min_idx], arr[j]
                    ),
                )
                .comparing(vec![min_idx, j])
                .sorted(sorted.clone())
                .tag(min_idx, arr[min_idx]),
            );
            if arr[j] < arr[min_idx] {
                min_idx = j;
                history.push(
                    Step::snapshot(
                        &arr,
                        format!("Found new minimum: {} at index {min_idx}.", arr[min_idx]),
                    )
                    .comparing(vec![min_idx])
                    .sorted(sorted.clone())
                    .tag(min_idx, arr[min_idx]),
                );
            }
        }

        if min_idx != i {
            let desc = format!(
                "Swapping minimum element {} with element {} at the start of the unsorted part.",
                arr[min_idx], arr[i]
            );
            history.push(
                Step::snapshot(&arr, desc.clone())
                    .sorted(sorted.clone())
                    .shifting(i, min_idx),
            );
            history.push(
                Step::snapshot(&arr, desc)
                    .sorted(sorted.clone())
                    .shifting(min_idx, i),
            );
            arr.swap(i, min_idx);
            history.push(
                Step::snapshot(&arr, "Swap complete.")
                    .comparing(vec![i, min_idx])
                    .swapping(vec![i, min_idx])
                    .sorted(sorted.clone()),
            );
        }

        sorted.push(i);
        history.push(
            Step::snapshot(&arr, format!("Element {} is now sorted.", arr[i]))
                .sorted(sorted.clone()),
        );
    }

    history.push(Step::snapshot(&arr, "Array is fully sorted.").sorted((0..n).collect()));
    history
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_swap_frames_when_minimum_already_in_place() {
        let history = generate_history(&[1, 2, 3]);
        assert!(history.iter().all(|s| s.swapping.is_empty()));
        assert!(history.iter().all(|s| s.shifting.is_none()));
        assert_eq!(history.last().unwrap().array, vec![1, 2, 3]);
    }

    #[test]
    fn running_minimum_is_tagged_through_the_scan() {
        let history = generate_history(&[3, 1, 2]);
        // Second step opens the scan with the tentative minimum at index 0.
        assert_eq!(history[1].auxiliary.len(), 1);
        assert_eq!(history[1].auxiliary[0].index, 0);
        assert_eq!(history[1].auxiliary[0].value, 3);
        // Comparing 3 with 1 finds a new minimum at index 1.
        let found = history
            .iter()
            .find(|s| s.description.starts_with("Found new minimum"))
            .unwrap();
        assert_eq!(found.auxiliary[0].index, 1);
        assert_eq!(found.auxiliary[0].value, 1);
    }

    #[test]
    fn last_index_is_sorted_without_being_visited() {
        let history = generate_history(&[2, 1]);
        let last = history.last().unwrap();
        let mut sorted = last.sorted.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1]);
    }
}
