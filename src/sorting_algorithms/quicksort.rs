use rand::Rng;

use crate::step::{History, Step};

/// Generate a quick-sort history using the caller's randomness source for
/// pivot selection. Two runs over the same input may differ step for step,
/// but each run is individually valid and ends on the same sorted array.
pub fn generate_history<R: Rng>(values: &[u32], rng: &mut R) -> History {
    let mut arr = values.to_vec();
    let n = arr.len();
    let mut run = QuickRun {
        history: vec![Step::snapshot(&arr, "Initial array.")],
        sorted: Vec::new(),
        rng,
    };
    if n > 0 {
        run.sort(&mut arr, 0, n - 1);
    }
    run.history
        .push(Step::snapshot(&arr, "Array is fully sorted.").sorted((0..n).collect()));
    run.history
}

struct QuickRun<'a, R: Rng> {
    history: History,
    sorted: Vec<usize>,
    rng: &'a mut R,
}

impl<R: Rng> QuickRun<'_, R> {
    fn sort(&mut self, list: &mut [u32], low: usize, high: usize) {
        if low < high {
            let pi = self.partition(list, low, high);
            if pi > low {
                self.sort(list, low, pi - 1);
            }
            if pi < high {
                self.sort(list, pi + 1, high);
            }
        } else if !self.sorted.contains(&low) {
            // A singleton partition is never partitioned, mark it directly.
            self.sorted.push(low);
            self.history.push(
                Step::snapshot(
                    list,
                    format!(
                        "Element {} is a single-element partition, considered sorted.",
                        list[low]
                    ),
                )
                .sorted(self.sorted.clone()),
            );
        }
    }

    /// Lomuto partition around a uniformly random pivot drawn from
    /// `[low, high]`; returns the pivot's final index.
    fn partition(&mut self, list: &mut [u32], low: usize, high: usize) -> usize {
        let pivot_index = self.rng.gen_range(low..=high);
        let pivot = list[pivot_index];
        self.history.push(
            Step::snapshot(
                list,
                format!(
                    "Partitioning from index {low} to {high}. Pivot is {pivot} at index {pivot_index}."
                ),
            )
            .sorted(self.sorted.clone())
            .tag(pivot_index, pivot),
        );

        if pivot_index != high {
            let desc = format!("Moved pivot {pivot} to the end for partitioning.");
            self.history.push(
                Step::snapshot(list, desc.clone())
                    .sorted(self.sorted.clone())
                    .shifting(pivot_index, high),
            );
            self.history.push(
                Step::snapshot(list, desc.clone())
                    .sorted(self.sorted.clone())
                    .shifting(high, pivot_index),
            );
            list.swap(pivot_index, high);
            self.history.push(
                Step::snapshot(list, desc)
                    .comparing(vec![pivot_index, high])
                    .swapping(vec![pivot_index, high])
                    .sorted(self.sorted.clone()),
            );
        }

        let mut i = low;
        for j in low..high {
            self.history.push(
                Step::snapshot(
                    list,
                    format!("Comparing element {} with pivot {pivot}.", list[j]),
                )
                .comparing(vec![j, high])
                .sorted(self.sorted.clone()),
            );
            if list[j] < pivot {
                if i != j {
                    let desc = format!(
                        "Swapping {} and {} as {} is smaller than pivot.",
                        list[i], list[j], list[j]
                    );
                    self.history.push(
                        Step::snapshot(list, desc.clone())
                            .sorted(self.sorted.clone())
                            .shifting(i, j),
                    );
                    self.history.push(
                        Step::snapshot(list, desc.clone())
                            .sorted(self.sorted.clone())
                            .shifting(j, i),
                    );
                    list.swap(i, j);
                    self.history.push(
                        Step::snapshot(list, desc)
                            .comparing(vec![i, j])
                            .swapping(vec![i, j])
                            .sorted(self.sorted.clone()),
                    );
                }
                i += 1;
            }
        }

        let desc = format!("Moving pivot {pivot} to its final sorted position at index {i}.");
        self.history.push(
            Step::snapshot(list, desc.clone())
                .sorted(self.sorted.clone())
                .shifting(high, i),
        );
        self.history.push(
            Step::snapshot(list, desc)
                .sorted(self.sorted.clone())
                .shifting(i, high),
        );
        list.swap(i, high);
        self.history.push(
            Step::snapshot(list, format!("Pivot {pivot} is now sorted."))
                .comparing(vec![i, high])
                .swapping(vec![i, high])
                .sorted(self.sorted.clone()),
        );

        self.sorted.push(i);
        self.history.push(
            Step::snapshot(
                list,
                format!("Elements smaller than {pivot} are to its left, larger are to its right."),
            )
            .sorted(self.sorted.clone()),
        );

        i
    }
}
