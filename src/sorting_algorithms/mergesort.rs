use crate::step::{AuxTag, History, Step};

/// Generate the full animation history for top-down merge sort. Sortedness is
/// only asserted in the final step; intermediate frames track the merge
/// buffers through the auxiliary channel instead.
pub fn generate_history(values: &[u32]) -> History {
    let mut arr = values.to_vec();
    let n = arr.len();
    let mut run = MergeRun {
        history: vec![Step::snapshot(&arr, "Initial array.")],
        next_aux_id: 0,
    };
    run.split_merge(&mut arr, 0, n);
    run.history
        .push(Step::snapshot(&arr, "Array is fully sorted.").sorted((0..n).collect()));
    run.history
}

struct MergeRun {
    history: History,
    // Synthetic ids give merge-buffer elements stable identities for the
    // renderer; they are never used as sort keys.
    next_aux_id: usize,
}

impl MergeRun {
    fn split_merge(&mut self, list: &mut [u32], left: usize, right: usize) {
        if right - left <= 1 {
            return; // run size == 1, consider it sorted
        }

        let mid = (left + right) / 2;
        self.history.push(Step::snapshot(
            list,
            format!(
                "Splitting subarray from index {left} to {}. Midpoint is {mid}.",
                right - 1
            ),
        ));

        self.split_merge(list, left, mid);
        self.split_merge(list, mid, right);
        self.merge(list, left, mid, right);
    }

    fn merge(&mut self, list: &mut [u32], left: usize, mid: usize, right: usize) {
        // Snapshot both halves as (value, original index) before any
        // placement overwrites them.
        let left_half: Vec<(u32, usize)> = list[left..mid]
            .iter()
            .enumerate()
            .map(|(i, &v)| (v, left + i))
            .collect();
        let right_half: Vec<(u32, usize)> = list[mid..right]
            .iter()
            .enumerate()
            .map(|(i, &v)| (v, mid + i))
            .collect();

        let mut aux = Vec::with_capacity(left_half.len() + right_half.len());
        for &(value, _) in left_half.iter().chain(right_half.iter()) {
            aux.push(AuxTag {
                index: self.next_aux_id,
                value,
            });
            self.next_aux_id += 1;
        }

        let join = |half: &[(u32, usize)]| {
            half.iter()
                .map(|(v, _)| v.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        self.history.push(
            Step::snapshot(
                list,
                format!(
                    "Merging subarrays. Left: [{}]. Right: [{}].",
                    join(&left_half),
                    join(&right_half)
                ),
            )
            .auxiliary(aux.clone()),
        );

        let (mut i, mut j, mut k) = (0, 0, left);
        while i < left_half.len() && j < right_half.len() {
            let (lv, li) = left_half[i];
            let (rv, rj) = right_half[j];
            self.history.push(
                Step::snapshot(list, format!("Comparing {lv} and {rv}."))
                    .comparing(vec![li, rj])
                    .auxiliary(aux.clone()),
            );
            // Ties take the left element, keeping the sort stable.
            if lv <= rv {
                self.place(
                    list,
                    lv,
                    li,
                    k,
                    &aux,
                    format!("Placing {lv} from left subarray into main array at index {k}."),
                );
                i += 1;
            } else {
                self.place(
                    list,
                    rv,
                    rj,
                    k,
                    &aux,
                    format!("Placing {rv} from right subarray into main array at index {k}."),
                );
                j += 1;
            }
            k += 1;
        }

        while i < left_half.len() {
            let (lv, li) = left_half[i];
            self.place(
                list,
                lv,
                li,
                k,
                &aux,
                format!("Placing remaining {lv} from left subarray at index {k}."),
            );
            i += 1;
            k += 1;
        }
        while j < right_half.len() {
            let (rv, rj) = right_half[j];
            self.place(
                list,
                rv,
                rj,
                k,
                &aux,
                format!("Placing remaining {rv} from right subarray at index {k}."),
            );
            j += 1;
            k += 1;
        }

        self.history.push(Step::snapshot(
            list,
            format!("Subarray from index {left} to {} is now sorted.", right - 1),
        ));
    }

    /// Emit the in-flight shift frame, apply the placement, then emit the
    /// applied frame.
    fn place(
        &mut self,
        list: &mut [u32],
        value: u32,
        from: usize,
        k: usize,
        aux: &[AuxTag],
        desc: String,
    ) {
        self.history.push(
            Step::snapshot(list, desc.clone())
                .auxiliary(aux.to_vec())
                .shifting(from, k),
        );
        list[k] = value;
        self.history.push(
            Step::snapshot(list, desc)
                .comparing(vec![k])
                .swapping(vec![k])
                .auxiliary(aux.to_vec()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splitting_steps_precede_merging() {
        let history = generate_history(&[4, 3, 2, 1]);
        let first_split = history
            .iter()
            .position(|s| s.description.starts_with("Splitting"))
            .unwrap();
        let first_merge = history
            .iter()
            .position(|s| s.description.starts_with("Merging"))
            .unwrap();
        assert!(first_split < first_merge);
        assert_eq!(history.last().unwrap().array, vec![1, 2, 3, 4]);
    }

    #[test]
    fn sorted_is_only_asserted_in_the_final_step() {
        let history = generate_history(&[5, 1, 4, 2, 3]);
        for step in &history[..history.len() - 1] {
            assert!(step.sorted.is_empty());
        }
        assert_eq!(history.last().unwrap().sorted, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn aux_ids_are_unique_and_monotone_within_a_merge() {
        let history = generate_history(&[3, 1, 2]);
        for step in history
            .iter()
            .filter(|s| s.description.starts_with("Merging"))
        {
            let ids: Vec<usize> = step.auxiliary.iter().map(|t| t.index).collect();
            assert!(ids.windows(2).all(|w| w[0] < w[1]), "ids must increase");
        }
    }

    #[test]
    fn merge_is_stable_on_ties() {
        // With equal heads the left half is drained first.
        let history = generate_history(&[2, 2]);
        let place = history
            .iter()
            .find(|s| s.description.starts_with("Placing") && s.shifting.is_some())
            .unwrap();
        assert_eq!(place.shifting.map(|s| (s.from, s.to)), Some((0, 0)));
        assert!(place.description.contains("left subarray"));
    }
}
