use crate::step::{History, Step};

/// Generate the full animation history for insertion sort. The key being
/// inserted rides along in the auxiliary channel while predecessors are
/// shifted right to make room for it.
pub fn generate_history(values: &[u32]) -> History {
    let mut arr = values.to_vec();
    let n = arr.len();
    let mut history = vec![Step::snapshot(&arr, "Initial array.")];
    let mut sorted: Vec<usize> = Vec::new();

    if n > 0 {
        sorted.push(0);
        history.push(Step::snapshot(&arr, "First element is considered sorted.").sorted(vec![0]));
    }

    for i in 1..n {
        let key = arr[i];
        let mut j = i;

        history.push(
            Step::snapshot(&arr, format!("Selecting {key} to insert into the sorted part."))
                .comparing(vec![i])
                .sorted(sorted.clone())
                .tag(i, key),
        );

        while j > 0 && arr[j - 1] > key {
            let desc = format!("Shifting {} to the right to make space for {key}.", arr[j - 1]);
            history.push(
                Step::snapshot(&arr, desc.clone())
                    .sorted(sorted.clone())
                    .shifting(j - 1, j),
            );
            arr[j] = arr[j - 1];
            history.push(
                Step::snapshot(&arr, desc)
                    .comparing(vec![j - 1, j])
                    .swapping(vec![j - 1, j])
                    .sorted(sorted.clone())
                    .tag(i, key),
            );
            j -= 1;
        }

        // Purely cosmetic frame: the destination slot is blanked while the key
        // travels toward it; the value reappears in the next step.
        let desc = format!("Inserting {key} at index {j}.");
        let mut pre_insert = arr.clone();
        pre_insert[j] = 0;
        history.push(
            Step::snapshot(&pre_insert, desc.clone())
                .sorted(sorted.clone())
                .shifting(i, j),
        );

        arr[j] = key;
        history.push(
            Step::snapshot(&arr, desc)
                .comparing(vec![j])
                .swapping(vec![j])
                .sorted(sorted.clone()),
        );

        if !sorted.contains(&i) {
            sorted.push(i);
        }
        history.push(
            Step::snapshot(&arr, format!("Elements up to index {i} are now sorted."))
                .sorted(sorted.clone()),
        );
    }

    history.push(Step::snapshot(&arr, "Array is fully sorted.").sorted((0..n).collect()));
    history
}
