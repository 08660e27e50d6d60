use std::fmt;
use std::str::FromStr;

use rand::Rng;
use thiserror::Error;

use crate::sorting_algorithms::{bubblesort, insertionsort, mergesort, quicksort, selectionsort};
use crate::step::History;

/// The closed set of supported algorithms. Callers look behavior up by name
/// through [`FromStr`] instead of depending on the concrete modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

/// Textbook complexity figures. Purely descriptive strings, not computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Complexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
    pub space: &'static str,
}

/// A name outside the registry was looked up.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown algorithm: {0:?}")]
pub struct UnknownAlgorithm(pub String);

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    /// The display name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Algorithm::Bubble => {
                "Bubble Sort repeatedly steps through the list, compares adjacent elements and \
                 swaps them if they are in the wrong order. The pass through the list is repeated \
                 until the list is sorted."
            }
            Algorithm::Selection => {
                "Selection Sort divides the input list into two parts: a sorted sublist of items \
                 which is built up from left to right and a sublist of the remaining unsorted \
                 items. It repeatedly finds the minimum element from the unsorted part and puts \
                 it at the beginning."
            }
            Algorithm::Insertion => {
                "Insertion Sort builds the final sorted array one item at a time. It iterates \
                 through an input array and removes one element per iteration, finds the place \
                 the element belongs in the sorted list, and inserts it there."
            }
            Algorithm::Merge => {
                "Merge Sort is a divide-and-conquer algorithm. It divides the unsorted list into \
                 n sublists, each containing one element, and then repeatedly merges sublists to \
                 produce new sorted sublists until there is only one sublist remaining."
            }
            Algorithm::Quick => {
                "Quick Sort is a divide-and-conquer algorithm. It works by selecting a 'pivot' \
                 element from the array and partitioning the other elements into two sub-arrays, \
                 according to whether they are less than or greater than the pivot."
            }
        }
    }

    pub fn complexity(self) -> Complexity {
        match self {
            Algorithm::Bubble => Complexity {
                best: "O(n)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
            },
            Algorithm::Selection => Complexity {
                best: "O(n²)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
            },
            Algorithm::Insertion => Complexity {
                best: "O(n)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
            },
            Algorithm::Merge => Complexity {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n log n)",
                space: "O(n)",
            },
            Algorithm::Quick => Complexity {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n²)",
                space: "O(log n)",
            },
        }
    }

    /// Run the generator with thread-local randomness for pivot selection.
    pub fn generate(self, values: &[u32]) -> History {
        self.generate_with_rng(values, &mut rand::thread_rng())
    }

    /// Run the generator with a caller-supplied randomness source. Only quick
    /// sort draws from it; the other four are fully deterministic.
    pub fn generate_with_rng<R: Rng>(self, values: &[u32], rng: &mut R) -> History {
        match self {
            Algorithm::Bubble => bubblesort::generate_history(values),
            Algorithm::Selection => selectionsort::generate_history(values),
            Algorithm::Insertion => insertionsort::generate_history(values),
            Algorithm::Merge => mergesort::generate_history(values),
            Algorithm::Quick => quicksort::generate_history(values, rng),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|alg| alg.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}
