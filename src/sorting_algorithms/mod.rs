//! One history generator per algorithm. Each is a pure function from an input
//! slice to the full ordered list of animation frames for its run.

pub mod bubblesort;
pub mod insertionsort;
pub mod mergesort;
pub mod quicksort;
pub mod selectionsort;
