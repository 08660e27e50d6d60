//! Replayable step-by-step histories for classic sorting algorithms.
//!
//! Instead of merely sorting, each generator returns the full ordered list of
//! animation frames ([`Step`]) describing its run: array snapshots plus the
//! indices involved in comparisons, swaps, shifts, and pivot selection. A
//! playback UI can scrub the returned [`History`] forward, backward, or seek
//! to any step without re-running the algorithm.
//!
//! Generation is synchronous and total: every call allocates its own working
//! copy of the input and returns eagerly. Quick sort's random pivot is the
//! one source of non-determinism; pass a seeded [`rand::Rng`] to
//! [`Algorithm::generate_with_rng`] for reproducible runs.

pub mod algorithm;
pub mod sorting_algorithms;
pub mod step;

pub use algorithm::{Algorithm, Complexity, UnknownAlgorithm};
pub use step::{AuxTag, History, Shift, Step};
