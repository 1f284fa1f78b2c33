//! Search algorithms for the conflict-minimizing graph coloring.

/// colors a vertex may take given its neighbors
pub mod candidates;

/// randomized greedy by decreasing degree
pub mod greedy_degree;

/// 2-opt steepest descent on color swaps
pub mod two_opt;

/// population-based genetic algorithm
pub mod genetic;
