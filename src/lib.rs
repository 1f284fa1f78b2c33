//! Conflict-minimizing heuristic graph coloring (greedy, 2-opt and genetic algorithm)

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// coloring instance, colorings, conflict evaluation and checker
pub mod color;

/// errors of the crate
pub mod error;

/// solver configuration
pub mod config;

/// read DIMACS instances
pub mod dimacs;

/// read plain instances, write colorings
pub mod plain;

/// search algorithms for the graph coloring problem
pub mod search;

/// full optimization pipeline
pub mod solver;

/// helper and utility methods for executables
pub mod util;

pub use color::{Color, Coloring, Instance, VertexId, nb_conflicts};
pub use config::SolverConfig;
pub use error::ColorError;
pub use solver::optimize;
