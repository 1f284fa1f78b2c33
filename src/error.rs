use std::path::PathBuf;

use thiserror::Error;

use crate::color::VertexId;

/// errors raised while reading instances, configurations or writing results
#[derive(Error, Debug)]
pub enum ColorError {
    /// unable to open, read or write a file
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// file that failed
        path: PathBuf,
        /// underlying error
        source: std::io::Error,
    },

    /// the instance file does not follow the expected format
    #[error("parse error in '{}' (line {line}): {message}", path.display())]
    Parse {
        /// instance file
        path: PathBuf,
        /// 1-based line of the failure
        line: usize,
        /// what was expected
        message: String,
    },

    /// an edge references a vertex outside of 0..n
    #[error("vertex {vertex} out of range (graph has {n} vertices)")]
    VertexOutOfRange {
        /// offending vertex (0-indexed)
        vertex: VertexId,
        /// number of vertices
        n: usize,
    },

    /// the header announced a different number of edges than the file contains
    #[error("expected {declared} edges, found {found}")]
    EdgeCountMismatch {
        /// number of edges in the header
        declared: usize,
        /// number of edges read
        found: usize,
    },

    /// the header announced more vertices than can be allocated
    #[error("cannot allocate a graph with {n} vertices")]
    TooManyVertices {
        /// number of vertices in the header
        n: usize,
    },

    /// configuration value that the solver cannot work with
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// json (de)serialization failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ColorError {
    /// wraps an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ColorError::Io { path: path.into(), source }
    }
}

/// result type of the fallible operations of the crate
pub type Result<T> = std::result::Result<T, ColorError>;
