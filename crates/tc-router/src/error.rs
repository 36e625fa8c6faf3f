//! Routing-subsystem error type.

use thiserror::Error;

use tc_core::{EdgeId, VertexId};

/// Errors produced while compiling the graph or building the table.
///
/// "No path" is not an error; it is `None` from the query methods.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RouterError {
    #[error("edge {edge} has weight {weight}; edge weights must be non-negative")]
    NegativeWeight { edge: EdgeId, weight: f64 },

    #[error("vertex {vertex} out of range for a graph of {vertex_count} vertices")]
    VertexOutOfRange { vertex: VertexId, vertex_count: usize },

    #[error("incidence list of {vertex} is inconsistent with the edge list")]
    InconsistentIncidence { vertex: VertexId },

    #[error("routing table holds {got} cells, expected {expected}")]
    TableShape { expected: usize, got: usize },

    #[error("routing table entry refers to {0}, which is not in the graph")]
    DanglingEdge(EdgeId),

    #[error("{got} edge kinds for {expected} edges")]
    EdgeKindCount { expected: usize, got: usize },

    #[error("table build exceeded its deadline after {completed} of {total} relaxation stages")]
    DeadlineExceeded { completed: usize, total: usize },
}

pub type RouterResult<T> = Result<T, RouterError>;
