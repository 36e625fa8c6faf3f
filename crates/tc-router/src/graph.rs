//! Directed weighted graph.
//!
//! # Data layout
//!
//! Edges live in one `Vec<Edge>` indexed by `EdgeId` (insertion order).
//! Each vertex owns an incidence list of its outgoing `EdgeId`s, also in
//! insertion order:
//!
//! ```text
//! edges[ incidence[v][0] ], edges[ incidence[v][1] ], ...
//! ```
//!
//! Unlike a CSR layout the lists can grow while the graph is being compiled,
//! and the snapshot stores them verbatim.

use tc_core::{EdgeId, VertexId};

use crate::{RouterError, RouterResult};

/// A directed edge.  `weight` is travel time in minutes and never negative.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub from:   VertexId,
    pub to:     VertexId,
    pub weight: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectedWeightedGraph {
    edges:     Vec<Edge>,
    incidence: Vec<Vec<EdgeId>>,
}

impl DirectedWeightedGraph {
    /// A graph with `vertex_count` isolated vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges:     Vec::new(),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    /// Rebuild a graph from its stored edge and incidence lists.
    ///
    /// Every incidence entry must name an existing edge whose source is the
    /// owning vertex, and every edge must appear in its source's list.
    pub fn from_parts(edges: Vec<Edge>, incidence: Vec<Vec<EdgeId>>) -> RouterResult<Self> {
        let vertex_count = incidence.len();
        for (i, edge) in edges.iter().enumerate() {
            check_weight(EdgeId(i as u32), edge.weight)?;
            for v in [edge.from, edge.to] {
                if v.index() >= vertex_count {
                    return Err(RouterError::VertexOutOfRange { vertex: v, vertex_count });
                }
            }
        }

        let mut listed = vec![false; edges.len()];
        for (v, list) in incidence.iter().enumerate() {
            let vertex = VertexId(v as u32);
            for &e in list {
                match edges.get(e.index()) {
                    Some(edge) if edge.from == vertex && !listed[e.index()] => {
                        listed[e.index()] = true;
                    }
                    _ => return Err(RouterError::InconsistentIncidence { vertex }),
                }
            }
        }
        if let Some(i) = listed.iter().position(|seen| !seen) {
            return Err(RouterError::InconsistentIncidence { vertex: edges[i].from });
        }

        Ok(Self { edges, incidence })
    }

    /// Append an edge and return its id (sequential from 0).
    pub fn add_edge(&mut self, edge: Edge) -> RouterResult<EdgeId> {
        let id = EdgeId(self.edges.len() as u32);
        check_weight(id, edge.weight)?;
        let vertex_count = self.vertex_count();
        for v in [edge.from, edge.to] {
            if v.index() >= vertex_count {
                return Err(RouterError::VertexOutOfRange { vertex: v, vertex_count });
            }
        }
        self.incidence[edge.from.index()].push(id);
        self.edges.push(edge);
        Ok(id)
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // ── Access ────────────────────────────────────────────────────────────

    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    /// Outgoing edges of `vertex`, in insertion order.
    #[inline]
    pub fn incident_edges(&self, vertex: VertexId) -> &[EdgeId] {
        &self.incidence[vertex.index()]
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn incidence_lists(&self) -> &[Vec<EdgeId>] {
        &self.incidence
    }
}

fn check_weight(edge: EdgeId, weight: f64) -> RouterResult<()> {
    // `!(w >= 0)` also catches NaN.
    if !(weight >= 0.0) {
        return Err(RouterError::NegativeWeight { edge, weight });
    }
    Ok(())
}
