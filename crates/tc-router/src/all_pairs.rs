//! All-pairs shortest paths with path reconstruction.
//!
//! # Algorithm
//!
//! The table is a dense `V × V` matrix of optional [`RouteEntry`] records,
//! stored row-major.  It is built in two steps:
//!
//! 1. **Seed**: `table[v][v] = {0, None}`; for each outgoing edge of `v`
//!    keep the lightest edge per destination.
//! 2. **Relax** through every vertex `k` in increasing order: for each
//!    `(i, j)` with both `table[i][k]` and `table[k][j]` present, replace
//!    `table[i][j]` when the sum is strictly lighter or `table[i][j]` is
//!    absent.  The new `prev_edge` is `table[k][j].prev_edge`, or
//!    `table[i][k].prev_edge` when the former is `None`.
//!
//! During stage `k`, row `k` and column `k` never change (the diagonal is 0
//! and weights are non-negative, so no candidate through `k` can be strictly
//! lighter).  Each stage therefore reads a copy of row `k` and relaxes the
//! other rows independently, which is what the `parallel` feature exploits.
//!
//! Build cost is O(V³); a query is a table lookup plus a backtrace.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use tc_core::{EdgeId, VertexId};

use crate::graph::DirectedWeightedGraph;
use crate::{RouterError, RouterResult};

/// Best known path to one destination: total weight and the last edge used.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RouteEntry {
    pub weight:    f64,
    pub prev_edge: Option<EdgeId>,
}

/// The result of a path query: total weight and edges in travel order.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteInfo {
    pub weight: f64,
    pub edges:  Vec<EdgeId>,
}

impl RouteInfo {
    /// `true` if source and destination are the same vertex.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AllPairsRouter {
    vertex_count: usize,
    table:        Vec<Option<RouteEntry>>,
}

impl AllPairsRouter {
    /// Precompute the table for `graph`.
    pub fn build(graph: &DirectedWeightedGraph) -> RouterResult<Self> {
        Self::build_inner(graph, None)
    }

    /// Like [`build`](Self::build), giving up with
    /// [`RouterError::DeadlineExceeded`] once `budget` has elapsed.  The clock
    /// is checked between relaxation stages.
    pub fn build_within(graph: &DirectedWeightedGraph, budget: Duration) -> RouterResult<Self> {
        Self::build_inner(graph, Some(Instant::now() + budget))
    }

    /// Restore a table produced earlier by [`build`](Self::build).
    ///
    /// `table` is row-major and must hold exactly `V × V` cells; every
    /// `prev_edge` must exist in `graph`.
    pub fn from_table(
        graph: &DirectedWeightedGraph,
        table: Vec<Option<RouteEntry>>,
    ) -> RouterResult<Self> {
        let vertex_count = graph.vertex_count();
        let expected = vertex_count * vertex_count;
        if table.len() != expected {
            return Err(RouterError::TableShape { expected, got: table.len() });
        }
        if let Some(edge) = table
            .iter()
            .flatten()
            .filter_map(|entry| entry.prev_edge)
            .find(|e| e.index() >= graph.edge_count())
        {
            return Err(RouterError::DanglingEdge(edge));
        }
        Ok(Self { vertex_count, table })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// The whole table, row-major.
    pub fn table(&self) -> &[Option<RouteEntry>] {
        &self.table
    }

    /// The table entry for `(from, to)`; `None` for no path or out-of-range
    /// vertices.
    pub fn entry(&self, from: VertexId, to: VertexId) -> Option<&RouteEntry> {
        if from.index() >= self.vertex_count || to.index() >= self.vertex_count {
            return None;
        }
        self.table[from.index() * self.vertex_count + to.index()].as_ref()
    }

    /// Lightest path from `from` to `to`, or `None` if there is none.
    ///
    /// Walks back from `to` along `prev_edge` records of row `from` until an
    /// entry without a predecessor is reached.
    pub fn build_route(
        &self,
        graph: &DirectedWeightedGraph,
        from: VertexId,
        to: VertexId,
    ) -> Option<RouteInfo> {
        let target = self.entry(from, to)?;
        let mut edges = Vec::new();
        let mut prev = target.prev_edge;
        while let Some(edge) = prev {
            // A well-formed table never revisits an edge; bail out rather
            // than loop on a corrupted one.
            if edges.len() > graph.edge_count() || edge.index() >= graph.edge_count() {
                return None;
            }
            edges.push(edge);
            prev = self.entry(from, graph.edge(edge).from)?.prev_edge;
        }
        edges.reverse();
        Some(RouteInfo { weight: target.weight, edges })
    }

    // ── Build internals ───────────────────────────────────────────────────

    fn build_inner(graph: &DirectedWeightedGraph, deadline: Option<Instant>) -> RouterResult<Self> {
        let started = Instant::now();
        let n = graph.vertex_count();
        let mut table: Vec<Option<RouteEntry>> = vec![None; n * n];

        debug!(vertices = n, edges = graph.edge_count(), "seeding routing table");
        for (v, row) in table.chunks_mut(n.max(1)).enumerate().take(n) {
            row[v] = Some(RouteEntry { weight: 0.0, prev_edge: None });
            for &edge_id in graph.incident_edges(VertexId(v as u32)) {
                let edge = graph.edge(edge_id);
                if !(edge.weight >= 0.0) {
                    return Err(RouterError::NegativeWeight { edge: edge_id, weight: edge.weight });
                }
                let cell = &mut row[edge.to.index()];
                if cell.is_none_or(|existing| existing.weight > edge.weight) {
                    *cell = Some(RouteEntry { weight: edge.weight, prev_edge: Some(edge_id) });
                }
            }
        }

        for through in 0..n {
            if let Some(deadline) = deadline {
                if Instant::now() >= deadline {
                    return Err(RouterError::DeadlineExceeded { completed: through, total: n });
                }
            }
            relax_through(&mut table, n, through);
        }

        info!(
            vertices = n,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "built all-pairs routing table"
        );
        Ok(Self { vertex_count: n, table })
    }
}

/// One relaxation stage through vertex `through`.
fn relax_through(table: &mut [Option<RouteEntry>], n: usize, through: usize) {
    let through_row: Vec<Option<RouteEntry>> = table[through * n..(through + 1) * n].to_vec();

    let relax_row = |(from, row): (usize, &mut [Option<RouteEntry>])| {
        if from == through {
            return;
        }
        let Some(route_from) = row[through] else {
            return;
        };
        for (cell, route_to) in row.iter_mut().zip(&through_row) {
            let Some(route_to) = route_to else {
                continue;
            };
            let candidate = route_from.weight + route_to.weight;
            if cell.is_none_or(|existing| candidate < existing.weight) {
                *cell = Some(RouteEntry {
                    weight:    candidate,
                    prev_edge: route_to.prev_edge.or(route_from.prev_edge),
                });
            }
        }
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        table.par_chunks_mut(n).enumerate().for_each(relax_row);
    }

    #[cfg(not(feature = "parallel"))]
    table.chunks_mut(n).enumerate().for_each(relax_row);
}
