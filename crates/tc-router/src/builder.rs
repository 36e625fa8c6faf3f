//! Compiles catalogue buses into the routing graph.
//!
//! # Vertex splitting
//!
//! Stop `s` becomes arrival vertex `2s` and departure vertex `2s + 1`.
//! For every position along a bus's walk the builder adds:
//!
//! - one **wait edge** `arrival(s) → departure(s)` weighted by the boarding
//!   delay, and
//! - one **ride edge** `departure(s) → arrival(t)` for every later stop `t`
//!   on the same walk, weighted by the cumulative road distance divided by
//!   bus speed.
//!
//! A bus therefore contributes a quadratic number of ride edges, and any
//! single-bus trip resolves to exactly one ride edge in the all-pairs table.
//!
//! Linear routes are compiled as two independent halves (outbound and
//! inbound), each restarting its distance accumulation at its first stop.

use tracing::{debug, info};

use tc_catalogue::TransportCatalogue;
use tc_core::{BusId, RoutingSettings, StopId};

use crate::graph::{DirectedWeightedGraph, Edge};
use crate::RouterResult;

/// What an edge of the transit graph stands for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EdgeKind {
    /// Boarding delay at `stop`.
    Wait { stop: StopId },
    /// Riding `bus` for `span` stops.
    Ride { bus: BusId, span: u32 },
}

/// The compiled graph plus one [`EdgeKind`] per edge, indexed by `EdgeId`.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitGraph {
    pub graph: DirectedWeightedGraph,
    pub kinds: Vec<EdgeKind>,
}

pub struct TransitGraphBuilder<'a> {
    catalogue: &'a TransportCatalogue,
    settings:  RoutingSettings,
    graph:     DirectedWeightedGraph,
    kinds:     Vec<EdgeKind>,
}

impl<'a> TransitGraphBuilder<'a> {
    pub fn new(catalogue: &'a TransportCatalogue, settings: RoutingSettings) -> Self {
        Self {
            catalogue,
            settings,
            graph: DirectedWeightedGraph::new(catalogue.stop_count() * 2),
            kinds: Vec::new(),
        }
    }

    /// Compile every bus, in name order, and return the finished graph.
    pub fn build(mut self) -> RouterResult<TransitGraph> {
        let catalogue = self.catalogue;
        for bus in catalogue.all_buses() {
            let legs = catalogue.bus_real_distances(bus);
            let before = self.graph.edge_count();
            match bus.turnaround() {
                None => self.add_segment(bus.id, &bus.stops, &legs)?,
                Some(mid) => {
                    self.add_segment(bus.id, &bus.stops[..=mid], &legs[..mid])?;
                    self.add_segment(bus.id, &bus.stops[mid..], &legs[mid..])?;
                }
            }
            debug!(bus = %bus.name, edges = self.graph.edge_count() - before, "compiled bus");
        }

        info!(
            vertices = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            "compiled routing graph"
        );
        Ok(TransitGraph { graph: self.graph, kinds: self.kinds })
    }

    /// `legs[k]` is the road distance from `stops[k]` to `stops[k + 1]`.
    fn add_segment(&mut self, bus: BusId, stops: &[StopId], legs: &[u32]) -> RouterResult<()> {
        let wait = f64::from(self.settings.bus_wait_time());
        let velocity = self.settings.velocity_m_per_min();

        for (i, &stop) in stops.iter().enumerate() {
            self.push(
                Edge { from: stop.arrival_vertex(), to: stop.departure_vertex(), weight: wait },
                EdgeKind::Wait { stop },
            )?;

            let mut metres = 0u64;
            for (j, &next) in stops.iter().enumerate().skip(i + 1) {
                metres += u64::from(legs[j - 1]);
                self.push(
                    Edge {
                        from:   stop.departure_vertex(),
                        to:     next.arrival_vertex(),
                        weight: metres as f64 / velocity,
                    },
                    EdgeKind::Ride { bus, span: (j - i) as u32 },
                )?;
            }
        }
        Ok(())
    }

    fn push(&mut self, edge: Edge, kind: EdgeKind) -> RouterResult<()> {
        self.graph.add_edge(edge)?;
        self.kinds.push(kind);
        Ok(())
    }
}
