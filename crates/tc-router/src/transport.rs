//! Stop-to-stop itineraries over the compiled transit graph.
//!
//! `TransportRouter` owns the compiled graph, its edge kinds and the
//! all-pairs table.  It does not own the catalogue; queries borrow it to
//! resolve stop names and to name the legs of the itinerary.

use std::time::Duration;

use tracing::info;

use tc_catalogue::TransportCatalogue;
use tc_core::RoutingSettings;

use crate::all_pairs::AllPairsRouter;
use crate::builder::{EdgeKind, TransitGraph, TransitGraphBuilder};
use crate::graph::DirectedWeightedGraph;
use crate::{RouterError, RouterResult};

/// One leg of an itinerary.  Times are in minutes.
#[derive(Clone, Debug, PartialEq)]
pub enum RouteItem<'a> {
    Wait { stop_name: &'a str, time: f64 },
    Bus { bus_name: &'a str, span_count: u32, time: f64 },
}

impl RouteItem<'_> {
    pub fn time(&self) -> f64 {
        match self {
            RouteItem::Wait { time, .. } | RouteItem::Bus { time, .. } => *time,
        }
    }
}

/// The fastest way from one stop to another.
#[derive(Clone, Debug, PartialEq)]
pub struct Itinerary<'a> {
    /// Sum of the item times, minutes.
    pub total_time: f64,
    pub items:      Vec<RouteItem<'a>>,
}

#[derive(Clone, Debug)]
pub struct TransportRouter {
    settings: RoutingSettings,
    graph:    TransitGraph,
    router:   AllPairsRouter,
}

impl TransportRouter {
    /// Compile `catalogue` and precompute every fastest path.
    pub fn build(catalogue: &TransportCatalogue, settings: RoutingSettings) -> RouterResult<Self> {
        let graph = TransitGraphBuilder::new(catalogue, settings).build()?;
        let router = AllPairsRouter::build(&graph.graph)?;
        Ok(Self { settings, graph, router })
    }

    /// Like [`build`](Self::build) with a wall-clock budget for the table.
    pub fn build_within(
        catalogue: &TransportCatalogue,
        settings: RoutingSettings,
        budget: Duration,
    ) -> RouterResult<Self> {
        let graph = TransitGraphBuilder::new(catalogue, settings).build()?;
        let router = AllPairsRouter::build_within(&graph.graph, budget)?;
        Ok(Self { settings, graph, router })
    }

    /// Reassemble a router from previously computed parts without
    /// recompiling anything.
    pub fn from_parts(
        settings: RoutingSettings,
        graph: TransitGraph,
        router: AllPairsRouter,
    ) -> RouterResult<Self> {
        let edges = graph.graph.edge_count();
        if graph.kinds.len() != edges {
            return Err(RouterError::EdgeKindCount { expected: edges, got: graph.kinds.len() });
        }
        let vertices = graph.graph.vertex_count();
        if router.vertex_count() != vertices {
            return Err(RouterError::TableShape {
                expected: vertices * vertices,
                got:      router.table().len(),
            });
        }
        info!(vertices, edges, "restored transport router");
        Ok(Self { settings, graph, router })
    }

    pub fn settings(&self) -> RoutingSettings {
        self.settings
    }

    pub fn graph(&self) -> &DirectedWeightedGraph {
        &self.graph.graph
    }

    pub fn edge_kinds(&self) -> &[EdgeKind] {
        &self.graph.kinds
    }

    pub fn all_pairs(&self) -> &AllPairsRouter {
        &self.router
    }

    /// Fastest itinerary between two stops, by name.
    ///
    /// `None` when either stop is unknown, either stop is served by no bus,
    /// or no path exists.  A stop routed to itself yields an empty itinerary.
    pub fn route<'c>(
        &self,
        catalogue: &'c TransportCatalogue,
        from: &str,
        to: &str,
    ) -> Option<Itinerary<'c>> {
        let from = catalogue.find_stop(from)?;
        let to = catalogue.find_stop(to)?;
        if catalogue.buses_at(from.id).is_empty() || catalogue.buses_at(to.id).is_empty() {
            return None;
        }

        let info = self.router.build_route(
            &self.graph.graph,
            from.id.arrival_vertex(),
            to.id.arrival_vertex(),
        )?;

        let items = info
            .edges
            .iter()
            .map(|&edge| {
                let time = self.graph.graph.edge(edge).weight;
                Some(match self.graph.kinds[edge.index()] {
                    EdgeKind::Wait { stop } => RouteItem::Wait {
                        stop_name: catalogue.stop(stop)?.name.as_str(),
                        time,
                    },
                    EdgeKind::Ride { bus, span } => RouteItem::Bus {
                        bus_name:   catalogue.bus(bus)?.name.as_str(),
                        span_count: span,
                        time,
                    },
                })
            })
            .collect::<Option<Vec<_>>>()?;

        let total_time = items.iter().map(RouteItem::time).sum();
        Some(Itinerary { total_time, items })
    }
}
