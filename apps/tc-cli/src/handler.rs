//! Applies a request document to the catalogue and the router.

use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use tc_catalogue::TransportCatalogue;
use tc_core::{Coordinates, RoutingSettings};
use tc_router::TransportRouter;
use tc_snapshot::Snapshot;

use crate::requests::{BaseRequest, StatRequest};
use crate::responses::Response;

const MAP_UNSUPPORTED: &str = "map rendering is not supported";

/// Build a catalogue from base requests.
///
/// Stops go in first, sorted by name so that ids do not depend on request
/// order; then road distances; then buses, also sorted by name.
pub fn ingest(requests: &[BaseRequest]) -> Result<TransportCatalogue> {
    let mut stops = Vec::new();
    let mut buses = Vec::new();
    for request in requests {
        match request {
            BaseRequest::Stop { .. } => stops.push(request),
            BaseRequest::Bus { .. } => buses.push(request),
        }
    }
    stops.sort_by(|a, b| request_name(a).cmp(request_name(b)));
    buses.sort_by(|a, b| request_name(a).cmp(request_name(b)));

    let mut catalogue = TransportCatalogue::new();
    for request in &stops {
        if let BaseRequest::Stop { name, latitude, longitude, .. } = request {
            catalogue.add_stop(name.as_str(), Coordinates::new(*latitude, *longitude));
        }
    }
    for request in &stops {
        if let BaseRequest::Stop { name, road_distances, .. } = request {
            catalogue
                .add_distances(name, road_distances.iter().map(|(to, &m)| (to.as_str(), m)))
                .with_context(|| format!("road distances of stop {name:?}"))?;
        }
    }
    for request in &buses {
        if let BaseRequest::Bus { name, stops, is_roundtrip } = request {
            catalogue
                .add_bus(name.as_str(), stops, *is_roundtrip)
                .with_context(|| format!("bus {name:?}"))?;
        }
    }

    debug!(
        stops = catalogue.stop_count(),
        buses = catalogue.bus_count(),
        "ingested base requests"
    );
    Ok(catalogue)
}

/// Compile the router, giving up on the table once `deadline` has elapsed.
pub fn compile(
    catalogue: &TransportCatalogue,
    settings: RoutingSettings,
    deadline: Option<Duration>,
) -> Result<TransportRouter> {
    let router = match deadline {
        Some(budget) => TransportRouter::build_within(catalogue, settings, budget),
        None => TransportRouter::build(catalogue, settings),
    };
    router.context("compiling router")
}

fn request_name(request: &BaseRequest) -> &str {
    match request {
        BaseRequest::Stop { name, .. } | BaseRequest::Bus { name, .. } => name,
    }
}

/// Answer stat requests in order.  Misses become "not found" responses.
pub fn answer(snapshot: &Snapshot, requests: &[StatRequest]) -> Vec<Response> {
    let catalogue = &snapshot.catalogue;
    requests
        .iter()
        .map(|request| {
            let request_id = request.id();
            let response = match request {
                StatRequest::Bus { name, .. } => catalogue.route_stats(name).map(|stats| {
                    Response::Bus {
                        request_id,
                        curvature: stats.curvature,
                        route_length: stats.real_length,
                        stop_count: stats.stop_count,
                        unique_stop_count: stats.unique_stop_count,
                    }
                }),
                StatRequest::Stop { name, .. } => {
                    catalogue.stop_stats(name).map(|stats| Response::Stop {
                        request_id,
                        buses: stats.buses.into_iter().map(str::to_owned).collect(),
                    })
                }
                StatRequest::Route { from, to, .. } => snapshot
                    .router
                    .route(catalogue, from, to)
                    .map(|itinerary| Response::route(request_id, &itinerary)),
                StatRequest::Map { .. } => {
                    warn!(request_id, "map request answered with an error");
                    Some(Response::Error {
                        request_id,
                        error_message: MAP_UNSUPPORTED.to_owned(),
                    })
                }
            };
            response.unwrap_or_else(|| Response::not_found(request_id))
        })
        .collect()
}
