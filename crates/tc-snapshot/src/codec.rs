//! Conversion between in-memory state and snapshot bytes.
//!
//! Encoding cannot fail.  Decoding validates every cross-reference before
//! handing anything back: a payload either restores completely or is
//! rejected with a [`SnapshotError`].

use prost::Message;
use tracing::{debug, info};

use tc_catalogue::TransportCatalogue;
use tc_core::{
    BusId, Color, Coordinates, EdgeId, Point, RenderSettings, RoutingSettings, StopId, VertexId,
};
use tc_router::{
    AllPairsRouter, DirectedWeightedGraph, Edge, EdgeKind, RouteEntry, RouterError, TransitGraph,
    TransportRouter,
};

use crate::proto::{
    BusPb, ColorPb, DistancePb, EdgeKindPb, EdgePb, GraphPb, IncidenceListPb, PointPb,
    RenderSettingsPb, RgbPb, RgbaPb, RideEdgePb, RouterPb, RoutingSettingsPb, SnapshotPb, StopPb,
    TableCellPb, TableRowPb, WaitEdgePb, color_pb, edge_kind_pb,
};
use crate::{SnapshotError, SnapshotResult};

/// Everything the query phase needs, restored from one snapshot.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub catalogue:       TransportCatalogue,
    pub render_settings: RenderSettings,
    pub router:          TransportRouter,
}

fn corrupt(msg: impl Into<String>) -> SnapshotError {
    SnapshotError::Corrupt(msg.into())
}

// ── Encode ────────────────────────────────────────────────────────────────────

/// Serialize the catalogue, render settings and compiled router.
pub fn encode(
    catalogue: &TransportCatalogue,
    render_settings: &RenderSettings,
    router: &TransportRouter,
) -> Vec<u8> {
    let message = SnapshotPb {
        stops: catalogue
            .stops()
            .iter()
            .map(|s| StopPb {
                id:   s.id.0,
                name: s.name.clone(),
                lat:  s.coordinates.lat,
                lng:  s.coordinates.lng,
            })
            .collect(),
        buses: catalogue
            .buses()
            .iter()
            .map(|b| BusPb {
                name:         b.name.clone(),
                is_roundtrip: b.is_roundtrip,
                stop_ids:     b.persisted_stops().iter().map(|s| s.0).collect(),
            })
            .collect(),
        distances: catalogue
            .distances()
            .into_iter()
            .map(|(from, to, metres)| DistancePb { from: from.0, to: to.0, metres })
            .collect(),
        render_settings: Some(render_settings_to_pb(render_settings)),
        router: Some(router_to_pb(router)),
    };

    let bytes = message.encode_to_vec();
    debug!(
        stops = message.stops.len(),
        buses = message.buses.len(),
        bytes = bytes.len(),
        "encoded snapshot"
    );
    bytes
}

fn point_to_pb(p: Point) -> PointPb {
    PointPb { x: p.x, y: p.y }
}

fn color_to_pb(color: &Color) -> ColorPb {
    let kind = match color {
        Color::Named(name) => color_pb::Kind::Named(name.clone()),
        Color::Rgb(r, g, b) => color_pb::Kind::Rgb(RgbPb {
            red:   u32::from(*r),
            green: u32::from(*g),
            blue:  u32::from(*b),
        }),
        Color::Rgba(r, g, b, a) => color_pb::Kind::Rgba(RgbaPb {
            red:     u32::from(*r),
            green:   u32::from(*g),
            blue:    u32::from(*b),
            opacity: *a,
        }),
    };
    ColorPb { kind: Some(kind) }
}

fn render_settings_to_pb(rs: &RenderSettings) -> RenderSettingsPb {
    RenderSettingsPb {
        width:                rs.width,
        height:               rs.height,
        padding:              rs.padding,
        line_width:           rs.line_width,
        stop_radius:          rs.stop_radius,
        bus_label_font_size:  rs.bus_label_font_size,
        bus_label_offset:     Some(point_to_pb(rs.bus_label_offset)),
        stop_label_font_size: rs.stop_label_font_size,
        stop_label_offset:    Some(point_to_pb(rs.stop_label_offset)),
        underlayer_color:     Some(color_to_pb(&rs.underlayer_color)),
        underlayer_width:     rs.underlayer_width,
        color_palette:        rs.color_palette.iter().map(color_to_pb).collect(),
    }
}

fn router_to_pb(router: &TransportRouter) -> RouterPb {
    let graph = router.graph();
    let graph_pb = GraphPb {
        edges: graph
            .edges()
            .iter()
            .map(|e| EdgePb { from: e.from.0, to: e.to.0, weight: e.weight })
            .collect(),
        incidence_lists: graph
            .incidence_lists()
            .iter()
            .map(|list| IncidenceListPb { edge_ids: list.iter().map(|e| e.0).collect() })
            .collect(),
        edge_kinds: router
            .edge_kinds()
            .iter()
            .map(|kind| EdgeKindPb {
                kind: Some(match *kind {
                    EdgeKind::Wait { stop } => {
                        edge_kind_pb::Kind::Wait(WaitEdgePb { stop_id: stop.0 })
                    }
                    EdgeKind::Ride { bus, span } => {
                        edge_kind_pb::Kind::Ride(RideEdgePb { bus_id: bus.0, span })
                    }
                }),
            })
            .collect(),
    };

    let table = router.all_pairs();
    let width = table.vertex_count().max(1);
    let rows = table
        .table()
        .chunks(width)
        .map(|row| TableRowPb {
            cells: row
                .iter()
                .map(|cell| match cell {
                    Some(entry) => TableCellPb {
                        present:   true,
                        weight:    entry.weight,
                        prev_edge: entry.prev_edge.map(|e| e.0),
                    },
                    None => TableCellPb { present: false, weight: 0.0, prev_edge: None },
                })
                .collect(),
        })
        .collect();

    let settings = router.settings();
    RouterPb {
        graph:    Some(graph_pb),
        table:    rows,
        settings: Some(RoutingSettingsPb {
            bus_wait_time: settings.bus_wait_time(),
            bus_velocity:  settings.bus_velocity(),
        }),
    }
}

// ── Decode ────────────────────────────────────────────────────────────────────

/// Restore a snapshot produced by [`encode`].
pub fn decode(bytes: &[u8]) -> SnapshotResult<Snapshot> {
    let message = SnapshotPb::decode(bytes)?;

    let catalogue = catalogue_from_pb(&message)?;
    let render_settings = message
        .render_settings
        .as_ref()
        .ok_or_else(|| corrupt("missing render settings"))
        .and_then(render_settings_from_pb)?;
    let router = message
        .router
        .ok_or_else(|| corrupt("missing router"))
        .and_then(|pb| router_from_pb(pb, &catalogue))?;

    info!(
        stops = catalogue.stop_count(),
        buses = catalogue.bus_count(),
        vertices = router.graph().vertex_count(),
        "decoded snapshot"
    );
    Ok(Snapshot { catalogue, render_settings, router })
}

fn catalogue_from_pb(message: &SnapshotPb) -> SnapshotResult<TransportCatalogue> {
    let mut catalogue = TransportCatalogue::new();

    for (position, stop) in message.stops.iter().enumerate() {
        let id = catalogue.add_stop(stop.name.clone(), Coordinates::new(stop.lat, stop.lng));
        if id.index() != position || id.0 != stop.id {
            return Err(corrupt(format!(
                "stop {:?} stored with id {} at position {position}",
                stop.name, stop.id
            )));
        }
    }

    for bus in &message.buses {
        let stops = bus.stop_ids.iter().copied().map(StopId).collect();
        catalogue.add_bus_with_ids(bus.name.clone(), stops, bus.is_roundtrip)?;
    }

    for d in &message.distances {
        catalogue.set_distance(StopId(d.from), StopId(d.to), d.metres)?;
    }

    Ok(catalogue)
}

fn channel(value: u32) -> SnapshotResult<u8> {
    u8::try_from(value).map_err(|_| corrupt(format!("colour channel {value} exceeds 255")))
}

fn color_from_pb(pb: &ColorPb) -> SnapshotResult<Color> {
    match &pb.kind {
        Some(color_pb::Kind::Named(name)) => Ok(Color::Named(name.clone())),
        Some(color_pb::Kind::Rgb(c)) => {
            Ok(Color::Rgb(channel(c.red)?, channel(c.green)?, channel(c.blue)?))
        }
        Some(color_pb::Kind::Rgba(c)) => Ok(Color::Rgba(
            channel(c.red)?,
            channel(c.green)?,
            channel(c.blue)?,
            c.opacity,
        )),
        None => Err(corrupt("colour without a value")),
    }
}

fn point_from_pb(pb: Option<&PointPb>, field: &str) -> SnapshotResult<Point> {
    pb.map(|p| Point::new(p.x, p.y))
        .ok_or_else(|| corrupt(format!("missing {field}")))
}

fn render_settings_from_pb(pb: &RenderSettingsPb) -> SnapshotResult<RenderSettings> {
    Ok(RenderSettings {
        width:                pb.width,
        height:               pb.height,
        padding:              pb.padding,
        line_width:           pb.line_width,
        stop_radius:          pb.stop_radius,
        bus_label_font_size:  pb.bus_label_font_size,
        bus_label_offset:     point_from_pb(pb.bus_label_offset.as_ref(), "bus_label_offset")?,
        stop_label_font_size: pb.stop_label_font_size,
        stop_label_offset:    point_from_pb(pb.stop_label_offset.as_ref(), "stop_label_offset")?,
        underlayer_color:     pb
            .underlayer_color
            .as_ref()
            .ok_or_else(|| corrupt("missing underlayer_color"))
            .and_then(color_from_pb)?,
        underlayer_width:     pb.underlayer_width,
        color_palette:        pb
            .color_palette
            .iter()
            .map(color_from_pb)
            .collect::<SnapshotResult<_>>()?,
    })
}

fn router_from_pb(pb: RouterPb, catalogue: &TransportCatalogue) -> SnapshotResult<TransportRouter> {
    let settings = pb.settings.ok_or_else(|| corrupt("missing routing settings"))?;
    let settings = RoutingSettings::new(settings.bus_wait_time, settings.bus_velocity)?;

    let graph_pb = pb.graph.ok_or_else(|| corrupt("missing routing graph"))?;
    let vertex_count = graph_pb.incidence_lists.len();
    if vertex_count != catalogue.stop_count() * 2 {
        return Err(corrupt(format!(
            "graph has {vertex_count} vertices for {} stops",
            catalogue.stop_count()
        )));
    }

    let edges = graph_pb
        .edges
        .iter()
        .map(|e| Edge { from: VertexId(e.from), to: VertexId(e.to), weight: e.weight })
        .collect();
    let incidence = graph_pb
        .incidence_lists
        .into_iter()
        .map(|list| list.edge_ids.into_iter().map(EdgeId).collect())
        .collect();
    let graph = DirectedWeightedGraph::from_parts(edges, incidence)?;

    if graph_pb.edge_kinds.len() != graph.edge_count() {
        return Err(RouterError::EdgeKindCount {
            expected: graph.edge_count(),
            got:      graph_pb.edge_kinds.len(),
        }
        .into());
    }
    let kinds = graph_pb
        .edge_kinds
        .iter()
        .zip(graph.edges())
        .map(|(pb, edge)| edge_kind_from_pb(pb, edge, catalogue))
        .collect::<SnapshotResult<Vec<_>>>()?;

    if pb.table.len() != vertex_count {
        return Err(corrupt(format!(
            "routing table has {} rows for {vertex_count} vertices",
            pb.table.len()
        )));
    }
    let mut table = Vec::with_capacity(vertex_count * vertex_count);
    for (from, row) in pb.table.into_iter().enumerate() {
        if row.cells.len() != vertex_count {
            return Err(corrupt(format!(
                "routing table row {from} has {} cells, expected {vertex_count}",
                row.cells.len()
            )));
        }
        table.extend(row.cells.into_iter().map(|cell| {
            cell.present.then(|| RouteEntry {
                weight:    cell.weight,
                prev_edge: cell.prev_edge.map(EdgeId),
            })
        }));
    }
    let all_pairs = AllPairsRouter::from_table(&graph, table)?;

    Ok(TransportRouter::from_parts(settings, TransitGraph { graph, kinds }, all_pairs)?)
}

/// Resolve a stored edge kind and check that it fits the edge it labels:
/// a wait edge joins the arrival and departure vertices of its stop, a ride
/// edge leaves a departure vertex for an arrival vertex at least one stop on.
fn edge_kind_from_pb(
    pb: &EdgeKindPb,
    edge: &Edge,
    catalogue: &TransportCatalogue,
) -> SnapshotResult<EdgeKind> {
    match &pb.kind {
        Some(edge_kind_pb::Kind::Wait(w)) => {
            let stop = StopId(w.stop_id);
            if catalogue.stop(stop).is_none() {
                return Err(corrupt(format!("wait edge refers to unknown {stop}")));
            }
            if edge.from != stop.arrival_vertex() || edge.to != stop.departure_vertex() {
                return Err(corrupt(format!(
                    "wait edge of {stop} runs {} -> {}",
                    edge.from, edge.to
                )));
            }
            Ok(EdgeKind::Wait { stop })
        }
        Some(edge_kind_pb::Kind::Ride(r)) => {
            let bus = BusId(r.bus_id);
            if catalogue.bus(bus).is_none() {
                return Err(corrupt(format!("ride edge refers to unknown {bus}")));
            }
            if r.span == 0 {
                return Err(corrupt(format!("ride edge of {bus} spans no stops")));
            }
            if edge.from.0 % 2 != 1 || edge.to.0 % 2 != 0 {
                return Err(corrupt(format!(
                    "ride edge of {bus} runs {} -> {}",
                    edge.from, edge.to
                )));
            }
            Ok(EdgeKind::Ride { bus, span: r.span })
        }
        None => Err(corrupt("edge without a kind")),
    }
}
