//! On-disk schema.
//!
//! Field order of [`SnapshotPb`] follows the order the sections are needed
//! on load: stops first (every other section refers to them by id), then
//! buses, distances, render settings and finally the router.
//!
//! Tags are part of the file format.  Never renumber a field; add new ones
//! with fresh tags.

use prost::Message;

#[derive(Clone, PartialEq, Message)]
pub struct SnapshotPb {
    /// In id order; the loader reassigns ids by position.
    #[prost(message, repeated, tag = "1")]
    pub stops: Vec<StopPb>,

    /// In id order.
    #[prost(message, repeated, tag = "2")]
    pub buses: Vec<BusPb>,

    #[prost(message, repeated, tag = "3")]
    pub distances: Vec<DistancePb>,

    #[prost(message, optional, tag = "4")]
    pub render_settings: Option<RenderSettingsPb>,

    #[prost(message, optional, tag = "5")]
    pub router: Option<RouterPb>,
}

// ── Catalogue ─────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, Message)]
pub struct StopPb {
    #[prost(uint32, tag = "1")]
    pub id: u32,

    #[prost(string, tag = "2")]
    pub name: String,

    #[prost(double, tag = "3")]
    pub lat: f64,

    #[prost(double, tag = "4")]
    pub lng: f64,
}

#[derive(Clone, PartialEq, Message)]
pub struct BusPb {
    #[prost(string, tag = "1")]
    pub name: String,

    #[prost(bool, tag = "2")]
    pub is_roundtrip: bool,

    /// The whole walk for a round trip; only the outbound half, far terminal
    /// included, for a linear route.
    #[prost(uint32, repeated, tag = "3")]
    pub stop_ids: Vec<u32>,
}

/// One directed road distance.
#[derive(Clone, PartialEq, Message)]
pub struct DistancePb {
    #[prost(uint32, tag = "1")]
    pub from: u32,

    #[prost(uint32, tag = "2")]
    pub to: u32,

    #[prost(uint32, tag = "3")]
    pub metres: u32,
}

// ── Render settings ───────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, Message)]
pub struct RenderSettingsPb {
    #[prost(double, tag = "1")]
    pub width: f64,

    #[prost(double, tag = "2")]
    pub height: f64,

    #[prost(double, tag = "3")]
    pub padding: f64,

    #[prost(double, tag = "4")]
    pub line_width: f64,

    #[prost(double, tag = "5")]
    pub stop_radius: f64,

    #[prost(uint32, tag = "6")]
    pub bus_label_font_size: u32,

    #[prost(message, optional, tag = "7")]
    pub bus_label_offset: Option<PointPb>,

    #[prost(uint32, tag = "8")]
    pub stop_label_font_size: u32,

    #[prost(message, optional, tag = "9")]
    pub stop_label_offset: Option<PointPb>,

    #[prost(message, optional, tag = "10")]
    pub underlayer_color: Option<ColorPb>,

    #[prost(double, tag = "11")]
    pub underlayer_width: f64,

    #[prost(message, repeated, tag = "12")]
    pub color_palette: Vec<ColorPb>,
}

#[derive(Clone, PartialEq, Message)]
pub struct PointPb {
    #[prost(double, tag = "1")]
    pub x: f64,

    #[prost(double, tag = "2")]
    pub y: f64,
}

#[derive(Clone, PartialEq, Message)]
pub struct ColorPb {
    #[prost(oneof = "color_pb::Kind", tags = "1, 2, 3")]
    pub kind: Option<color_pb::Kind>,
}

pub mod color_pb {
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Kind {
        #[prost(string, tag = "1")]
        Named(String),

        #[prost(message, tag = "2")]
        Rgb(super::RgbPb),

        #[prost(message, tag = "3")]
        Rgba(super::RgbaPb),
    }
}

/// Channels are stored as `uint32` (protobuf has no byte scalar) and must
/// fit in a `u8` on load.
#[derive(Clone, PartialEq, Message)]
pub struct RgbPb {
    #[prost(uint32, tag = "1")]
    pub red: u32,

    #[prost(uint32, tag = "2")]
    pub green: u32,

    #[prost(uint32, tag = "3")]
    pub blue: u32,
}

#[derive(Clone, PartialEq, Message)]
pub struct RgbaPb {
    #[prost(uint32, tag = "1")]
    pub red: u32,

    #[prost(uint32, tag = "2")]
    pub green: u32,

    #[prost(uint32, tag = "3")]
    pub blue: u32,

    #[prost(double, tag = "4")]
    pub opacity: f64,
}

// ── Router ────────────────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, Message)]
pub struct RouterPb {
    #[prost(message, optional, tag = "1")]
    pub graph: Option<GraphPb>,

    /// One row per vertex, `vertex_count` cells each.
    #[prost(message, repeated, tag = "2")]
    pub table: Vec<TableRowPb>,

    #[prost(message, optional, tag = "3")]
    pub settings: Option<RoutingSettingsPb>,
}

#[derive(Clone, PartialEq, Message)]
pub struct GraphPb {
    #[prost(message, repeated, tag = "1")]
    pub edges: Vec<EdgePb>,

    /// One list per vertex; its length is the vertex count.
    #[prost(message, repeated, tag = "2")]
    pub incidence_lists: Vec<IncidenceListPb>,

    /// Parallel to `edges`.
    #[prost(message, repeated, tag = "3")]
    pub edge_kinds: Vec<EdgeKindPb>,
}

#[derive(Clone, PartialEq, Message)]
pub struct EdgePb {
    #[prost(uint32, tag = "1")]
    pub from: u32,

    #[prost(uint32, tag = "2")]
    pub to: u32,

    #[prost(double, tag = "3")]
    pub weight: f64,
}

#[derive(Clone, PartialEq, Message)]
pub struct IncidenceListPb {
    #[prost(uint32, repeated, tag = "1")]
    pub edge_ids: Vec<u32>,
}

#[derive(Clone, PartialEq, Message)]
pub struct EdgeKindPb {
    #[prost(oneof = "edge_kind_pb::Kind", tags = "1, 2")]
    pub kind: Option<edge_kind_pb::Kind>,
}

pub mod edge_kind_pb {
    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Kind {
        #[prost(message, tag = "1")]
        Wait(super::WaitEdgePb),

        #[prost(message, tag = "2")]
        Ride(super::RideEdgePb),
    }
}

#[derive(Clone, PartialEq, Message)]
pub struct WaitEdgePb {
    #[prost(uint32, tag = "1")]
    pub stop_id: u32,
}

#[derive(Clone, PartialEq, Message)]
pub struct RideEdgePb {
    #[prost(uint32, tag = "1")]
    pub bus_id: u32,

    #[prost(uint32, tag = "2")]
    pub span: u32,
}

#[derive(Clone, PartialEq, Message)]
pub struct TableRowPb {
    #[prost(message, repeated, tag = "1")]
    pub cells: Vec<TableCellPb>,
}

/// One `(from, to)` cell.  Absent cells are stored with `present = false`
/// so that every row keeps its full width.
#[derive(Clone, PartialEq, Message)]
pub struct TableCellPb {
    #[prost(bool, tag = "1")]
    pub present: bool,

    #[prost(double, tag = "2")]
    pub weight: f64,

    #[prost(uint32, optional, tag = "3")]
    pub prev_edge: Option<u32>,
}

#[derive(Clone, PartialEq, Message)]
pub struct RoutingSettingsPb {
    #[prost(uint32, tag = "1")]
    pub bus_wait_time: u32,

    #[prost(double, tag = "2")]
    pub bus_velocity: f64,
}
