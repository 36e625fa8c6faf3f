//! JSON request document.
//!
//! One document shape serves both modes; each mode reads the keys it needs
//! and ignores the rest.
//!
//! ```json
//! {
//!   "serialization_settings": { "file": "transport.db" },
//!   "routing_settings": { "bus_wait_time": 6, "bus_velocity": 40 },
//!   "render_settings": { "width": 1200, "color_palette": ["green", [255, 160, 0]] },
//!   "base_requests": [
//!     { "type": "Stop", "name": "A", "latitude": 55.6, "longitude": 37.2,
//!       "road_distances": { "B": 3900 } },
//!     { "type": "Bus", "name": "14", "stops": ["A", "B"], "is_roundtrip": false }
//!   ],
//!   "stat_requests": [
//!     { "id": 1, "type": "Bus", "name": "14" },
//!     { "id": 2, "type": "Stop", "name": "A" },
//!     { "id": 3, "type": "Route", "from": "A", "to": "B" },
//!     { "id": 4, "type": "Map" }
//!   ]
//! }
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use tc_core::{CoreResult, RenderSettings, RoutingSettings, SerializationSettings};

#[derive(Debug, Deserialize)]
pub struct RequestDocument {
    pub serialization_settings: SerializationSettings,

    #[serde(default)]
    pub routing_settings: RoutingSettingsInput,

    #[serde(default)]
    pub render_settings: RenderSettings,

    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,

    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

/// Routing settings as written in the document; validated by
/// [`RoutingSettingsInput::validate`].
#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct RoutingSettingsInput {
    pub bus_wait_time: u32,
    pub bus_velocity:  f64,
}

impl Default for RoutingSettingsInput {
    fn default() -> Self {
        let defaults = RoutingSettings::default();
        Self {
            bus_wait_time: defaults.bus_wait_time(),
            bus_velocity:  defaults.bus_velocity(),
        }
    }
}

impl RoutingSettingsInput {
    pub fn validate(self) -> CoreResult<RoutingSettings> {
        RoutingSettings::new(self.bus_wait_time, self.bus_velocity)
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop {
        name:      String,
        latitude:  f64,
        longitude: f64,
        #[serde(default)]
        road_distances: BTreeMap<String, u32>,
    },
    Bus {
        name:         String,
        stops:        Vec<String>,
        is_roundtrip: bool,
    },
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: i64, name: String },
    Stop { id: i64, name: String },
    Route { id: i64, from: String, to: String },
    Map { id: i64 },
}

impl StatRequest {
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Bus { id, .. }
            | StatRequest::Stop { id, .. }
            | StatRequest::Route { id, .. }
            | StatRequest::Map { id } => *id,
        }
    }
}
