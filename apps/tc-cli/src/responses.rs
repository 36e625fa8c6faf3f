//! JSON response shapes, one per stat request.

use serde::Serialize;

use tc_router::{Itinerary, RouteItem};

pub const NOT_FOUND: &str = "not found";

#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Response {
    Bus {
        request_id:        i64,
        curvature:         f64,
        route_length:      u64,
        stop_count:        usize,
        unique_stop_count: usize,
    },
    Stop {
        request_id: i64,
        buses:      Vec<String>,
    },
    Route {
        request_id: i64,
        total_time: f64,
        items:      Vec<ItemResponse>,
    },
    Error {
        request_id:    i64,
        error_message: String,
    },
}

impl Response {
    pub fn not_found(request_id: i64) -> Self {
        Response::Error { request_id, error_message: NOT_FOUND.to_owned() }
    }

    pub fn route(request_id: i64, itinerary: &Itinerary<'_>) -> Self {
        Response::Route {
            request_id,
            total_time: itinerary.total_time,
            items: itinerary.items.iter().map(ItemResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "type")]
pub enum ItemResponse {
    Wait { stop_name: String, time: f64 },
    Bus { bus: String, span_count: u32, time: f64 },
}

impl From<&RouteItem<'_>> for ItemResponse {
    fn from(item: &RouteItem<'_>) -> Self {
        match *item {
            RouteItem::Wait { stop_name, time } => {
                ItemResponse::Wait { stop_name: stop_name.to_owned(), time }
            }
            RouteItem::Bus { bus_name, span_count, time } => {
                ItemResponse::Bus { bus: bus_name.to_owned(), span_count, time }
            }
        }
    }
}
