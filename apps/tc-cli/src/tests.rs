//! Request parsing and end-to-end answering.

#[cfg(test)]
mod helpers {
    use tc_router::TransportRouter;
    use tc_snapshot::{Snapshot, decode, encode};

    use crate::handler;
    use crate::requests::RequestDocument;

    pub const DOCUMENT: &str = r#"{
        "serialization_settings": { "file": "transport.db" },
        "routing_settings": { "bus_wait_time": 5, "bus_velocity": 60 },
        "render_settings": { "width": 600, "bus_label_offset": [7, 15],
                             "color_palette": ["green", [255, 160, 0], [255, 200, 23, 0.85]] },
        "base_requests": [
            { "type": "Bus", "name": "1", "stops": ["A", "B", "C"], "is_roundtrip": false },
            { "type": "Stop", "name": "C", "latitude": 0.0, "longitude": 2.0 },
            { "type": "Stop", "name": "B", "latitude": 0.0, "longitude": 1.0,
              "road_distances": { "C": 1000 } },
            { "type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0,
              "road_distances": { "B": 1000 } },
            { "type": "Stop", "name": "Z", "latitude": 1.0, "longitude": 1.0 }
        ],
        "stat_requests": [
            { "id": 1, "type": "Bus", "name": "1" },
            { "id": 2, "type": "Bus", "name": "404" },
            { "id": 3, "type": "Stop", "name": "B" },
            { "id": 4, "type": "Stop", "name": "Z" },
            { "id": 5, "type": "Stop", "name": "Nowhere" },
            { "id": 6, "type": "Route", "from": "A", "to": "C" },
            { "id": 7, "type": "Route", "from": "A", "to": "Z" },
            { "id": 8, "type": "Map" }
        ]
    }"#;

    pub fn document() -> RequestDocument {
        serde_json::from_str(DOCUMENT).unwrap()
    }

    /// Runs the build phase in memory and restores it the way `serve` would.
    pub fn snapshot(doc: &RequestDocument) -> Snapshot {
        let settings = doc.routing_settings.validate().unwrap();
        let catalogue = handler::ingest(&doc.base_requests).unwrap();
        let router = TransportRouter::build(&catalogue, settings).unwrap();
        decode(&encode(&catalogue, &doc.render_settings, &router)).unwrap()
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod parsing {
    use tc_core::{Color, Point};

    use crate::requests::{BaseRequest, RequestDocument, RoutingSettingsInput, StatRequest};

    #[test]
    fn full_document() {
        let doc = super::helpers::document();
        assert_eq!(doc.serialization_settings.file.to_str(), Some("transport.db"));
        assert_eq!(doc.routing_settings, RoutingSettingsInput { bus_wait_time: 5, bus_velocity: 60.0 });
        assert_eq!(doc.base_requests.len(), 5);
        assert_eq!(doc.stat_requests.len(), 8);
        assert_eq!(
            doc.stat_requests[5],
            StatRequest::Route { id: 6, from: "A".to_owned(), to: "C".to_owned() }
        );
    }

    #[test]
    fn stop_without_distances() {
        let doc = super::helpers::document();
        let BaseRequest::Stop { name, road_distances, .. } = &doc.base_requests[4] else {
            panic!("expected a stop");
        };
        assert_eq!(name, "Z");
        assert!(road_distances.is_empty());
    }

    #[test]
    fn render_settings_fill_defaults() {
        let doc = super::helpers::document();
        let rs = &doc.render_settings;
        assert_eq!(rs.width, 600.0);
        assert_eq!(rs.height, 1_200.0);
        assert_eq!(rs.bus_label_offset, Point::new(7.0, 15.0));
        assert_eq!(
            rs.color_palette,
            vec![
                Color::Named("green".to_owned()),
                Color::Rgb(255, 160, 0),
                Color::Rgba(255, 200, 23, 0.85),
            ]
        );
    }

    #[test]
    fn missing_optional_sections() {
        let doc: RequestDocument =
            serde_json::from_str(r#"{ "serialization_settings": { "file": "x.db" } }"#).unwrap();
        assert!(doc.base_requests.is_empty());
        assert!(doc.stat_requests.is_empty());
        let settings = doc.routing_settings.validate().unwrap();
        assert_eq!(settings.bus_wait_time(), 6);
        assert_eq!(settings.bus_velocity(), 40.0);
    }

    #[test]
    fn out_of_range_routing_settings_rejected() {
        let input = RoutingSettingsInput { bus_wait_time: 0, bus_velocity: 40.0 };
        assert!(input.validate().is_err());
        let input = RoutingSettingsInput { bus_wait_time: 6, bus_velocity: 1_001.0 };
        assert!(input.validate().is_err());
    }

    #[test]
    fn unknown_request_type_rejected() {
        let parsed: Result<StatRequest, _> =
            serde_json::from_str(r#"{ "id": 1, "type": "Tram", "name": "x" }"#);
        assert!(parsed.is_err());
    }
}

// ── Ingestion ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ingestion {
    use crate::handler;
    use crate::requests::BaseRequest;

    #[test]
    fn stops_get_ids_in_name_order() {
        let doc = super::helpers::document();
        let tc = handler::ingest(&doc.base_requests).unwrap();
        let names: Vec<&str> = tc.stops().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C", "Z"]);
    }

    #[test]
    fn bus_over_unknown_stop_fails() {
        let requests = vec![BaseRequest::Bus {
            name:         "9".to_owned(),
            stops:        vec!["Ghost".to_owned()],
            is_roundtrip: false,
        }];
        let err = handler::ingest(&requests).unwrap_err();
        assert!(format!("{err:#}").contains("Ghost"));
    }
}

// ── Compiling ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod compiling {
    use std::time::Duration;

    use clap::Parser;
    use tc_router::RouterError;

    use crate::handler;
    use crate::{Args, Mode};

    #[test]
    fn deadline_flag_is_parsed() {
        let args = Args::try_parse_from(["transit-catalogue", "build", "--deadline-secs", "30"])
            .unwrap();
        assert!(matches!(args.mode, Mode::Build { deadline_secs: Some(30), input: None }));

        let args = Args::try_parse_from(["transit-catalogue", "make_base"]).unwrap();
        assert!(matches!(args.mode, Mode::Build { deadline_secs: None, .. }));
    }

    #[test]
    fn exhausted_deadline_fails_the_build() {
        let doc = super::helpers::document();
        let settings = doc.routing_settings.validate().unwrap();
        let catalogue = handler::ingest(&doc.base_requests).unwrap();

        let err = handler::compile(&catalogue, settings, Some(Duration::ZERO)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RouterError>(),
            Some(RouterError::DeadlineExceeded { completed: 0, .. })
        ));

        let bounded = handler::compile(&catalogue, settings, Some(Duration::from_secs(60))).unwrap();
        let unbounded = handler::compile(&catalogue, settings, None).unwrap();
        assert_eq!(bounded.all_pairs(), unbounded.all_pairs());
    }
}

// ── Answers ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod answers {
    use serde_json::json;

    use crate::handler;
    use crate::responses::{ItemResponse, Response};

    #[test]
    fn every_request_answered_in_order() {
        let doc = super::helpers::document();
        let snapshot = super::helpers::snapshot(&doc);
        let responses = handler::answer(&snapshot, &doc.stat_requests);

        let ids: Vec<i64> = responses
            .iter()
            .map(|r| match r {
                Response::Bus { request_id, .. }
                | Response::Stop { request_id, .. }
                | Response::Route { request_id, .. }
                | Response::Error { request_id, .. } => *request_id,
            })
            .collect();
        assert_eq!(ids, [1, 2, 3, 4, 5, 6, 7, 8]);

        assert!(matches!(
            responses[0],
            Response::Bus { route_length: 4_000, stop_count: 5, unique_stop_count: 3, .. }
        ));
        assert_eq!(responses[1], Response::not_found(2));
        assert_eq!(responses[2], Response::Stop { request_id: 3, buses: vec!["1".to_owned()] });
        assert_eq!(responses[3], Response::Stop { request_id: 4, buses: vec![] });
        assert_eq!(responses[4], Response::not_found(5));
        assert_eq!(
            responses[5],
            Response::Route {
                request_id: 6,
                total_time: 7.0,
                items:      vec![
                    ItemResponse::Wait { stop_name: "A".to_owned(), time: 5.0 },
                    ItemResponse::Bus { bus: "1".to_owned(), span_count: 2, time: 2.0 },
                ],
            }
        );
        // Z exists but no bus stops there.
        assert_eq!(responses[6], Response::not_found(7));
        assert!(matches!(responses[7], Response::Error { request_id: 8, .. }));
    }

    #[test]
    fn response_json_shape() {
        let doc = super::helpers::document();
        let snapshot = super::helpers::snapshot(&doc);
        let responses = handler::answer(&snapshot, &doc.stat_requests);

        assert_eq!(
            serde_json::to_value(&responses[1]).unwrap(),
            json!({ "request_id": 2, "error_message": "not found" })
        );
        assert_eq!(
            serde_json::to_value(&responses[5]).unwrap(),
            json!({
                "request_id": 6,
                "total_time": 7.0,
                "items": [
                    { "type": "Wait", "stop_name": "A", "time": 5.0 },
                    { "type": "Bus", "bus": "1", "span_count": 2, "time": 2.0 }
                ]
            })
        );
        let bus = serde_json::to_value(&responses[0]).unwrap();
        assert_eq!(bus["route_length"], json!(4_000));
        assert!(bus["curvature"].as_f64().unwrap() > 0.0);
    }
}
