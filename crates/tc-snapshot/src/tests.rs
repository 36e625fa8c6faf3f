//! Unit tests for tc-snapshot.

#[cfg(test)]
mod helpers {
    use tc_catalogue::TransportCatalogue;
    use tc_core::{Color, Coordinates, RenderSettings, RoutingSettings};
    use tc_router::TransportRouter;

    /// Linear "1" A-B-C, linear "2" C-D, round trip "ring" A-B-D-A, plus an
    /// unserved stop and a duplicated stop name.
    pub fn catalogue() -> TransportCatalogue {
        let mut tc = TransportCatalogue::new();
        tc.add_stop("A", Coordinates::new(55.60, 37.20));
        tc.add_stop("B", Coordinates::new(55.61, 37.21));
        tc.add_stop("C", Coordinates::new(55.62, 37.20));
        tc.add_stop("D", Coordinates::new(55.63, 37.22));
        tc.add_stop("Depot", Coordinates::new(55.70, 37.30));
        tc.add_stop("Depot", Coordinates::new(55.71, 37.31));
        tc.add_distances("A", [("B", 1_500), ("D", 4_000)]).unwrap();
        tc.add_distances("B", [("A", 1_700), ("C", 1_200), ("D", 2_600)]).unwrap();
        tc.add_distances("C", [("D", 900)]).unwrap();
        tc.add_bus("1", &["A", "B", "C"], false).unwrap();
        tc.add_bus("2", &["C", "D"], false).unwrap();
        tc.add_bus("ring", &["A", "B", "D", "A"], true).unwrap();
        tc
    }

    pub fn render_settings() -> RenderSettings {
        RenderSettings {
            width: 600.0,
            underlayer_color: Color::Rgba(10, 20, 30, 0.5),
            color_palette: vec![Color::Named("blue".to_owned()), Color::Rgb(1, 2, 3)],
            ..RenderSettings::default()
        }
    }

    pub fn router(tc: &TransportCatalogue) -> TransportRouter {
        TransportRouter::build(tc, RoutingSettings::new(4, 36.0).unwrap()).unwrap()
    }

    pub fn stop_names(tc: &TransportCatalogue) -> Vec<String> {
        tc.stops().iter().map(|s| s.name.clone()).collect()
    }
}

// ── Codec ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod codec {
    use approx::assert_relative_eq;
    use prost::Message;

    use crate::proto::{
        ColorPb, EdgeKindPb, RgbPb, RideEdgePb, SnapshotPb, WaitEdgePb, color_pb, edge_kind_pb,
    };
    use crate::{SnapshotError, decode, encode};

    use super::helpers;

    #[test]
    fn restored_state_answers_queries_identically() {
        let tc = helpers::catalogue();
        let router = helpers::router(&tc);
        let bytes = encode(&tc, &helpers::render_settings(), &router);
        let snap = decode(&bytes).unwrap();

        for bus in tc.buses() {
            let before = tc.route_stats(&bus.name).unwrap();
            let after = snap.catalogue.route_stats(&bus.name).unwrap();
            assert_eq!(before.stop_count, after.stop_count);
            assert_eq!(before.unique_stop_count, after.unique_stop_count);
            assert_eq!(before.real_length, after.real_length);
            assert_relative_eq!(before.geo_length, after.geo_length);
        }

        let names = helpers::stop_names(&tc);
        for name in &names {
            assert_eq!(tc.stop_stats(name), snap.catalogue.stop_stats(name), "stop {name}");
        }
        for from in &names {
            for to in &names {
                assert_eq!(
                    router.route(&tc, from, to),
                    snap.router.route(&snap.catalogue, from, to),
                    "{from} -> {to}"
                );
            }
        }
        assert!(tc.route_stats("missing").is_none());
        assert!(snap.catalogue.route_stats("missing").is_none());
    }

    #[test]
    fn router_state_is_restored_verbatim() {
        let tc = helpers::catalogue();
        let router = helpers::router(&tc);
        let snap = decode(&encode(&tc, &helpers::render_settings(), &router)).unwrap();

        assert_eq!(snap.router.settings(), router.settings());
        assert_eq!(snap.router.graph(), router.graph());
        assert_eq!(snap.router.edge_kinds(), router.edge_kinds());
        assert_eq!(snap.router.all_pairs(), router.all_pairs());
        assert_eq!(snap.render_settings, helpers::render_settings());
    }

    #[test]
    fn catalogue_ids_and_walks_survive() {
        let tc = helpers::catalogue();
        let snap = decode(&encode(&tc, &helpers::render_settings(), &helpers::router(&tc))).unwrap();

        assert_eq!(snap.catalogue.stops(), tc.stops());
        assert_eq!(snap.catalogue.buses(), tc.buses());
        assert_eq!(snap.catalogue.distances(), tc.distances());
        // Last write still owns the duplicated name.
        assert_eq!(snap.catalogue.find_stop("Depot").unwrap().id.0, 5);
    }

    #[test]
    fn linear_routes_store_only_the_outbound_half() {
        let tc = helpers::catalogue();
        let bytes = encode(&tc, &helpers::render_settings(), &helpers::router(&tc));
        let message = SnapshotPb::decode(bytes.as_slice()).unwrap();

        let line = &message.buses[0];
        assert_eq!(line.name, "1");
        assert_eq!(line.stop_ids, vec![0, 1, 2]);
        let ring = &message.buses[2];
        assert_eq!(ring.stop_ids, vec![0, 1, 3, 0]);
    }

    #[test]
    fn empty_catalogue_round_trips() {
        let tc = tc_catalogue::TransportCatalogue::new();
        let router = helpers::router(&tc);
        let snap = decode(&encode(&tc, &helpers::render_settings(), &router)).unwrap();
        assert_eq!(snap.catalogue.stop_count(), 0);
        assert_eq!(snap.router.graph().vertex_count(), 0);
    }

    #[test]
    fn truncated_payload_is_rejected() {
        let tc = helpers::catalogue();
        let bytes = encode(&tc, &helpers::render_settings(), &helpers::router(&tc));
        assert!(matches!(
            decode(&bytes[..bytes.len() - 1]),
            Err(SnapshotError::Decode(_))
        ));
    }

    #[test]
    fn missing_sections_are_corrupt() {
        assert!(matches!(decode(&[]), Err(SnapshotError::Corrupt(_))));

        let tc = helpers::catalogue();
        let bytes = encode(&tc, &helpers::render_settings(), &helpers::router(&tc));
        let mut message = SnapshotPb::decode(bytes.as_slice()).unwrap();
        message.router = None;
        assert!(matches!(
            decode(&message.encode_to_vec()),
            Err(SnapshotError::Corrupt(_))
        ));
    }

    #[test]
    fn dangling_references_are_rejected() {
        let tc = helpers::catalogue();
        let bytes = encode(&tc, &helpers::render_settings(), &helpers::router(&tc));
        let original = SnapshotPb::decode(bytes.as_slice()).unwrap();

        let mut bad_bus = original.clone();
        bad_bus.buses[0].stop_ids.push(99);
        assert!(matches!(
            decode(&bad_bus.encode_to_vec()),
            Err(SnapshotError::Catalogue(_))
        ));

        let mut bad_table = original.clone();
        bad_table.router.as_mut().unwrap().table[0].cells.pop();
        assert!(matches!(
            decode(&bad_table.encode_to_vec()),
            Err(SnapshotError::Corrupt(_))
        ));

        let mut bad_colour = original.clone();
        bad_colour.render_settings.as_mut().unwrap().color_palette[0] = ColorPb {
            kind: Some(color_pb::Kind::Rgb(RgbPb { red: 256, green: 0, blue: 0 })),
        };
        assert!(matches!(
            decode(&bad_colour.encode_to_vec()),
            Err(SnapshotError::Corrupt(_))
        ));

        let mut bad_settings = original;
        bad_settings.router.as_mut().unwrap().settings.as_mut().unwrap().bus_wait_time = 0;
        assert!(matches!(
            decode(&bad_settings.encode_to_vec()),
            Err(SnapshotError::Core(_))
        ));
    }

    #[test]
    fn edge_kinds_must_match_their_edges() {
        let tc = helpers::catalogue();
        let bytes = encode(&tc, &helpers::render_settings(), &helpers::router(&tc));
        let original = SnapshotPb::decode(bytes.as_slice()).unwrap();
        fn kinds(message: &mut SnapshotPb) -> &mut Vec<EdgeKindPb> {
            &mut message.router.as_mut().unwrap().graph.as_mut().unwrap().edge_kinds
        }

        // Edge 0 is the wait edge of stop A; relabel it as a wait at B.
        let mut wrong_stop = original.clone();
        kinds(&mut wrong_stop)[0] = EdgeKindPb {
            kind: Some(edge_kind_pb::Kind::Wait(WaitEdgePb { stop_id: 1 })),
        };
        assert!(matches!(
            decode(&wrong_stop.encode_to_vec()),
            Err(SnapshotError::Corrupt(_))
        ));

        // Edge 1 is the ride A -> B; a wait label does not fit it.
        let mut wait_on_ride = original.clone();
        kinds(&mut wait_on_ride)[1] = EdgeKindPb {
            kind: Some(edge_kind_pb::Kind::Wait(WaitEdgePb { stop_id: 0 })),
        };
        assert!(matches!(
            decode(&wait_on_ride.encode_to_vec()),
            Err(SnapshotError::Corrupt(_))
        ));

        let mut zero_span = original.clone();
        kinds(&mut zero_span)[1] = EdgeKindPb {
            kind: Some(edge_kind_pb::Kind::Ride(RideEdgePb { bus_id: 0, span: 0 })),
        };
        assert!(matches!(
            decode(&zero_span.encode_to_vec()),
            Err(SnapshotError::Corrupt(_))
        ));

        // Edge 0 joins two vertices of the same stop; a ride label does not fit it.
        let mut ride_on_wait = original.clone();
        kinds(&mut ride_on_wait)[0] = EdgeKindPb {
            kind: Some(edge_kind_pb::Kind::Ride(RideEdgePb { bus_id: 0, span: 1 })),
        };
        assert!(matches!(
            decode(&ride_on_wait.encode_to_vec()),
            Err(SnapshotError::Corrupt(_))
        ));

        let mut missing_kind = original;
        kinds(&mut missing_kind).pop();
        assert!(matches!(
            decode(&missing_kind.encode_to_vec()),
            Err(SnapshotError::Router(_))
        ));
    }
}

// ── Files ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod file {
    use tempfile::TempDir;

    use crate::{SnapshotError, load, save};

    use super::helpers;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn save_then_load() {
        let dir = tmp();
        let path = dir.path().join("base.pb");
        let tc = helpers::catalogue();
        let router = helpers::router(&tc);

        save(&path, &tc, &helpers::render_settings(), &router).unwrap();
        let snap = load(&path).unwrap();
        assert_eq!(snap.router.route(&snap.catalogue, "A", "D"), router.route(&tc, "A", "D"));
    }

    #[test]
    fn save_replaces_existing_file() {
        let dir = tmp();
        let path = dir.path().join("base.pb");
        std::fs::write(&path, b"stale").unwrap();

        let tc = helpers::catalogue();
        save(&path, &tc, &helpers::render_settings(), &helpers::router(&tc)).unwrap();
        assert_eq!(load(&path).unwrap().catalogue.bus_count(), 3);
        // Only the snapshot itself is left behind.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn missing_file_fails() {
        let dir = tmp();
        assert!(matches!(load(&dir.path().join("absent.pb")), Err(SnapshotError::Io(_))));
    }

    #[test]
    fn unwritable_destination_fails() {
        let dir = tmp();
        let path = dir.path().join("no_such_dir").join("base.pb");
        let tc = helpers::catalogue();
        assert!(matches!(
            save(&path, &tc, &helpers::render_settings(), &helpers::router(&tc)),
            Err(SnapshotError::Io(_))
        ));
    }
}
