//! Unit tests for tc-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, StopId, VertexId};

    #[test]
    fn index_matches_inner_value() {
        assert_eq!(StopId(42).index(), 42);
        assert_eq!(EdgeId(0).index(), 0);
    }

    #[test]
    fn ordering() {
        assert!(StopId(0) < StopId(1));
        assert!(EdgeId(100) > EdgeId(99));
    }

    #[test]
    fn display() {
        assert_eq!(StopId(7).to_string(), "StopId(7)");
    }

    #[test]
    fn vertex_split() {
        assert_eq!(StopId(0).arrival_vertex(), VertexId(0));
        assert_eq!(StopId(0).departure_vertex(), VertexId(1));
        assert_eq!(StopId(3).arrival_vertex(), VertexId(6));
        assert_eq!(StopId(3).departure_vertex(), VertexId(7));
    }
}

#[cfg(test)]
mod geo {
    use approx::assert_relative_eq;

    use crate::Coordinates;

    #[test]
    fn zero_distance() {
        let p = Coordinates::new(55.611087, 37.208290);
        assert_eq!(p.distance_m(p), 0.0);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111.2 km
        let a = Coordinates::new(30.0, -88.0);
        let b = Coordinates::new(31.0, -88.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 50.0, "got {d}");
    }

    #[test]
    fn symmetric() {
        let a = Coordinates::new(55.595884, 37.209755);
        let b = Coordinates::new(55.632761, 37.333324);
        assert_relative_eq!(a.distance_m(b), b.distance_m(a), max_relative = 1e-12);
    }
}

#[cfg(test)]
mod settings {
    use approx::assert_relative_eq;

    use crate::{CoreError, RoutingSettings};

    #[test]
    fn accepts_bounds() {
        assert!(RoutingSettings::new(1, 1.0).is_ok());
        assert!(RoutingSettings::new(1_000, 1_000.0).is_ok());
    }

    #[test]
    fn rejects_wait_time_out_of_range() {
        assert_eq!(RoutingSettings::new(0, 40.0), Err(CoreError::WaitTimeOutOfRange(0)));
        assert_eq!(
            RoutingSettings::new(1_001, 40.0),
            Err(CoreError::WaitTimeOutOfRange(1_001))
        );
    }

    #[test]
    fn rejects_velocity_out_of_range() {
        assert!(matches!(
            RoutingSettings::new(6, 0.5),
            Err(CoreError::VelocityOutOfRange(_))
        ));
        assert!(matches!(
            RoutingSettings::new(6, 1_000.5),
            Err(CoreError::VelocityOutOfRange(_))
        ));
        assert!(RoutingSettings::new(6, f64::NAN).is_err());
    }

    #[test]
    fn failed_setter_keeps_previous_value() {
        let mut s = RoutingSettings::new(5, 30.0).unwrap();
        assert!(s.set_bus_wait_time(0).is_err());
        assert_eq!(s.bus_wait_time(), 5);
    }

    #[test]
    fn velocity_conversion() {
        let s = RoutingSettings::new(6, 60.0).unwrap();
        // 60 km/h = 1 km per minute
        assert_relative_eq!(s.velocity_m_per_min(), 1_000.0);
    }
}

#[cfg(test)]
mod render {
    use crate::{Color, RenderSettings};

    #[test]
    fn color_display() {
        assert_eq!(Color::Named("red".into()).to_string(), "red");
        assert_eq!(Color::Rgb(1, 2, 3).to_string(), "rgb(1,2,3)");
        assert_eq!(Color::Rgba(1, 2, 3, 0.5).to_string(), "rgba(1,2,3,0.5)");
    }

    #[test]
    fn default_palette_has_three_colors() {
        assert_eq!(RenderSettings::default().color_palette.len(), 3);
    }
}
