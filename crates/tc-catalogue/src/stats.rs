//! Query results returned by the catalogue.

/// Statistics of one bus route, computed along its closed walk.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteStats {
    pub stop_count:        usize,
    pub unique_stop_count: usize,
    /// Sum of great-circle leg lengths, metres.
    pub geo_length:        f64,
    /// Sum of road distances, metres.
    pub real_length:       u64,
    /// `real_length / geo_length`.  NaN or infinite when `geo_length` is 0.
    pub curvature:         f64,
}

/// Buses serving one stop, sorted by name.
///
/// An existing stop served by no bus has an empty list; an unknown stop has
/// no `StopStats` at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StopStats<'a> {
    pub buses: Vec<&'a str>,
}
