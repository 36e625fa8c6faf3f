//! Catalogue entities.

use tc_core::{BusId, Coordinates, StopId};

/// A named, geo-located stop.
#[derive(Clone, Debug, PartialEq)]
pub struct Stop {
    pub id:          StopId,
    pub name:        String,
    pub coordinates: Coordinates,
}

/// A named bus route.
///
/// `stops` is always a closed walk: a linear route `A B C` is stored as
/// `A B C B A`, so every consumer can treat every route as circular.
#[derive(Clone, Debug, PartialEq)]
pub struct Bus {
    pub id:                BusId,
    pub name:              String,
    pub stops:             Vec<StopId>,
    pub is_roundtrip:      bool,
    pub stop_count:        usize,
    pub unique_stop_count: usize,
}

impl Bus {
    /// Turn the stop list as given by the input into a closed walk.
    ///
    /// Round trips are returned untouched; linear routes get the reverse of
    /// all but their last stop appended.
    pub fn close_walk(mut stops: Vec<StopId>, is_roundtrip: bool) -> Vec<StopId> {
        if !is_roundtrip && !stops.is_empty() {
            let back: Vec<StopId> = stops.iter().rev().skip(1).copied().collect();
            stops.extend(back);
        }
        stops
    }

    /// The prefix of the walk from which [`Bus::close_walk`] rebuilds the
    /// whole of it: everything for a round trip, the outbound half including
    /// the far terminal for a linear route.
    pub fn persisted_stops(&self) -> &[StopId] {
        if self.is_roundtrip {
            &self.stops
        } else {
            &self.stops[..self.stops.len() / 2 + 1]
        }
    }

    /// Index of the far terminal for a linear route, where the walk turns
    /// back.  `None` for round trips.
    pub fn turnaround(&self) -> Option<usize> {
        (!self.is_roundtrip).then_some(self.stops.len() / 2)
    }

    /// Consecutive `(from, to)` legs along the walk.
    pub fn legs(&self) -> impl Iterator<Item = (StopId, StopId)> + '_ {
        self.stops.windows(2).map(|w| (w[0], w[1]))
    }
}
