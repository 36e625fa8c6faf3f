//! The transport catalogue: owner of every stop and bus.
//!
//! # Indices
//!
//! | Index          | Maps                              | Notes                          |
//! |----------------|-----------------------------------|--------------------------------|
//! | `stop_index`   | stop name → `StopId`              | last write wins                |
//! | `bus_index`    | bus name → `BusId`                | duplicates rejected            |
//! | `stop_buses`   | `StopId` → buses serving it       | indexed by `StopId`            |
//! | `distances`    | `(StopId, StopId)` → metres       | directional, see below         |
//!
//! # Road distances
//!
//! The distance table is asymmetric.  A lookup of `(a, b)` uses the stored
//! `(a, b)` entry if there is one, else the stored `(b, a)` entry, else 0.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, warn};

use tc_core::{BusId, Coordinates, StopId};

use crate::domain::{Bus, Stop};
use crate::stats::{RouteStats, StopStats};
use crate::{CatalogueError, CatalogueResult};

#[derive(Clone, Debug, Default)]
pub struct TransportCatalogue {
    stops:      Vec<Stop>,
    buses:      Vec<Bus>,
    stop_index: FxHashMap<String, StopId>,
    bus_index:  FxHashMap<String, BusId>,
    stop_buses: Vec<Vec<BusId>>,
    distances:  FxHashMap<(StopId, StopId), u32>,
}

impl TransportCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Ingestion ─────────────────────────────────────────────────────────

    /// Add a stop and return its id (sequential from 0).
    ///
    /// Stop names are not checked for uniqueness: a second stop with an
    /// existing name gets its own id and takes over the name index.
    pub fn add_stop(&mut self, name: impl Into<String>, coordinates: Coordinates) -> StopId {
        let name = name.into();
        let id = StopId(self.stops.len() as u32);
        if let Some(previous) = self.stop_index.insert(name.clone(), id) {
            warn!(stop = %name, %previous, %id, "duplicate stop name, index now points at the newer stop");
        }
        debug!(stop = %name, %id, %coordinates, "added stop");
        self.stops.push(Stop { id, name, coordinates });
        self.stop_buses.push(Vec::new());
        id
    }

    /// Add a bus over stops given by name.
    ///
    /// Fails without modifying the catalogue if any stop name is unknown.
    pub fn add_bus<S: AsRef<str>>(
        &mut self,
        name: impl Into<String>,
        stop_names: &[S],
        is_roundtrip: bool,
    ) -> CatalogueResult<BusId> {
        let name = name.into();
        let stops = stop_names
            .iter()
            .map(|stop| {
                self.find_stop(stop.as_ref()).map(|s| s.id).ok_or_else(|| {
                    CatalogueError::UnknownStop {
                        bus:  name.clone(),
                        stop: stop.as_ref().to_owned(),
                    }
                })
            })
            .collect::<CatalogueResult<Vec<StopId>>>()?;
        self.add_bus_with_ids(name, stops, is_roundtrip)
    }

    /// Add a bus over stops given by id.
    ///
    /// `stops` is the route as the input describes it; linear routes are
    /// closed here exactly as in [`add_bus`](Self::add_bus).
    pub fn add_bus_with_ids(
        &mut self,
        name: impl Into<String>,
        stops: Vec<StopId>,
        is_roundtrip: bool,
    ) -> CatalogueResult<BusId> {
        let name = name.into();
        if self.bus_index.contains_key(&name) {
            return Err(CatalogueError::DuplicateBus(name));
        }
        if let Some(&bad) = stops.iter().find(|s| s.index() >= self.stops.len()) {
            return Err(CatalogueError::StopIdOutOfRange(bad));
        }

        let walk = Bus::close_walk(stops, is_roundtrip);
        match (walk.first(), walk.last()) {
            (None, _) | (_, None) => return Err(CatalogueError::EmptyRoute(name)),
            (Some(first), Some(last)) if first != last => {
                return Err(CatalogueError::MalformedRoute(name));
            }
            _ => {}
        }

        let unique_stop_count = walk
            .iter()
            .map(|s| self.stops[s.index()].name.as_str())
            .collect::<FxHashSet<_>>()
            .len();

        let id = BusId(self.buses.len() as u32);
        for stop in &walk {
            let serving = &mut self.stop_buses[stop.index()];
            if !serving.contains(&id) {
                serving.push(id);
            }
        }

        debug!(bus = %name, %id, stops = walk.len(), is_roundtrip, "added bus");
        self.bus_index.insert(name.clone(), id);
        self.buses.push(Bus {
            id,
            name,
            stop_count: walk.len(),
            unique_stop_count,
            stops: walk,
            is_roundtrip,
        });
        Ok(id)
    }

    /// Record road distances from `from` to each named neighbour.
    ///
    /// All names are resolved before anything is written, so a failure
    /// leaves the table untouched.  Existing entries are overwritten.
    pub fn add_distances<'n, I>(&mut self, from: &str, distances: I) -> CatalogueResult<()>
    where
        I: IntoIterator<Item = (&'n str, u32)>,
    {
        let origin = self
            .find_stop(from)
            .map(|s| s.id)
            .ok_or_else(|| CatalogueError::UnknownDistanceOrigin(from.to_owned()))?;

        let resolved = distances
            .into_iter()
            .map(|(to, metres)| {
                self.find_stop(to).map(|s| (s.id, metres)).ok_or_else(|| {
                    CatalogueError::UnknownDistanceTarget {
                        from: from.to_owned(),
                        to:   to.to_owned(),
                    }
                })
            })
            .collect::<CatalogueResult<Vec<_>>>()?;

        for (target, metres) in resolved {
            self.distances.insert((origin, target), metres);
        }
        Ok(())
    }

    /// Record one directed road distance by stop id.
    pub fn set_distance(&mut self, from: StopId, to: StopId, metres: u32) -> CatalogueResult<()> {
        for id in [from, to] {
            if id.index() >= self.stops.len() {
                return Err(CatalogueError::StopIdOutOfRange(id));
            }
        }
        self.distances.insert((from, to), metres);
        Ok(())
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn find_stop(&self, name: &str) -> Option<&Stop> {
        self.stop_index.get(name).map(|id| &self.stops[id.index()])
    }

    pub fn find_bus(&self, name: &str) -> Option<&Bus> {
        self.bus_index.get(name).map(|id| &self.buses[id.index()])
    }

    pub fn stop(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(id.index())
    }

    pub fn bus(&self, id: BusId) -> Option<&Bus> {
        self.buses.get(id.index())
    }

    /// All stops in id order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// All buses in id order.
    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }

    /// Every stored directed distance as `(from, to, metres)`, sorted by
    /// `(from, to)` so that callers see a stable order.
    pub fn distances(&self) -> Vec<(StopId, StopId, u32)> {
        let mut entries: Vec<_> = self
            .distances
            .iter()
            .map(|(&(from, to), &metres)| (from, to, metres))
            .collect();
        entries.sort_unstable_by_key(|&(from, to, _)| (from, to));
        entries
    }

    // ── Distances ─────────────────────────────────────────────────────────

    /// Great-circle distance between two stops, metres.
    pub fn geo_distance(&self, from: StopId, to: StopId) -> f64 {
        self.stops[from.index()]
            .coordinates
            .distance_m(self.stops[to.index()].coordinates)
    }

    /// Road distance from `from` to `to`, falling back to the reverse entry,
    /// then to 0.
    pub fn real_distance(&self, from: StopId, to: StopId) -> u32 {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
            .unwrap_or(0)
    }

    /// Road distance of every consecutive leg along the bus's walk.
    /// Length is `bus.stops.len() - 1`.
    pub fn bus_real_distances(&self, bus: &Bus) -> Vec<u32> {
        bus.legs().map(|(a, b)| self.real_distance(a, b)).collect()
    }

    /// Coordinates of the bus's walk in order, for map rendering.
    pub fn bus_coordinates(&self, bus: &Bus) -> Vec<Coordinates> {
        bus.stops
            .iter()
            .map(|s| self.stops[s.index()].coordinates)
            .collect()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Length, stop counts and curvature of a bus.  `None` if unknown.
    pub fn route_stats(&self, name: &str) -> Option<RouteStats> {
        let bus = self.find_bus(name)?;

        let (geo_length, real_length) = bus.legs().fold((0.0, 0u64), |(geo, real), (a, b)| {
            (geo + self.geo_distance(a, b), real + u64::from(self.real_distance(a, b)))
        });

        Some(RouteStats {
            stop_count:        bus.stop_count,
            unique_stop_count: bus.unique_stop_count,
            geo_length,
            real_length,
            curvature:         real_length as f64 / geo_length,
        })
    }

    /// Names of the buses serving a stop, sorted.  `None` if unknown.
    pub fn stop_stats(&self, name: &str) -> Option<StopStats<'_>> {
        let stop = self.find_stop(name)?;
        let mut buses: Vec<&str> = self.stop_buses[stop.id.index()]
            .iter()
            .map(|b| self.buses[b.index()].name.as_str())
            .collect();
        buses.sort_unstable();
        Some(StopStats { buses })
    }

    /// Buses serving a stop, in bus id order.
    pub fn buses_at(&self, stop: StopId) -> &[BusId] {
        self.stop_buses
            .get(stop.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All buses sorted by name.
    pub fn all_buses(&self) -> Vec<&Bus> {
        let mut buses: Vec<&Bus> = self.buses.iter().collect();
        buses.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        buses
    }

    /// Stops served by at least one bus, sorted by name.
    pub fn all_served_stops(&self) -> Vec<&Stop> {
        let mut stops: Vec<&Stop> = self
            .stops
            .iter()
            .filter(|s| !self.stop_buses[s.id.index()].is_empty())
            .collect();
        stops.sort_by(|a, b| a.name.cmp(&b.name));
        stops
    }
}
