//! Routing and serialization settings.
//!
//! `RoutingSettings` fields are private so that every value in circulation
//! has passed range validation; construct with [`RoutingSettings::new`] or
//! adjust with the setters.

use std::path::PathBuf;

use crate::{CoreError, CoreResult};

const MIN_SETTING: u32 = 1;
const MAX_SETTING: u32 = 1_000;

// ── RoutingSettings ───────────────────────────────────────────────────────────

/// Boarding delay and bus speed used when compiling the routing graph.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RoutingSettings {
    /// Minutes a passenger waits at a stop before every boarding.
    bus_wait_time: u32,
    /// Bus speed in km/h.
    bus_velocity: f64,
}

impl RoutingSettings {
    pub fn new(bus_wait_time: u32, bus_velocity: f64) -> CoreResult<Self> {
        let mut settings = Self::default();
        settings.set_bus_wait_time(bus_wait_time)?;
        settings.set_bus_velocity(bus_velocity)?;
        Ok(settings)
    }

    pub fn set_bus_wait_time(&mut self, minutes: u32) -> CoreResult<()> {
        if !(MIN_SETTING..=MAX_SETTING).contains(&minutes) {
            return Err(CoreError::WaitTimeOutOfRange(minutes));
        }
        self.bus_wait_time = minutes;
        Ok(())
    }

    /// Rejects NaN as well as values outside `1..=1000`.
    pub fn set_bus_velocity(&mut self, km_per_hour: f64) -> CoreResult<()> {
        if !(MIN_SETTING as f64..=MAX_SETTING as f64).contains(&km_per_hour) {
            return Err(CoreError::VelocityOutOfRange(km_per_hour));
        }
        self.bus_velocity = km_per_hour;
        Ok(())
    }

    #[inline]
    pub fn bus_wait_time(&self) -> u32 {
        self.bus_wait_time
    }

    #[inline]
    pub fn bus_velocity(&self) -> f64 {
        self.bus_velocity
    }

    /// Bus speed in metres per minute, the unit ride edges are weighted in.
    #[inline]
    pub fn velocity_m_per_min(&self) -> f64 {
        self.bus_velocity * 1_000.0 / 60.0
    }
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self { bus_wait_time: 6, bus_velocity: 40.0 }
    }
}

// ── SerializationSettings ─────────────────────────────────────────────────────

/// Where the build phase writes the snapshot and the query phase reads it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SerializationSettings {
    pub file: PathBuf,
}
