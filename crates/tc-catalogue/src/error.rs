//! Catalogue error type.

use thiserror::Error;

use tc_core::StopId;

/// Data-integrity violations detected while ingesting base data.
///
/// Query misses are never errors; they surface as `None` from the query
/// methods on [`TransportCatalogue`](crate::TransportCatalogue).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogueError {
    #[error("no stop {stop:?} in catalogue for bus {bus:?}")]
    UnknownStop { bus: String, stop: String },

    #[error("stop {0:?} not found to add distance")]
    UnknownDistanceOrigin(String),

    #[error("stop {to:?} not found to add distance from {from:?}")]
    UnknownDistanceTarget { from: String, to: String },

    #[error("{0} is not a stop id in this catalogue")]
    StopIdOutOfRange(StopId),

    #[error("bus {0:?} does not form a closed walk: first and last stop differ")]
    MalformedRoute(String),

    #[error("bus {0:?} has no stops")]
    EmptyRoute(String),

    #[error("bus {0:?} is already in the catalogue")]
    DuplicateBus(String),
}

pub type CatalogueResult<T> = Result<T, CatalogueError>;
