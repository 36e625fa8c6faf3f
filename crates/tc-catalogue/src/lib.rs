//! `tc-catalogue` — the in-memory transit data model.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`domain`]    | `Stop`, `Bus`, closed-walk normalization                   |
//! | [`catalogue`] | `TransportCatalogue` (entities, indices, distance table)   |
//! | [`stats`]     | `RouteStats`, `StopStats` query results                    |
//! | [`error`]     | `CatalogueError`, `CatalogueResult<T>`                     |
//!
//! Every entity is owned by the catalogue and referenced elsewhere by its
//! dense id (`StopId`, `BusId`).

pub mod catalogue;
pub mod domain;
pub mod error;
pub mod stats;


pub use catalogue::TransportCatalogue;
pub use domain::{Bus, Stop};
pub use error::{CatalogueError, CatalogueResult};
pub use stats::{RouteStats, StopStats};
