//! `tc-router` — routing graph and precomputed fastest itineraries.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`graph`]     | `DirectedWeightedGraph`, `Edge` (no transit knowledge)       |
//! | [`builder`]   | `TransitGraphBuilder`, `EdgeKind`, `TransitGraph`            |
//! | [`all_pairs`] | `AllPairsRouter`, `RouteEntry`, `RouteInfo`                  |
//! | [`transport`] | `TransportRouter`, `Itinerary`, `RouteItem`                  |
//! | [`error`]     | `RouterError`, `RouterResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Relaxes all-pairs table rows on the Rayon thread pool.    |
//!
//! # Graph shape
//!
//! Each stop `s` owns two vertices: arrival `2s` and departure `2s + 1`.
//! A wait edge (arrival → departure, weight = bus wait time) models boarding;
//! ride edges (departure of stop i → arrival of every later stop j on the
//! same bus) model staying on board for `j - i` stops.

pub mod all_pairs;
pub mod builder;
pub mod error;
pub mod graph;
pub mod transport;


pub use all_pairs::{AllPairsRouter, RouteEntry, RouteInfo};
pub use builder::{EdgeKind, TransitGraph, TransitGraphBuilder};
pub use error::{RouterError, RouterResult};
pub use graph::{DirectedWeightedGraph, Edge};
pub use transport::{Itinerary, RouteItem, TransportRouter};
