//! `tc-snapshot` — persisted state shared by the build and query phases.
//!
//! The build phase compiles the catalogue into a router once and saves
//! everything; the query phase loads it and answers requests without
//! recompiling.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                        |
//! |-----------|-----------------------------------------------------------------|
//! | [`proto`] | prost message definitions (the on-disk schema)                  |
//! | [`codec`] | [`encode`] / [`decode`] between in-memory state and bytes       |
//! | [`file`]  | [`save`] / [`load`] with an atomic replace on save              |
//! | [`error`] | `SnapshotError`, `SnapshotResult<T>`                            |
//!
//! # Usage
//!
//! ```rust,ignore
//! use tc_snapshot::{load, save};
//!
//! save(&settings.file, &catalogue, &render_settings, &router)?;
//! let snapshot = load(&settings.file)?;
//! let itinerary = snapshot.router.route(&snapshot.catalogue, "A", "C");
//! ```

pub mod codec;
pub mod error;
pub mod file;
pub mod proto;

#[cfg(test)]
mod tests;

pub use codec::{Snapshot, decode, encode};
pub use error::{SnapshotError, SnapshotResult};
pub use file::{load, save};
