//! Error types for tc-snapshot.

use thiserror::Error;

use tc_catalogue::CatalogueError;
use tc_core::CoreError;
use tc_router::RouterError;

/// Errors that can occur while saving or loading a snapshot.
///
/// A failed load never yields partial state.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("protobuf decode error: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("corrupt snapshot: {0}")]
    Corrupt(String),

    #[error("snapshot catalogue rejected: {0}")]
    Catalogue(#[from] CatalogueError),

    #[error("snapshot settings rejected: {0}")]
    Core(#[from] CoreError),

    #[error("snapshot router rejected: {0}")]
    Router(#[from] RouterError),
}

/// Alias for `Result<T, SnapshotError>`.
pub type SnapshotResult<T> = Result<T, SnapshotError>;
