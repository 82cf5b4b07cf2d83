//! Error types for the fiction engine.

use st_core::WorldError;
use thiserror::Error;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors raised while setting a game up.
///
/// Nothing a player types produces one of these: command failures are
/// narrative text returned by [`Game::process`](crate::Game::process).
#[derive(Debug, Error)]
pub enum FictionError {
    /// The world's starting location is not a registered room.
    #[error("starting room not found: \"{0}\"")]
    StartRoomNotFound(String),

    /// A behavior was attached to an item that does not exist.
    #[error("no item to attach behavior to: {0}")]
    UnknownItem(st_core::ItemId),

    /// A behavior was attached to a room that does not exist.
    #[error("no room to attach behavior to: \"{0}\"")]
    UnknownRoom(String),

    /// World model error.
    #[error("world error: {0}")]
    World(#[from] WorldError),
}
