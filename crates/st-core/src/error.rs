use crate::item::ItemId;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors that can occur when building or rearranging a world.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// No room is registered under this name.
    #[error("room not found: \"{0}\"")]
    RoomNotFound(String),

    /// The item ID does not exist in the arena.
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),

    /// A room with the same name already exists.
    #[error("room already exists: \"{0}\"")]
    DuplicateRoom(String),

    /// The transfer would leave the containment tree in an invalid shape.
    #[error("invalid transfer of \"{item}\": {reason}")]
    InvalidTransfer {
        /// Name of the item being moved.
        item: String,
        /// Why the move was refused.
        reason: String,
    },

    /// An item's recorded owner disagrees with where it actually lives.
    #[error("ownership mismatch for \"{item}\": recorded {recorded}, found in {found}")]
    Ownership {
        /// Name of the inconsistent item.
        item: String,
        /// The owner recorded on the item.
        recorded: String,
        /// The collections the item was actually found in.
        found: String,
    },
}
