//! Moving the player between rooms.

use st_core::Direction;
use tracing::{debug, warn};

use crate::behavior::{Context, Leave};

const NO_EXIT: &str = "You can't go that way.";

/// Walk through the exit in `direction`.
///
/// The current room may veto leaving or contribute text printed before the
/// next room; a locked destination refuses entry with its lock message.
pub fn go(ctx: &mut Context<'_>, direction: Direction) -> String {
    let Some(room) = ctx.world.current_room() else {
        return NO_EXIT.to_string();
    };
    let Some(destination) = room.exit(direction).map(str::to_string) else {
        return NO_EXIT.to_string();
    };
    let from = room.name.clone();

    let prefix = match ctx.room_leave(&from, direction) {
        Leave::Allow(prefix) => prefix,
        Leave::Deny(message) if message.is_empty() => return NO_EXIT.to_string(),
        Leave::Deny(message) => return message,
    };

    match ctx.world.room(&destination) {
        None => {
            warn!(from = %from, to = %destination, "exit leads to an unknown room");
            return NO_EXIT.to_string();
        }
        Some(room) => {
            if let Some(lock) = &room.lock {
                return lock.clone();
            }
        }
    }

    if let Err(e) = ctx.world.set_location(&destination) {
        warn!(error = %e, "cannot move player");
        return NO_EXIT.to_string();
    }
    debug!(from = %from, to = %destination, %direction, "player moved");
    prefix + &ctx.room_enter(&destination)
}
