//! Base reactions of rooms.

use st_core::Action;
use tracing::debug;

use super::Context;
use crate::narrator::describe_visible;

/// Text appended after an action: silence for built-in and item verbs,
/// a refusal for anything else.
pub fn on_action(_ctx: &mut Context<'_>, _room: &str, action: &Action) -> String {
    if action.is_predefined() || action.requires_item {
        String::new()
    } else {
        format!("You can't {} here.", action.name)
    }
}

/// The room description followed by what can be seen in it.
pub fn look(ctx: &mut Context<'_>, room: &str) -> String {
    let Some(room) = ctx.world.room(room) else {
        return String::new();
    };
    room.description.clone() + &describe_visible(ctx.world, room.contents(), " here")
}

/// Full look on the first visit, the room name afterwards.
pub fn enter(ctx: &mut Context<'_>, room: &str) -> String {
    let Some(state) = ctx.world.room_mut(room) else {
        return String::new();
    };
    if state.visited {
        return state.name.clone();
    }
    state.visited = true;
    debug!(room, "first visit");
    ctx.room_look(room)
}
