//! Item- and actor-oriented action handling.
//!
//! Both handlers resolve the objects named by the player, then hand the
//! action to the entity's behavior. Resolution failures come back as text.

use st_core::vocabulary::is_ignored;
use st_core::{Action, Builtin, ItemId, Owner};
use tracing::debug;

use crate::behavior::Context;
use crate::parser::{find_actor, find_item, find_optional_item, find_topics, split_syntax};

fn what_prompt(action: &Action) -> String {
    match &action.syntax {
        Some(syntax) => format!("{} {syntax} what?", action.title()),
        None => format!("{} what?", action.title()),
    }
}

/// The visible actors among `items`.
fn actors(ctx: &Context<'_>, items: &[ItemId]) -> Vec<ItemId> {
    items
        .iter()
        .copied()
        .filter(|&id| ctx.world[id].is_actor())
        .collect()
}

/// First topic among `candidates` that answers `action`.
fn answering_topic(
    ctx: &Context<'_>,
    actor: ItemId,
    candidates: &[usize],
    action: &Action,
) -> Option<usize> {
    let person = ctx.world[actor].person.as_ref()?;
    candidates
        .iter()
        .copied()
        .find(|&i| person.topics[i].answers_action(&action.name))
}

/// The actor's greeting when the player names nothing but the actor.
fn greeting(
    ctx: &Context<'_>,
    actor: ItemId,
    words: &[&str],
    action: &Action,
) -> Option<String> {
    let item = &ctx.world[actor];
    let person = item.person.as_ref()?;
    let bare = words.iter().all(|&w| is_ignored(w) || item.matches(w));
    (action.is(Builtin::Ask) && bare && !person.greeting.is_empty())
        .then(|| person.greeting.clone())
}

/// Handle a verb whose direct object is an item.
pub fn item_action(ctx: &mut Context<'_>, tokens: &[&str], action: &Action) -> String {
    if tokens.is_empty() {
        return format!("{} what?", action.title());
    }

    let roots: Vec<ItemId> = ctx
        .world
        .inventory()
        .iter()
        .chain(ctx.world.current_room().map(|room| room.contents()).unwrap_or_default())
        .copied()
        .collect();
    let items = ctx.world.visible(&roots, false, true);

    let (item, rest) = match find_item(ctx.world, tokens, &items) {
        Ok(found) => found,
        Err(message) => return message,
    };

    let (words, syntax_found) = match action.syntax.as_deref() {
        Some(keyword) => match split_syntax(rest, keyword) {
            Some(after) => (after, true),
            None => (&[][..], false),
        },
        None => (rest, false),
    };

    if action.requires_target && words.is_empty() {
        return what_prompt(action);
    }

    if action.actor_is_target {
        let actors = actors(ctx, &items);
        let actor = match actors.as_slice() {
            [only] if !syntax_found && action.syntax.is_some() => *only,
            _ => match find_actor(ctx.world, words, &actors) {
                Ok((actor, _)) => actor,
                Err(message) => return message,
            },
        };

        if action.requires_topic {
            let name = ctx.world[item].name.clone();
            let name_tokens: Vec<&str> = name.split(' ').collect();
            let topics = find_topics(ctx.world, actor, &name_tokens);
            let topic = answering_topic(ctx, actor, &topics, action);
            debug!(action = %action.name, %item, %actor, ?topic, "dialogue with item");

            let consumes = topic.is_some_and(|i| {
                ctx.world[actor]
                    .person
                    .as_ref()
                    .is_some_and(|person| person.topics[i].consumes_item)
            });
            if consumes {
                ctx.transfer(item, Owner::Nowhere);
            }
            return ctx.on_topic(actor, topic, action, Some(item));
        }
        return finalize(ctx, item, Some(actor), action);
    }

    let target = if action.requires_target {
        match find_item(ctx.world, words, &items) {
            Ok((target, _)) => Some(target),
            Err(message) => return message,
        }
    } else {
        match find_optional_item(ctx.world, words, &items) {
            Ok(found) => found.map(|(target, _)| target),
            Err(message) => return message,
        }
    };
    finalize(ctx, item, target, action)
}

/// Run the item's behavior, apply any move it asked for, and append the
/// room's reaction.
fn finalize(
    ctx: &mut Context<'_>,
    item: ItemId,
    target: Option<ItemId>,
    action: &Action,
) -> String {
    debug!(action = %action.name, %item, ?target, "item action");
    let outcome = ctx.on_action(item, action, target);
    let moved = outcome
        .owner
        .filter(|owner| owner != ctx.world[item].owner());
    if let Some(owner) = moved {
        ctx.transfer(item, owner);
    }
    outcome.text + &ctx.room_reaction(action)
}

/// Handle a verb addressed to an actor.
pub fn actor_action(ctx: &mut Context<'_>, tokens: &[&str], action: &Action) -> String {
    if tokens.is_empty() {
        return format!("{} who?", action.title());
    }

    let roots = ctx
        .world
        .current_room()
        .map(|room| room.contents().to_vec())
        .unwrap_or_default();
    let items = ctx.world.visible(&roots, false, true);
    let actors = actors(ctx, &items);

    let (actor, words) = match actors.as_slice() {
        [] => return format!("There is nobody to {}.", action.name),
        [only] => (*only, tokens),
        _ => match find_actor(ctx.world, tokens, &actors) {
            Ok(found) => found,
            Err(message) => return message,
        },
    };

    if action.requires_topic {
        if let Some(line) = greeting(ctx, actor, words, action) {
            debug!(%actor, "greeting");
            return line;
        }
        let topics = find_topics(ctx.world, actor, words);
        let topic = answering_topic(ctx, actor, &topics, action);
        debug!(action = %action.name, %actor, ?topic, "dialogue");
        return ctx.on_topic(actor, topic, action, None);
    }

    let words = match action.syntax.as_deref() {
        Some(keyword) => split_syntax(words, keyword).unwrap_or_default(),
        None => words,
    };
    if action.requires_target && words.is_empty() {
        return what_prompt(action);
    }

    let target = if action.requires_target {
        match find_item(ctx.world, words, &items) {
            Ok((target, _)) => Some(target),
            Err(message) => return message,
        }
    } else {
        match find_optional_item(ctx.world, words, &items) {
            Ok(found) => found.map(|(target, _)| target),
            Err(message) => return message,
        }
    };
    debug!(action = %action.name, %actor, ?target, "actor action");
    ctx.on_action(actor, action, target).text
}
