//! Base reactions of actors.

use st_core::{Action, Builtin, ItemId};

use super::{Context, pick};

/// React to an action aimed at an actor. Actors never move.
pub fn on_action(
    ctx: &mut Context<'_>,
    this: ItemId,
    action: &Action,
    _target: Option<ItemId>,
) -> String {
    if action.is(Builtin::Examine) {
        return examine(ctx, this);
    }
    format!("I don't know how to {} {}.", action.name, ctx.world[this].name)
}

/// Describe an actor: description, then display name, then a bare mention.
pub fn examine(ctx: &mut Context<'_>, this: ItemId) -> String {
    let actor = &ctx.world[this];
    if !actor.description.is_empty() {
        return actor.description.clone();
    }
    match &actor.person {
        Some(person) if !person.display_name.is_empty() => person.display_name.clone(),
        _ => format!("You see {}.", actor.name_with_article()),
    }
}

/// Answer a dialogue action.
///
/// Without a topic the actor picks one of its fallback answers for the action,
/// or the action's own default. A discussed topic prefers its repeat answers.
pub fn on_topic(
    ctx: &mut Context<'_>,
    this: ItemId,
    topic: Option<usize>,
    action: &Action,
    _item: Option<ItemId>,
) -> String {
    let rng = &mut *ctx.rng;
    let Some(person) = ctx.world[this].person.as_mut() else {
        return action.default_answer.clone();
    };

    let Some(topic) = topic.and_then(|i| person.topics.get_mut(i)) else {
        return pick(rng, person.answers_for(&action.name))
            .map_or_else(|| action.default_answer.clone(), str::to_string);
    };

    let repeat = if topic.used {
        pick(rng, &topic.repeat_answers).map(str::to_string)
    } else {
        None
    };
    if let Some(answer) = repeat {
        return answer;
    }
    topic.used = true;
    pick(rng, &topic.answers)
        .unwrap_or("ERROR: topic has no answers!")
        .to_string()
}
