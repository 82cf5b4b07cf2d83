//! Entity resolution: narrowing candidates token by token.

use st_core::vocabulary::is_ignored;
use st_core::{ItemId, World};

use crate::narrator::or_list;

/// Outcome of narrowing a candidate set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'t> {
    /// Exactly one candidate survived.
    Found {
        /// The survivor.
        id: ItemId,
        /// Tokens after the last matched one.
        rest: &'t [&'t str],
    },
    /// Several candidates survived every matched token.
    Ambiguous {
        /// The tokens that matched.
        matched: Vec<&'t str>,
        /// Survivors in candidate order.
        candidates: Vec<ItemId>,
    },
    /// No token matched any candidate.
    NotFound,
}

/// Narrow `candidates` by consuming `tokens` left to right.
///
/// Ignorable words are skipped; the first token matching no survivor stops
/// consumption.
pub fn narrow<'t>(world: &World, tokens: &'t [&'t str], candidates: &[ItemId]) -> Resolution<'t> {
    let mut survivors = candidates.to_vec();
    let mut matched = Vec::new();
    let mut consumed = 0;

    for (i, &word) in tokens.iter().enumerate() {
        if is_ignored(word) {
            continue;
        }
        let next: Vec<ItemId> = survivors
            .iter()
            .copied()
            .filter(|&id| world[id].matches(word))
            .collect();
        if next.is_empty() {
            break;
        }
        matched.push(word);
        survivors = next;
        consumed = i + 1;
    }

    match (matched.is_empty(), survivors.as_slice()) {
        (true, _) | (false, []) => Resolution::NotFound,
        (false, [id]) => Resolution::Found {
            id: *id,
            rest: &tokens[consumed..],
        },
        (false, _) => Resolution::Ambiguous {
            matched,
            candidates: survivors,
        },
    }
}

fn names(world: &World, ids: &[ItemId]) -> String {
    let names: Vec<&str> = ids.iter().map(|&id| world[id].name.as_str()).collect();
    or_list(&names)
}

/// Resolve a required item. `Err` carries the text for the player.
pub fn find_item<'t>(
    world: &World,
    tokens: &'t [&'t str],
    candidates: &[ItemId],
) -> Result<(ItemId, &'t [&'t str]), String> {
    find_optional_item(world, tokens, candidates)?
        .ok_or_else(|| format!("You don't see any {} here.", tokens.join(" ")))
}

/// Resolve an optional item: no match is `Ok(None)`, ambiguity is still an error.
pub fn find_optional_item<'t>(
    world: &World,
    tokens: &'t [&'t str],
    candidates: &[ItemId],
) -> Result<Option<(ItemId, &'t [&'t str])>, String> {
    match narrow(world, tokens, candidates) {
        Resolution::Found { id, rest } => Ok(Some((id, rest))),
        Resolution::Ambiguous {
            matched,
            candidates,
        } => Err(format!(
            "What {} do you mean: {}?",
            matched.join(" "),
            names(world, &candidates)
        )),
        Resolution::NotFound => Ok(None),
    }
}

/// Resolve an actor among `actors`.
pub fn find_actor<'t>(
    world: &World,
    tokens: &'t [&'t str],
    actors: &[ItemId],
) -> Result<(ItemId, &'t [&'t str]), String> {
    match narrow(world, tokens, actors) {
        Resolution::Found { id, rest } => Ok((id, rest)),
        Resolution::Ambiguous { candidates, .. } => {
            Err(format!("Whom do you mean: {}?", names(world, &candidates)))
        }
        Resolution::NotFound => Err("You don't see this person here.".to_string()),
    }
}

/// Indices of the actor's topics brought up by `tokens`.
///
/// Leading tokens that match no topic are skipped; once a topic matched, the
/// first token matching none of the survivors ends the search.
pub fn find_topics<S: AsRef<str>>(world: &World, actor: ItemId, tokens: &[S]) -> Vec<usize> {
    let Some(person) = &world[actor].person else {
        return Vec::new();
    };

    let mut survivors: Vec<usize> = (0..person.topics.len()).collect();
    let mut matched_any = false;
    for word in tokens.iter().map(AsRef::as_ref) {
        if is_ignored(word) {
            continue;
        }
        let next: Vec<usize> = survivors
            .iter()
            .copied()
            .filter(|&i| person.topics[i].matches(word))
            .collect();
        match (next.is_empty(), matched_any) {
            (true, true) => break,
            (true, false) => continue,
            (false, _) => {
                matched_any = true;
                survivors = next;
            }
        }
    }

    if matched_any { survivors } else { Vec::new() }
}

/// Tokens after the first exact occurrence of `keyword`, or `None` if absent.
pub fn split_syntax<'t>(tokens: &'t [&'t str], keyword: &str) -> Option<&'t [&'t str]> {
    tokens
        .iter()
        .position(|&word| word == keyword)
        .map(|i| &tokens[i + 1..])
}
