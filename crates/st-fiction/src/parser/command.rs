//! Command parsing for player input.

use st_core::{Action, Builtin, Direction};

/// Words skipped while looking for the verb.
const FILLER_WORDS: &[&str] = &["go", "the", "a", "an", "from"];

const LOOK_VERBS: &[&str] = &["look", "l"];
const INVENTORY_VERBS: &[&str] = &["inventory", "i"];
const HELP_VERBS: &[&str] = &["help"];
const EXAMINE_VERBS: &[&str] = &["examine", "x", "search"];
const OPEN_VERBS: &[&str] = &["open"];
const CLOSE_VERBS: &[&str] = &["close"];
const UNLOCK_VERBS: &[&str] = &["unlock"];
const TAKE_VERBS: &[&str] = &["take", "pick"];
const PUT_VERBS: &[&str] = &["put", "drop"];
const USE_VERBS: &[&str] = &["use"];
const ASK_VERBS: &[&str] = &["ask", "tell", "talk"];
const GIVE_VERBS: &[&str] = &["give", "show"];

/// A parsed player command.
///
/// Argument slices borrow the tokens of the normalized input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command<'t> {
    /// Walk through an exit.
    Move(Direction),
    /// Describe the current room.
    Look,
    /// List what the player carries.
    Inventory,
    /// Show help.
    Help,
    /// A verb whose direct object is an item.
    Item {
        /// The verb.
        action: Action,
        /// Tokens after the verb.
        args: &'t [&'t str],
    },
    /// A verb addressed to an actor.
    Actor {
        /// The verb.
        action: Action,
        /// Tokens after the verb.
        args: &'t [&'t str],
    },
    /// A game-defined verb without objects, answered by the room alone.
    Room(Action),
    /// The first meaningful word is not a known verb.
    Unknown(String),
    /// Nothing but filler words.
    Empty,
}

/// Lowercase, trim, and collapse runs of whitespace into single spaces.
pub fn normalize(input: &str) -> String {
    input
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse normalized tokens into a command.
///
/// The first token that is not a filler word decides the command; game-defined
/// `actions` are consulted only after the built-in vocabulary.
pub fn parse_command<'t>(tokens: &'t [&'t str], actions: &[Action]) -> Command<'t> {
    for (i, &word) in tokens.iter().enumerate() {
        if FILLER_WORDS.contains(&word) {
            continue;
        }
        let args = &tokens[i + 1..];

        if let Some(direction) = Direction::parse(word) {
            return Command::Move(direction);
        }
        if LOOK_VERBS.contains(&word) {
            return Command::Look;
        }
        if INVENTORY_VERBS.contains(&word) {
            return Command::Inventory;
        }
        if HELP_VERBS.contains(&word) {
            return Command::Help;
        }
        if ASK_VERBS.contains(&word) {
            return Command::Actor {
                action: Builtin::Ask.action(),
                args,
            };
        }
        if let Some(builtin) = item_verb(word) {
            return Command::Item {
                action: builtin.action(),
                args,
            };
        }

        return match actions.iter().find(|a| a.name == word) {
            Some(action) if action.requires_item => Command::Item {
                action: action.clone(),
                args,
            },
            Some(action) if action.requires_actor => Command::Actor {
                action: action.clone(),
                args,
            },
            Some(action) => Command::Room(action.clone()),
            None => Command::Unknown(word.to_string()),
        };
    }
    Command::Empty
}

fn item_verb(word: &str) -> Option<Builtin> {
    const TABLE: [(&[&str], Builtin); 8] = [
        (EXAMINE_VERBS, Builtin::Examine),
        (OPEN_VERBS, Builtin::Open),
        (CLOSE_VERBS, Builtin::Close),
        (UNLOCK_VERBS, Builtin::Unlock),
        (TAKE_VERBS, Builtin::Take),
        (PUT_VERBS, Builtin::Put),
        (USE_VERBS, Builtin::Use),
        (GIVE_VERBS, Builtin::Give),
    ];
    TABLE
        .iter()
        .find(|(verbs, _)| verbs.contains(&word))
        .map(|&(_, builtin)| builtin)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse<'t>(tokens: &'t [&'t str]) -> Command<'t> {
        parse_command(tokens, &[])
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize("  Take   the\tBOTTLE \n"), "take the bottle");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn parse_directions() {
        assert_eq!(parse(&["n"]), Command::Move(Direction::North));
        assert_eq!(parse(&["go", "south"]), Command::Move(Direction::South));
        assert_eq!(parse(&["w"]), Command::Move(Direction::West));
    }

    #[test]
    fn parse_room_commands() {
        assert_eq!(parse(&["l"]), Command::Look);
        assert_eq!(parse(&["look", "at", "box"]), Command::Look);
        assert_eq!(parse(&["i"]), Command::Inventory);
        assert_eq!(parse(&["help"]), Command::Help);
    }

    #[test]
    fn parse_item_verbs_with_synonyms() {
        let tokens = ["pick", "up", "key"];
        match parse(&tokens) {
            Command::Item { action, args } => {
                assert!(action.is(Builtin::Take));
                assert_eq!(args, &["up", "key"]);
            }
            other => panic!("expected item command, got {other:?}"),
        }

        for (verb, builtin) in [
            ("x", Builtin::Examine),
            ("search", Builtin::Examine),
            ("drop", Builtin::Put),
            ("show", Builtin::Give),
            ("unlock", Builtin::Unlock),
        ] {
            match parse(&[verb, "box"]) {
                Command::Item { action, .. } => assert!(action.is(builtin), "{verb}"),
                other => panic!("expected item command for {verb}, got {other:?}"),
            }
        }
    }

    #[test]
    fn parse_actor_verbs() {
        let tokens = ["talk", "to", "witch"];
        match parse(&tokens) {
            Command::Actor { action, args } => {
                assert!(action.is(Builtin::Ask));
                assert_eq!(args, &["to", "witch"]);
            }
            other => panic!("expected actor command, got {other:?}"),
        }
    }

    #[test]
    fn parse_custom_actions() {
        let actions = vec![
            Action::custom("sleep"),
            Action::custom("drink").requires_item(),
            Action::custom("hug").requires_actor(),
        ];
        assert_eq!(
            parse_command(&["sleep"], &actions),
            Command::Room(Action::custom("sleep"))
        );
        assert!(matches!(
            parse_command(&["drink", "water"], &actions),
            Command::Item { .. }
        ));
        assert!(matches!(
            parse_command(&["hug", "witch"], &actions),
            Command::Actor { .. }
        ));
    }

    #[test]
    fn unknown_word_is_terminal() {
        assert_eq!(
            parse(&["the", "dance", "north"]),
            Command::Unknown("dance".to_string())
        );
    }

    #[test]
    fn fillers_only() {
        assert_eq!(parse(&["go", "the", "a"]), Command::Empty);
        assert_eq!(parse(&[]), Command::Empty);
    }
}
