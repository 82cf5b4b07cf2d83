use std::fmt;

/// The verbs every game understands out of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// Describe the current room.
    Look,
    /// List what the player carries.
    Inventory,
    /// Inspect an item or actor.
    Examine,
    /// Open a container.
    Open,
    /// Close a container.
    Close,
    /// Pick an item up.
    Take,
    /// Put a held item into or onto something.
    Put,
    /// Use an item, optionally on something else.
    Use,
    /// Ask an actor about a topic.
    Ask,
    /// Unlock a container with a key.
    Unlock,
    /// Give an item to an actor.
    Give,
}

impl Builtin {
    /// All built-in verbs.
    pub const ALL: [Builtin; 11] = [
        Self::Look,
        Self::Inventory,
        Self::Examine,
        Self::Open,
        Self::Close,
        Self::Take,
        Self::Put,
        Self::Use,
        Self::Ask,
        Self::Unlock,
        Self::Give,
    ];

    /// The canonical verb name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Look => "look",
            Self::Inventory => "inventory",
            Self::Examine => "examine",
            Self::Open => "open",
            Self::Close => "close",
            Self::Take => "take",
            Self::Put => "put",
            Self::Use => "use",
            Self::Ask => "ask",
            Self::Unlock => "unlock",
            Self::Give => "give",
        }
    }

    /// Build the action definition for this verb.
    pub fn action(self) -> Action {
        let action = Action {
            builtin: Some(self),
            ..Action::custom(self.name())
        };
        match self {
            Self::Look | Self::Inventory => action,
            Self::Examine | Self::Open | Self::Close | Self::Take | Self::Put => {
                action.requires_item()
            }
            Self::Use => action.requires_item().with_syntax("on"),
            Self::Ask => action
                .requires_actor()
                .requires_topic()
                .with_default_answer("\"I don't know much about that.\""),
            Self::Unlock => action
                .requires_item()
                .requires_target()
                .with_syntax("with"),
            Self::Give => action
                .requires_item()
                .actor_is_target()
                .requires_topic()
                .with_syntax("to")
                .with_default_answer("\"I don't need it.\""),
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A verb definition: its name, argument shape, and dialogue fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// Verb name as typed by the player.
    pub name: String,
    /// Preposition introducing the second object ("with", "on", "to").
    pub syntax: Option<String>,
    /// A direct object is required.
    pub requires_item: bool,
    /// An indirect object is required.
    pub requires_target: bool,
    /// The verb addresses an actor directly.
    pub requires_actor: bool,
    /// The verb is answered through an actor's topics.
    pub requires_topic: bool,
    /// The indirect object is an actor rather than an item.
    pub actor_is_target: bool,
    /// Answer used when an actor has nothing better to say.
    pub default_answer: String,
    builtin: Option<Builtin>,
}

impl Action {
    /// Create a game-defined action with no argument requirements.
    pub fn custom(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            syntax: None,
            requires_item: false,
            requires_target: false,
            requires_actor: false,
            requires_topic: false,
            actor_is_target: false,
            default_answer: String::new(),
            builtin: None,
        }
    }

    /// The built-in verb this action stands for, if any.
    pub fn builtin(&self) -> Option<Builtin> {
        self.builtin
    }

    /// Whether this is one of the built-in verbs.
    pub fn is_predefined(&self) -> bool {
        self.builtin.is_some()
    }

    /// Whether this action is the given built-in verb.
    pub fn is(&self, builtin: Builtin) -> bool {
        self.builtin == Some(builtin)
    }

    /// The syntax keyword, or an empty string when the verb takes none.
    pub fn syntax_word(&self) -> &str {
        self.syntax.as_deref().unwrap_or("")
    }

    /// The verb name with its first letter capitalized, for prompts.
    pub fn title(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Require a direct object.
    pub fn requires_item(mut self) -> Self {
        self.requires_item = true;
        self
    }

    /// Require an indirect object.
    pub fn requires_target(mut self) -> Self {
        self.requires_target = true;
        self
    }

    /// Require an actor.
    pub fn requires_actor(mut self) -> Self {
        self.requires_actor = true;
        self
    }

    /// Route the verb through actor topics.
    pub fn requires_topic(mut self) -> Self {
        self.requires_topic = true;
        self
    }

    /// Treat the indirect object as an actor.
    pub fn actor_is_target(mut self) -> Self {
        self.actor_is_target = true;
        self
    }

    /// Set the preposition that introduces the indirect object.
    pub fn with_syntax(mut self, syntax: impl Into<String>) -> Self {
        self.syntax = Some(syntax.into());
        self
    }

    /// Set the fallback dialogue answer.
    pub fn with_default_answer(mut self, answer: impl Into<String>) -> Self {
        self.default_answer = answer.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_shapes() {
        let unlock = Builtin::Unlock.action();
        assert!(unlock.requires_item);
        assert!(unlock.requires_target);
        assert_eq!(unlock.syntax_word(), "with");
        assert!(unlock.is_predefined());

        let give = Builtin::Give.action();
        assert!(give.actor_is_target);
        assert!(give.requires_topic);
        assert_eq!(give.syntax_word(), "to");

        let look = Builtin::Look.action();
        assert!(!look.requires_item);
        assert_eq!(look.syntax_word(), "");
    }

    #[test]
    fn custom_actions_are_not_predefined() {
        let drink = Action::custom("drink").requires_item();
        assert!(!drink.is_predefined());
        assert!(!drink.is(Builtin::Take));
        assert!(drink.requires_item);
    }

    #[test]
    fn title_capitalizes_first_letter() {
        assert_eq!(Builtin::Unlock.action().title(), "Unlock");
        assert_eq!(Action::custom("").title(), "");
    }

    #[test]
    fn every_builtin_round_trips_its_name() {
        for builtin in Builtin::ALL {
            let action = builtin.action();
            assert_eq!(action.name, builtin.name());
            assert!(action.is(builtin));
        }
    }
}
