use std::collections::HashMap;
use std::fmt;

use crate::person::Person;
use crate::vocabulary;

/// Stable handle to an item in the world arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub(crate) usize);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where an item currently lives. Every item has exactly one owner.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Owner {
    /// Out of play: not reachable from any room or the inventory.
    #[default]
    Nowhere,
    /// Carried by the player.
    Inventory,
    /// Lying in the named room.
    Room(String),
    /// Inside or on top of another item.
    Item(ItemId),
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nowhere => write!(f, "nowhere"),
            Self::Inventory => write!(f, "inventory"),
            Self::Room(name) => write!(f, "room \"{name}\""),
            Self::Item(id) => write!(f, "item {id}"),
        }
    }
}

/// State flags of an item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemFlags {
    /// Part of the scenery: never listed, but still examinable.
    pub decoration: bool,
    /// Things can be put on it.
    pub surface: bool,
    /// Things can be put in it; it opens and closes.
    pub container: bool,
    /// Can be taken into the inventory.
    pub pickable: bool,
    /// The player has noticed it.
    pub visible: bool,
    /// Hidden from the player regardless of visibility.
    pub disabled: bool,
    /// An open container.
    pub open: bool,
    /// A locked container.
    pub locked: bool,
    /// The display name never changes.
    pub fixed_name: bool,
    /// A tool: using it on something lets the other thing react.
    pub tool: bool,
}

/// A world object. Actors are items carrying a [`Person`] record.
#[derive(Debug, Clone)]
pub struct Item {
    /// Display name, also part of its vocabulary.
    pub name: String,
    /// Article replacing the automatic "a"/"an".
    pub article: Option<String>,
    /// Text shown when examined.
    pub description: String,
    /// Space-separated synonyms.
    pub vocabulary: String,
    /// Name of the item that unlocks this one.
    pub key: Option<String>,
    /// State flags.
    pub flags: ItemFlags,
    /// Replacement texts keyed by action name.
    pub action_text: HashMap<String, String>,
    /// If non-empty, only items with these names may be put inside.
    pub accepts: Vec<String>,
    /// Dialogue capability, present for actors.
    pub person: Option<Person>,
    pub(crate) owner: Owner,
    pub(crate) contents: Vec<ItemId>,
}

impl Item {
    /// Create a plain, invisible item.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            article: None,
            description: String::new(),
            vocabulary: String::new(),
            key: None,
            flags: ItemFlags::default(),
            action_text: HashMap::new(),
            accepts: Vec::new(),
            person: None,
            owner: Owner::Nowhere,
            contents: Vec::new(),
        }
    }

    /// Create an actor: a visible item with dialogue capability.
    pub fn actor(name: impl Into<String>, person: Person) -> Self {
        Self::new(name).visible().with_person(person)
    }

    /// The recorded owner.
    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    /// Items directly inside or on this one, in insertion order.
    pub fn contents(&self) -> &[ItemId] {
        &self.contents
    }

    /// Whether the player carries this item.
    pub fn is_held(&self) -> bool {
        self.owner == Owner::Inventory
    }

    /// Whether this item can talk.
    pub fn is_actor(&self) -> bool {
        self.person.is_some()
    }

    /// Whether the player can currently perceive the item.
    pub fn is_perceivable(&self) -> bool {
        self.flags.visible && !self.flags.disabled
    }

    /// Whether a token names this item.
    pub fn matches(&self, word: &str) -> bool {
        vocabulary::matches(&format!("{} {}", self.vocabulary, self.name), word)
    }

    /// The override text for an action, if one is configured.
    pub fn text_for(&self, action: &str) -> Option<&str> {
        self.action_text.get(action).map(String::as_str)
    }

    /// Whether a container's whitelist lets `name` in.
    pub fn can_contain(&self, name: &str) -> bool {
        self.accepts.is_empty() || self.accepts.iter().any(|n| n == name)
    }

    /// The name preceded by its article ("a bottle", "an apple").
    ///
    /// Actors without an explicit article go by their bare name.
    pub fn name_with_article(&self) -> String {
        if let Some(article) = &self.article {
            return format!("{article} {}", self.name);
        }
        if self.is_actor() {
            return self.name.clone();
        }
        match self.name.chars().next() {
            Some(c) if "aeiou".contains(c.to_ascii_lowercase()) => format!("an {}", self.name),
            _ => format!("a {}", self.name),
        }
    }

    /// Mark as noticed by the player.
    pub fn visible(mut self) -> Self {
        self.flags.visible = true;
        self
    }

    /// Mark as scenery.
    pub fn decoration(mut self) -> Self {
        self.flags.decoration = true;
        self
    }

    /// Allow putting things on it.
    pub fn surface(mut self) -> Self {
        self.flags.surface = true;
        self
    }

    /// Make it a (closed) container.
    pub fn container(mut self) -> Self {
        self.flags.container = true;
        self
    }

    /// Open it (containers only make sense here).
    pub fn opened(mut self) -> Self {
        self.flags.open = true;
        self
    }

    /// Lock it, naming the key that opens it.
    pub fn locked_with(mut self, key: impl Into<String>) -> Self {
        self.flags.locked = true;
        self.key = Some(key.into());
        self
    }

    /// Allow taking it.
    pub fn pickable(mut self) -> Self {
        self.flags.pickable = true;
        self
    }

    /// Hide it regardless of visibility.
    pub fn disabled(mut self) -> Self {
        self.flags.disabled = true;
        self
    }

    /// Freeze the display name.
    pub fn fixed_name(mut self) -> Self {
        self.flags.fixed_name = true;
        self
    }

    /// Mark as a tool.
    pub fn tool(mut self) -> Self {
        self.flags.tool = true;
        self
    }

    /// Set the article.
    pub fn with_article(mut self, article: impl Into<String>) -> Self {
        self.article = Some(article.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the synonyms.
    pub fn with_vocabulary(mut self, vocabulary: impl Into<String>) -> Self {
        self.vocabulary = vocabulary.into();
        self
    }

    /// Override the text for one action.
    pub fn with_action_text(mut self, action: impl Into<String>, text: impl Into<String>) -> Self {
        self.action_text.insert(action.into(), text.into());
        self
    }

    /// Restrict what may be put inside.
    pub fn accepting<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accepts = names.into_iter().map(Into::into).collect();
        self
    }

    /// Attach a dialogue record.
    pub fn with_person(mut self, person: Person) -> Self {
        self.person = Some(person);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn articles() {
        assert_eq!(Item::new("bottle").name_with_article(), "a bottle");
        assert_eq!(Item::new("old key").name_with_article(), "an old key");
        assert_eq!(Item::new("Ice").name_with_article(), "an Ice");
        assert_eq!(
            Item::new("swords").with_article("some").name_with_article(),
            "some swords"
        );
    }

    #[test]
    fn actors_go_by_bare_name() {
        let witch = Item::actor("Melissa", Person::default());
        assert_eq!(witch.name_with_article(), "Melissa");
        let guard = Item::actor("guard", Person::default()).with_article("the");
        assert_eq!(guard.name_with_article(), "the guard");
    }

    #[test]
    fn matches_name_and_vocabulary() {
        let woman = Item::new("mysterious woman").with_vocabulary("girl witch");
        assert!(woman.matches("woman"));
        assert!(woman.matches("witch"));
        assert!(woman.matches("mysterious"));
        assert!(!woman.matches("man"));
    }

    #[test]
    fn whitelist() {
        let quiver = Item::new("quiver").container().accepting(["arrow"]);
        assert!(quiver.can_contain("arrow"));
        assert!(!quiver.can_contain("sword"));
        assert!(Item::new("sack").container().can_contain("anything"));
    }

    #[test]
    fn perceivable_requires_visible_and_enabled() {
        assert!(!Item::new("x").is_perceivable());
        assert!(Item::new("x").visible().is_perceivable());
        assert!(!Item::new("x").visible().disabled().is_perceivable());
    }

    #[test]
    fn owner_display() {
        assert_eq!(Owner::Inventory.to_string(), "inventory");
        assert_eq!(Owner::Room("Cave".into()).to_string(), "room \"Cave\"");
        assert_eq!(Owner::Item(ItemId(3)).to_string(), "item #3");
    }
}
