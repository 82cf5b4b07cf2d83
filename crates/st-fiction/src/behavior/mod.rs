//! Entity behaviors: how items, actors, and rooms react to the player.
//!
//! Every entity starts with the base reactions in [`item`], [`actor`], and
//! [`room`]. Content code attaches a behavior object to a specific item or
//! room to override some reactions; the object receives a [`Context`] and
//! calls back into the base functions for anything it does not handle.

pub mod actor;
pub mod item;
pub mod room;

use std::collections::HashMap;

use rand::Rng;
use rand::rngs::StdRng;
use st_core::{Action, Direction, ItemId, Owner, World};
use tracing::warn;

/// Result of an item reacting to an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Narrative text for the player.
    pub text: String,
    /// New owner for the item, if the action moved it.
    pub owner: Option<Owner>,
}

impl Outcome {
    /// Text only; the item stays where it is.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            owner: None,
        }
    }

    /// Text plus a move of the item to `owner`.
    pub fn moved(text: impl Into<String>, owner: Owner) -> Self {
        Self {
            text: text.into(),
            owner: Some(owner),
        }
    }
}

/// Whether the player may leave a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Leave {
    /// Leaving is allowed; the text is printed before the next room.
    Allow(String),
    /// Leaving is refused with this text (empty means the default refusal).
    Deny(String),
}

/// Per-item reactions. Both methods default to the base behavior.
pub trait ItemBehavior: Send {
    /// React to an action performed on this item, optionally with a target.
    fn on_action(
        &mut self,
        ctx: &mut Context<'_>,
        this: ItemId,
        action: &Action,
        target: Option<ItemId>,
    ) -> Outcome {
        default_action(ctx, this, action, target)
    }

    /// Answer a dialogue action. `topic` indexes the actor's topic list.
    fn on_topic(
        &mut self,
        ctx: &mut Context<'_>,
        this: ItemId,
        topic: Option<usize>,
        action: &Action,
        item: Option<ItemId>,
    ) -> String {
        actor::on_topic(ctx, this, topic, action, item)
    }
}

/// Per-room reactions. Every method defaults to the base behavior.
pub trait RoomBehavior: Send {
    /// Decide whether the player may walk out through `direction`.
    fn leave(&mut self, ctx: &mut Context<'_>, room: &str, direction: Direction) -> Leave {
        let _ = (ctx, room, direction);
        Leave::Allow(String::new())
    }

    /// Extra text appended after any action performed in the room.
    fn on_action(&mut self, ctx: &mut Context<'_>, room: &str, action: &Action) -> String {
        room::on_action(ctx, room, action)
    }

    /// The room description with its visible contents.
    fn look(&mut self, ctx: &mut Context<'_>, room: &str) -> String {
        room::look(ctx, room)
    }

    /// Text shown when the player walks in.
    fn enter(&mut self, ctx: &mut Context<'_>, room: &str) -> String {
        room::enter(ctx, room)
    }
}

/// The base reaction for any item: actors and plain items differ.
pub fn default_action(
    ctx: &mut Context<'_>,
    this: ItemId,
    action: &Action,
    target: Option<ItemId>,
) -> Outcome {
    if ctx.world[this].is_actor() {
        Outcome::text(actor::on_action(ctx, this, action, target))
    } else {
        item::on_action(ctx, this, action, target)
    }
}

/// Pick a random entry, or `None` from an empty list.
pub fn pick<'a, S: AsRef<str>>(rng: &mut StdRng, options: &'a [S]) -> Option<&'a str> {
    if options.is_empty() {
        return None;
    }
    Some(options[rng.random_range(0..options.len())].as_ref())
}

/// Behavior objects registered for specific entities.
#[derive(Default)]
pub(crate) struct Behaviors {
    pub(crate) items: HashMap<ItemId, Box<dyn ItemBehavior>>,
    pub(crate) rooms: HashMap<String, Box<dyn RoomBehavior>>,
}

/// Mutable access to the game handed to behaviors.
pub struct Context<'a> {
    /// The world being played.
    pub world: &'a mut World,
    /// Random source for dialogue and flavor text.
    pub rng: &'a mut StdRng,
    behaviors: &'a mut Behaviors,
}

impl<'a> Context<'a> {
    pub(crate) fn new(
        world: &'a mut World,
        rng: &'a mut StdRng,
        behaviors: &'a mut Behaviors,
    ) -> Self {
        Self {
            world,
            rng,
            behaviors,
        }
    }

    /// Run an item's reaction to an action, custom behavior first.
    ///
    /// The behavior is taken out of the registry while it runs, so an item
    /// dispatching back to itself from its own behavior gets the base
    /// reaction for the nested call.
    pub fn on_action(&mut self, this: ItemId, action: &Action, target: Option<ItemId>) -> Outcome {
        match self.behaviors.items.remove(&this) {
            Some(mut behavior) => {
                let outcome = behavior.on_action(self, this, action, target);
                self.behaviors.items.insert(this, behavior);
                outcome
            }
            None => default_action(self, this, action, target),
        }
    }

    /// Run an actor's dialogue reaction, custom behavior first.
    ///
    /// Re-entrant calls for the same actor skip its behavior, as with
    /// [`Context::on_action`].
    pub fn on_topic(
        &mut self,
        this: ItemId,
        topic: Option<usize>,
        action: &Action,
        item: Option<ItemId>,
    ) -> String {
        match self.behaviors.items.remove(&this) {
            Some(mut behavior) => {
                let text = behavior.on_topic(self, this, topic, action, item);
                self.behaviors.items.insert(this, behavior);
                text
            }
            None => actor::on_topic(self, this, topic, action, item),
        }
    }

    /// Ask the room whether the player may leave it.
    pub fn room_leave(&mut self, room: &str, direction: Direction) -> Leave {
        self.with_room(
            room,
            |behavior, ctx| behavior.leave(ctx, room, direction),
            |_| Leave::Allow(String::new()),
        )
    }

    /// The current room's reaction to an action.
    pub fn room_reaction(&mut self, action: &Action) -> String {
        let room = self.world.location().to_string();
        self.with_room(
            &room,
            |behavior, ctx| behavior.on_action(ctx, &room, action),
            |ctx| room::on_action(ctx, &room, action),
        )
    }

    /// A room's look text.
    pub fn room_look(&mut self, room: &str) -> String {
        self.with_room(
            room,
            |behavior, ctx| behavior.look(ctx, room),
            |ctx| room::look(ctx, room),
        )
    }

    /// A room's enter text.
    pub fn room_enter(&mut self, room: &str) -> String {
        self.with_room(
            room,
            |behavior, ctx| behavior.enter(ctx, room),
            |ctx| room::enter(ctx, room),
        )
    }

    /// Move an item, logging instead of failing when content asks for an
    /// impossible transfer.
    pub fn transfer(&mut self, id: ItemId, to: Owner) -> bool {
        match self.world.transfer(id, to) {
            Ok(()) => true,
            Err(e) => {
                warn!(item = %id, error = %e, "transfer refused");
                false
            }
        }
    }

    fn with_room<R>(
        &mut self,
        room: &str,
        custom: impl FnOnce(&mut dyn RoomBehavior, &mut Self) -> R,
        base: impl FnOnce(&mut Self) -> R,
    ) -> R {
        match self.behaviors.rooms.remove(room) {
            Some(mut behavior) => {
                let result = custom(behavior.as_mut(), self);
                self.behaviors.rooms.insert(room.to_string(), behavior);
                result
            }
            None => base(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use st_core::{Builtin, Item, Room};

    struct Squeaky;

    impl ItemBehavior for Squeaky {
        fn on_action(
            &mut self,
            ctx: &mut Context<'_>,
            this: ItemId,
            action: &Action,
            target: Option<ItemId>,
        ) -> Outcome {
            if action.name == "squeeze" {
                return Outcome::text("Squeak!");
            }
            if action.name == "hug" {
                let squeeze = Action::custom("squeeze").requires_item();
                let inner = ctx.on_action(this, &squeeze, None).text;
                return Outcome::text(format!("Hug. {inner}"));
            }
            default_action(ctx, this, action, target)
        }
    }

    fn fixture() -> (World, ItemId) {
        let mut world = World::new();
        world.add_room(Room::new("Hall", "A hall.")).unwrap();
        world.set_location("Hall").unwrap();
        let duck = world
            .spawn(Item::new("duck").visible().pickable(), Owner::Room("Hall".into()))
            .unwrap();
        (world, duck)
    }

    #[test]
    fn custom_behavior_runs_first_and_forwards() {
        let (mut world, duck) = fixture();
        let mut rng = StdRng::seed_from_u64(1);
        let mut behaviors = Behaviors::default();
        behaviors.items.insert(duck, Box::new(Squeaky));
        let mut ctx = Context::new(&mut world, &mut rng, &mut behaviors);

        let squeeze = Action::custom("squeeze").requires_item();
        assert_eq!(ctx.on_action(duck, &squeeze, None).text, "Squeak!");

        let take = ctx.on_action(duck, &Builtin::Take.action(), None);
        assert_eq!(take, Outcome::moved("Taken.", Owner::Inventory));
        // the behavior is put back after use
        assert_eq!(ctx.on_action(duck, &squeeze, None).text, "Squeak!");
    }

    #[test]
    fn nested_dispatch_to_self_uses_base_reaction() {
        let (mut world, duck) = fixture();
        let mut rng = StdRng::seed_from_u64(1);
        let mut behaviors = Behaviors::default();
        behaviors.items.insert(duck, Box::new(Squeaky));
        let mut ctx = Context::new(&mut world, &mut rng, &mut behaviors);

        let squeeze = Action::custom("squeeze").requires_item();
        let base = default_action(&mut ctx, duck, &squeeze, None).text;
        let hug = ctx.on_action(duck, &Action::custom("hug").requires_item(), None);
        assert_eq!(hug.text, format!("Hug. {base}"));
        assert_ne!(base, "Squeak!");
        assert_eq!(ctx.on_action(duck, &squeeze, None).text, "Squeak!");
    }

    #[test]
    fn pick_from_options() {
        let mut rng = StdRng::seed_from_u64(42);
        let empty: [&str; 0] = [];
        assert_eq!(pick(&mut rng, &empty), None);
        assert_eq!(pick(&mut rng, &["only"]), Some("only"));
        let options = ["a", "b", "c"];
        for _ in 0..20 {
            let chosen = pick(&mut rng, &options).unwrap();
            assert!(options.contains(&chosen));
        }
    }

    #[test]
    fn failed_transfer_is_reported_not_fatal() {
        let (mut world, duck) = fixture();
        let mut rng = StdRng::seed_from_u64(1);
        let mut behaviors = Behaviors::default();
        let mut ctx = Context::new(&mut world, &mut rng, &mut behaviors);
        assert!(!ctx.transfer(duck, Owner::Room("Nowhere land".into())));
        assert!(ctx.transfer(duck, Owner::Inventory));
        assert!(ctx.world[duck].is_held());
    }
}
