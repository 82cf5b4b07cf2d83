use st_core::{Action, Builtin, Direction, Item, ItemId, Owner};
use st_fiction::behavior::{actor, default_action, pick, room};
use st_fiction::{Context, FictionResult, Game, ItemBehavior, Leave, Outcome, RoomBehavior};
use tracing::{debug, info};

use crate::world::{OUTSIDE, SampleIds};

const AMBIENCE: [&str; 3] = [
    "\nYou hear some noises from the cave.",
    "\nHot winds are blowing from the desert.",
    "",
];

const ARROWS: &str = "As you lift the skull, a volley of poisonous arrows is shot from the \
                      walls! You try to dodge the arrows, but they take you by surprise!\n\
                      You are dead.";

/// Attach every custom behavior of the sample.
pub fn attach(game: &mut Game, ids: &SampleIds) -> FictionResult<()> {
    game.add_room_behavior(OUTSIDE, OutsideCave)?;
    game.add_item_behavior(ids.witch, Witch)?;
    game.add_item_behavior(
        ids.skull,
        Skull {
            pedestal: ids.pedestal,
        },
    )?;
    game.add_item_behavior(ids.bottle, Bottle::default())?;
    Ok(())
}

/// The sunny spot in front of the cave.
///
/// Walking south into the desert is refused; any other exit leads into the
/// dark. Every action here may be followed by an ambient line.
pub struct OutsideCave;

impl RoomBehavior for OutsideCave {
    fn leave(&mut self, _ctx: &mut Context<'_>, _room: &str, direction: Direction) -> Leave {
        match direction {
            Direction::South => Leave::Deny("It's not a good idea to walk that way.".to_string()),
            _ => Leave::Allow("You entered the darkness...\n".to_string()),
        }
    }

    fn on_action(&mut self, ctx: &mut Context<'_>, name: &str, action: &Action) -> String {
        if action.name == "sleep" {
            return "Zzzz...".to_string();
        }
        let ambience = pick(ctx.rng, &AMBIENCE).unwrap_or_default();
        room::on_action(ctx, name, action) + ambience
    }
}

/// A bottle of water that can be drunk once.
#[derive(Default)]
pub struct Bottle {
    empty: bool,
}

impl ItemBehavior for Bottle {
    fn on_action(
        &mut self,
        ctx: &mut Context<'_>,
        this: ItemId,
        action: &Action,
        target: Option<ItemId>,
    ) -> Outcome {
        if action.name != "drink" {
            return default_action(ctx, this, action, target);
        }
        if self.empty {
            return Outcome::text("It's empty.");
        }
        self.empty = true;
        ctx.world.rename(this, "empty bottle");
        Outcome::text("You drink some water.")
    }
}

/// The gold skull on the pedestal, guarded by a trap.
pub struct Skull {
    pedestal: ItemId,
}

impl ItemBehavior for Skull {
    fn on_action(
        &mut self,
        ctx: &mut Context<'_>,
        this: ItemId,
        action: &Action,
        target: Option<ItemId>,
    ) -> Outcome {
        // the skull itself counts as one of the pedestal's items
        let guarded = ctx.world[this].owner() == &Owner::Item(self.pedestal);
        if guarded
            && action.is(Builtin::Take)
            && ctx.world[self.pedestal].contents().len() < 2
        {
            info!("skull trap triggered");
            ctx.world.finish();
            return Outcome::moved(ARROWS, Owner::Nowhere);
        }
        default_action(ctx, this, action, target)
    }
}

/// The witch waiting outside the cave.
pub struct Witch;

impl Witch {
    fn topic_vocabulary(ctx: &Context<'_>, this: ItemId, topic: Option<usize>) -> String {
        topic
            .and_then(|i| ctx.world[this].person.as_ref()?.topics.get(i))
            .map(|topic| topic.vocabulary.clone())
            .unwrap_or_default()
    }

    fn topic_used(ctx: &Context<'_>, this: ItemId, topic: Option<usize>) -> bool {
        topic
            .and_then(|i| ctx.world[this].person.as_ref()?.topics.get(i))
            .is_some_and(|topic| topic.used)
    }
}

impl ItemBehavior for Witch {
    fn on_topic(
        &mut self,
        ctx: &mut Context<'_>,
        this: ItemId,
        topic: Option<usize>,
        action: &Action,
        item: Option<ItemId>,
    ) -> String {
        let vocabulary = Self::topic_vocabulary(ctx, this, topic);

        if action.is(Builtin::Give) && vocabulary == "gold skull" {
            info!("skull delivered");
            ctx.world.finish();
            return "\"Yes! Thank you!\"\nGame Over.".to_string();
        }
        if !action.is(Builtin::Ask) {
            return actor::on_topic(ctx, this, topic, action, item);
        }

        let mut extra = String::new();
        if vocabulary == "name" {
            ctx.world.rename(this, "Melissa");
            if let Some(person) = ctx.world[this].person.as_mut() {
                person.display_name = "Melissa the witch".to_string();
                person.known = true;
            }
        } else if vocabulary.contains("box") && !Self::topic_used(ctx, this, topic) {
            let key = Item::new("key")
                .with_description("A small key that should help to unlock something.")
                .pickable()
                .visible();
            if ctx.world.spawn(key, Owner::Inventory).is_ok() {
                debug!("witch handed over the key");
                extra.push_str("\nYou obtained a small key!");
            }
        }
        actor::on_topic(ctx, this, topic, action, item) + &extra
    }
}
