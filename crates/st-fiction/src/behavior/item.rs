//! Base reactions of plain items.

use st_core::{Action, Builtin, ItemId, Owner};

use super::{Context, Outcome};
use crate::narrator::{capitalize, describe_visible};

/// React to an action with the built-in item rules.
pub fn on_action(
    ctx: &mut Context<'_>,
    this: ItemId,
    action: &Action,
    target: Option<ItemId>,
) -> Outcome {
    match action.builtin() {
        Some(Builtin::Examine) => Outcome::text(examine(ctx, this)),
        Some(Builtin::Open) => Outcome::text(open(ctx, this)),
        Some(Builtin::Close) => Outcome::text(close(ctx, this)),
        Some(Builtin::Take) => take(ctx, this),
        Some(Builtin::Put) => put(ctx, this, target),
        Some(Builtin::Unlock) => Outcome::text(unlock(ctx, this, target)),
        Some(Builtin::Use) => Outcome::text(use_on(ctx, this, target)),
        _ => Outcome::text(format!(
            "You can't {} {}.",
            action.name,
            ctx.world[this].name_with_article()
        )),
    }
}

fn reveal(ctx: &mut Context<'_>, this: ItemId, visible: bool) {
    let children = ctx.world[this].contents().to_vec();
    for child in children {
        ctx.world[child].flags.visible = visible;
    }
}

/// Describe the item; looking inside an open container reveals its contents.
pub fn examine(ctx: &mut Context<'_>, this: ItemId) -> String {
    let item = &ctx.world[this];
    let text = if item.description.is_empty() {
        format!("You see {}.", item.name_with_article())
    } else {
        item.description.clone()
    };
    let preposition = if item.flags.surface && !item.flags.container {
        "on"
    } else {
        "in"
    };
    let suffix = format!(" {preposition} {}", item.name_with_article());

    if !item.flags.container || item.flags.open {
        let children = item.contents().to_vec();
        for child in children {
            let child = &mut ctx.world[child];
            if !child.flags.disabled {
                child.flags.visible = true;
            }
        }
    }

    let contents = ctx.world[this].contents().to_vec();
    text + &describe_visible(ctx.world, &contents, &suffix)
}

/// Open a container and show what is inside.
pub fn open(ctx: &mut Context<'_>, this: ItemId) -> String {
    let item = &ctx.world[this];
    let custom = item.text_for("open").map(str::to_string);
    if !item.flags.container {
        return custom.unwrap_or_else(|| {
            format!("I don't know how to open {}.", item.name_with_article())
        });
    }
    if item.flags.open {
        return "It's already opened.".to_string();
    }
    if item.flags.locked {
        return "It's locked.".to_string();
    }

    let suffix = format!(" in {}", item.name_with_article());
    ctx.world[this].flags.open = true;
    reveal(ctx, this, true);

    let contents = ctx.world[this].contents().to_vec();
    custom.unwrap_or_else(|| "Opened.".to_string())
        + &describe_visible(ctx.world, &contents, &suffix)
}

/// Close a container, hiding its contents.
pub fn close(ctx: &mut Context<'_>, this: ItemId) -> String {
    let item = &ctx.world[this];
    if !item.flags.container {
        return "It can't be closed.".to_string();
    }
    if !item.flags.open {
        return "It's already closed.".to_string();
    }
    let text = item.text_for("close").unwrap_or("Closed.").to_string();
    ctx.world[this].flags.open = false;
    reveal(ctx, this, false);
    text
}

/// Take the item into the inventory.
pub fn take(ctx: &mut Context<'_>, this: ItemId) -> Outcome {
    let item = &ctx.world[this];
    if item.is_held() {
        return Outcome::text("You already have it.");
    }
    let custom = item.text_for("take");
    if !item.flags.pickable {
        return Outcome::text(custom.unwrap_or("You can't take it."));
    }
    Outcome::moved(custom.unwrap_or("Taken."), Owner::Inventory)
}

/// Put a held item into a container or onto a surface.
pub fn put(ctx: &mut Context<'_>, this: ItemId, target: Option<ItemId>) -> Outcome {
    let world = &*ctx.world;
    let item = &world[this];
    if !item.is_held() {
        return Outcome::text(format!(
            "You are not holding {}.",
            item.name_with_article()
        ));
    }
    let Some(target) = target else {
        return Outcome::text("Where do you want to put it?");
    };
    if target == this || world.contains(this, target) {
        return Outcome::text("You can't put it here.");
    }

    let place = &world[target];
    let (what, into) = (item.name_with_article(), place.name_with_article());
    if place.flags.container {
        if !place.flags.open {
            return Outcome::text(capitalize(&format!("{into} is closed.")));
        }
        if !place.can_contain(&item.name) {
            return Outcome::text(format!("You can't put {what} in {into}."));
        }
        return Outcome::moved(format!("You put {what} in {into}."), Owner::Item(target));
    }
    if place.flags.surface {
        return Outcome::moved(format!("You put {what} on {into}."), Owner::Item(target));
    }
    Outcome::text("You can't put it here.")
}

/// Unlock a container with a held key.
///
/// Any held item is accepted as the key; matching the key name happens on the
/// `use` path.
pub fn unlock(ctx: &mut Context<'_>, this: ItemId, key: Option<ItemId>) -> String {
    let item = &ctx.world[this];
    if !item.flags.container {
        return "You can't unlock it.".to_string();
    }
    if !item.flags.locked {
        return "It's not locked.".to_string();
    }
    let Some(key) = key else {
        return "You need a key to unlock it.".to_string();
    };
    let key = &ctx.world[key];
    if !key.is_held() {
        return format!("You are not holding {}.", key.name_with_article());
    }
    ctx.world[this].flags.locked = false;
    "Unlocked.".to_string()
}

/// Use the item, possibly on a target.
///
/// A tool used on a non-tool lets the target react instead, and the matching
/// key used on its locked container unlocks it.
pub fn use_on(ctx: &mut Context<'_>, this: ItemId, target: Option<ItemId>) -> String {
    if let Some(target) = target {
        let (item, other) = (&ctx.world[this], &ctx.world[target]);
        if item.flags.tool && !other.flags.tool {
            return ctx.on_action(target, &Builtin::Use.action(), Some(this)).text;
        }
        if other.flags.container && other.flags.locked && other.key.as_ref() == Some(&item.name) {
            return ctx.on_action(target, &Builtin::Unlock.action(), Some(this)).text;
        }
    }
    ctx.world[this]
        .text_for("use")
        .unwrap_or("You can't use it.")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::Behaviors;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use st_core::{Item, Room, World};

    struct Fixture {
        world: World,
        rng: StdRng,
        behaviors: Behaviors,
    }

    impl Fixture {
        fn new() -> Self {
            let mut world = World::new();
            world.add_room(Room::new("Cave", "A cave.")).unwrap();
            world.set_location("Cave").unwrap();
            Self {
                world,
                rng: StdRng::seed_from_u64(0),
                behaviors: Behaviors::default(),
            }
        }

        fn spawn(&mut self, item: Item, owner: Owner) -> ItemId {
            self.world.spawn(item, owner).unwrap()
        }

        fn ctx(&mut self) -> Context<'_> {
            Context::new(&mut self.world, &mut self.rng, &mut self.behaviors)
        }
    }

    fn cave() -> Owner {
        Owner::Room("Cave".into())
    }

    #[test]
    fn examine_lists_contents_of_surface() {
        let mut f = Fixture::new();
        let pedestal = f.spawn(Item::new("pedestal").visible().surface(), cave());
        f.spawn(Item::new("gold skull").pickable(), Owner::Item(pedestal));
        let text = examine(&mut f.ctx(), pedestal);
        assert_eq!(text, "You see a pedestal.\nYou see a gold skull on a pedestal.");
    }

    #[test]
    fn examine_closed_container_keeps_secrets() {
        let mut f = Fixture::new();
        let chest = f.spawn(
            Item::new("chest").visible().container().with_description("Heavy."),
            cave(),
        );
        f.spawn(Item::new("coin"), Owner::Item(chest));
        assert_eq!(examine(&mut f.ctx(), chest), "Heavy.");
    }

    #[test]
    fn open_and_close() {
        let mut f = Fixture::new();
        let chest = f.spawn(Item::new("chest").visible().container(), cave());
        let coin = f.spawn(Item::new("coin"), Owner::Item(chest));

        assert_eq!(open(&mut f.ctx(), chest), "Opened.\nYou see a coin in a chest.");
        assert_eq!(open(&mut f.ctx(), chest), "It's already opened.");
        assert!(f.world[coin].flags.visible);
        assert_eq!(close(&mut f.ctx(), chest), "Closed.");
        assert_eq!(close(&mut f.ctx(), chest), "It's already closed.");
        assert!(!f.world[coin].flags.visible);
    }

    #[test]
    fn open_refusals() {
        let mut f = Fixture::new();
        let rock = f.spawn(Item::new("rock").visible(), cave());
        let door = f.spawn(
            Item::new("door").visible().with_action_text("open", "It's painted on the wall."),
            cave(),
        );
        let safe = f.spawn(Item::new("safe").visible().container().locked_with("code"), cave());
        let gem = f.spawn(Item::new("gem").pickable(), Owner::Item(safe));
        assert_eq!(open(&mut f.ctx(), rock), "I don't know how to open a rock.");
        assert_eq!(open(&mut f.ctx(), door), "It's painted on the wall.");
        assert_eq!(open(&mut f.ctx(), safe), "It's locked.");
        assert!(!f.world[safe].flags.open);
        assert!(!f.world[gem].flags.visible);
        assert_eq!(close(&mut f.ctx(), rock), "It can't be closed.");
    }

    #[test]
    fn take_rules() {
        let mut f = Fixture::new();
        let apple = f.spawn(Item::new("apple").visible().pickable(), cave());
        let statue = f.spawn(Item::new("statue").visible(), cave());
        let held = f.spawn(Item::new("key").visible().pickable(), Owner::Inventory);

        assert_eq!(take(&mut f.ctx(), apple), Outcome::moved("Taken.", Owner::Inventory));
        assert_eq!(take(&mut f.ctx(), statue), Outcome::text("You can't take it."));
        assert_eq!(take(&mut f.ctx(), held), Outcome::text("You already have it."));
    }

    #[test]
    fn put_rules() {
        let mut f = Fixture::new();
        let bottle = f.spawn(Item::new("bottle").visible().pickable(), Owner::Inventory);
        let floor_apple = f.spawn(Item::new("apple").visible(), cave());
        let table = f.spawn(Item::new("table").visible().surface(), cave());
        let quiver = f.spawn(
            Item::new("quiver").visible().container().opened().accepting(["arrow"]),
            cave(),
        );
        let box_ = f.spawn(Item::new("box").visible().container(), cave());

        assert_eq!(
            put(&mut f.ctx(), floor_apple, Some(table)),
            Outcome::text("You are not holding an apple.")
        );
        assert_eq!(
            put(&mut f.ctx(), bottle, None),
            Outcome::text("Where do you want to put it?")
        );
        assert_eq!(
            put(&mut f.ctx(), bottle, Some(table)),
            Outcome::moved("You put a bottle on a table.", Owner::Item(table))
        );
        assert_eq!(
            put(&mut f.ctx(), bottle, Some(quiver)),
            Outcome::text("You can't put a bottle in a quiver.")
        );
        assert_eq!(
            put(&mut f.ctx(), bottle, Some(box_)),
            Outcome::text("A box is closed.")
        );
        assert_eq!(
            put(&mut f.ctx(), bottle, Some(floor_apple)),
            Outcome::text("You can't put it here.")
        );
        assert_eq!(
            put(&mut f.ctx(), bottle, Some(bottle)),
            Outcome::text("You can't put it here.")
        );
    }

    #[test]
    fn put_into_own_contents_is_refused() {
        let mut f = Fixture::new();
        let bag = f.spawn(Item::new("bag").visible().container().opened(), Owner::Inventory);
        let pouch = f.spawn(Item::new("pouch").visible().container().opened(), Owner::Item(bag));
        assert_eq!(
            put(&mut f.ctx(), bag, Some(pouch)),
            Outcome::text("You can't put it here.")
        );
    }

    #[test]
    fn unlock_rules() {
        let mut f = Fixture::new();
        let box_ = f.spawn(Item::new("box").visible().container().locked_with("key"), cave());
        let key = f.spawn(Item::new("key").visible().pickable(), cave());
        let rock = f.spawn(Item::new("rock").visible(), cave());

        assert_eq!(unlock(&mut f.ctx(), rock, Some(key)), "You can't unlock it.");
        assert_eq!(unlock(&mut f.ctx(), box_, None), "You need a key to unlock it.");
        assert_eq!(unlock(&mut f.ctx(), box_, Some(key)), "You are not holding a key.");
        f.world.transfer(key, Owner::Inventory).unwrap();
        assert_eq!(unlock(&mut f.ctx(), box_, Some(key)), "Unlocked.");
        assert_eq!(unlock(&mut f.ctx(), box_, Some(key)), "It's not locked.");
    }

    #[test]
    fn using_the_matching_key_unlocks() {
        let mut f = Fixture::new();
        let box_ = f.spawn(Item::new("box").visible().container().locked_with("key"), cave());
        let key = f.spawn(Item::new("key").visible().pickable(), Owner::Inventory);
        let feather = f.spawn(Item::new("feather").visible(), Owner::Inventory);

        assert_eq!(use_on(&mut f.ctx(), feather, Some(box_)), "You can't use it.");
        assert_eq!(use_on(&mut f.ctx(), key, Some(box_)), "Unlocked.");
        assert!(!f.world[box_].flags.locked);
    }

    #[test]
    fn tool_lets_target_react() {
        let mut f = Fixture::new();
        let hammer = f.spawn(Item::new("hammer").visible().tool(), Owner::Inventory);
        let nail = f.spawn(
            Item::new("nail").visible().with_action_text("use", "Bang!"),
            cave(),
        );
        assert_eq!(use_on(&mut f.ctx(), hammer, Some(nail)), "Bang!");
    }

    #[test]
    fn unknown_verb() {
        let mut f = Fixture::new();
        let rock = f.spawn(Item::new("rock").visible(), cave());
        let outcome = on_action(&mut f.ctx(), rock, &Action::custom("eat"), None);
        assert_eq!(outcome.text, "You can't eat a rock.");
        assert_eq!(outcome.owner, None);
    }
}
