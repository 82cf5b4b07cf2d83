//! The cave, the land outside it, and everything in them.

use st_core::{Action, Direction, Item, ItemId, Owner, Person, Room, Topic, World, WorldResult};

/// Starting room.
pub const OUTSIDE: &str = "Outside cave";
/// The cave itself.
pub const CAVE: &str = "Cave";
/// Exists, but the outside room never lets the player walk there.
pub const DESERT: &str = "Desert";

/// Handles of the items that carry custom behaviors.
#[derive(Debug, Clone, Copy)]
pub struct SampleIds {
    /// The witch.
    pub witch: ItemId,
    /// The pedestal the skull rests on.
    pub pedestal: ItemId,
    /// The trapped gold skull.
    pub skull: ItemId,
    /// The bottle of water.
    pub bottle: ItemId,
}

fn witch() -> Person {
    Person::new("Mysterious beautiful woman")
        .with_greeting("\"Hello, traveller. Maybe you can help me.\"")
        .with_topic(
            Topic::new("ask", "pedestal")
                .answer("\"Yes, examine it. The skull should be somewhere on it.\""),
        )
        .with_topic(
            Topic::new("ask", "box key lock")
                .answer("\"Ah, box... Here, take the key.\"")
                .repeat("\"You have the key, right?\""),
        )
        .with_topic(Topic::new("give", "gold skull"))
        .with_topic(
            Topic::new("give", "bottle")
                .answer("She drinks the water.\n\"Nice, thanks. But I need the skull.\""),
        )
        .with_topic(Topic::new("ask", "help skull").answer(
            "\"Bring me the skull from the cave! But be careful, be sure to put something \
             on the pedestal before taking the skull!\"",
        ))
        .with_topic(
            Topic::new("ask", "name")
                .answer("\"I'm Melissa, the local witch. And I need your help.\""),
        )
}

/// Build the world and return it with the handles behaviors attach to.
pub fn build() -> WorldResult<(World, SampleIds)> {
    let mut world = World::new();

    world.add_room(
        Room::new(
            OUTSIDE,
            "[[img=https://i.imgur.com/ar18tWi.jpg]]You're standing in the bright sunlight \
             just outside of a large, dark, foreboding cave, which lies to the north. Desert \
             lies to the south.",
        )
        .with_exit(Direction::North, CAVE)
        .with_exit(Direction::South, DESERT),
    )?;
    world.add_room(
        Room::new(
            CAVE,
            "You're inside a dark and musty cave. Sunlight pours in from a passage to the south.",
        )
        .with_exit(Direction::South, OUTSIDE),
    )?;
    world.add_room(Room::new(DESERT, "Sand, as far as you can see."))?;
    world.set_location(OUTSIDE)?;

    world.add_action(Action::custom("sleep"));
    world.add_action(Action::custom("drink").requires_item());

    let outside = Owner::Room(OUTSIDE.to_string());
    let witch = world.spawn(
        Item::actor("mysterious woman", witch())
            .with_vocabulary("girl woman witch melissa")
            .with_description(
                "You see a mysterious woman in dark clothes.\n\"Hey, can we talk?\", she asks.",
            ),
        outside.clone(),
    )?;
    world.spawn(
        Item::new("cave")
            .with_vocabulary("dark large foreboding")
            .with_description("It's a very dark cave.")
            .visible()
            .decoration(),
        outside,
    )?;

    let cave = Owner::Room(CAVE.to_string());
    let pedestal = world.spawn(
        Item::new("pedestal")
            .with_description("There is an ancient pedestal inside the cave.")
            .surface()
            .visible(),
        cave.clone(),
    )?;
    let skull = world.spawn(Item::new("gold skull").pickable(), Owner::Item(pedestal))?;

    let chest = world.spawn(
        Item::new("box")
            .with_description("Old wooden box.")
            .container()
            .locked_with("key")
            .visible(),
        cave,
    )?;
    let bottle = world.spawn(Item::new("bottle").pickable(), Owner::Item(chest))?;
    world.spawn(Item::new("steel sword").pickable(), Owner::Item(chest))?;
    world.spawn(Item::new("silver sword").pickable(), Owner::Item(chest))?;

    Ok((
        world,
        SampleIds {
            witch,
            pedestal,
            skull,
            bottle,
        },
    ))
}
