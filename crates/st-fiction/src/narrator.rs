//! Narrative text helpers: list joining and room/container listings.

use st_core::{ItemId, World};

/// Join names as "a", "a and b", "a, b and c".
pub fn and_list<S: AsRef<str>>(names: &[S]) -> String {
    join_with(names, "and")
}

/// Join names as "a", "a or b", "a, b or c".
pub fn or_list<S: AsRef<str>>(names: &[S]) -> String {
    join_with(names, "or")
}

fn join_with<S: AsRef<str>>(names: &[S], last: &str) -> String {
    match names {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., tail] => {
            let init: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{} {last} {}", init.join(", "), tail.as_ref())
        }
    }
}

/// Uppercase the first character.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// How an actor is introduced in a listing.
pub fn actor_label(world: &World, id: ItemId) -> String {
    let item = &world[id];
    match &item.person {
        Some(person) if !person.display_name.is_empty() => person.display_name.clone(),
        _ => capitalize(&item.name_with_article()),
    }
}

/// List the perceivable, non-decorative items among `ids`.
///
/// Produces "\nYou see a, b and c<suffix>." for plain items followed by one
/// "\n<Actor> is here." line per actor, or an empty string when nothing shows.
pub fn describe_visible(world: &World, ids: &[ItemId], suffix: &str) -> String {
    let visible = world.visible(ids, true, false);
    let (actors, things): (Vec<ItemId>, Vec<ItemId>) =
        visible.into_iter().partition(|&id| world[id].is_actor());

    let mut text = String::new();
    if !things.is_empty() {
        let names: Vec<String> = things
            .iter()
            .map(|&id| world[id].name_with_article())
            .collect();
        text.push_str(&format!("\nYou see {}{suffix}.", and_list(&names)));
    }
    for id in actors {
        text.push_str(&format!("\n{} is here.", actor_label(world, id)));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use st_core::{Item, Owner, Person, Room};

    #[test]
    fn list_joining() {
        assert_eq!(and_list::<&str>(&[]), "");
        assert_eq!(and_list(&["a key"]), "a key");
        assert_eq!(and_list(&["a key", "a box"]), "a key and a box");
        assert_eq!(or_list(&["x", "y", "z"]), "x, y or z");
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("a box is closed."), "A box is closed.");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn listing_skips_hidden_and_decorations() {
        let mut world = World::new();
        world.add_room(Room::new("Hall", "A hall.")).unwrap();
        let hall = Owner::Room("Hall".into());
        world.spawn(Item::new("lamp").visible(), hall.clone()).unwrap();
        world.spawn(Item::new("apple").visible(), hall.clone()).unwrap();
        world.spawn(Item::new("ghost"), hall.clone()).unwrap();
        world
            .spawn(Item::new("wall").visible().decoration(), hall.clone())
            .unwrap();
        world
            .spawn(Item::actor("guard", Person::new("A sleepy guard")), hall)
            .unwrap();

        let contents = world.room("Hall").unwrap().contents().to_vec();
        assert_eq!(
            describe_visible(&world, &contents, " here"),
            "\nYou see a lamp and an apple here.\nA sleepy guard is here."
        );
    }

    #[test]
    fn empty_listing() {
        let world = World::new();
        assert_eq!(describe_visible(&world, &[], " here"), "");
    }
}
