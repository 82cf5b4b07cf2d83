use std::collections::HashMap;
use std::ops::{Index, IndexMut};

use tracing::{debug, warn};

use crate::action::Action;
use crate::error::{WorldError, WorldResult};
use crate::item::{Item, ItemId, Owner};
use crate::room::Room;

/// The game world. Owns every item, room, and the player's inventory.
///
/// Items live in an arena and are addressed by [`ItemId`]; containment is
/// recorded twice (the item's [`Owner`] and the owner's contents list) and
/// [`World::transfer`] is the only way to change it, keeping both in step.
#[derive(Debug, Clone, Default)]
pub struct World {
    items: Vec<Item>,
    rooms: HashMap<String, Room>,
    inventory: Vec<ItemId>,
    location: String,
    actions: Vec<Action>,
    finished: bool,
    last_input: String,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Register a room under its name.
    pub fn add_room(&mut self, room: Room) -> WorldResult<()> {
        if self.rooms.contains_key(&room.name) {
            return Err(WorldError::DuplicateRoom(room.name));
        }
        self.rooms.insert(room.name.clone(), room);
        Ok(())
    }

    /// Add an item to the arena and place it with `owner`.
    pub fn spawn(&mut self, mut item: Item, owner: Owner) -> WorldResult<ItemId> {
        item.owner = Owner::Nowhere;
        item.contents.clear();

        let id = ItemId(self.items.len());
        self.items.push(item);
        if let Err(e) = self.transfer(id, owner) {
            self.items.pop();
            return Err(e);
        }
        Ok(id)
    }

    /// Register a game-defined action.
    pub fn add_action(&mut self, action: Action) {
        self.actions.push(action);
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Get an item by ID.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(id.0)
    }

    /// Get a mutable item by ID.
    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.get_mut(id.0)
    }

    /// All items in arena order.
    pub fn items(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.items.iter().enumerate().map(|(i, item)| (ItemId(i), item))
    }

    /// Find the first item with exactly this name.
    pub fn find_item(&self, name: &str) -> Option<ItemId> {
        self.items().find(|(_, item)| item.name == name).map(|(id, _)| id)
    }

    /// Get a room by name.
    pub fn room(&self, name: &str) -> Option<&Room> {
        self.rooms.get(name)
    }

    /// Get a mutable room by name.
    pub fn room_mut(&mut self, name: &str) -> Option<&mut Room> {
        self.rooms.get_mut(name)
    }

    /// All registered rooms.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// The room the player stands in.
    pub fn current_room(&self) -> Option<&Room> {
        self.rooms.get(&self.location)
    }

    /// Name of the room the player stands in.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Move the player without any enter/leave hooks.
    pub fn set_location(&mut self, name: &str) -> WorldResult<()> {
        if !self.rooms.contains_key(name) {
            return Err(WorldError::RoomNotFound(name.to_string()));
        }
        self.location = name.to_string();
        Ok(())
    }

    /// Items the player carries, in the order they were picked up.
    pub fn inventory(&self) -> &[ItemId] {
        &self.inventory
    }

    /// Game-defined actions.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Find a game-defined action by name.
    pub fn find_action(&self, name: &str) -> Option<&Action> {
        self.actions.iter().find(|a| a.name == name)
    }

    /// Whether the game has ended.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// End the game. No further command mutates the world.
    pub fn finish(&mut self) {
        self.finished = true;
    }

    /// The last normalized command, kept for diagnostics.
    pub fn last_input(&self) -> &str {
        &self.last_input
    }

    /// Record the last normalized command.
    pub fn set_last_input(&mut self, input: impl Into<String>) {
        self.last_input = input.into();
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Change an item's display name. Items with a fixed name refuse.
    pub fn rename(&mut self, id: ItemId, name: impl Into<String>) -> bool {
        match self.items.get_mut(id.0) {
            Some(item) if !item.flags.fixed_name => {
                item.name = name.into();
                true
            }
            _ => false,
        }
    }

    /// Move an item to a new owner.
    ///
    /// The destination is validated before anything moves: unknown rooms or
    /// items, and moves that would put an item inside itself, are refused.
    pub fn transfer(&mut self, id: ItemId, to: Owner) -> WorldResult<()> {
        let name = self.get(id).ok_or(WorldError::ItemNotFound(id))?.name.clone();

        match &to {
            Owner::Room(room) if !self.rooms.contains_key(room) => {
                return Err(WorldError::RoomNotFound(room.clone()));
            }
            Owner::Item(parent) => {
                if self.get(*parent).is_none() {
                    return Err(WorldError::ItemNotFound(*parent));
                }
                if *parent == id || self.contains(id, *parent) {
                    return Err(WorldError::InvalidTransfer {
                        item: name,
                        reason: "it would end up inside itself".to_string(),
                    });
                }
            }
            _ => {}
        }

        self.detach(id);

        match &to {
            Owner::Nowhere => {}
            Owner::Inventory => self.inventory.push(id),
            Owner::Room(room) => {
                if let Some(room) = self.rooms.get_mut(room) {
                    room.contents.push(id);
                }
            }
            Owner::Item(parent) => self.items[parent.0].contents.push(id),
        }

        debug!(item = %name, from = %self.items[id.0].owner, to = %to, "transfer");
        self.items[id.0].owner = to;
        Ok(())
    }

    fn detach(&mut self, id: ItemId) {
        let removed = match self.items[id.0].owner.clone() {
            Owner::Nowhere => true,
            Owner::Inventory => remove_from(&mut self.inventory, id),
            Owner::Room(room) => self
                .rooms
                .get_mut(&room)
                .is_some_and(|room| remove_from(&mut room.contents, id)),
            Owner::Item(parent) => self
                .items
                .get_mut(parent.0)
                .is_some_and(|parent| remove_from(&mut parent.contents, id)),
        };
        if removed {
            return;
        }

        warn!(item = %self.items[id.0].name, "stale owner record, searching containment tree");
        match self.find_parent(id) {
            Some(Owner::Inventory) => {
                remove_from(&mut self.inventory, id);
            }
            Some(Owner::Room(room)) => {
                if let Some(room) = self.rooms.get_mut(&room) {
                    remove_from(&mut room.contents, id);
                }
            }
            Some(Owner::Item(parent)) => {
                remove_from(&mut self.items[parent.0].contents, id);
            }
            Some(Owner::Nowhere) | None => {}
        }
    }

    // -----------------------------------------------------------------------
    // Containment queries
    // -----------------------------------------------------------------------

    /// Search the containment tree (inventory, then every room) for the
    /// collection holding `id`.
    pub fn find_parent(&self, id: ItemId) -> Option<Owner> {
        if self.inventory.contains(&id) {
            return Some(Owner::Inventory);
        }
        if let Some(room) = self.rooms.values().find(|r| r.contents.contains(&id)) {
            return Some(Owner::Room(room.name.clone()));
        }

        let roots = self
            .inventory
            .iter()
            .chain(self.rooms.values().flat_map(|r| r.contents.iter()));
        for &root in roots {
            if let Some(parent) = self.search(root, id) {
                return Some(Owner::Item(parent));
            }
        }
        None
    }

    fn search(&self, parent: ItemId, id: ItemId) -> Option<ItemId> {
        for &child in &self.items[parent.0].contents {
            if child == id {
                return Some(parent);
            }
            if let Some(found) = self.search(child, id) {
                return Some(found);
            }
        }
        None
    }

    /// Whether `id` sits somewhere inside `ancestor`.
    pub fn contains(&self, ancestor: ItemId, id: ItemId) -> bool {
        self.get(ancestor).is_some_and(|item| {
            item.contents
                .iter()
                .any(|&child| child == id || self.contains(child, id))
        })
    }

    /// Perceivable items among `roots`, optionally descending into contents.
    ///
    /// An item that cannot be perceived hides everything inside it.
    pub fn visible(&self, roots: &[ItemId], skip_decoration: bool, nested: bool) -> Vec<ItemId> {
        let mut found = Vec::new();
        for &id in roots {
            let Some(item) = self.get(id) else {
                continue;
            };
            if skip_decoration && item.flags.decoration {
                continue;
            }
            if item.is_perceivable() {
                found.push(id);
                if nested {
                    found.extend(self.visible(&item.contents, skip_decoration, nested));
                }
            }
        }
        found
    }

    /// Verify that every item sits in exactly the collection its owner names.
    pub fn check_ownership(&self) -> WorldResult<()> {
        let mut found: HashMap<ItemId, Vec<Owner>> = HashMap::new();
        for &id in &self.inventory {
            found.entry(id).or_default().push(Owner::Inventory);
        }
        for room in self.rooms.values() {
            for &id in &room.contents {
                found.entry(id).or_default().push(Owner::Room(room.name.clone()));
            }
        }
        for (parent, item) in self.items() {
            for &id in &item.contents {
                found.entry(id).or_default().push(Owner::Item(parent));
            }
        }

        for (id, item) in self.items() {
            let places = found.remove(&id).unwrap_or_default();
            let consistent = match &item.owner {
                Owner::Nowhere => places.is_empty(),
                owner => places.len() == 1 && &places[0] == owner,
            };
            if !consistent {
                let found = places
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                return Err(WorldError::Ownership {
                    item: item.name.clone(),
                    recorded: item.owner.to_string(),
                    found: if found.is_empty() { "nothing".to_string() } else { found },
                });
            }
        }
        Ok(())
    }
}

impl Index<ItemId> for World {
    type Output = Item;

    fn index(&self, id: ItemId) -> &Item {
        &self.items[id.0]
    }
}

impl IndexMut<ItemId> for World {
    fn index_mut(&mut self, id: ItemId) -> &mut Item {
        &mut self.items[id.0]
    }
}

fn remove_from(list: &mut Vec<ItemId>, id: ItemId) -> bool {
    match list.iter().position(|&i| i == id) {
        Some(pos) => {
            list.remove(pos);
            true
        }
        None => false,
    }
}
