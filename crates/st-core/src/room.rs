use std::fmt;

use crate::item::ItemId;

/// Direction of a room exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
}

impl Direction {
    /// Parse a direction word or its one-letter abbreviation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            _ => None,
        }
    }

    /// Get the display name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A location the player can stand in.
#[derive(Debug, Clone)]
pub struct Room {
    /// Registry key and short re-entry text.
    pub name: String,
    /// Full description shown on first visit and on look.
    pub description: String,
    /// Destination room north, if any.
    pub north: Option<String>,
    /// Destination room south, if any.
    pub south: Option<String>,
    /// Destination room east, if any.
    pub east: Option<String>,
    /// Destination room west, if any.
    pub west: Option<String>,
    /// Set on the first visit.
    pub visited: bool,
    /// When set, the room cannot be entered and this text explains why.
    pub lock: Option<String>,
    pub(crate) contents: Vec<ItemId>,
}

impl Room {
    /// Create a room with a description and no exits.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            north: None,
            south: None,
            east: None,
            west: None,
            visited: false,
            lock: None,
            contents: Vec::new(),
        }
    }

    /// Items lying directly in the room, in insertion order.
    pub fn contents(&self) -> &[ItemId] {
        &self.contents
    }

    /// The destination in a direction, if an exit exists.
    pub fn exit(&self, direction: Direction) -> Option<&str> {
        let exit = match direction {
            Direction::North => &self.north,
            Direction::South => &self.south,
            Direction::East => &self.east,
            Direction::West => &self.west,
        };
        exit.as_deref().filter(|name| !name.is_empty())
    }

    /// Add an exit.
    pub fn with_exit(mut self, direction: Direction, destination: impl Into<String>) -> Self {
        let destination = Some(destination.into());
        match direction {
            Direction::North => self.north = destination,
            Direction::South => self.south = destination,
            Direction::East => self.east = destination,
            Direction::West => self.west = destination,
        }
        self
    }

    /// Lock the room with an explanation.
    pub fn locked(mut self, message: impl Into<String>) -> Self {
        self.lock = Some(message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_directions() {
        assert_eq!(Direction::parse("n"), Some(Direction::North));
        assert_eq!(Direction::parse("west"), Some(Direction::West));
        assert_eq!(Direction::parse("up"), None);
    }

    #[test]
    fn exits() {
        let room = Room::new("Cave", "Dark.")
            .with_exit(Direction::South, "Outside")
            .with_exit(Direction::East, "");
        assert_eq!(room.exit(Direction::South), Some("Outside"));
        assert_eq!(room.exit(Direction::North), None);
        assert_eq!(room.exit(Direction::East), None);
    }
}
