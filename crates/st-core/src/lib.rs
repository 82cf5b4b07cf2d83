//! Core types for Storyteller: actions, items, actors, rooms, and the world.
//!
//! This crate defines the data model a text adventure is built from. It is
//! independent of the command parser: content code constructs a [`World`]
//! programmatically and the engine mutates it one command at a time.

/// Verb definitions, built-in and game-defined.
pub mod action;
/// Error types used throughout the crate.
pub mod error;
/// Items, their flags, and ownership records.
pub mod item;
/// Dialogue capability: actors and their topics.
pub mod person;
/// Rooms and exit directions.
pub mod room;
/// Whole-word matching of input against vocabularies.
pub mod vocabulary;
/// The world arena that owns items and rooms.
pub mod world;

/// Re-export action types.
pub use action::{Action, Builtin};
/// Re-export error types.
pub use error::{WorldError, WorldResult};
/// Re-export item types.
pub use item::{Item, ItemFlags, ItemId, Owner};
/// Re-export dialogue types.
pub use person::{Person, Topic};
/// Re-export room types.
pub use room::{Direction, Room};
/// Re-export the world model.
pub use world::World;
