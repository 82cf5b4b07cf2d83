//! Interactive fiction engine for Storyteller.
//!
//! Turns free-form player input into actions on a [`st_core::World`]: the
//! parser picks a verb, the resolver narrows the objects the player named,
//! and entity behaviors produce narrative text and ownership changes.

/// Entity behaviors and the context handed to them.
pub mod behavior;
/// Game configuration.
pub mod config;
/// Item- and actor-oriented action handling.
pub mod dispatch;
/// Error types for the fiction engine.
pub mod error;
/// The game driver.
pub mod game;
/// List and listing text helpers.
pub mod narrator;
/// Room-to-room movement.
pub mod navigation;
/// Command parsing and entity resolution.
pub mod parser;

pub use behavior::{Context, ItemBehavior, Leave, Outcome, RoomBehavior};
pub use config::GameConfig;
pub use error::{FictionError, FictionResult};
pub use game::{FINISHED, Game, PARDON};
