//! Sample cave adventure for Storyteller.
//!
//! A short game built on the engine's extension points: a room that vetoes
//! one exit and mutters ambient lines, a trapped skull, a bottle that can be
//! emptied, and a witch who hands out a key and ends the game when she gets
//! the skull.

/// Custom behaviors of the sample's rooms, items, and actors.
pub mod behaviors;
/// Construction of the sample world.
pub mod world;

use st_fiction::{FictionResult, Game, GameConfig};

/// Help line listing the sample's own verbs.
pub const HELP: &str = "Sample custom verbs: sleep, drink";

/// Build the sample game and return it with its intro text.
///
/// The configuration's help text is replaced by the sample's verb list unless
/// the caller supplied one.
pub fn new_game(config: GameConfig) -> FictionResult<(Game, String)> {
    let config = match config.help_extra {
        Some(_) => config,
        None => config.with_help(HELP),
    };
    let (world, ids) = world::build()?;
    let mut game = Game::new(world, config)?;
    behaviors::attach(&mut game, &ids)?;
    let intro = game.intro();
    Ok((game, intro))
}
