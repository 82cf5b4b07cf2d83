//! A running game: the world plus behaviors, driven one command at a time.

use rand::SeedableRng;
use rand::rngs::StdRng;
use st_core::{Builtin, ItemId, World};
use tracing::debug;

use crate::behavior::{Behaviors, Context, ItemBehavior, RoomBehavior};
use crate::config::GameConfig;
use crate::dispatch;
use crate::error::{FictionError, FictionResult};
use crate::narrator::and_list;
use crate::navigation;
use crate::parser::{Command, normalize, parse_command};

/// Response to empty or meaningless input.
pub const PARDON: &str = "I beg your pardon?";

/// Response to any input once the game has ended.
pub const FINISHED: &str = "Game is finished, but you can restart it.";

const BASE_HELP: &str = "Navigation: (n)orth, (s)outh, (e)ast, (w)est.
Useful verbs: (l)ook, e(x)amine, take, open, close, put _ on _, unlock _ with _
Characters: ask _ about _, give _ to _";

/// An interactive fiction game.
///
/// Commands are processed one at a time through [`Game::process`], which
/// always answers with narrative text.
pub struct Game {
    world: World,
    behaviors: Behaviors,
    rng: StdRng,
    config: GameConfig,
}

impl Game {
    /// Create a game over a fully built world.
    ///
    /// Fails if the world's location is not one of its rooms.
    pub fn new(world: World, config: GameConfig) -> FictionResult<Self> {
        if world.current_room().is_none() {
            return Err(FictionError::StartRoomNotFound(world.location().to_string()));
        }
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            world,
            behaviors: Behaviors::default(),
            rng,
            config,
        })
    }

    /// Attach a custom behavior to an item or actor, replacing any earlier one.
    pub fn add_item_behavior(
        &mut self,
        id: ItemId,
        behavior: impl ItemBehavior + 'static,
    ) -> FictionResult<()> {
        if self.world.get(id).is_none() {
            return Err(FictionError::UnknownItem(id));
        }
        self.behaviors.items.insert(id, Box::new(behavior));
        Ok(())
    }

    /// Attach a custom behavior to a room, replacing any earlier one.
    pub fn add_room_behavior(
        &mut self,
        room: &str,
        behavior: impl RoomBehavior + 'static,
    ) -> FictionResult<()> {
        if self.world.room(room).is_none() {
            return Err(FictionError::UnknownRoom(room.to_string()));
        }
        self.behaviors
            .rooms
            .insert(room.to_string(), Box::new(behavior));
        Ok(())
    }

    /// Get the world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Whether the game has ended.
    pub fn is_finished(&self) -> bool {
        self.world.is_finished()
    }

    /// Opening text: the banner and the starting room, entered for the first time.
    pub fn intro(&mut self) -> String {
        let location = self.world.location().to_string();
        let banner = self.config.intro_banner.clone();
        let enter = self.context().room_enter(&location);
        format!("{banner}\n\n{enter}\n")
    }

    /// Built-in help followed by the game's own.
    pub fn help(&self) -> String {
        match &self.config.help_extra {
            Some(extra) => format!("{BASE_HELP}\n\n{extra}"),
            None => BASE_HELP.to_string(),
        }
    }

    /// What the player carries.
    pub fn inventory(&self) -> String {
        let names: Vec<String> = self
            .world
            .inventory()
            .iter()
            .map(|&id| self.world[id].name_with_article())
            .collect();
        if names.is_empty() {
            "You have nothing.".to_string()
        } else {
            format!("You have {}.", and_list(&names))
        }
    }

    /// Process one line of player input and return the response.
    pub fn process(&mut self, input: &str) -> String {
        let normalized = normalize(input);
        if normalized.is_empty() {
            return PARDON.to_string();
        }
        if self.world.is_finished() {
            return FINISHED.to_string();
        }
        self.world.set_last_input(normalized.as_str());

        let tokens: Vec<&str> = normalized.split(' ').collect();
        let command = parse_command(&tokens, self.world.actions());
        debug!(input = %normalized, ?command, "processing command");
        self.execute(command)
    }

    fn execute(&mut self, command: Command<'_>) -> String {
        match command {
            Command::Move(direction) => navigation::go(&mut self.context(), direction),
            Command::Look => {
                let location = self.world.location().to_string();
                let mut ctx = self.context();
                ctx.room_look(&location) + &ctx.room_reaction(&Builtin::Look.action())
            }
            Command::Inventory => {
                self.inventory() + &self.context().room_reaction(&Builtin::Inventory.action())
            }
            Command::Help => self.help(),
            Command::Item { action, args } => {
                dispatch::item_action(&mut self.context(), args, &action)
            }
            Command::Actor { action, args } => {
                let mut ctx = self.context();
                let text = dispatch::actor_action(&mut ctx, args, &action);
                if action.is(Builtin::Ask) {
                    text + &ctx.room_reaction(&action)
                } else {
                    text
                }
            }
            Command::Room(action) => self.context().room_reaction(&action),
            Command::Unknown(word) => format!("I don't know the word \"{word}\"."),
            Command::Empty => PARDON.to_string(),
        }
    }

    fn context(&mut self) -> Context<'_> {
        Context::new(&mut self.world, &mut self.rng, &mut self.behaviors)
    }
}
