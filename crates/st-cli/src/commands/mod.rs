pub mod play;
pub mod transcript;

use colored::Colorize;
use st_fiction::{Game, GameConfig};
use tracing::info;

use crate::markup;

/// What the front-end should do with one line of input.
enum Reply {
    /// Print this text.
    Text(String),
    /// Stop reading input.
    Quit,
}

/// The sample game plus the console-level commands around it.
struct Session {
    game: Game,
}

impl Session {
    /// Start the sample game, returning the session and its intro.
    fn start(seed: Option<u64>) -> Result<(Self, String), String> {
        let config = match seed {
            Some(seed) => GameConfig::default().with_seed(seed),
            None => GameConfig::default(),
        };
        let (game, intro) = new_game(config)?;
        Ok((Self { game }, intro))
    }

    fn handle(&mut self, input: &str) -> Result<Reply, String> {
        match input.trim() {
            "quit" => Ok(Reply::Quit),
            "restart" => {
                info!("restarting game");
                let (game, intro) = new_game(self.game.config().clone())?;
                self.game = game;
                Ok(Reply::Text(intro))
            }
            _ => Ok(Reply::Text(self.game.process(input))),
        }
    }
}

fn new_game(config: GameConfig) -> Result<(Game, String), String> {
    st_sample::new_game(config).map_err(|e| format!("failed to start game: {e}"))
}

/// Print game output: raw when `plain`, otherwise rendered and dimmed.
fn show(text: &str, plain: bool) {
    if plain {
        println!("{text}");
    } else {
        println!("{}", markup::render(text).dimmed());
    }
}
