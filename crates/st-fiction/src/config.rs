//! Configuration for a game instance.

/// Configuration for a game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// RNG seed for reproducible dialogue and flavor picks. `None` seeds
    /// from the operating system.
    pub seed: Option<u64>,
    /// Heading printed above the first room description.
    pub intro_banner: String,
    /// Game-specific help appended to the built-in help text.
    pub help_extra: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            intro_banner: "WELCOME!".to_string(),
            help_extra: None,
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the intro banner.
    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.intro_banner = banner.into();
        self
    }

    /// Append game-specific help.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help_extra = Some(help.into());
        self
    }
}
