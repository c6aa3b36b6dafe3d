//! Match configuration.

use crate::game_state::chess_rules::DEFAULT_CLOCK_SECONDS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Starting time for each side, in whole seconds.
    pub clock_seconds: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            clock_seconds: DEFAULT_CLOCK_SECONDS,
        }
    }
}
