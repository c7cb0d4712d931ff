//! Per-game configuration.
//!
//! A `GameConfig` is fixed at game construction and never mutated during
//! play. The engine reads it to decide how raw input is interpreted and
//! how many turns/misses a game allows.

use serde::{Deserialize, Serialize};

/// Default number of misses a game survives.
pub const DEFAULT_LIVES: u32 = 2;

/// Immutable configuration for one mini-game.
///
/// ## Example
///
/// ```
/// use seg_game::GameConfig;
///
/// let config = GameConfig::new(5)
///     .with_lives(3)
///     .with_input_as_linear_int(true);
///
/// assert_eq!(config.win_length, 5);
/// assert_eq!(config.lives, 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of turns required to complete the game. Must equal the
    /// length of the resolved answer sequence after setup.
    pub win_length: usize,

    /// Starting life count. The game is lost when a miss drains this to 0.
    pub lives: u32,

    /// Convert raw one-hot button bitmasks to 0-based button indices
    /// before answer matching (e.g. raw 8 becomes index 3).
    pub input_as_linear_int: bool,

    /// Echo each debounced press on the LED bar while playing.
    pub show_button_feedback: bool,
}

impl GameConfig {
    /// Create a configuration with the given win length and defaults
    /// matching the board firmware: 2 lives, linear-int input, feedback on.
    #[must_use]
    pub const fn new(win_length: usize) -> Self {
        Self {
            win_length,
            lives: DEFAULT_LIVES,
            input_as_linear_int: true,
            show_button_feedback: true,
        }
    }

    /// Set the starting life count.
    #[must_use]
    pub const fn with_lives(mut self, lives: u32) -> Self {
        self.lives = lives;
        self
    }

    /// Set whether raw input is converted to a linear button index.
    #[must_use]
    pub const fn with_input_as_linear_int(mut self, enabled: bool) -> Self {
        self.input_as_linear_int = enabled;
        self
    }

    /// Set whether presses are echoed on the LED bar.
    #[must_use]
    pub const fn with_button_feedback(mut self, enabled: bool) -> Self {
        self.show_button_feedback = enabled;
        self
    }
}
