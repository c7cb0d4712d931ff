//! The session controller.
//!
//! `SevenSegButtonGame` owns the display, the registry, the input
//! debouncer and the RNG. A boot loop drives it by calling
//! [`tick`](SevenSegButtonGame::tick) repeatedly; the controller runs
//! one of two mutually exclusive loop bodies depending on its mode:
//!
//! - **Standby**: show the selected game's index on the LED bar, wait
//!   for the confirm button to be pressed twice. Any other press bails
//!   to the lose screen (display only).
//! - **Playing**: forward each debounced press to the selected game's
//!   turn evaluator.
//!
//! Nothing on the tick path returns an error; an unplayable game fails
//! at `setup`, never mid-play.

use log::{debug, warn};

use crate::core::{ConfigError, GameRng, InputDebouncer, RegistrationError};
use crate::display::Display;
use crate::engine::minigame::MiniGame;
use crate::engine::registry::GameRegistry;

/// Confirm gesture: the leftmost-but-one button on a stock 8-button
/// board (mask `0b0100_0000`), pressed twice to start play.
pub const DEFAULT_CONFIRM_MASK: u8 = 0x40;

/// Confirm presses required to leave standby.
const CONFIRMS_TO_START: u8 = 2;

/// Which loop body the controller runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Awaiting the confirmation gesture.
    Standby,
    /// Forwarding input to the selected game.
    Playing,
}

/// The 7-segment button-game controller.
///
/// ## Example
///
/// ```
/// use seg_game::{ConsoleDisplay, MiniGame, SevenSegButtonGame};
///
/// let mut controller = SevenSegButtonGame::new(ConsoleDisplay::silent(), 42);
/// let game = MiniGame::builder(2)
///     .answer_sequence(vec![0, 1])
///     .build();
///
/// controller.register("demo", game).unwrap();
/// controller.setup(Some("demo")).unwrap();
///
/// while !controller.is_over() {
///     controller.tick();
///     # break;
/// }
/// ```
pub struct SevenSegButtonGame<D: Display> {
    display: D,
    registry: GameRegistry,
    debouncer: InputDebouncer,
    rng: GameRng,

    selected: usize,
    mode: Mode,
    standby_confirms: u8,
    setup_run: bool,
    confirm_mask: u8,
}

impl<D: Display> SevenSegButtonGame<D> {
    /// Create a controller over the given display. The seed drives game
    /// selection and every game's answer generation.
    #[must_use]
    pub fn new(display: D, seed: u64) -> Self {
        Self::with_rng(display, GameRng::new(seed))
    }

    /// Create a controller with an explicit RNG.
    #[must_use]
    pub fn with_rng(display: D, rng: GameRng) -> Self {
        Self {
            display,
            registry: GameRegistry::new(),
            debouncer: InputDebouncer::new(),
            rng,
            selected: 0,
            mode: Mode::Standby,
            standby_confirms: 0,
            setup_run: false,
            confirm_mask: DEFAULT_CONFIRM_MASK,
        }
    }

    /// Override the confirm gesture mask.
    #[must_use]
    pub fn with_confirm_mask(mut self, mask: u8) -> Self {
        self.confirm_mask = mask;
        self
    }

    /// Register a game under a unique name.
    ///
    /// All games must be registered before `setup` closes the registry.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        game: MiniGame,
    ) -> Result<(), RegistrationError> {
        self.registry.register(name, game)
    }

    /// Select and set up a game, then enter standby.
    ///
    /// With no explicit name, one registered game is chosen uniformly
    /// at random. Runs the chosen game's setup routine and closes the
    /// registry. Configuration faults abort here and the play loop is
    /// never entered.
    pub fn setup(&mut self, selected_name: Option<&str>) -> Result<(), ConfigError> {
        if self.registry.is_empty() {
            return Err(ConfigError::NoGamesRegistered);
        }

        self.selected = match selected_name {
            Some(name) => self
                .registry
                .index_of(name)
                .ok_or_else(|| ConfigError::UnknownGame(name.to_string()))?,
            None => self.rng.gen_range_usize(0..self.registry.len()),
        };
        debug!(
            "selected game {} ({:?})",
            self.selected,
            self.registry.names().nth(self.selected)
        );

        let game = self
            .registry
            .get_mut(self.selected)
            .expect("selected index is in range");
        game.setup(&mut self.display, &mut self.rng)?;

        self.registry.close();
        self.setup_run = true;
        self.mode = Mode::Standby;
        self.standby_confirms = 0;
        Ok(())
    }

    /// Run one iteration of whichever loop body the mode selects.
    pub fn tick(&mut self) {
        if !self.setup_run {
            warn!("tick called before setup; ignoring");
            return;
        }
        match self.mode {
            Mode::Standby => self.standby_tick(),
            Mode::Playing => self.game_tick(),
        }
    }

    /// One iteration of the standby (selection) loop.
    ///
    /// Shows the selected game index, then polls for a debounced press:
    /// the confirm gesture counts toward starting; any other press
    /// renders the lose screen as a cancel signal without touching the
    /// game's lives. Two confirms switch to `Playing` and render the
    /// game's initial screen.
    pub fn standby_tick(&mut self) {
        self.show_selected_game();

        let input = self.poll_input();
        if input > 0 {
            if input == self.confirm_mask {
                self.standby_confirms += 1;
                debug!("standby confirm {}/{}", self.standby_confirms, CONFIRMS_TO_START);
            } else {
                // Display-only bail; lives and phase are untouched.
                let game = self.registry.get(self.selected).expect("selected index is in range");
                game.render_lose(&mut self.display);
                return;
            }
        }

        if self.standby_confirms >= CONFIRMS_TO_START {
            self.mode = Mode::Playing;
            let game = self.registry.get(self.selected).expect("selected index is in range");
            self.display.write_leds(game.leds());
            self.display.write_segments(game.segments());
        }
    }

    /// One iteration of the play loop.
    ///
    /// Polls for a debounced press, optionally echoes it on the LED bar,
    /// and forwards it to the selected game's turn evaluator. Win/lose
    /// handling lives in the game so different games can render
    /// different outcomes.
    pub fn game_tick(&mut self) {
        let input = self.poll_input();
        let feedback = self
            .registry
            .get(self.selected)
            .is_some_and(|game| game.config().show_button_feedback);

        if input > 0 {
            if feedback {
                self.display.write_leds(input);
            }
            let game = self
                .registry
                .get_mut(self.selected)
                .expect("selected index is in range");
            game.play(input, &mut self.display);
        } else if feedback {
            self.display.write_leds(0);
        }
    }

    /// Whether the session should stop: the selected game has been lost.
    ///
    /// A win does not stop the loop; the won screen is simply
    /// re-rendered on subsequent ticks.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.setup_run && !self.selected_game_ref().is_alive()
    }

    /// Current controller mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The selected game, once setup has run.
    #[must_use]
    pub fn selected_game_ref(&self) -> &MiniGame {
        self.registry.get(self.selected).expect("setup bound a selected game")
    }

    /// Registration index of the selected game.
    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The owned display (tests script button input through this).
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Shared view of the display.
    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    fn poll_input(&mut self) -> u8 {
        let raw = self.display.read_buttons();
        self.debouncer.filter(raw)
    }

    /// Show the selected game on the LED bar as a left-aligned count of
    /// its registration index, after a roll animation.
    fn show_selected_game(&mut self) {
        let count_mask = ((1u16 << (self.selected + 1)) - 1) as u8;
        self.display.clear();
        self.display.roll();
        self.display.clear();
        self.display.write_leds_from_left(count_mask);
    }
}
