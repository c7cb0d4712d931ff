//! The per-game turn-evaluation state machine.
//!
//! A `MiniGame` owns one puzzle's answer sequence, progress and lives,
//! plus the optional hooks its author supplied. The controller feeds it
//! one debounced input per turn through [`MiniGame::play`].
//!
//! State machine: `Playing` (after setup) moves to `Won` when progress
//! reaches the win length, or to `Lost` when a miss drains lives to 0.
//! Win is checked before loss. Both terminal states are absorbing: any
//! further `play` call only re-renders the terminal screen.

use log::{debug, warn};
use smallvec::smallvec;

use crate::core::{linear_index, ConfigError, GameConfig, GameRng};
use crate::display::{font, Display, SegmentLine};
use crate::engine::hooks::{CorrectHook, IncorrectHook, MapInputHook, SetupHook};

/// Where a game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    /// Accepting turns.
    Playing,
    /// Terminal: completed with lives to spare.
    Won,
    /// Terminal: lives exhausted.
    Lost,
}

/// One turn-based puzzle.
///
/// Construct through [`MiniGame::builder`]; the controller calls
/// [`setup`](MiniGame::setup) once at selection time and
/// [`play`](MiniGame::play) once per debounced press.
#[derive(Debug)]
pub struct MiniGame {
    config: GameConfig,
    answers: Vec<u8>,

    setup_hook: Option<SetupHook>,
    map_input: Option<MapInputHook>,
    on_correct: Option<CorrectHook>,
    on_incorrect: Option<IncorrectHook>,

    segments: SegmentLine,
    leds: u8,
    progress: usize,
    lives: u32,
    phase: GamePhase,
}

impl MiniGame {
    /// Start building a game that takes `win_length` turns to complete.
    #[must_use]
    pub fn builder(win_length: usize) -> MiniGameBuilder {
        MiniGameBuilder::new(win_length)
    }

    /// The game's immutable configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The resolved answer sequence (empty before setup for games that
    /// generate answers in their setup routine).
    #[must_use]
    pub fn answer_sequence(&self) -> &[u8] {
        &self.answers
    }

    /// Turns completed so far.
    #[must_use]
    pub fn progress(&self) -> usize {
        self.progress
    }

    /// Misses left before the game is lost.
    #[must_use]
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// False only after a loss. A won game is still alive.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.phase != GamePhase::Lost
    }

    /// True once the game has reached a terminal phase.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase != GamePhase::Playing
    }

    /// Current segment line for the play screen.
    #[must_use]
    pub fn segments(&self) -> &[u8] {
        &self.segments
    }

    /// Current LED mask for the play screen.
    #[must_use]
    pub fn leds(&self) -> u8 {
        self.leds
    }

    /// Run the setup routine and validate the resulting configuration.
    ///
    /// Resets progress, lives and phase, runs the setup hook (if any)
    /// and merges its outcome, then checks the invariant that the
    /// resolved answer sequence matches `win_length`. A violation is a
    /// fatal configuration error: the game must not be playable with a
    /// malformed answer sequence.
    pub fn setup(
        &mut self,
        display: &mut dyn Display,
        rng: &mut GameRng,
    ) -> Result<(), ConfigError> {
        self.progress = 0;
        self.lives = self.config.lives;
        self.phase = GamePhase::Playing;

        if let Some(hook) = &mut self.setup_hook {
            let outcome = hook.invoke(display, rng);
            if let Some(answers) = outcome.answer_sequence {
                self.answers = answers;
            }
            if let Some(segments) = outcome.initial_segments {
                self.segments = segments;
            }
            if let Some(leds) = outcome.initial_leds {
                self.leds = leds;
            }
        }

        if self.answers.len() != self.config.win_length {
            return Err(ConfigError::AnswerLengthMismatch {
                win_length: self.config.win_length,
                answer_len: self.answers.len(),
            });
        }

        Ok(())
    }

    /// Evaluate one turn against the given debounced raw input.
    ///
    /// Idempotent once terminal: a finished game only re-renders its
    /// final screen. Per-turn input faults (a read that is not a single
    /// set bit) are absorbed as an incorrect answer; nothing on this
    /// path can fail the control loop.
    pub fn play(&mut self, raw_input: u8, display: &mut dyn Display) {
        if self.is_finished() {
            self.render_final(display);
            return;
        }

        let linearized = if self.config.input_as_linear_int {
            match linear_index(raw_input) {
                Ok(index) => Some(index),
                Err(err) => {
                    warn!("treating unmappable input as incorrect answer: {err}");
                    None
                }
            }
        } else {
            Some(raw_input)
        };

        let mapped = linearized.map(|value| match &mut self.map_input {
            Some(hook) => hook.invoke(value, &self.segments),
            None => value,
        });

        // Zero-length games are complete by definition.
        let Some(&expected) = self.answers.get(self.progress) else {
            self.phase = GamePhase::Won;
            self.render_final(display);
            return;
        };
        let hit = mapped == Some(expected);
        let input = mapped.unwrap_or(raw_input);
        let mut error_screen = false;

        if hit {
            self.progress += 1;
            debug!("correct answer; progress {}/{}", self.progress, self.config.win_length);
            if let Some(hook) = &mut self.on_correct {
                self.segments = hook.invoke(self.progress, input, display);
            }
        } else {
            debug!("incorrect answer {input} (expected {expected}) at progress {}", self.progress);
            match &mut self.on_incorrect {
                Some(hook) => {
                    // Clamped so a misbehaving hook cannot push the
                    // progress pointer past the answer sequence.
                    self.progress =
                        hook.invoke(self.progress, input, display).min(self.config.win_length);
                }
                None => {
                    // Stays up until the next turn renders over it.
                    display.write_str("Error");
                    error_screen = true;
                }
            }
            self.lives = self.lives.saturating_sub(1);
        }

        // Win before loss: a turn that completes the sequence resolves
        // Won even if a hook-driven progress jump coincided with a miss.
        if self.progress == self.config.win_length {
            self.phase = GamePhase::Won;
            self.render_final(display);
        } else if !hit && self.lives == 0 {
            self.phase = GamePhase::Lost;
            self.render_final(display);
        } else if !error_screen {
            display.write_leds(self.leds);
            display.write_segments(&self.segments);
        }
    }

    /// Render the terminal screen matching the game's outcome.
    pub fn render_final(&self, display: &mut dyn Display) {
        if self.is_alive() {
            self.render_win(display);
        } else {
            self.render_lose(display);
        }
    }

    /// Render the lose screen without touching lives or phase.
    ///
    /// The standby loop uses this as a display-only bail path when a
    /// non-confirm button cancels the session.
    pub fn render_lose(&self, display: &mut dyn Display) {
        display.write_leds(0);
        display.write_str("--dead--");
    }

    fn render_win(&self, display: &mut dyn Display) {
        display.write_str("--safe--");
    }
}

/// Builder for a [`MiniGame`].
///
/// ## Example
///
/// ```
/// use seg_game::MiniGame;
///
/// let game = MiniGame::builder(3)
///     .answer_sequence(vec![1, 2, 3])
///     .input_as_linear_int(false)
///     .lives(2)
///     .build();
///
/// assert_eq!(game.config().win_length, 3);
/// ```
#[derive(Debug)]
pub struct MiniGameBuilder {
    config: GameConfig,
    answers: Vec<u8>,
    setup_hook: Option<SetupHook>,
    map_input: Option<MapInputHook>,
    on_correct: Option<CorrectHook>,
    on_incorrect: Option<IncorrectHook>,
    initial_segments: Option<SegmentLine>,
    initial_leds: u8,
}

impl MiniGameBuilder {
    fn new(win_length: usize) -> Self {
        Self {
            config: GameConfig::new(win_length),
            answers: Vec::new(),
            setup_hook: None,
            map_input: None,
            on_correct: None,
            on_incorrect: None,
            initial_segments: None,
            initial_leds: 0,
        }
    }

    /// Supply the answer sequence directly instead of from a setup hook.
    #[must_use]
    pub fn answer_sequence(mut self, answers: Vec<u8>) -> Self {
        self.answers = answers;
        self
    }

    /// Set the starting life count.
    #[must_use]
    pub fn lives(mut self, lives: u32) -> Self {
        self.config.lives = lives;
        self
    }

    /// Set whether raw input is converted to a 0-based button index.
    #[must_use]
    pub fn input_as_linear_int(mut self, enabled: bool) -> Self {
        self.config.input_as_linear_int = enabled;
        self
    }

    /// Set whether presses are echoed on the LED bar.
    #[must_use]
    pub fn show_button_feedback(mut self, enabled: bool) -> Self {
        self.config.show_button_feedback = enabled;
        self
    }

    /// Attach the setup routine.
    #[must_use]
    pub fn setup_hook(mut self, hook: SetupHook) -> Self {
        self.setup_hook = Some(hook);
        self
    }

    /// Attach the input-mapping hook.
    #[must_use]
    pub fn map_input(mut self, hook: MapInputHook) -> Self {
        self.map_input = Some(hook);
        self
    }

    /// Attach the correct-answer hook.
    #[must_use]
    pub fn on_correct(mut self, hook: CorrectHook) -> Self {
        self.on_correct = Some(hook);
        self
    }

    /// Attach the incorrect-answer hook.
    #[must_use]
    pub fn on_incorrect(mut self, hook: IncorrectHook) -> Self {
        self.on_incorrect = Some(hook);
        self
    }

    /// Set the starting segment line (when not produced by setup).
    #[must_use]
    pub fn initial_segments(mut self, segments: SegmentLine) -> Self {
        self.initial_segments = Some(segments);
        self
    }

    /// Set the starting LED mask (when not produced by setup).
    #[must_use]
    pub fn initial_leds(mut self, leds: u8) -> Self {
        self.initial_leds = leds;
        self
    }

    /// Finish the build.
    #[must_use]
    pub fn build(self) -> MiniGame {
        let win_length = self.config.win_length;
        MiniGame {
            config: self.config,
            answers: self.answers,
            setup_hook: self.setup_hook,
            map_input: self.map_input,
            on_correct: self.on_correct,
            on_incorrect: self.on_incorrect,
            segments: self
                .initial_segments
                .unwrap_or_else(|| smallvec![font::BLANK; win_length]),
            leds: self.initial_leds,
            progress: 0,
            lives: self.config.lives,
            phase: GamePhase::Playing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::ConsoleDisplay;
    use crate::engine::hooks::SetupOutcome;

    fn direct_game() -> MiniGame {
        // win_length 3, answers [1,2,3], 2 lives, raw bitmask input.
        MiniGame::builder(3)
            .answer_sequence(vec![1, 2, 3])
            .input_as_linear_int(false)
            .lives(2)
            .build()
    }

    fn setup(game: &mut MiniGame) -> ConsoleDisplay {
        let mut display = ConsoleDisplay::silent();
        let mut rng = GameRng::new(0);
        game.setup(&mut display, &mut rng).unwrap();
        display
    }

    #[test]
    fn test_scenario_a_straight_win() {
        let mut game = direct_game();
        let mut display = setup(&mut game);

        for (turn, input) in [1u8, 2, 3].into_iter().enumerate() {
            assert_eq!(game.phase(), GamePhase::Playing, "turn {turn}");
            game.play(input, &mut display);
        }

        assert_eq!(game.phase(), GamePhase::Won);
        assert_eq!(game.progress(), 3);
        assert_eq!(game.lives(), 2);
        assert_eq!(display.segments(), font::encode_str("--safe--").as_slice());
    }

    #[test]
    fn test_scenario_b_miss_keeps_progress_pointer() {
        let mut game = direct_game();
        let mut display = setup(&mut game);

        game.play(1, &mut display);
        assert_eq!(game.progress(), 1);

        // Wrong input: one life gone, progress pointer unchanged (no
        // incorrect hook configured), default error line rendered.
        game.play(9, &mut display);
        assert_eq!(game.lives(), 1);
        assert_eq!(game.progress(), 1);

        // Play resumes at the current pointer.
        game.play(2, &mut display);
        game.play(3, &mut display);
        assert_eq!(game.phase(), GamePhase::Won);
        assert_eq!(game.lives(), 1);
    }

    #[test]
    fn test_scenario_c_two_misses_lose() {
        let mut game = direct_game();
        let mut display = setup(&mut game);

        game.play(9, &mut display);
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.lives(), 1);

        game.play(9, &mut display);
        assert_eq!(game.phase(), GamePhase::Lost);
        assert!(!game.is_alive());
        assert_eq!(display.segments(), font::encode_str("--dead--").as_slice());
    }

    #[test]
    fn test_terminal_is_absorbing_and_idempotent() {
        let mut game = direct_game();
        let mut display = setup(&mut game);

        game.play(9, &mut display);
        game.play(9, &mut display);
        assert_eq!(game.phase(), GamePhase::Lost);

        // Any further turns are no-ops that re-render the final screen.
        for input in [1, 2, 3, 9, 0xFF] {
            game.play(input, &mut display);
            assert_eq!(game.phase(), GamePhase::Lost);
            assert_eq!(game.progress(), 0);
            assert_eq!(game.lives(), 0);
        }
    }

    #[test]
    fn test_progress_monotonic_until_finished() {
        let mut game = direct_game();
        let mut display = setup(&mut game);

        let mut last = 0;
        for input in [1u8, 9, 2, 9, 3] {
            game.play(input, &mut display);
            if !game.is_finished() {
                assert!(game.progress() >= last);
                last = game.progress();
            }
        }
    }

    #[test]
    fn test_win_precedence_over_loss() {
        // Incorrect hook jumps progress to the win length on the same
        // turn that drains the last life: the win check runs first.
        let mut game = MiniGame::builder(2)
            .answer_sequence(vec![1, 2])
            .input_as_linear_int(false)
            .lives(1)
            .on_incorrect(IncorrectHook::NoContext(Box::new(|| 2)))
            .build();
        let mut display = setup(&mut game);

        game.play(9, &mut display);

        assert_eq!(game.lives(), 0);
        assert_eq!(game.phase(), GamePhase::Won);
        assert!(game.is_alive());
    }

    #[test]
    fn test_incorrect_hook_reset_policy() {
        let mut game = MiniGame::builder(3)
            .answer_sequence(vec![1, 2, 3])
            .input_as_linear_int(false)
            .lives(5)
            .on_incorrect(IncorrectHook::NoContext(Box::new(|| 0)))
            .build();
        let mut display = setup(&mut game);

        game.play(1, &mut display);
        game.play(2, &mut display);
        assert_eq!(game.progress(), 2);

        // Miss resets to the start.
        game.play(9, &mut display);
        assert_eq!(game.progress(), 0);
        assert_eq!(game.lives(), 4);
    }

    #[test]
    fn test_unmappable_input_is_an_incorrect_answer() {
        // Linear-int game: a two-bit chord cannot be resolved to a
        // button index. Costs a life, leaves progress alone.
        let mut game = MiniGame::builder(2)
            .answer_sequence(vec![0, 1])
            .lives(2)
            .build();
        let mut display = setup(&mut game);

        game.play(0b0000_0011, &mut display);
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.lives(), 1);
        assert_eq!(game.progress(), 0);
    }

    #[test]
    fn test_linear_int_conversion() {
        let mut game = MiniGame::builder(2)
            .answer_sequence(vec![3, 0])
            .lives(2)
            .build();
        let mut display = setup(&mut game);

        // Raw 0b1000 is button index 3.
        game.play(0b0000_1000, &mut display);
        assert_eq!(game.progress(), 1);
        game.play(0b0000_0001, &mut display);
        assert_eq!(game.phase(), GamePhase::Won);
    }

    #[test]
    fn test_setup_length_mismatch_is_fatal() {
        let mut game = MiniGame::builder(4)
            .answer_sequence(vec![1, 2])
            .build();
        let mut display = ConsoleDisplay::silent();
        let mut rng = GameRng::new(0);

        let err = game.setup(&mut display, &mut rng).unwrap_err();
        assert_eq!(err, ConfigError::AnswerLengthMismatch { win_length: 4, answer_len: 2 });
    }

    #[test]
    fn test_setup_outcome_merges_into_state() {
        let mut game = MiniGame::builder(2)
            .setup_hook(SetupHook::WithRng(Box::new(|rng| {
                let answers = vec![rng.gen_range_u8(0..8), rng.gen_range_u8(0..8)];
                SetupOutcome::empty()
                    .with_answer_sequence(answers)
                    .with_initial_segments(font::encode_str("--"))
                    .with_initial_leds(0b1000_0000)
            })))
            .build();
        let mut display = setup(&mut game);

        assert_eq!(game.answer_sequence().len(), 2);
        assert_eq!(game.segments(), font::encode_str("--").as_slice());
        assert_eq!(game.leds(), 0b1000_0000);

        // Play screen renders the merged LED mask after a hit.
        let first = game.answer_sequence()[0];
        game.play(1 << first, &mut display);
        assert_eq!(display.leds(), 0b1000_0000);
    }

    #[test]
    fn test_re_setup_resets_counters() {
        let mut game = direct_game();
        let mut display = setup(&mut game);

        game.play(9, &mut display);
        game.play(1, &mut display);
        assert_eq!(game.lives(), 1);
        assert_eq!(game.progress(), 1);

        let mut rng = GameRng::new(0);
        game.setup(&mut display, &mut rng).unwrap();
        assert_eq!(game.lives(), 2);
        assert_eq!(game.progress(), 0);
        assert_eq!(game.phase(), GamePhase::Playing);
    }
}
