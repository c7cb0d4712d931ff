//! Memory game: repeat a flashed LED sequence.
//!
//! Setup flashes a random sequence of single LEDs; the player repeats
//! it on the buttons below. Answers are raw one-hot bitmasks, so the
//! pressed button's mask is compared directly against the flashed LED
//! mask. The segment line is a row of dashes that blank out one per
//! correct press.

use std::time::Duration;

use smallvec::smallvec;

use crate::display::font;
use crate::engine::{CorrectHook, MiniGame, SetupHook, SetupOutcome};

/// Builder for the memory game.
///
/// ## Example
///
/// ```
/// use seg_game::games::MemoryGame;
///
/// let game = MemoryGame::new(5).instant().build();
/// assert_eq!(game.config().win_length, 5);
/// assert!(!game.config().input_as_linear_int);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MemoryGame {
    win_length: usize,
    flash_on: Duration,
    flash_off: Duration,
}

impl MemoryGame {
    /// A memory game whose flashed sequence has `win_length` steps.
    #[must_use]
    pub fn new(win_length: usize) -> Self {
        Self {
            win_length,
            flash_on: Duration::from_millis(500),
            flash_off: Duration::from_millis(250),
        }
    }

    /// Zero flash pauses, for host-side tests.
    #[must_use]
    pub fn instant(mut self) -> Self {
        self.flash_on = Duration::ZERO;
        self.flash_off = Duration::ZERO;
        self
    }

    /// Override the on/off pauses of the flashed sequence.
    #[must_use]
    pub fn with_flash_pauses(mut self, on: Duration, off: Duration) -> Self {
        self.flash_on = on;
        self.flash_off = off;
        self
    }

    /// Build the configured [`MiniGame`].
    #[must_use]
    pub fn build(self) -> MiniGame {
        let Self { win_length, flash_on, flash_off } = self;

        let setup = SetupHook::WithDisplayAndRng(Box::new(move |display, rng| {
            let sequence: Vec<u8> = (0..win_length)
                .map(|_| rng.gen_one_hot(display.led_count() as u8))
                .collect();

            // Flash the sequence one LED at a time.
            for &mask in &sequence {
                display.write_leds(mask);
                super::pause(flash_on);
                display.write_leds(0);
                super::pause(flash_off);
            }
            display.write_str(&"-".repeat(win_length));

            SetupOutcome::empty()
                .with_answer_sequence(sequence)
                .with_initial_segments(smallvec![font::DASH; win_length])
        }));

        // Blank out one dash per correct press.
        let on_correct = CorrectHook::WithProgress(Box::new(move |progress| {
            (0..win_length)
                .map(|i| if i < progress { font::BLANK } else { font::DASH })
                .collect()
        }));

        MiniGame::builder(win_length)
            .input_as_linear_int(false)
            .setup_hook(setup)
            .on_correct(on_correct)
            .build()
    }
}
