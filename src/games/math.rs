//! Math game: find the hidden number.
//!
//! The LED bar shows a number in binary. Its decimal digits are hidden
//! among random filler digits on the segment cells; the player presses
//! the buttons under the right digits in order, most significant first.
//!
//! The digit count is fixed at construction so `win_length` is stable;
//! the number itself is generated inside setup from the session RNG and
//! capped at 255 so the LED bar can show it.

use log::debug;

use crate::display::font;
use crate::engine::{IncorrectHook, MapInputHook, MiniGame, SetupHook, SetupOutcome};

/// Largest number the 8-LED bar can display.
const LED_MAX: u16 = 255;

/// Builder for the math game.
///
/// ## Example
///
/// ```
/// use seg_game::games::MathGame;
///
/// let game = MathGame::new().build();
/// assert_eq!(game.config().win_length, 3);
/// assert!(!game.config().show_button_feedback);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MathGame {
    digits: usize,
}

impl MathGame {
    /// A math game over a three-digit hidden number.
    #[must_use]
    pub fn new() -> Self {
        Self { digits: 3 }
    }

    /// Set the hidden number's digit count (1 to 3; the number must fit
    /// on the LED bar).
    #[must_use]
    pub fn with_digits(mut self, digits: usize) -> Self {
        assert!((1..=3).contains(&digits), "digit count must be 1-3");
        self.digits = digits;
        self
    }

    /// Build the configured [`MiniGame`].
    #[must_use]
    pub fn build(self) -> MiniGame {
        let digits = self.digits;

        let setup = SetupHook::WithDisplayAndRng(Box::new(move |display, rng| {
            display.load();
            display.unload();

            // Hidden number with exactly `digits` decimal digits, on
            // the LED bar's range.
            let low = 10u16.pow(digits as u32 - 1).max(1);
            let high = (10u16.pow(digits as u32) - 1).min(LED_MAX);
            let number = rng.gen_range_usize(low as usize..high as usize + 1) as u16;
            debug!("hidden number is {number}");

            let answers: Vec<u8> = number
                .to_string()
                .bytes()
                .map(|b| b - b'0')
                .collect();

            // Scatter the answer digits over random distinct cells; fill
            // the rest with random digits.
            let width = display.segment_count();
            let mut cells: Vec<usize> = (0..width).collect();
            rng.shuffle(&mut cells);
            let positions = &cells[..digits];

            let mut line = vec![0u8; width];
            for (cell, value) in line.iter_mut().enumerate() {
                let digit = match positions.iter().position(|&p| p == cell) {
                    Some(k) => answers[k],
                    None => rng.gen_range_u8(0..10),
                };
                *value = font::digit(digit);
            }

            SetupOutcome::empty()
                .with_answer_sequence(answers)
                .with_initial_segments(line.into())
                .with_initial_leds(number as u8)
        }));

        // The comparable value is the digit shown in the pressed cell.
        let map_input = MapInputHook::WithSegments(Box::new(|index, segments| {
            segments
                .get(index as usize)
                .and_then(|&mask| font::decode_digit(mask))
                .unwrap_or(u8::MAX)
        }));

        // Wrong digit: error line, progress back to the start.
        let on_incorrect = IncorrectHook::WithDisplay(Box::new(|display| {
            display.write_str("Error");
            0
        }));

        MiniGame::builder(digits)
            .input_as_linear_int(true)
            .show_button_feedback(false)
            .setup_hook(setup)
            .map_input(map_input)
            .on_incorrect(on_incorrect)
            .build()
    }
}

impl Default for MathGame {
    fn default() -> Self {
        Self::new()
    }
}
