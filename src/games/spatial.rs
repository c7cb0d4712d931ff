//! Spatial game: follow the sweep.
//!
//! Setup sweeps a marker across a random set of distinct cells, one at
//! a time; the player presses the buttons under those cells in the same
//! order. Progress renders as a dash filling in from the left.

use std::time::Duration;

use smallvec::smallvec;

use crate::display::font;
use crate::engine::{CorrectHook, MiniGame, SetupHook, SetupOutcome};

/// Builder for the spatial game.
///
/// ## Example
///
/// ```
/// use seg_game::games::SpatialGame;
///
/// let game = SpatialGame::new(4).instant().build();
/// assert_eq!(game.config().win_length, 4);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SpatialGame {
    win_length: usize,
    step_pause: Duration,
}

impl SpatialGame {
    /// A spatial game over `win_length` swept cells.
    #[must_use]
    pub fn new(win_length: usize) -> Self {
        Self {
            win_length,
            step_pause: Duration::from_millis(400),
        }
    }

    /// Zero sweep pause, for host-side tests.
    #[must_use]
    pub fn instant(mut self) -> Self {
        self.step_pause = Duration::ZERO;
        self
    }

    /// Override the pause between sweep steps.
    #[must_use]
    pub fn with_step_pause(mut self, pause: Duration) -> Self {
        self.step_pause = pause;
        self
    }

    /// Build the configured [`MiniGame`].
    #[must_use]
    pub fn build(self) -> MiniGame {
        let Self { win_length, step_pause } = self;

        let setup = SetupHook::WithDisplayAndRng(Box::new(move |display, rng| {
            display.wave();

            let width = display.segment_count();
            let mut cells: Vec<u8> = (0..width as u8).collect();
            rng.shuffle(&mut cells);
            let sequence: Vec<u8> = cells.into_iter().take(win_length).collect();

            // Sweep the marker over each target cell in answer order.
            for &cell in &sequence {
                let mut line = vec![font::BLANK; width];
                line[cell as usize] = font::DASH;
                display.write_segments(&line);
                super::pause(step_pause);
            }
            display.write_str(&"_".repeat(win_length));

            SetupOutcome::empty()
                .with_answer_sequence(sequence)
                .with_initial_segments(smallvec![font::UNDERSCORE; win_length])
        }));

        // Underscores harden into dashes as the player keeps up.
        let on_correct = CorrectHook::WithProgress(Box::new(move |progress| {
            (0..win_length)
                .map(|i| if i < progress { font::DASH } else { font::UNDERSCORE })
                .collect()
        }));

        MiniGame::builder(win_length)
            .input_as_linear_int(true)
            .setup_hook(setup)
            .on_correct(on_correct)
            .build()
    }
}
