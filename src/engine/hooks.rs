//! Capability-enum hooks.
//!
//! Games customize the engine through four optional hook kinds: setup,
//! input mapping, and correct/incorrect-answer responses. Different
//! games need different context, so each hook kind is a tagged union
//! enumerating exactly the context combinations the engine can supply
//! (progress, the turn's input, the display, the RNG). The game author
//! picks the matching variant at construction time; the engine
//! dispatches on the variant and passes only what it names. No
//! introspection, no catch-all context bag.
//!
//! Variants hold `Box<dyn FnMut>` so game content can capture its own
//! state (board layouts, pause durations, shared lookups).

use std::fmt;

use crate::core::GameRng;
use crate::display::{Display, SegmentLine};

/// What a setup routine hands back to the engine.
///
/// All fields are optional; the engine merges set fields into the game's
/// state deterministically. A game with a fixed answer sequence simply
/// leaves `answer_sequence` unset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SetupOutcome {
    /// Generated answer sequence. Length must equal the game's
    /// `win_length`; validated when setup returns.
    pub answer_sequence: Option<Vec<u8>>,
    /// Starting segment line.
    pub initial_segments: Option<SegmentLine>,
    /// Starting LED mask.
    pub initial_leds: Option<u8>,
}

impl SetupOutcome {
    /// Outcome that sets nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set the generated answer sequence.
    #[must_use]
    pub fn with_answer_sequence(mut self, answers: Vec<u8>) -> Self {
        self.answer_sequence = Some(answers);
        self
    }

    /// Set the starting segment line.
    #[must_use]
    pub fn with_initial_segments(mut self, segments: SegmentLine) -> Self {
        self.initial_segments = Some(segments);
        self
    }

    /// Set the starting LED mask.
    #[must_use]
    pub fn with_initial_leds(mut self, leds: u8) -> Self {
        self.initial_leds = Some(leds);
        self
    }
}

/// Setup routine. Runs once when the controller selects the game.
pub enum SetupHook {
    /// Needs no context.
    NoContext(Box<dyn FnMut() -> SetupOutcome>),
    /// Needs randomness (generated answers).
    WithRng(Box<dyn FnMut(&mut GameRng) -> SetupOutcome>),
    /// Needs the display (intro renders, flashed sequences).
    WithDisplay(Box<dyn FnMut(&mut dyn Display) -> SetupOutcome>),
    /// Needs both.
    WithDisplayAndRng(Box<dyn FnMut(&mut dyn Display, &mut GameRng) -> SetupOutcome>),
}

impl SetupHook {
    pub(crate) fn invoke(&mut self, display: &mut dyn Display, rng: &mut GameRng) -> SetupOutcome {
        match self {
            SetupHook::NoContext(f) => f(),
            SetupHook::WithRng(f) => f(rng),
            SetupHook::WithDisplay(f) => f(display),
            SetupHook::WithDisplayAndRng(f) => f(display, rng),
        }
    }
}

/// Input-mapping hook. Converts the (already linearized) input into the
/// final value compared against the answer sequence.
pub enum MapInputHook {
    /// Pure function of the input.
    Plain(Box<dyn FnMut(u8) -> u8>),
    /// Also reads the current segment line (e.g. "the digit shown in
    /// the cell above the pressed button").
    WithSegments(Box<dyn FnMut(u8, &[u8]) -> u8>),
}

impl MapInputHook {
    pub(crate) fn invoke(&mut self, input: u8, segments: &[u8]) -> u8 {
        match self {
            MapInputHook::Plain(f) => f(input),
            MapInputHook::WithSegments(f) => f(input, segments),
        }
    }
}

/// Correct-answer hook. The progress increment itself is handled by the
/// engine; the hook returns the new segment line to display.
pub enum CorrectHook {
    /// Needs no context.
    NoContext(Box<dyn FnMut() -> SegmentLine>),
    /// Receives the post-increment progress.
    WithProgress(Box<dyn FnMut(usize) -> SegmentLine>),
    /// Receives the turn's mapped input.
    WithInput(Box<dyn FnMut(u8) -> SegmentLine>),
    /// Receives progress and input.
    WithProgressAndInput(Box<dyn FnMut(usize, u8) -> SegmentLine>),
    /// Receives the display (for side renders) and progress.
    WithDisplay(Box<dyn FnMut(&mut dyn Display, usize) -> SegmentLine>),
}

impl CorrectHook {
    pub(crate) fn invoke(
        &mut self,
        progress: usize,
        input: u8,
        display: &mut dyn Display,
    ) -> SegmentLine {
        match self {
            CorrectHook::NoContext(f) => f(),
            CorrectHook::WithProgress(f) => f(progress),
            CorrectHook::WithInput(f) => f(input),
            CorrectHook::WithProgressAndInput(f) => f(progress, input),
            CorrectHook::WithDisplay(f) => f(display, progress),
        }
    }
}

/// Incorrect-answer hook. The life decrement itself is handled by the
/// engine; the hook returns the new progress value, which is how a game
/// chooses a "reset to 0 on miss" or "keep progress" policy.
pub enum IncorrectHook {
    /// Needs no context.
    NoContext(Box<dyn FnMut() -> usize>),
    /// Receives the current (pre-decision) progress.
    WithProgress(Box<dyn FnMut(usize) -> usize>),
    /// Receives the turn's mapped input.
    WithInput(Box<dyn FnMut(u8) -> usize>),
    /// Receives the display for a custom error render.
    WithDisplay(Box<dyn FnMut(&mut dyn Display) -> usize>),
}

impl IncorrectHook {
    pub(crate) fn invoke(&mut self, progress: usize, input: u8, display: &mut dyn Display) -> usize {
        match self {
            IncorrectHook::NoContext(f) => f(),
            IncorrectHook::WithProgress(f) => f(progress),
            IncorrectHook::WithInput(f) => f(input),
            IncorrectHook::WithDisplay(f) => f(display),
        }
    }
}

macro_rules! impl_hook_debug {
    ($hook:ident { $($variant:ident),+ $(,)? }) => {
        impl fmt::Debug for $hook {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let variant = match self {
                    $($hook::$variant(_) => stringify!($variant),)+
                };
                write!(f, concat!(stringify!($hook), "::{}(..)"), variant)
            }
        }
    };
}

impl_hook_debug!(SetupHook { NoContext, WithRng, WithDisplay, WithDisplayAndRng });
impl_hook_debug!(MapInputHook { Plain, WithSegments });
impl_hook_debug!(CorrectHook {
    NoContext,
    WithProgress,
    WithInput,
    WithProgressAndInput,
    WithDisplay,
});
impl_hook_debug!(IncorrectHook { NoContext, WithProgress, WithInput, WithDisplay });

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::ConsoleDisplay;
    use smallvec::smallvec;

    #[test]
    fn test_setup_hook_dispatch() {
        let mut display = ConsoleDisplay::silent();
        let mut rng = GameRng::new(1);

        let mut hook = SetupHook::NoContext(Box::new(|| {
            SetupOutcome::empty().with_answer_sequence(vec![1, 2])
        }));
        let outcome = hook.invoke(&mut display, &mut rng);
        assert_eq!(outcome.answer_sequence, Some(vec![1, 2]));

        let mut hook = SetupHook::WithRng(Box::new(|rng| {
            SetupOutcome::empty().with_initial_leds(rng.gen_one_hot(8))
        }));
        let outcome = hook.invoke(&mut display, &mut rng);
        assert_eq!(outcome.initial_leds.unwrap().count_ones(), 1);
    }

    #[test]
    fn test_map_input_with_segments() {
        let mut hook =
            MapInputHook::WithSegments(Box::new(|idx, cells| cells[idx as usize]));
        assert_eq!(hook.invoke(1, &[10, 20, 30]), 20);
    }

    #[test]
    fn test_correct_hook_receives_progress_and_input() {
        let mut display = ConsoleDisplay::silent();
        let mut hook = CorrectHook::WithProgressAndInput(Box::new(|progress, input| {
            smallvec![progress as u8, input]
        }));
        let line = hook.invoke(3, 7, &mut display);
        assert_eq!(line.as_slice(), &[3, 7]);
    }

    #[test]
    fn test_incorrect_hook_sets_progress() {
        let mut display = ConsoleDisplay::silent();
        let mut hook = IncorrectHook::NoContext(Box::new(|| 0));
        assert_eq!(hook.invoke(5, 0, &mut display), 0);
    }

    #[test]
    fn test_debug_names_variant_only() {
        let hook = SetupHook::WithRng(Box::new(|_| SetupOutcome::empty()));
        assert_eq!(format!("{hook:?}"), "SetupHook::WithRng(..)");
    }
}
