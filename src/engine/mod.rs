//! The game engine: turn evaluation, hooks, registry, controller.
//!
//! - [`MiniGame`] owns one puzzle's answer sequence, progress and lives,
//!   and evaluates a single debounced input per turn.
//! - [`hooks`] defines the capability-enum callbacks a game plugs in.
//! - [`GameRegistry`] is the insertion-ordered name-to-game mapping.
//! - [`SevenSegButtonGame`] owns the display and registry and drives the
//!   standby (selection) and play loops.

pub mod controller;
pub mod hooks;
pub mod minigame;
pub mod registry;

pub use controller::{Mode, SevenSegButtonGame, DEFAULT_CONFIRM_MASK};
pub use hooks::{CorrectHook, IncorrectHook, MapInputHook, SetupHook, SetupOutcome};
pub use minigame::{GamePhase, MiniGame, MiniGameBuilder};
pub use registry::GameRegistry;
