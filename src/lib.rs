//! # seg-game
//!
//! A turn-based mini-game engine for TM1638-style 7-segment/LED/button
//! peripheral boards.
//!
//! ## Design Principles
//!
//! 1. **Engine-Agnostic Content**: The engine never hardcodes puzzles.
//!    Games plug in an answer sequence plus optional hooks for setup,
//!    input mapping, and correct/incorrect-answer rendering.
//!
//! 2. **Capability Hooks Over Reflection**: Each hook kind is a tagged
//!    union enumerating exactly the context it may receive (progress,
//!    raw input, the display, the RNG). The game author picks the
//!    matching variant at construction time.
//!
//! 3. **Deterministic By Seed**: All random answer generation runs inside
//!    `setup()` against a seeded RNG owned by the controller. Same seed,
//!    same session.
//!
//! 4. **The Device Stays Responsive**: Configuration faults abort setup;
//!    per-turn faults (e.g. a malformed button read) are absorbed into
//!    the incorrect-answer path. No error ever escapes a tick.
//!
//! ## Architecture
//!
//! - **Poll-Driven**: A boot loop repeatedly calls
//!   [`SevenSegButtonGame::tick`]; the controller debounces raw button
//!   reads and dispatches them to the standby (selection) or play loop.
//!
//! - **Single Display Writer**: The `Display` capability is owned by the
//!   controller and lent to the active game for the duration of one call.
//!   There is never more than one writer in a tick.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, RNG, input debouncing
//! - `display`: Display capability trait, seven-segment font, console variant
//! - `engine`: `MiniGame` state machine, hook enums, registry, controller
//! - `games`: Concrete mini-games (memory, math, spatial)

pub mod core;
pub mod display;
pub mod engine;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameRng, GameRngState, InputDebouncer, InputError,
    RegistrationError, linear_index,
};

pub use crate::display::{ConsoleDisplay, Display, SegmentLine, font};

pub use crate::engine::{
    CorrectHook, GamePhase, GameRegistry, IncorrectHook, MapInputHook, MiniGame,
    MiniGameBuilder, Mode, SetupHook, SetupOutcome, SevenSegButtonGame,
    DEFAULT_CONFIRM_MASK,
};

pub use crate::games::{MathGame, MemoryGame, SpatialGame};
