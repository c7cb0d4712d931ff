//! Core engine types: configuration, errors, RNG, input debouncing.
//!
//! This module contains the fundamental building blocks that are
//! game-agnostic. Concrete games configure these via `GameConfig`
//! rather than modifying the core.

pub mod config;
pub mod error;
pub mod input;
pub mod rng;

pub use config::GameConfig;
pub use error::{ConfigError, InputError, RegistrationError};
pub use input::{InputDebouncer, linear_index};
pub use rng::{GameRng, GameRngState};
