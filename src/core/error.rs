//! Error taxonomy.
//!
//! Three tiers with different blast radii:
//!
//! - `ConfigError`: fatal at setup time. A misconfigured game must fail
//!   before the play loop is entered, never during it.
//! - `InputError`: per-turn, recoverable. Absorbed by the engine into
//!   the incorrect-answer path so a malformed read never halts the device.
//! - `RegistrationError`: fatal to the registration call only.

use thiserror::Error;

/// Fatal setup-time configuration faults.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The resolved answer sequence does not match the declared win length.
    /// The game would be unplayable.
    #[error(
        "game has {win_length} completion steps but {answer_len} step answers; \
         this game would be unplayable"
    )]
    AnswerLengthMismatch { win_length: usize, answer_len: usize },

    /// `setup()` was called with an empty registry.
    #[error("no games registered; register at least one game before setup")]
    NoGamesRegistered,

    /// An explicit game name was requested that is not in the registry.
    #[error("no game registered under the name {0:?}")]
    UnknownGame(String),
}

/// Per-turn input faults. Recoverable: the engine treats these as an
/// incorrect answer for the turn.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// The raw bitmask has zero or more than one bit set, so it cannot
    /// be resolved to a single button index.
    #[error("raw input {0:#010b} is not a single set bit")]
    NotOneHot(u8),
}

/// Faults raised by `register()`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// Games may not be registered after `setup()` has closed the registry.
    #[error("registry is closed; games may not be registered after setup")]
    RegistryClosed,

    /// Game names must be unique.
    #[error("a game named {0:?} is already registered")]
    DuplicateName(String),
}
