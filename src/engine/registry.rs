//! Game registry: insertion-ordered name-to-game mapping.
//!
//! Kept Vec-backed rather than hashed: selection order must be
//! deterministic because the standby screen shows the selected game as
//! its registration index, and a handful of games makes linear name
//! lookup a non-issue.

use crate::core::RegistrationError;
use crate::engine::minigame::MiniGame;

/// Registry of mini-games, append-only until the controller's setup
/// phase closes it.
///
/// ## Example
///
/// ```
/// use seg_game::{GameRegistry, MiniGame};
///
/// let mut registry = GameRegistry::new();
/// registry
///     .register("memory", MiniGame::builder(3).answer_sequence(vec![1, 2, 3]).build())
///     .unwrap();
///
/// assert_eq!(registry.len(), 1);
/// assert_eq!(registry.index_of("memory"), Some(0));
/// ```
#[derive(Debug, Default)]
pub struct GameRegistry {
    games: Vec<(String, MiniGame)>,
    closed: bool,
}

impl GameRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a game under a unique name.
    ///
    /// Fails once the registry is closed, or on a duplicate name.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        game: MiniGame,
    ) -> Result<(), RegistrationError> {
        if self.closed {
            return Err(RegistrationError::RegistryClosed);
        }
        let name = name.into();
        if self.games.iter().any(|(existing, _)| *existing == name) {
            return Err(RegistrationError::DuplicateName(name));
        }
        self.games.push((name, game));
        Ok(())
    }

    /// Close the registry; further registrations fail.
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Whether the registry has been closed by setup.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of registered games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Registration index of a name, if present.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.games.iter().position(|(existing, _)| existing == name)
    }

    /// Game at a registration index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MiniGame> {
        self.games.get(index).map(|(_, game)| game)
    }

    /// Mutable game at a registration index.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut MiniGame> {
        self.games.get_mut(index).map(|(_, game)| game)
    }

    /// Registered names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.games.iter().map(|(name, _)| name.as_str())
    }
}
