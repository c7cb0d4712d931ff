//! Stock mini-games.
//!
//! All three are plain configuration of the engine: an answer sequence
//! plus hook variants, no special-cased engine paths. Each game type is
//! a small builder whose `build()` returns a ready-to-register
//! [`MiniGame`](crate::MiniGame).
//!
//! Pauses inside setup sequences (the memory flash, the spatial sweep)
//! are configurable so host-side tests run instantly.

pub mod math;
pub mod memory;
pub mod spatial;

pub use math::MathGame;
pub use memory::MemoryGame;
pub use spatial::SpatialGame;

use std::time::Duration;

/// Fixed blocking pause used by setup sequences. No-op at zero.
pub(crate) fn pause(duration: Duration) {
    if !duration.is_zero() {
        std::thread::sleep(duration);
    }
}
