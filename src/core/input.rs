//! Button input handling: debouncing and one-hot conversion.
//!
//! The board reports a raw bitmask on every poll, so a single physical
//! press shows up in many successive reads. `InputDebouncer` turns that
//! stream into discrete press events; `linear_index` resolves a one-hot
//! mask to its 0-based button number.

use crate::core::error::InputError;

/// Rising-edge debouncer over raw button bitmask reads.
///
/// Emits the raw mask only on the transition from "nothing pressed" to
/// "something pressed"; emits 0 while buttons remain held. The latch
/// resets only when a read returns exactly 0 (all buttons released).
///
/// ## Example
///
/// ```
/// use seg_game::InputDebouncer;
///
/// let mut debouncer = InputDebouncer::new();
/// assert_eq!(debouncer.filter(0b0100), 0b0100); // press detected
/// assert_eq!(debouncer.filter(0b0100), 0);      // still held
/// assert_eq!(debouncer.filter(0), 0);           // released, latch resets
/// assert_eq!(debouncer.filter(0b0001), 0b0001); // next press
/// ```
#[derive(Clone, Debug, Default)]
pub struct InputDebouncer {
    pressed: bool,
}

impl InputDebouncer {
    /// Create a debouncer with the latch released.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw read; returns the mask on a rising edge, 0 otherwise.
    pub fn filter(&mut self, raw: u8) -> u8 {
        if raw > 0 && !self.pressed {
            self.pressed = true;
            return raw;
        }
        if raw == 0 && self.pressed {
            self.pressed = false;
        }
        0
    }

    /// Whether the latch currently considers a button held.
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.pressed
    }
}

/// Convert a one-hot button bitmask to its 0-based index.
///
/// Raw value 8 (`0b1000`) resolves to index 3. Fails if the mask has
/// zero or more than one set bit; callers on the turn path absorb that
/// as an incorrect answer rather than propagating it.
pub fn linear_index(raw: u8) -> Result<u8, InputError> {
    if raw.count_ones() != 1 {
        return Err(InputError::NotOneHot(raw));
    }
    Ok(raw.trailing_zeros() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_press_emits_once() {
        let mut debouncer = InputDebouncer::new();

        assert_eq!(debouncer.filter(0b0000_1000), 0b0000_1000);
        // Held across many polls: suppressed.
        for _ in 0..50 {
            assert_eq!(debouncer.filter(0b0000_1000), 0);
        }
    }

    #[test]
    fn test_latch_resets_only_on_zero() {
        let mut debouncer = InputDebouncer::new();

        assert_eq!(debouncer.filter(0b01), 0b01);
        // A different button joining while the first is held is not a
        // new event.
        assert_eq!(debouncer.filter(0b11), 0);
        assert_eq!(debouncer.filter(0b10), 0);
        assert_eq!(debouncer.filter(0), 0);
        assert_eq!(debouncer.filter(0b10), 0b10);
    }

    #[test]
    fn test_idle_stream_emits_nothing() {
        let mut debouncer = InputDebouncer::new();
        for _ in 0..10 {
            assert_eq!(debouncer.filter(0), 0);
        }
        assert!(!debouncer.is_held());
    }

    #[test]
    fn test_linear_index_of_each_button() {
        for i in 0..8u8 {
            assert_eq!(linear_index(1 << i), Ok(i));
        }
    }

    #[test]
    fn test_linear_index_rejects_zero_and_chords() {
        assert_eq!(linear_index(0), Err(InputError::NotOneHot(0)));
        assert_eq!(linear_index(0b0000_0110), Err(InputError::NotOneHot(0b0000_0110)));
        assert_eq!(linear_index(0xFF), Err(InputError::NotOneHot(0xFF)));
    }
}
