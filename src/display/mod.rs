//! Display capability boundary.
//!
//! The engine consumes, but never implements, the physical board driver.
//! Everything it needs is behind the [`Display`] trait: segment line
//! output, LED bitmask output, raw button input, clear, and a handful of
//! fixed-duration blocking animations.
//!
//! [`ConsoleDisplay`] is the host-side variant: it renders to a text
//! console and takes scripted button reads, and is observationally
//! equivalent to hardware for all state-mutating calls.

pub mod console;
pub mod font;

use smallvec::SmallVec;

pub use console::ConsoleDisplay;

/// One line of seven-segment cells, as raw segment bitmasks.
///
/// Inline up to board width (8 cells) - a line never spills to the heap
/// on a single-board setup.
pub type SegmentLine = SmallVec<[u8; 8]>;

/// Capability boundary to the 7-segment/LED/button board.
///
/// Object safe: games receive `&mut dyn Display` through their hooks.
/// The controller is the sole owner; it lends the display to the active
/// game for the duration of one call, so there is exactly one writer at
/// a time.
///
/// ## Contract
///
/// - `write_segments` must truncate lines longer than `segment_count()`
///   (with a warning) rather than fail; a malformed render must never
///   halt the device.
/// - Animations block for a fixed, configured duration and leave the
///   display cleared or unchanged as documented per animation.
pub trait Display {
    /// Number of seven-segment cells on the board.
    fn segment_count(&self) -> usize;

    /// Number of LEDs on the bar.
    fn led_count(&self) -> usize;

    /// Write a line of raw segment bitmasks, left to right.
    ///
    /// Shorter lines are padded with blanks; longer lines are truncated.
    fn write_segments(&mut self, cells: &[u8]);

    /// Set the LED bar from a bitmask, bit 0 = rightmost LED.
    fn write_leds(&mut self, mask: u8);

    /// Read the current raw button bitmask, one bit per button.
    fn read_buttons(&mut self) -> u8;

    /// Blank both segment and LED outputs.
    fn clear(&mut self);

    /// Rolling animation across the segment cells. Blocking.
    fn roll(&mut self);

    /// Wave animation across the segment cells. Blocking.
    fn wave(&mut self);

    /// Fill-up loading animation. Blocking.
    fn load(&mut self);

    /// Drain-down unloading animation. Blocking.
    fn unload(&mut self);

    /// Set the LED bar with the mask's bits illuminated from the left.
    ///
    /// `0b0000_0111` lights the three leftmost LEDs. Used by the standby
    /// loop to show the selected game index as a left-aligned count.
    fn write_leds_from_left(&mut self, mask: u8) {
        self.write_leds(mask.reverse_bits());
    }

    /// Encode a string through the seven-segment font and display it.
    ///
    /// Characters outside the font render as blank cells.
    fn write_str(&mut self, text: &str) {
        let line = font::encode_str(text);
        self.write_segments(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leds_from_left_reverses_bits() {
        let mut display = ConsoleDisplay::silent();
        display.write_leds_from_left(0b0000_0111);
        assert_eq!(display.leds(), 0b1110_0000);
    }

    #[test]
    fn test_write_str_goes_through_font() {
        let mut display = ConsoleDisplay::silent();
        display.write_str("42");
        assert_eq!(&display.segments()[..2], &[0x66, 0x5B]);
    }
}
