//! Console-backed test display.
//!
//! Renders segment lines as three-row ASCII art and takes button reads
//! from a scripted queue, so game logic can be exercised on a host
//! machine with no hardware attached. Behaviorally equivalent to the
//! real driver for every state-mutating call: the last written segment
//! line and LED mask are retained and exposed to tests.

use std::collections::VecDeque;
use std::time::Duration;

use log::{debug, warn};
use smallvec::smallvec;

use super::{Display, SegmentLine};

/// Default blocking duration for animations on an interactive console.
const DEFAULT_ANIMATION_PAUSE: Duration = Duration::from_millis(250);

/// Host-side console display.
///
/// ## Example
///
/// ```
/// use seg_game::{ConsoleDisplay, Display};
///
/// let mut display = ConsoleDisplay::silent();
/// display.write_leds(0b0000_0100);
/// display.press(0b0000_1000);
///
/// assert_eq!(display.leds(), 0b0000_0100);
/// assert_eq!(display.read_buttons(), 0b0000_1000); // press...
/// assert_eq!(display.read_buttons(), 0);           // ...then release
/// ```
pub struct ConsoleDisplay {
    segments: SegmentLine,
    leds: u8,
    buttons: VecDeque<u8>,
    segment_count: usize,
    led_count: usize,
    echo: bool,
    animation_pause: Duration,
}

impl ConsoleDisplay {
    /// Interactive console display: echoes every render to stdout and
    /// blocks for real animation durations.
    #[must_use]
    pub fn new() -> Self {
        Self {
            segments: smallvec![0; 8],
            leds: 0,
            buttons: VecDeque::new(),
            segment_count: 8,
            led_count: 8,
            echo: true,
            animation_pause: DEFAULT_ANIMATION_PAUSE,
        }
    }

    /// Test display: no stdout echo, zero-duration animations.
    #[must_use]
    pub fn silent() -> Self {
        Self {
            echo: false,
            animation_pause: Duration::ZERO,
            ..Self::new()
        }
    }

    /// Override the blocking animation duration.
    #[must_use]
    pub fn with_animation_pause(mut self, pause: Duration) -> Self {
        self.animation_pause = pause;
        self
    }

    /// Queue raw button reads, consumed one per `read_buttons` call.
    /// An empty queue reads as 0 (nothing pressed).
    pub fn push_buttons(&mut self, reads: impl IntoIterator<Item = u8>) {
        self.buttons.extend(reads);
    }

    /// Queue one press-release pair: the mask for one read, then 0.
    pub fn press(&mut self, mask: u8) {
        self.push_buttons([mask, 0]);
    }

    /// The last written segment line, padded to board width.
    #[must_use]
    pub fn segments(&self) -> &[u8] {
        &self.segments
    }

    /// The last written LED mask.
    #[must_use]
    pub fn leds(&self) -> u8 {
        self.leds
    }

    /// Render a segment line as three rows of ASCII art.
    ///
    /// Each cell occupies four columns:
    ///
    /// ```text
    ///  _
    /// |_|
    /// |_|.
    /// ```
    #[must_use]
    pub fn ascii_rows(cells: &[u8]) -> [String; 3] {
        let mut top = String::new();
        let mut mid = String::new();
        let mut bottom = String::new();

        for &cell in cells {
            let seg = |bit: u8, on: char| if cell & (1 << bit) != 0 { on } else { ' ' };

            top.push(' ');
            top.push(seg(0, '_'));
            top.push_str("  ");

            mid.push(seg(5, '|'));
            mid.push(seg(6, '_'));
            mid.push(seg(1, '|'));
            mid.push(' ');

            bottom.push(seg(4, '|'));
            bottom.push(seg(3, '_'));
            bottom.push(seg(2, '|'));
            bottom.push(seg(7, '.'));
        }

        [top, mid, bottom]
    }

    fn echo_segments(&self) {
        if self.echo {
            for row in Self::ascii_rows(&self.segments) {
                println!("{row}");
            }
        }
    }

    fn echo_leds(&self) {
        if self.echo {
            println!("LEDs: {:08b}", self.leds);
        }
    }

    fn animate(&self, name: &str) {
        debug!("<{name} animation>");
        if self.echo {
            println!("<{name} animation>");
        }
        if !self.animation_pause.is_zero() {
            std::thread::sleep(self.animation_pause);
        }
    }
}

impl Default for ConsoleDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for ConsoleDisplay {
    fn segment_count(&self) -> usize {
        self.segment_count
    }

    fn led_count(&self) -> usize {
        self.led_count
    }

    fn write_segments(&mut self, cells: &[u8]) {
        let mut line = cells;
        if line.len() > self.segment_count {
            warn!(
                "segment line of {} cells truncated to board width {}",
                line.len(),
                self.segment_count
            );
            line = &line[..self.segment_count];
        }

        self.segments.clear();
        self.segments.extend_from_slice(line);
        self.segments.resize(self.segment_count, 0);
        self.echo_segments();
    }

    fn write_leds(&mut self, mask: u8) {
        self.leds = mask;
        self.echo_leds();
    }

    fn read_buttons(&mut self) -> u8 {
        self.buttons.pop_front().unwrap_or(0)
    }

    fn clear(&mut self) {
        self.segments.clear();
        self.segments.resize(self.segment_count, 0);
        self.leds = 0;
        if self.echo {
            println!("<display cleared>");
        }
    }

    fn roll(&mut self) {
        self.animate("roll");
    }

    fn wave(&mut self) {
        self.animate("wave");
    }

    fn load(&mut self) {
        self.animate("load");
    }

    fn unload(&mut self) {
        self.animate("unload");
    }
}
