//! Shared display contract
//!
//! Defines the capability set every display kind implements, the render
//! gate, and the per-LED output sink the render pass writes into.

use smart_leds::RGB8;

/// A logical grid position reported by an inverse lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Coords {
    /// Row, 0 at the top
    pub row: u8,
    /// Column, 0 at the left
    pub column: u8,
}

/// Render gate selecting which logical states reach the sink.
///
/// Gated-out LEDs are not written at all; the sink is assumed to retain
/// the last value it was given until told otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderMode {
    /// Write every LED, lit or not
    #[default]
    All,
    /// Write only lit LEDs
    LitOnly,
    /// Write only unlit LEDs
    UnlitOnly,
}

impl RenderMode {
    /// Whether an LED in the given lit state passes this gate
    pub fn allows(self, lit: bool) -> bool {
        match self {
            RenderMode::All => true,
            RenderMode::LitOnly => lit,
            RenderMode::UnlitOnly => !lit,
        }
    }
}

/// Per-LED output sink
///
/// The render pass calls this once per LED that passes the mode gate.
/// `index` is the strip address of the LED, independent of any logical
/// row/column.
pub trait LedSink {
    /// Write one LED's color
    fn set_led(&mut self, index: u16, color: RGB8);
}

impl<F> LedSink for F
where
    F: FnMut(u16, RGB8),
{
    fn set_led(&mut self, index: u16, color: RGB8) {
        self(index, color)
    }
}

/// Capability set shared by all display kinds
///
/// Coordinates outside the display's shape are expected (callers iterate
/// bounding rectangles), so lookups never fail loudly: missing indices are
/// `None`, missing colors read as black and write as a no-op.
pub trait LedDisplay {
    /// Number of rows in the logical grid
    fn row_count(&self) -> u8;

    /// Number of columns in the logical grid
    fn column_count(&self) -> u8;

    /// Physical strip index of the LED at a coordinate, if one is mapped
    fn index_of_coords(&self, row: u8, column: u8) -> Option<u16>;

    /// Coordinate of the LED with the given physical index, if mapped
    fn coords_of_index(&self, index: u16) -> Option<Coords>;

    /// Stored color for a coordinate in the given lit state
    ///
    /// Returns black for coordinates outside the shape.
    fn led_color(&self, row: u8, column: u8, lit: bool) -> RGB8;

    /// Store a color for a coordinate in the given lit state
    ///
    /// No-op for coordinates outside the shape.
    fn set_led_color(&mut self, row: u8, column: u8, lit: bool, color: RGB8);

    /// Push the current state through the mode gate into the sink
    fn render(&self, sink: &mut dyn LedSink);

    /// Set the render gate
    fn set_mode(&mut self, mode: RenderMode);
}

/// Bulk color helpers for any display
pub trait LedDisplayExt: LedDisplay {
    /// Set the color of every mapped LED in one row
    fn fill_row(&mut self, row: u8, lit: bool, color: RGB8) {
        for column in 0..self.column_count() {
            self.set_led_color(row, column, lit, color);
        }
    }

    /// Set the color of every mapped LED in one column
    fn fill_column(&mut self, column: u8, lit: bool, color: RGB8) {
        for row in 0..self.row_count() {
            self.set_led_color(row, column, lit, color);
        }
    }

    /// Set the color of every mapped LED on the display
    fn fill(&mut self, lit: bool, color: RGB8) {
        for row in 0..self.row_count() {
            for column in 0..self.column_count() {
                self.set_led_color(row, column, lit, color);
            }
        }
    }
}

// Blanket implementation for all LedDisplay types
impl<T: LedDisplay + ?Sized> LedDisplayExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_all_allows_both_states() {
        assert!(RenderMode::All.allows(true));
        assert!(RenderMode::All.allows(false));
    }

    #[test]
    fn test_mode_lit_only() {
        assert!(RenderMode::LitOnly.allows(true));
        assert!(!RenderMode::LitOnly.allows(false));
    }

    #[test]
    fn test_mode_unlit_only() {
        assert!(!RenderMode::UnlitOnly.allows(true));
        assert!(RenderMode::UnlitOnly.allows(false));
    }

    #[test]
    fn test_closure_is_a_sink() {
        let mut written: heapless::Vec<(u16, RGB8), 4> = heapless::Vec::new();
        {
            let sink: &mut dyn LedSink = &mut |index: u16, color: RGB8| {
                written.push((index, color)).unwrap();
            };
            sink.set_led(7, RGB8::new(1, 2, 3));
        }
        assert_eq!(written.as_slice(), &[(7, RGB8::new(1, 2, 3))]);
    }
}
