//! Separator display
//!
//! Models an irregular LED group, such as the colon between clock digits,
//! through an explicit table of coordinate-to-strip-index mappings. All
//! mapped LEDs share a single lit/unlit state.

use heapless::Vec;
use smart_leds::RGB8;

use crate::display::{Coords, LedDisplay, LedSink, RenderMode};

/// Errors that can occur when replacing a mapping table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MappingError {
    /// More mappings than the display can hold
    TooManyLeds,
}

/// One LED of a separator: its grid position, strip index and colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedMapping {
    /// Row in the logical grid
    pub row: u8,
    /// Column in the logical grid
    pub column: u8,
    /// Physical strip index
    pub index: u16,
    /// Color rendered while the separator is lit
    pub on_color: RGB8,
    /// Color rendered while the separator is unlit
    pub off_color: RGB8,
}

impl LedMapping {
    /// Map a coordinate to a strip index, starting with black colors
    pub fn new(row: u8, column: u8, index: u16) -> Self {
        Self {
            row,
            column,
            index,
            on_color: RGB8::default(),
            off_color: RGB8::default(),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LedMapping {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "({}, {}) -> {}", self.row, self.column, self.index);
    }
}

/// An irregular LED group holding up to `CAP` mappings
///
/// Grid extents are derived from the mapping table. Duplicate coordinates
/// are not rejected; lookups and color writes take the first match in
/// table order.
#[derive(Debug, Clone)]
pub struct SeparatorDisplay<const CAP: usize> {
    mappings: Vec<LedMapping, CAP>,
    /// Single shared lit/unlit state for the whole group
    state: bool,
    mode: RenderMode,
}

impl<const CAP: usize> SeparatorDisplay<CAP> {
    /// Create a display with an empty mapping table
    pub fn new() -> Self {
        Self {
            mappings: Vec::new(),
            state: false,
            mode: RenderMode::All,
        }
    }

    /// Replace the whole mapping table
    ///
    /// The previous table is discarded. If the new table does not fit,
    /// nothing changes and an error is returned.
    pub fn map(&mut self, mappings: &[LedMapping]) -> Result<(), MappingError> {
        if mappings.len() > CAP {
            return Err(MappingError::TooManyLeds);
        }

        self.mappings.clear();
        self.mappings
            .extend_from_slice(mappings)
            .map_err(|_| MappingError::TooManyLeds)
    }

    /// Set the shared lit/unlit state of every mapped LED
    pub fn set_state(&mut self, state: bool) {
        self.state = state;
    }

    /// Current shared state
    pub fn state(&self) -> bool {
        self.state
    }

    /// First mapping matching a coordinate, in table order
    fn mapping_at(&self, row: u8, column: u8) -> Option<&LedMapping> {
        self.mappings
            .iter()
            .find(|m| m.row == row && m.column == column)
    }
}

impl<const CAP: usize> Default for SeparatorDisplay<CAP> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAP: usize> LedDisplay for SeparatorDisplay<CAP> {
    fn row_count(&self) -> u8 {
        self.mappings.iter().map(|m| m.row + 1).max().unwrap_or(0)
    }

    fn column_count(&self) -> u8 {
        self.mappings.iter().map(|m| m.column + 1).max().unwrap_or(0)
    }

    fn index_of_coords(&self, row: u8, column: u8) -> Option<u16> {
        self.mapping_at(row, column).map(|m| m.index)
    }

    fn coords_of_index(&self, index: u16) -> Option<Coords> {
        self.mappings.iter().find(|m| m.index == index).map(|m| Coords {
            row: m.row,
            column: m.column,
        })
    }

    fn led_color(&self, row: u8, column: u8, lit: bool) -> RGB8 {
        match self.mapping_at(row, column) {
            Some(m) => {
                if lit {
                    m.on_color
                } else {
                    m.off_color
                }
            }
            None => RGB8::default(),
        }
    }

    fn set_led_color(&mut self, row: u8, column: u8, lit: bool, color: RGB8) {
        if let Some(m) = self
            .mappings
            .iter_mut()
            .find(|m| m.row == row && m.column == column)
        {
            if lit {
                m.on_color = color;
            } else {
                m.off_color = color;
            }
        }
    }

    fn render(&self, sink: &mut dyn LedSink) {
        if !self.mode.allows(self.state) {
            return;
        }

        for m in &self.mappings {
            let color = if self.state { m.on_color } else { m.off_color };
            sink.set_led(m.index, color);
        }
    }

    fn set_mode(&mut self, mode: RenderMode) {
        self.mode = mode;
    }
}
