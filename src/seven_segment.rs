//! Seven-segment glyph display
//!
//! Models one seven-segment glyph built from `N` LEDs per segment. The
//! logical grid wraps the glyph shape in a bounding rectangle; the mapping
//! between grid coordinates and segment slots is pure geometry.
//!
//! For `N = 2` the grid looks like this (`.` cells are not part of any
//! segment):
//!
//! ```text
//!        col 0 1 2 3
//! row 0    . A A .
//! row 1    F . . B
//! row 2    F . . B
//! row 3    . G G .
//! row 4    E . . C
//! row 5    E . . C
//! row 6    . D D .
//! ```

use smart_leds::RGB8;

use crate::display::{Coords, LedDisplay, LedSink, RenderMode};
use crate::font;

/// One of the seven standard segments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Segment {
    /// Top bar
    A = 0,
    /// Top-right vertical
    B,
    /// Bottom-right vertical
    C,
    /// Bottom bar
    D,
    /// Bottom-left vertical
    E,
    /// Top-left vertical
    F,
    /// Middle bar
    G,
}

impl Segment {
    /// All segments in render order
    pub const ALL: [Segment; 7] = [
        Segment::A,
        Segment::B,
        Segment::C,
        Segment::D,
        Segment::E,
        Segment::F,
        Segment::G,
    ];

    /// This segment's bit in a glyph mask
    pub const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// A seven-segment glyph built from `N` LEDs per segment
///
/// Construction fixes the geometry; afterwards the caller binds each
/// segment to physical strip indices once with [`map_segment`], then
/// mutates glyph, colors and mode between render passes.
///
/// [`map_segment`]: SevenSegmentDisplay::map_segment
#[derive(Debug, Clone)]
pub struct SevenSegmentDisplay<const N: usize> {
    /// Physical strip index per segment slot
    indices: [[u16; N]; 7],
    /// Colors rendered while a segment is lit
    on_colors: [[RGB8; N]; 7],
    /// Colors rendered while a segment is unlit
    off_colors: [[RGB8; N]; 7],
    /// Current glyph mask, one bit per segment
    glyph: u8,
    /// Whether digit zero renders as "0" or blank
    show_zero: bool,
    mode: RenderMode,
}

impl<const N: usize> SevenSegmentDisplay<N> {
    /// Create a blank display with black colors and no glyph
    pub fn new() -> Self {
        Self {
            indices: [[0; N]; 7],
            on_colors: [[RGB8::default(); N]; 7],
            off_colors: [[RGB8::default(); N]; 7],
            glyph: font::BLANK,
            show_zero: true,
            mode: RenderMode::All,
        }
    }

    /// Bind one segment to its physical strip indices, left-to-right
    ///
    /// Must be called for every segment before the first render pass.
    /// Binding a segment again overwrites that segment only.
    pub fn map_segment(&mut self, segment: Segment, indices: [u16; N]) {
        self.indices[segment as usize] = indices;
    }

    /// Store a raw glyph mask, one bit per segment
    pub fn set_symbol(&mut self, mask: u8) {
        self.glyph = mask;
    }

    /// Current glyph mask
    pub fn symbol(&self) -> u8 {
        self.glyph
    }

    /// Show a decimal digit
    ///
    /// Out-of-range values blank the glyph; zero blanks it too unless
    /// [`set_show_zero`] says otherwise.
    ///
    /// [`set_show_zero`]: SevenSegmentDisplay::set_show_zero
    pub fn set_digit(&mut self, digit: u8) {
        let mask = match digit {
            0 if !self.show_zero => font::BLANK,
            0..=9 => font::DIGITS[digit as usize],
            _ => font::BLANK,
        };
        self.set_symbol(mask);
    }

    /// Show a character of the calculator alphabet
    pub fn set_character(&mut self, character: char) {
        self.set_symbol(font::char_mask(character));
    }

    /// Control whether digit zero renders as "0" or blank
    pub fn set_show_zero(&mut self, show_zero: bool) {
        self.show_zero = show_zero;
    }

    /// Resolve a coordinate to a segment slot
    ///
    /// Pure geometry, no lookups. Coordinates on the rectangle but outside
    /// the glyph shape resolve to `None`.
    fn slot(row: u8, column: u8) -> Option<(Segment, usize)> {
        let n = N as u8;
        let mid_row = n + 1;
        let last_row = 2 * n + 2;

        if row > last_row || column > n + 1 {
            return None;
        }

        if row == 0 || row == mid_row || row == last_row {
            if (1..=n).contains(&column) {
                let segment = if row == 0 {
                    Segment::A
                } else if row == mid_row {
                    Segment::G
                } else {
                    Segment::D
                };
                return Some((segment, (column - 1) as usize));
            }
            return None;
        }

        let position = if row < mid_row {
            (row - 1) as usize
        } else {
            (row - mid_row - 1) as usize
        };

        if column == 0 {
            let segment = if row < mid_row { Segment::F } else { Segment::E };
            Some((segment, position))
        } else if column == n + 1 {
            let segment = if row < mid_row { Segment::B } else { Segment::C };
            Some((segment, position))
        } else {
            None
        }
    }

    /// Coordinate of a segment slot; inverse of [`slot`](Self::slot)
    fn coords_of_slot(segment: Segment, position: usize) -> Coords {
        let n = N as u8;
        let mid_row = n + 1;
        let p = position as u8;

        let row = match segment {
            Segment::A => 0,
            Segment::B | Segment::F => p + 1,
            Segment::C | Segment::E => mid_row + 1 + p,
            Segment::D => 2 * n + 2,
            Segment::G => mid_row,
        };
        let column = match segment {
            Segment::A | Segment::D | Segment::G => p + 1,
            Segment::B | Segment::C => n + 1,
            Segment::E | Segment::F => 0,
        };

        Coords { row, column }
    }
}

impl<const N: usize> Default for SevenSegmentDisplay<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> LedDisplay for SevenSegmentDisplay<N> {
    fn row_count(&self) -> u8 {
        2 * N as u8 + 3
    }

    fn column_count(&self) -> u8 {
        N as u8 + 2
    }

    fn index_of_coords(&self, row: u8, column: u8) -> Option<u16> {
        Self::slot(row, column).map(|(segment, position)| self.indices[segment as usize][position])
    }

    fn coords_of_index(&self, index: u16) -> Option<Coords> {
        for segment in Segment::ALL {
            for position in 0..N {
                if self.indices[segment as usize][position] == index {
                    return Some(Self::coords_of_slot(segment, position));
                }
            }
        }
        None
    }

    fn led_color(&self, row: u8, column: u8, lit: bool) -> RGB8 {
        match Self::slot(row, column) {
            Some((segment, position)) => {
                let colors = if lit { &self.on_colors } else { &self.off_colors };
                colors[segment as usize][position]
            }
            None => RGB8::default(),
        }
    }

    fn set_led_color(&mut self, row: u8, column: u8, lit: bool, color: RGB8) {
        if let Some((segment, position)) = Self::slot(row, column) {
            let colors = if lit {
                &mut self.on_colors
            } else {
                &mut self.off_colors
            };
            colors[segment as usize][position] = color;
        }
    }

    fn render(&self, sink: &mut dyn LedSink) {
        for segment in Segment::ALL {
            let lit = self.glyph & segment.bit() != 0;
            if !self.mode.allows(lit) {
                continue;
            }

            let colors = if lit { &self.on_colors } else { &self.off_colors };
            for position in 0..N {
                sink.set_led(
                    self.indices[segment as usize][position],
                    colors[segment as usize][position],
                );
            }
        }
    }

    fn set_mode(&mut self, mode: RenderMode) {
        self.mode = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::LedDisplayExt;
    use heapless::Vec;

    /// Bind every segment to a unique index block: A gets 0..N, B gets
    /// 10..10+N, and so on in steps of ten.
    fn mapped<const N: usize>() -> SevenSegmentDisplay<N> {
        let mut display = SevenSegmentDisplay::<N>::new();
        for (block, segment) in Segment::ALL.into_iter().enumerate() {
            let mut indices = [0u16; N];
            for (position, index) in indices.iter_mut().enumerate() {
                *index = (block * 10 + position) as u16;
            }
            display.map_segment(segment, indices);
        }
        display
    }

    #[test]
    fn test_grid_shape() {
        let display = SevenSegmentDisplay::<3>::new();
        assert_eq!(display.row_count(), 9);
        assert_eq!(display.column_count(), 5);

        let display = SevenSegmentDisplay::<1>::new();
        assert_eq!(display.row_count(), 5);
        assert_eq!(display.column_count(), 3);
    }

    #[test]
    fn test_forward_mapping() {
        let display = mapped::<3>();

        // Top bar, position 1
        assert_eq!(display.index_of_coords(0, 2), Some(1));
        // Middle bar
        assert_eq!(display.index_of_coords(4, 1), Some(60));
        // Bottom bar, position 2
        assert_eq!(display.index_of_coords(8, 3), Some(32));
        // Verticals
        assert_eq!(display.index_of_coords(1, 0), Some(50)); // F position 0
        assert_eq!(display.index_of_coords(5, 0), Some(40)); // E position 0
        assert_eq!(display.index_of_coords(3, 4), Some(12)); // B position 2
        assert_eq!(display.index_of_coords(7, 4), Some(22)); // C position 2
    }

    #[test]
    fn test_off_shape_coordinates_are_unmapped() {
        let display = mapped::<3>();

        // Corners of the bounding rectangle
        assert_eq!(display.index_of_coords(0, 0), None);
        assert_eq!(display.index_of_coords(0, 4), None);
        assert_eq!(display.index_of_coords(8, 0), None);
        assert_eq!(display.index_of_coords(8, 4), None);
        // Cells flanking the middle bar
        assert_eq!(display.index_of_coords(4, 0), None);
        assert_eq!(display.index_of_coords(4, 4), None);
        // Interior
        assert_eq!(display.index_of_coords(2, 2), None);
        // Outside the rectangle entirely
        assert_eq!(display.index_of_coords(9, 0), None);
        assert_eq!(display.index_of_coords(0, 5), None);
    }

    #[test]
    fn test_round_trip_covers_every_slot() {
        let display = mapped::<3>();

        let mut valid = 0;
        for row in 0..display.row_count() {
            for column in 0..display.column_count() {
                if let Some(index) = display.index_of_coords(row, column) {
                    valid += 1;
                    assert_eq!(
                        display.coords_of_index(index),
                        Some(Coords { row, column }),
                        "round trip failed at ({row}, {column})"
                    );
                }
            }
        }

        // 7 segments x 3 LEDs
        assert_eq!(valid, 21);
    }

    #[test]
    fn test_unknown_index_has_no_coords() {
        let display = mapped::<2>();
        assert_eq!(display.coords_of_index(999), None);
    }

    #[test]
    fn test_map_segment_overwrites_one_segment() {
        let mut display = mapped::<2>();
        display.map_segment(Segment::B, [100, 101]);

        assert_eq!(display.index_of_coords(1, 3), Some(100));
        assert_eq!(display.index_of_coords(2, 3), Some(101));
        // Other segments keep their binding
        assert_eq!(display.index_of_coords(0, 1), Some(0));
    }

    #[test]
    fn test_mode_gate_digit_one() {
        let mut display = mapped::<2>();
        let on = RGB8::new(255, 0, 0);
        display.fill(true, on);
        display.set_digit(1);
        display.set_mode(RenderMode::LitOnly);

        let mut calls: Vec<(u16, RGB8), 32> = Vec::new();
        display.render(&mut |index: u16, color: RGB8| {
            calls.push((index, color)).unwrap();
        });

        // Only segments B and C, each with 2 LEDs, in segment order
        assert_eq!(
            calls.as_slice(),
            &[(10, on), (11, on), (20, on), (21, on)]
        );
    }

    #[test]
    fn test_render_all_mixes_on_and_off_colors() {
        let mut display = mapped::<1>();
        let on = RGB8::new(0, 255, 0);
        let off = RGB8::new(9, 9, 9);
        display.fill(true, on);
        display.fill(false, off);
        display.set_digit(7); // segments A, B, C

        let mut calls: Vec<(u16, RGB8), 8> = Vec::new();
        display.render(&mut |index: u16, color: RGB8| {
            calls.push((index, color)).unwrap();
        });

        assert_eq!(
            calls.as_slice(),
            &[
                (0, on),
                (10, on),
                (20, on),
                (30, off),
                (40, off),
                (50, off),
                (60, off),
            ]
        );
    }

    #[test]
    fn test_unlit_only_skips_lit_segments() {
        let mut display = mapped::<1>();
        let off = RGB8::new(1, 2, 3);
        display.fill(false, off);
        display.set_digit(8); // everything lit
        display.set_mode(RenderMode::UnlitOnly);

        let mut count = 0;
        display.render(&mut |_: u16, _: RGB8| count += 1);
        assert_eq!(count, 0);

        display.set_symbol(font::BLANK);
        display.render(&mut |_: u16, color: RGB8| {
            count += 1;
            assert_eq!(color, off);
        });
        assert_eq!(count, 7);
    }

    #[test]
    fn test_zero_blanking() {
        let mut display = SevenSegmentDisplay::<2>::new();

        display.set_digit(0);
        assert_eq!(display.symbol(), font::DIGITS[0]);

        display.set_show_zero(false);
        display.set_digit(0);
        assert_eq!(display.symbol(), font::BLANK);

        // Same as an out-of-range digit
        display.set_digit(10);
        assert_eq!(display.symbol(), font::BLANK);

        display.set_show_zero(true);
        display.set_digit(0);
        assert_eq!(display.symbol(), font::DIGITS[0]);
    }

    #[test]
    fn test_set_character() {
        let mut display = SevenSegmentDisplay::<2>::new();
        display.set_character('E');
        assert_eq!(display.symbol(), font::char_mask('E'));
        display.set_character('*');
        assert_eq!(display.symbol(), font::BLANK);
    }

    #[test]
    fn test_color_storage_per_state() {
        let mut display = mapped::<2>();
        let red = RGB8::new(255, 0, 0);
        let dim = RGB8::new(8, 8, 8);

        display.set_led_color(0, 1, true, red);
        display.set_led_color(0, 1, false, dim);

        assert_eq!(display.led_color(0, 1, true), red);
        assert_eq!(display.led_color(0, 1, false), dim);
        // Neighboring slot untouched
        assert_eq!(display.led_color(0, 2, true), RGB8::default());
    }

    #[test]
    fn test_invalid_coordinates_are_soft() {
        let mut display = mapped::<2>();
        let red = RGB8::new(255, 0, 0);

        // Write to a corner is a no-op, read returns black
        display.set_led_color(0, 0, true, red);
        assert_eq!(display.led_color(0, 0, true), RGB8::default());
    }

    #[test]
    fn test_fill_row_touches_only_mapped_cells() {
        let mut display = mapped::<2>();
        let red = RGB8::new(255, 0, 0);
        display.fill_row(0, true, red);

        assert_eq!(display.led_color(0, 1, true), red);
        assert_eq!(display.led_color(0, 2, true), red);
        // Other rows untouched
        assert_eq!(display.led_color(1, 0, true), RGB8::default());
    }

    #[test]
    fn test_fill_column_spans_both_verticals() {
        let mut display = mapped::<2>();
        let blue = RGB8::new(0, 0, 255);
        display.fill_column(0, true, blue);

        assert_eq!(display.led_color(1, 0, true), blue); // F
        assert_eq!(display.led_color(2, 0, true), blue);
        assert_eq!(display.led_color(4, 0, true), blue); // E
        assert_eq!(display.led_color(5, 0, true), blue);
    }
}
