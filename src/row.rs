//! Horizontal display composition
//!
//! Concatenates heterogeneous displays side-by-side along the column axis
//! so a whole row (say `H H : M M`) can be addressed through one origin.
//! Children are borrowed, not owned; their lifetime is managed by whoever
//! builds the tree.

use smart_leds::RGB8;

use crate::display::{Coords, LedDisplay, LedSink, RenderMode};

/// An ordered row of displays addressed as one wide logical grid
///
/// Row axes are aligned at row 0. Column ranges of the children partition
/// the composite's column space contiguously in sequence order: logical
/// column `c` belongs to the first child whose width has not been walked
/// past, and reaches it rebased to that child's local column space.
pub struct RowDisplay<'a, const N: usize> {
    children: [&'a mut (dyn LedDisplay + 'a); N],
}

impl<'a, const N: usize> RowDisplay<'a, N> {
    /// Compose an ordered row of displays
    pub fn new(children: [&'a mut (dyn LedDisplay + 'a); N]) -> Self {
        Self { children }
    }
}

impl<const N: usize> LedDisplay for RowDisplay<'_, N> {
    fn row_count(&self) -> u8 {
        self.children
            .iter()
            .map(|child| child.row_count())
            .max()
            .unwrap_or(0)
    }

    fn column_count(&self) -> u8 {
        self.children.iter().map(|child| child.column_count()).sum()
    }

    fn index_of_coords(&self, row: u8, column: u8) -> Option<u16> {
        let mut column = column;
        for child in self.children.iter() {
            let width = child.column_count();
            if column < width {
                return child.index_of_coords(row, column);
            }
            column -= width;
        }
        None
    }

    fn coords_of_index(&self, index: u16) -> Option<Coords> {
        let mut offset = 0u8;
        for child in self.children.iter() {
            if let Some(mut coords) = child.coords_of_index(index) {
                coords.column += offset;
                return Some(coords);
            }
            offset += child.column_count();
        }
        None
    }

    fn led_color(&self, row: u8, column: u8, lit: bool) -> RGB8 {
        let mut column = column;
        for child in self.children.iter() {
            let width = child.column_count();
            if column < width {
                return child.led_color(row, column, lit);
            }
            column -= width;
        }
        RGB8::default()
    }

    fn set_led_color(&mut self, row: u8, column: u8, lit: bool, color: RGB8) {
        let mut column = column;
        for child in self.children.iter_mut() {
            let width = child.column_count();
            if column < width {
                child.set_led_color(row, column, lit, color);
                return;
            }
            column -= width;
        }
    }

    fn render(&self, sink: &mut dyn LedSink) {
        for child in self.children.iter() {
            child.render(sink);
        }
    }

    fn set_mode(&mut self, mode: RenderMode) {
        for child in self.children.iter_mut() {
            child.set_mode(mode);
        }
    }
}
