//! Glyph rendering for individually addressable LED strips
//!
//! This crate provides:
//! - `LedDisplay` trait shared by all display kinds: grid extents,
//!   coordinate/index mapping, per-state colors, render pass
//! - `SevenSegmentDisplay` for seven-segment glyphs built from a
//!   configurable number of LEDs per segment
//! - `SeparatorDisplay` for irregular LED groups (colons, decimal points)
//!   described by an explicit coordinate mapping
//! - `RowDisplay` for addressing a row of heterogeneous displays as one
//!   wide logical grid
//!
//! # Architecture
//!
//! Displays hold no hardware handles. Logical state (glyph, colors, mode)
//! is mutated between frames; a render pass walks the display tree and
//! pushes `(physical index, color)` pairs into a caller-supplied
//! [`LedSink`], which is where the strip driver plugs in.
//!
//! Every coordinate is a `(row, column)` pair local to the display it is
//! given to. Composing displays with [`RowDisplay`] rebases columns so the
//! whole row can be addressed through one origin.

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod font;
pub mod row;
pub mod separator;
pub mod seven_segment;

// Re-export key types
pub use display::{Coords, LedDisplay, LedDisplayExt, LedSink, RenderMode};
pub use row::RowDisplay;
pub use separator::{LedMapping, MappingError, SeparatorDisplay};
pub use seven_segment::{Segment, SevenSegmentDisplay};
