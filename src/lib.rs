//! Rounded rectangles and their outline as arcs and lines.
//!
//! All values are [`Float`] (`f32`): prefer coordinates within a few
//! million units of the origin.
#![no_std]
extern crate alloc;

pub mod geometry;
pub mod segment;
pub mod parser;
pub mod flattening;


#[doc(inline)]
pub use {
    geometry::Float,
    geometry::Point,
    geometry::Rect,
    geometry::RoundedRect,
    segment::Arc,
    segment::Line,
    segment::Segment,
    segment::SegmentKind,
    segment::Outline,
    parser::ShapeParser,
    parser::ShapeError,
    parser::ShapeResult,
    parser::log_segments,
    flattening::flatten_segments,
    flattening::flatten_outline,
};
