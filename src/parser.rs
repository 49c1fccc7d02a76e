use crate::geometry::Float;
use crate::geometry::Point;
use crate::geometry::RoundedRect;
use crate::segment::Arc;
use crate::segment::Line;
use crate::segment::Outline;
use crate::segment::Segment;

use core::f32::consts::FRAC_PI_2;
use core::fmt;

use ShapeError::*;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ShapeError {
    NonFiniteValue,
    NegativeSize,
    NegativeRadius,
    OverlappingRadii,
}

pub type ShapeResult<T> = Result<T, ShapeError>;

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            NonFiniteValue => "a coordinate, size or radius is not finite",
            NegativeSize => "width or height is negative",
            NegativeRadius => "a corner radius is negative",
            OverlappingRadii => "two adjacent radii are longer than their shared side",
        };
        f.write_str(text)
    }
}

/// Turns shapes into path segments.
pub struct ShapeParser;

impl ShapeParser {
    /// Traces the outline of `rect` clockwise, starting with the
    /// top-left corner.
    ///
    /// The result always alternates arcs and lines. A zero radius
    /// still yields its (degenerate) arc, and radii are used as given:
    /// see [`ShapeParser::parse_checked`] for a validating variant.
    pub fn parse_rounded_rect(rect: &RoundedRect) -> Outline {
        let degree90 = FRAC_PI_2;
        let [r1, r2, r3, r4] = rect.radii();

        let x0 = rect.x();
        let y0 = rect.y();
        let x1 = x0 + rect.width();
        let y1 = y0 + rect.height();

        let top_left = Point::new(x0 + r1, y0 + r1);
        let top_right = Point::new(x1 - r2, y0 + r2);
        let bottom_right = Point::new(x1 - r3, y1 - r3);
        let bottom_left = Point::new(x0 + r4, y1 - r4);

        [
            Arc::circular(top_left, r1, 2.0 * degree90, 3.0 * degree90).into(),
            Line::new(Point::new(top_left.x, y0), Point::new(top_right.x, y0)).into(),
            Arc::circular(top_right, r2, 3.0 * degree90, 4.0 * degree90).into(),
            Line::new(Point::new(x1, top_right.y), Point::new(x1, bottom_right.y)).into(),
            Arc::circular(bottom_right, r3, 0.0, degree90).into(),
            Line::new(Point::new(bottom_right.x, y1), Point::new(bottom_left.x, y1)).into(),
            Arc::circular(bottom_left, r4, degree90, 2.0 * degree90).into(),
            Line::new(Point::new(x0, bottom_left.y), Point::new(x0, top_left.y)).into(),
        ]
    }

    /// Like [`ShapeParser::parse_rounded_rect`], but rejects shapes
    /// whose outline would cross itself.
    pub fn parse_checked(rect: &RoundedRect) -> ShapeResult<Outline> {
        if let Err(error) = Self::check(rect) {
            log::debug!("rejected {:?}: {}", rect, error);
            return Err(error);
        }

        Ok(Self::parse_rounded_rect(rect))
    }

    pub fn check(rect: &RoundedRect) -> ShapeResult<()> {
        let [r1, r2, r3, r4] = rect.radii();
        let (w, h) = (rect.width(), rect.height());

        let values = [rect.x(), rect.y(), w, h, r1, r2, r3, r4];
        if !values.iter().all(|v| v.is_finite()) {
            return Err(NonFiniteValue);
        }

        if w < 0.0 || h < 0.0 {
            return Err(NegativeSize);
        }

        if [r1, r2, r3, r4].iter().any(|r| *r < 0.0) {
            return Err(NegativeRadius);
        }

        let exceeds = |a: Float, b: Float, side: Float| a + b > side;
        if exceeds(r1, r2, w) || exceeds(r4, r3, w) || exceeds(r1, r4, h) || exceeds(r2, r3, h) {
            return Err(OverlappingRadii);
        }

        Ok(())
    }
}

pub fn log_segments(segments: &[Segment]) {
    log::info!(    "| INDEX | KIND |      START      |       END       |");

    for (i, segment) in segments.iter().enumerate() {
        let kind = segment.kind().as_text();
        let (sx, sy) = segment.start_point().into_tuple();
        let (ex, ey) = segment.end_point().into_tuple();
        log::info!("| {:^5} | {:^4} | {:>7.2} {:>7.2} | {:>7.2} {:>7.2} |", i, kind, sx, sy, ex, ey);
    }
}
