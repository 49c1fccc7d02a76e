use crate::geometry::Float;
use crate::geometry::Point;

use vek::bezier::CubicBezier2;

#[allow(unused_imports)]
use vek::num_traits::real::Real;

use core::f32::consts::{FRAC_PI_2, TAU};
use alloc::vec::Vec;

/// A traced rounded rectangle: four arcs and four lines, alternating.
pub type Outline = [Segment; 8];

/// Elliptical arc swept from `start_angle` to `end_angle` around `center`.
///
/// Angles are in radians, in screen space: zero points along +X and
/// angles grow clockwise since Y points down.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Arc {
    pub center: Point,
    pub radius_x: Float,
    pub radius_y: Float,
    pub start_angle: Float,
    pub end_angle: Float,
}

impl Arc {
    pub fn new(center: Point, radius_x: Float, radius_y: Float, start_angle: Float, end_angle: Float) -> Self {
        Self {
            center,
            radius_x,
            radius_y,
            start_angle,
            end_angle,
        }
    }

    pub fn circular(center: Point, radius: Float, start_angle: Float, end_angle: Float) -> Self {
        Self::new(center, radius, radius, start_angle, end_angle)
    }

    pub fn sweep(&self) -> Float {
        self.end_angle - self.start_angle
    }

    pub fn point_at(&self, angle: Float) -> Point {
        let (sin, cos) = angle.sin_cos();
        self.center + Point::new(self.radius_x * cos, self.radius_y * sin)
    }

    pub fn start_point(&self) -> Point {
        self.point_at(self.start_angle)
    }

    pub fn end_point(&self) -> Point {
        self.point_at(self.end_angle)
    }

    /// True when both radii are zero: the arc collapses onto its center.
    pub fn is_degenerate(&self) -> bool {
        self.radius_x == 0.0 && self.radius_y == 0.0
    }

    // derivative of point_at with respect to the angle
    fn tangent_at(&self, angle: Float) -> Point {
        let (sin, cos) = angle.sin_cos();
        Point::new(-self.radius_x * sin, self.radius_y * cos)
    }

    /// Appends a cubic approximation of this arc to `out`,
    /// one curve for each span of at most 90°.
    ///
    /// Sweeps longer than a full turn are folded back to between one
    /// and two turns, so at most eight curves are pushed. A non-finite
    /// sweep yields a single NaN curve.
    pub fn push_cubic_beziers(&self, out: &mut Vec<CubicBezier2<Float>>) {
        let mut sweep = self.sweep();
        if sweep.abs() > TAU {
            sweep = sweep.signum() * (TAU + (sweep.abs() - TAU) % TAU);
        }

        // equal spans; the slack keeps a full turn at exactly four curves
        let spans = match sweep.is_finite() {
            true => (sweep.abs() / FRAC_PI_2 - 1e-4).ceil().max(1.0) as usize,
            false => 1,
        };
        let span = sweep / (spans as Float);
        let k = (4.0 / 3.0) * (span / 4.0).tan();

        let mut start = self.start_angle;
        for i in 1..=spans {
            let end = self.start_angle + span * (i as Float);

            let p0 = self.point_at(start);
            let p3 = self.point_at(end);
            let t0 = self.tangent_at(start);
            let t3 = self.tangent_at(end);

            out.push(CubicBezier2 {
                start: p0,
                ctrl0: p0 + t0 * k,
                ctrl1: p3 - t3 * k,
                end: p3,
            });

            start = end;
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line {
    pub from: Point,
    pub to: Point,
}

impl Line {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    pub fn length(&self) -> Float {
        (self.to - self.from).magnitude()
    }

    /// Straight cubic with control points at thirds of the line.
    pub fn as_cubic_bezier(&self) -> CubicBezier2<Float> {
        let third = (self.to - self.from) / 3.0;
        CubicBezier2 {
            start: self.from,
            ctrl0: self.from + third,
            ctrl1: self.to - third,
            end: self.to,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Segment {
    Arc(Arc),
    Line(Line),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SegmentKind {
    Arc,
    Line,
}

impl SegmentKind {
    pub fn as_text(self) -> &'static str {
        match self {
            SegmentKind::Arc => "Arc",
            SegmentKind::Line => "Line",
        }
    }
}

impl Segment {
    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::Arc(_) => SegmentKind::Arc,
            Segment::Line(_) => SegmentKind::Line,
        }
    }

    pub fn start_point(&self) -> Point {
        match self {
            Segment::Arc(arc) => arc.start_point(),
            Segment::Line(line) => line.from,
        }
    }

    pub fn end_point(&self) -> Point {
        match self {
            Segment::Arc(arc) => arc.end_point(),
            Segment::Line(line) => line.to,
        }
    }
}

impl From<Arc> for Segment {
    fn from(arc: Arc) -> Self {
        Segment::Arc(arc)
    }
}

impl From<Line> for Segment {
    fn from(line: Line) -> Self {
        Segment::Line(line)
    }
}
