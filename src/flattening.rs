use crate::geometry::Float;
use crate::geometry::Point;
use crate::geometry::RoundedRect;
use crate::segment::Segment;

use wizdraw::push_cubic_bezier_segments;

use alloc::vec::Vec;

/// Default flattening tolerance for arcs
pub const ARC_TOLERANCE: Float = 0.4;

/// Appends a polyline approximation of `segments` to `out`.
///
/// Segments are emitted in order; the polyline is left open.
pub fn flatten_segments(segments: &[Segment], tolerance: Float, out: &mut Vec<Point>) {
    let mut curves = Vec::new();

    for segment in segments {
        match segment {
            Segment::Arc(arc) => {
                curves.clear();
                arc.push_cubic_beziers(&mut curves);
                for curve in &curves {
                    push_cubic_bezier_segments::<8>(curve, tolerance, out);
                }
            }
            Segment::Line(line) => {
                out.push(line.from);
                out.push(line.to);
            }
        }
    }
}

/// Traces `rect` as a closed polyline: the first point is repeated at the end.
pub fn flatten_outline(rect: &RoundedRect, tolerance: Float) -> Vec<Point> {
    let mut flat = Vec::new();
    flatten_segments(&rect.outline(), tolerance, &mut flat);

    if let Some(first) = flat.first().copied() {
        flat.push(first);
    }

    log::trace!("flattened {:?} into {} points", rect, flat.len());
    flat
}
