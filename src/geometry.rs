use core::ops::Add;

use crate::parser::ShapeParser;
use crate::segment::Outline;

/// Single precision, like most rasterizers: coordinates past a few
/// million units lose sub-unit accuracy.
pub type Float = f32;
pub type Point = vek::vec::repr_c::vec2::Vec2<Float>;
pub const P_ZERO: Point = Point::new(0.0, 0.0);

/// Axis-aligned rectangle, origin at the top-left corner.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Rect {
    pub x: Float,
    pub y: Float,
    pub width: Float,
    pub height: Float,
}

impl Rect {
    pub const fn new(x: Float, y: Float, width: Float, height: Float) -> Self {
        Self { x, y, width, height }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// A [`Rect`] with one radius per corner.
///
/// Radii are stored in CSS order: top-left, top-right,
/// bottom-right, bottom-left.
///
/// The gravity center is computed when the value is built; every
/// derivation goes through [`RoundedRect::with_radii`].
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct RoundedRect {
    rect: Rect,
    radii: [Float; 4],
    gravity_center: Point,
}

impl RoundedRect {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x: Float,
        y: Float,
        width: Float,
        height: Float,
        radius1: Float,
        radius2: Float,
        radius3: Float,
        radius4: Float,
    ) -> Self {
        let rect = Rect::new(x, y, width, height);
        Self::with_radii(rect, [radius1, radius2, radius3, radius4])
    }

    pub fn with_radii(rect: Rect, radii: [Float; 4]) -> Self {
        Self {
            rect,
            radii,
            gravity_center: rect.center(),
        }
    }

    /// Same radius on every corner
    pub fn uniform(rect: Rect, radius: Float) -> Self {
        Self::with_radii(rect, [radius; 4])
    }

    /// Lifts a plain rectangle; all radii are zero.
    pub fn from_rect(rect: Rect) -> Self {
        Self::with_radii(rect, [0.0; 4])
    }

    pub fn from_rounded_rect(rect: &RoundedRect) -> Self {
        Self::with_radii(rect.rect, rect.radii)
    }

    /// Returns a copy moved by `point`; size and radii are kept.
    pub fn add_point(&self, point: Point) -> Self {
        let position = self.rect.position() + point;
        let rect = Rect::new(position.x, position.y, self.rect.width, self.rect.height);
        Self::with_radii(rect, self.radii)
    }

    pub fn outline(&self) -> Outline {
        ShapeParser::parse_rounded_rect(self)
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn x(&self) -> Float {
        self.rect.x
    }

    pub fn y(&self) -> Float {
        self.rect.y
    }

    pub fn width(&self) -> Float {
        self.rect.width
    }

    pub fn height(&self) -> Float {
        self.rect.height
    }

    pub fn radii(&self) -> [Float; 4] {
        self.radii
    }

    /// top-left
    pub fn radius1(&self) -> Float {
        self.radii[0]
    }

    /// top-right
    pub fn radius2(&self) -> Float {
        self.radii[1]
    }

    /// bottom-right
    pub fn radius3(&self) -> Float {
        self.radii[2]
    }

    /// bottom-left
    pub fn radius4(&self) -> Float {
        self.radii[3]
    }

    pub fn gravity_center(&self) -> Point {
        self.gravity_center
    }
}

impl From<Rect> for RoundedRect {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}

impl Add<Point> for RoundedRect {
    type Output = RoundedRect;

    fn add(self, point: Point) -> Self::Output {
        self.add_point(point)
    }
}
