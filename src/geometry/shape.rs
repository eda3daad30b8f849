use serde::{Deserialize, Serialize};

use crate::math::{coincident, Interval, Point2};

/// Width and height of a room shape, in floor-plan units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Creates a new size.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// One axis-aligned rectangle of a room's silhouette.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomShape {
    #[serde(with = "point_xy")]
    pub position: Point2,
    pub size: Size,
}

impl RoomShape {
    /// Creates a shape from its top-left corner and size.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            position: Point2::new(x, y),
            size: Size::new(width, height),
        }
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.position.x
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.position.y
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.position.x + self.size.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.position.y + self.size.height
    }

    /// Horizontal extent `[left, right]`.
    #[must_use]
    pub fn x_range(&self) -> Interval {
        Interval::new(self.left(), self.right())
    }

    /// Vertical extent `[top, bottom]`.
    #[must_use]
    pub fn y_range(&self) -> Interval {
        Interval::new(self.top(), self.bottom())
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.size.width * self.size.height
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(
            self.position.x + self.size.width / 2.0,
            self.position.y + self.size.height / 2.0,
        )
    }

    /// Returns `true` if both dimensions are finite and strictly positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.size.width.is_finite()
            && self.size.height.is_finite()
            && self.size.width > 0.0
            && self.size.height > 0.0
            && self.position.x.is_finite()
            && self.position.y.is_finite()
    }
}

/// One side of a room shape. Floor-plan y grows downward, so `Top` is `y = position.y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    /// All four edges in rendering order.
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    /// The edge of a neighbor that can lie against this one.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Edge::Top => Edge::Bottom,
            Edge::Bottom => Edge::Top,
            Edge::Left => Edge::Right,
            Edge::Right => Edge::Left,
        }
    }

    /// `true` for top/bottom, whose ranges run along x.
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Edge::Top | Edge::Bottom)
    }

    /// The fixed coordinate of this edge on `shape` (y for top/bottom, x for left/right).
    #[must_use]
    pub fn coordinate(self, shape: &RoomShape) -> f64 {
        match self {
            Edge::Top => shape.top(),
            Edge::Bottom => shape.bottom(),
            Edge::Left => shape.left(),
            Edge::Right => shape.right(),
        }
    }

    /// The full range this edge spans on `shape`.
    #[must_use]
    pub fn range(self, shape: &RoomShape) -> Interval {
        if self.is_horizontal() {
            shape.x_range()
        } else {
            shape.y_range()
        }
    }

    /// Returns `true` if `other`'s opposite edge lies on this edge's line of `shape`.
    #[must_use]
    pub fn touches(self, shape: &RoomShape, other: &RoomShape, tolerance: f64) -> bool {
        coincident(
            self.coordinate(shape),
            self.opposite().coordinate(other),
            tolerance,
        )
    }
}

/// Serializes a [`Point2`] as `{ "x": .., "y": .. }`.
mod point_xy {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::math::Point2;

    #[derive(Serialize, Deserialize)]
    struct Xy {
        x: f64,
        y: f64,
    }

    pub fn serialize<S: Serializer>(p: &Point2, s: S) -> Result<S::Ok, S::Error> {
        Xy { x: p.x, y: p.y }.serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Point2, D::Error> {
        let Xy { x, y } = Xy::deserialize(d)?;
        Ok(Point2::new(x, y))
    }
}
