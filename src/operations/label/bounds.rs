use serde::{Deserialize, Serialize};

use crate::floor::Room;
use crate::geometry::RoomShape;
use crate::math::Point2;

/// Label anchor: the center of the room's largest shape.
///
/// Not the centroid of the union, which can fall outside an L- or T-shaped room.
/// Empty rooms anchor at the origin.
#[must_use]
pub fn room_center(room: &Room) -> Point2 {
    largest_shape(&room.shapes).map_or_else(Point2::origin, RoomShape::center)
}

/// First shape with the greatest area.
fn largest_shape(shapes: &[RoomShape]) -> Option<&RoomShape> {
    let mut best: Option<&RoomShape> = None;
    for shape in shapes {
        match best {
            Some(b) if shape.area() <= b.area() => {}
            _ => best = Some(shape),
        }
    }
    best
}

/// Extents of a room used to size its label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    /// Width of the narrowest shape; label text must fit inside it.
    pub min_width: f64,
}

impl RoomBounds {
    /// Computes the union box of all shapes, or `None` for an empty room.
    #[must_use]
    pub fn of(shapes: &[RoomShape]) -> Option<Self> {
        let (first, rest) = shapes.split_first()?;
        let mut bounds = Self {
            min_x: first.left(),
            min_y: first.top(),
            max_x: first.right(),
            max_y: first.bottom(),
            min_width: first.size.width,
        };
        for shape in rest {
            bounds.min_x = bounds.min_x.min(shape.left());
            bounds.min_y = bounds.min_y.min(shape.top());
            bounds.max_x = bounds.max_x.max(shape.right());
            bounds.max_y = bounds.max_y.max(shape.bottom());
            bounds.min_width = bounds.min_width.min(shape.size.width);
        }
        Some(bounds)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}
